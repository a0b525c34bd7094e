//! Route descriptors and path templates.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::core::TypeTag;

/// Matches a placeholder spanning a whole segment: `{user}` or `{page?}`.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{(\w+)(\?)?\}$").unwrap());

/// Template problems found while declaring a route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("segment `{0}` mixes literal text and braces; placeholders must span a whole segment")]
    InvalidSegment(String),

    #[error("placeholder `{{{0}}}` appears more than once")]
    DuplicatePlaceholder(String),

    #[error("type declared for `{0}`, which is not a placeholder in the path")]
    UnknownParameter(String),

    #[error("required placeholder `{{{0}}}` follows an optional one")]
    RequiredAfterOptional(String),
}

/// A declared route parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteParameter {
    pub name: String,
    /// Expected type; untyped parameters only bind by name or relation.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeTag>,
    pub optional: bool,
}

impl RouteParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            optional: false,
        }
    }

    pub fn typed(mut self, ty: impl Into<TypeTag>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// One `/`-separated piece of a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder { name: String, optional: bool },
}

/// A registered route: its name, path template and declared parameters.
///
/// Parameters are declared in the order their placeholders appear in the
/// template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    name: String,
    template: String,
    segments: Vec<Segment>,
    params: Vec<RouteParameter>,
}

impl RouteDescriptor {
    /// Parse a route from a path template and the declared parameter types.
    ///
    /// ```ignore
    /// let route = RouteDescriptor::parse(
    ///     "threads.show",
    ///     "channels/{channel}/threads/{thread}",
    ///     [("channel", "Channel"), ("thread", "Thread")],
    /// )?;
    /// ```
    pub fn parse<I, N, T>(
        name: impl Into<String>,
        template: &str,
        types: I,
    ) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: Into<TypeTag>,
    {
        let mut segments = Vec::new();
        let mut params: Vec<RouteParameter> = Vec::new();

        for raw in template.split('/').filter(|s| !s.is_empty()) {
            if let Some(caps) = PLACEHOLDER.captures(raw) {
                let param_name = caps[1].to_string();
                let optional = caps.get(2).is_some();

                if params.iter().any(|p| p.name == param_name) {
                    return Err(TemplateError::DuplicatePlaceholder(param_name));
                }
                if !optional && params.iter().any(|p| p.optional) {
                    return Err(TemplateError::RequiredAfterOptional(param_name));
                }

                let mut param = RouteParameter::new(param_name.clone());
                param.optional = optional;
                params.push(param);
                segments.push(Segment::Placeholder {
                    name: param_name,
                    optional,
                });
            } else if raw.contains(['{', '}']) {
                return Err(TemplateError::InvalidSegment(raw.to_string()));
            } else {
                segments.push(Segment::Literal(raw.to_string()));
            }
        }

        for (param_name, ty) in types {
            let param_name: String = param_name.into();
            match params.iter_mut().find(|p| p.name == param_name) {
                Some(param) => param.ty = Some(ty.into()),
                None => return Err(TemplateError::UnknownParameter(param_name)),
            }
        }

        Ok(Self {
            name: name.into(),
            template: template.to_string(),
            segments,
            params,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path template as declared (e.g. `users/{user}/edit`).
    #[inline]
    pub fn template(&self) -> &str {
        &self.template
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Declared parameters, in template order.
    #[inline]
    pub fn params(&self) -> &[RouteParameter] {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&RouteParameter> {
        self.params.iter().find(|p| p.name == name)
    }
}
