//! Resolved route parameters.

use serde::Serialize;

use crate::core::{RouteKey, TypeTag};

/// Which strategy bound a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "by")]
pub enum Binding {
    /// A caller value supplied under the parameter's name.
    Name,
    /// A positional candidate (or the subject) of the declared type.
    Type { position: usize },
    /// The subject's relation of the same name.
    Relation,
}

/// A declared parameter bound to a concrete value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedParameter {
    pub name: String,
    /// Path segment value.
    pub key: RouteKey,
    /// Type of the bound value; `None` for bare keys.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeTag>,
    #[serde(flatten)]
    pub binding: Binding,
}

/// Declared parameters bound to values, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedParameters(Vec<ResolvedParameter>);

impl ResolvedParameters {
    pub(crate) fn new(params: Vec<ResolvedParameter>) -> Self {
        Self(params)
    }

    pub fn get(&self, name: &str) -> Option<&ResolvedParameter> {
        self.0.iter().find(|p| p.name == name)
    }

    /// Route key bound to `name`.
    pub fn key(&self, name: &str) -> Option<&RouteKey> {
        self.get(name).map(|p| &p.key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedParameter> {
        self.0.iter()
    }

    /// `(name, key)` pairs for a URL builder.
    pub fn pairs(&self) -> Vec<(&str, String)> {
        self.0
            .iter()
            .map(|p| (p.name.as_str(), p.key.to_string()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResolvedParameters {
    type Item = &'a ResolvedParameter;
    type IntoIter = std::slice::Iter<'a, ResolvedParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
