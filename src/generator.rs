//! URL generation for routables.
//!
//! `UrlGenerator` ties the pieces together: route name from the subject,
//! descriptor from the registry, parameters from the resolver, final string
//! from the builder. Registry and builder are passed in explicitly.

use crate::debug;
use crate::error::{Result, RouteError};
use crate::model::Routable;
use crate::naming;
use crate::resolve::{self, CallerParameters, ResolvedParameters};
use crate::route::{RouteDescriptor, RouteRegistry, UrlBuilder};

/// Generates route names and URLs against a registry and a builder.
#[derive(Clone, Copy)]
pub struct UrlGenerator<'a> {
    registry: &'a dyn RouteRegistry,
    builder: &'a dyn UrlBuilder,
}

impl<'a> UrlGenerator<'a> {
    pub fn new(registry: &'a dyn RouteRegistry, builder: &'a dyn UrlBuilder) -> Self {
        Self { registry, builder }
    }

    /// Route name for `subject` and `action` (default `show`). No lookup.
    pub fn route(&self, subject: &dyn Routable, action: Option<&str>) -> String {
        naming::route_name(subject, action)
    }

    /// Registered descriptor for `name`.
    pub fn lookup(&self, name: &str) -> Result<&'a RouteDescriptor> {
        self.registry
            .lookup(name)
            .ok_or_else(|| RouteError::NotFound {
                name: name.to_string(),
            })
    }

    /// Resolve the parameters of `subject`'s `action` route without building.
    pub fn resolve(
        &self,
        subject: &dyn Routable,
        action: Option<&str>,
        params: CallerParameters,
    ) -> Result<(&'a RouteDescriptor, ResolvedParameters)> {
        let name = self.route(subject, action);
        self.resolve_for(&name, subject, params)
    }

    /// URL of `subject`'s `action` route.
    pub fn url(
        &self,
        subject: &dyn Routable,
        action: Option<&str>,
        params: CallerParameters,
    ) -> Result<String> {
        let name = self.route(subject, action);
        self.url_for(&name, subject, params)
    }

    /// URL of an explicitly named route, resolved against `subject`.
    pub fn url_for(
        &self,
        name: &str,
        subject: &dyn Routable,
        params: CallerParameters,
    ) -> Result<String> {
        let (route, resolved) = self.resolve_for(name, subject, params)?;
        let url = self.build(route, &resolved)?;
        debug!("url"; "{} -> {}", name, url);
        Ok(url)
    }

    /// Build the URL of already resolved parameters.
    pub fn build(&self, route: &RouteDescriptor, params: &ResolvedParameters) -> Result<String> {
        self.builder.build(route, params)
    }

    /// Resolve the parameters of an explicitly named route.
    pub fn resolve_for(
        &self,
        name: &str,
        subject: &dyn Routable,
        params: CallerParameters,
    ) -> Result<(&'a RouteDescriptor, ResolvedParameters)> {
        let route = self.lookup(name)?;
        let resolved = resolve::resolve(route, params, subject)?;
        Ok((route, resolved))
    }
}

/// Route names and URLs directly on a routable.
///
/// Implemented for every sized [`Routable`]:
///
/// ```ignore
/// user.route(None);                                    // "users.show"
/// user.url(&generator, Some("edit"), CallerParameters::none())?;
/// ```
pub trait HasUrl: Routable + Sized {
    /// Route group (`users`, or the declared override).
    fn base_route_name(&self) -> String {
        naming::base_route_name(self)
    }

    fn route(&self, action: Option<&str>) -> String {
        naming::route_name(self, action)
    }

    fn url(
        &self,
        generator: &UrlGenerator<'_>,
        action: Option<&str>,
        params: CallerParameters,
    ) -> Result<String> {
        generator.url(self, action, params)
    }
}

impl<T: Routable> HasUrl for T {}
