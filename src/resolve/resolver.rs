//! Route parameter resolution.
//!
//! Each declared parameter is bound by the first strategy that matches:
//!
//! 1. **Name** - a caller value under the parameter's name
//! 2. **Type** - the first positional candidate of the declared type; the
//!    subject itself is always the last positional candidate
//! 3. **Relation** - the subject's relation of the same name
//!
//! Candidates are not consumed: one value may bind several parameters.
//! Unbound required parameters fail the whole resolution; unbound optional
//! parameters are left out.

use super::{
    Binding, CallerParameters, ParamValue, ResolvedParameter, ResolvedParameters, Slot,
};
use crate::core::{RouteKey, TypeTag};
use crate::debug;
use crate::error::{Result, RouteError};
use crate::model::Routable;
use crate::route::{RouteDescriptor, RouteParameter};

/// A resolution source: a caller value or the subject itself.
enum Candidate<'a> {
    Given(ParamValue),
    Subject(&'a dyn Routable),
}

impl Candidate<'_> {
    fn type_tag(&self) -> Option<TypeTag> {
        match self {
            Self::Given(value) => value.type_tag(),
            Self::Subject(subject) => Some(subject.type_tag()),
        }
    }

    fn route_key(&self) -> RouteKey {
        match self {
            Self::Given(value) => value.route_key(),
            Self::Subject(subject) => subject.route_key(),
        }
    }
}

/// Bind every declared parameter of `route` to a value.
pub fn resolve(
    route: &RouteDescriptor,
    params: CallerParameters,
    subject: &dyn Routable,
) -> Result<ResolvedParameters> {
    let candidates = candidates(params, subject)?;

    let mut resolved = Vec::with_capacity(route.params().len());
    let mut missing = Vec::new();

    for param in route.params() {
        match bind(param, &candidates, subject) {
            Some(bound) => {
                debug!("resolve"; "{}: `{}` = {} ({:?})", route.name(), bound.name, bound.key, bound.binding);
                resolved.push(bound);
            }
            None if param.optional => {
                debug!("resolve"; "{}: optional `{}` omitted", route.name(), param.name);
            }
            None => missing.push(param.name.clone()),
        }
    }

    if !missing.is_empty() {
        return Err(RouteError::NotResolvable {
            route: route.name().to_string(),
            missing,
        });
    }

    Ok(ResolvedParameters::new(resolved))
}

/// Normalize caller input and append the subject under the next index.
fn candidates(params: CallerParameters, subject: &dyn Routable) -> Result<Vec<(Slot, Candidate<'_>)>> {
    let map = params.normalize()?;
    let subject_index = map.next_index();

    let mut candidates: Vec<_> = map
        .iter()
        .map(|(slot, value)| (slot.clone(), Candidate::Given(value.clone())))
        .collect();
    candidates.push((Slot::Index(subject_index), Candidate::Subject(subject)));
    Ok(candidates)
}

fn bind(
    param: &RouteParameter,
    candidates: &[(Slot, Candidate<'_>)],
    subject: &dyn Routable,
) -> Option<ResolvedParameter> {
    if let Some((_, candidate)) = candidates
        .iter()
        .find(|(slot, _)| matches!(slot, Slot::Name(name) if *name == param.name))
    {
        return Some(bound(param, candidate.route_key(), candidate.type_tag(), Binding::Name));
    }

    if let Some(expected) = &param.ty
        && let Some((position, (_, candidate))) = candidates
            .iter()
            .filter(|(slot, _)| slot.is_index())
            .enumerate()
            .find(|(_, (_, candidate))| candidate.type_tag().as_ref() == Some(expected))
    {
        return Some(bound(
            param,
            candidate.route_key(),
            Some(expected.clone()),
            Binding::Type { position },
        ));
    }

    subject.relation(&param.name).map(|related| {
        bound(
            param,
            related.route_key(),
            Some(related.type_tag()),
            Binding::Relation,
        )
    })
}

fn bound(
    param: &RouteParameter,
    key: RouteKey,
    ty: Option<TypeTag>,
    binding: Binding,
) -> ResolvedParameter {
    ResolvedParameter {
        name: param.name.clone(),
        key,
        ty,
        binding,
    }
}
