//! Caller-supplied parameters and their normalization.

use std::fmt;
use std::sync::Arc;

use crate::core::{RouteKey, TypeTag};
use crate::error::{Result, RouteError};
use crate::model::{Routable, RoutableRef};

// ============================================================================
// ParamValue
// ============================================================================

/// A value a caller can hand to URL generation.
#[derive(Clone)]
pub enum ParamValue {
    /// A routable; takes part in type matching.
    Model(RoutableRef),
    /// A bare route key; only binds by name.
    Key(RouteKey),
}

impl ParamValue {
    pub fn route_key(&self) -> RouteKey {
        match self {
            Self::Model(model) => model.route_key(),
            Self::Key(key) => key.clone(),
        }
    }

    pub fn type_tag(&self) -> Option<TypeTag> {
        match self {
            Self::Model(model) => Some(model.type_tag()),
            Self::Key(_) => None,
        }
    }
}

impl fmt::Debug for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model(model) => write!(f, "{}({})", model.type_tag(), model.route_key()),
            Self::Key(key) => write!(f, "{key:?}"),
        }
    }
}

impl<T: Routable + 'static> From<Arc<T>> for ParamValue {
    fn from(model: Arc<T>) -> Self {
        Self::Model(model)
    }
}

impl From<RoutableRef> for ParamValue {
    fn from(model: RoutableRef) -> Self {
        Self::Model(model)
    }
}

impl From<RouteKey> for ParamValue {
    fn from(key: RouteKey) -> Self {
        Self::Key(key)
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        Self::Key(RouteKey::Int(n))
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        Self::Key(RouteKey::from(n))
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Key(RouteKey::from(s))
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Key(RouteKey::Str(s))
    }
}

// ============================================================================
// Slots and maps
// ============================================================================

/// Key of a caller-supplied value: a parameter name or a positional index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Slot {
    Name(String),
    Index(usize),
}

impl Slot {
    #[inline]
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Index(index) => write!(f, "#{index}"),
        }
    }
}

/// Ordered slot -> value map. Re-inserting a slot replaces its value in
/// place.
#[derive(Debug, Clone, Default)]
pub struct ParamMap {
    entries: Vec<(Slot, ParamValue)>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value under a parameter name.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(Slot::Name(name.into()), value.into());
        self
    }

    /// Add a value under a positional index.
    pub fn with_index(mut self, index: usize, value: impl Into<ParamValue>) -> Self {
        self.insert(Slot::Index(index), value.into());
        self
    }

    pub fn insert(&mut self, slot: Slot, value: ParamValue) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == slot) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((slot, value)),
        }
    }

    pub fn get(&self, slot: &Slot) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == slot)
            .map(|(_, value)| value)
    }

    /// One past the largest positional index, or 0.
    pub fn next_index(&self) -> usize {
        self.entries
            .iter()
            .filter_map(|(slot, _)| match slot {
                Slot::Index(index) => Some(index.saturating_add(1)),
                Slot::Name(_) => None,
            })
            .max()
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Slot, ParamValue)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>, V: Into<ParamValue>> FromIterator<(S, V)> for ParamMap {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |map, (name, value)| map.with(name, value))
    }
}

// ============================================================================
// CallerParameters
// ============================================================================

/// One positional argument of a URL call.
#[derive(Debug, Clone)]
pub enum ParamInput {
    Value(ParamValue),
    Map(ParamMap),
}

/// Raw parameters of a URL call, as positional arguments.
///
/// ```ignore
/// CallerParameters::none();
/// CallerParameters::new().arg(channel).arg(7);
/// CallerParameters::named([("channel", channel)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallerParameters {
    inputs: Vec<ParamInput>,
}

impl CallerParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// No parameters; everything resolves from the subject.
    pub fn none() -> Self {
        Self::default()
    }

    /// A single nested map as the only argument.
    pub fn named<S, V>(entries: impl IntoIterator<Item = (S, V)>) -> Self
    where
        S: Into<String>,
        V: Into<ParamValue>,
    {
        Self::new().map(entries.into_iter().collect())
    }

    /// Append a positional value.
    pub fn arg(mut self, value: impl Into<ParamValue>) -> Self {
        self.inputs.push(ParamInput::Value(value.into()));
        self
    }

    /// Append a nested map.
    pub fn map(mut self, map: ParamMap) -> Self {
        self.inputs.push(ParamInput::Map(map));
        self
    }

    pub fn inputs(&self) -> &[ParamInput] {
        &self.inputs
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Flatten into a single slot -> value map.
    ///
    /// A sole nested map is unwrapped one level; otherwise each value is
    /// keyed by its position. A nested map among other arguments is an
    /// error.
    pub fn normalize(self) -> Result<ParamMap> {
        let mut inputs = self.inputs;
        if inputs.len() == 1 && matches!(inputs[0], ParamInput::Map(_)) {
            if let Some(ParamInput::Map(map)) = inputs.pop() {
                return Ok(map);
            }
        }

        let mut map = ParamMap::new();
        for (index, input) in inputs.into_iter().enumerate() {
            match input {
                ParamInput::Value(value) => map.insert(Slot::Index(index), value),
                ParamInput::Map(_) => return Err(RouteError::NestedParameters { index }),
            }
        }
        Ok(map)
    }
}

impl From<ParamMap> for CallerParameters {
    fn from(map: ParamMap) -> Self {
        Self::new().map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_values_keyed_by_index() {
        let map = CallerParameters::new().arg(5).arg("hello").normalize().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&Slot::Index(0)).unwrap().route_key(), RouteKey::Int(5));
        assert_eq!(
            map.get(&Slot::Index(1)).unwrap().route_key(),
            RouteKey::from("hello")
        );
        assert_eq!(map.next_index(), 2);
    }

    #[test]
    fn test_sole_map_is_unwrapped() {
        let map = CallerParameters::named([("channel", 3)]).normalize().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(
            map.get(&Slot::Name("channel".into())).unwrap().route_key(),
            RouteKey::Int(3)
        );
        assert_eq!(map.next_index(), 0);
    }

    #[test]
    fn test_mixed_map_keeps_indices() {
        let map = ParamMap::new().with_index(4, 1).with("thread", 7);
        let map = CallerParameters::from(map).normalize().unwrap();
        assert_eq!(map.next_index(), 5);
    }

    #[test]
    fn test_nested_map_among_values_is_rejected() {
        let err = CallerParameters::new()
            .arg(1)
            .map(ParamMap::new().with("a", 1))
            .normalize()
            .unwrap_err();
        assert!(matches!(err, RouteError::NestedParameters { index: 1 }));
    }

    #[test]
    fn test_next_index_saturates() {
        let map = ParamMap::new().with_index(usize::MAX, 1);
        assert_eq!(map.next_index(), usize::MAX);
    }

    #[test]
    fn test_empty() {
        let map = CallerParameters::none().normalize().unwrap();
        assert!(map.is_empty());
        assert_eq!(map.next_index(), 0);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let map = ParamMap::new().with("a", 1).with("b", 2).with("a", 3);
        let slots: Vec<_> = map.iter().map(|(slot, _)| slot.to_string()).collect();
        assert_eq!(slots, vec!["a", "b"]);
        assert_eq!(map.get(&Slot::Name("a".into())).unwrap().route_key(), RouteKey::Int(3));
    }
}
