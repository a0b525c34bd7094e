//! Declared relation tables for statically typed routables.

use super::RoutableRef;

/// Accessor returning the related routable, if set.
pub type Accessor<T> = fn(&T) -> Option<RoutableRef>;

/// Relation names of a type mapped to accessor functions.
///
/// Declared once per type, usually as a `static`, and consulted by
/// [`Routable::relation`](super::Routable::relation):
///
/// ```ignore
/// static RELATIONS: Relations<Thread> = Relations::new(&[("channel", Thread::channel_ref)]);
///
/// impl Routable for Thread {
///     // ...
///     fn relation(&self, name: &str) -> Option<RoutableRef> {
///         RELATIONS.get(self, name)
///     }
/// }
/// ```
pub struct Relations<T: 'static> {
    entries: &'static [(&'static str, Accessor<T>)],
}

impl<T: 'static> Relations<T> {
    pub const fn new(entries: &'static [(&'static str, Accessor<T>)]) -> Self {
        Self { entries }
    }

    /// Evaluate the relation called `name` on `subject`.
    pub fn get(&self, subject: &T, name: &str) -> Option<RoutableRef> {
        self.entries
            .iter()
            .find(|(relation, _)| *relation == name)
            .and_then(|(_, accessor)| accessor(subject))
    }

    /// Declared relation names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(name, _)| *name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(relation, _)| *relation == name)
    }
}

impl<T: 'static> std::fmt::Debug for Relations<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::{RouteKey, TypeTag};
    use crate::model::Routable;

    #[derive(Debug)]
    struct Channel {
        id: i64,
    }

    impl Routable for Channel {
        fn type_tag(&self) -> TypeTag {
            TypeTag::new("Channel")
        }

        fn route_key(&self) -> RouteKey {
            RouteKey::Int(self.id)
        }
    }

    #[derive(Debug)]
    struct Thread {
        channel: Option<Arc<Channel>>,
    }

    fn thread_channel(thread: &Thread) -> Option<RoutableRef> {
        thread.channel.clone().map(|c| c as RoutableRef)
    }

    static RELATIONS: Relations<Thread> =
        Relations::new(&[("channel", thread_channel as Accessor<Thread>)]);

    #[test]
    fn test_get_declared_relation() {
        let thread = Thread {
            channel: Some(Arc::new(Channel { id: 3 })),
        };
        let channel = RELATIONS.get(&thread, "channel").unwrap();
        assert_eq!(channel.type_tag(), "Channel");
        assert_eq!(channel.route_key(), RouteKey::Int(3));
    }

    #[test]
    fn test_unset_and_unknown_relations() {
        let thread = Thread { channel: None };
        assert!(RELATIONS.get(&thread, "channel").is_none());
        assert!(RELATIONS.get(&thread, "author").is_none());
    }

    #[test]
    fn test_names() {
        assert_eq!(RELATIONS.names().collect::<Vec<_>>(), vec!["channel"]);
        assert!(RELATIONS.contains("channel"));
        assert!(!RELATIONS.contains("author"));
    }
}
