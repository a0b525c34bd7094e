//! Route registry: named route lookup.

use rustc_hash::FxHashMap;

use super::RouteDescriptor;

/// Source of route descriptors by name.
pub trait RouteRegistry {
    fn lookup(&self, name: &str) -> Option<&RouteDescriptor>;
}

/// In-memory route registry, kept in registration order.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
    by_name: FxHashMap<String, usize>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route, returning the one it replaced (same name).
    ///
    /// A replaced route keeps its original position.
    pub fn insert(&mut self, route: RouteDescriptor) -> Option<RouteDescriptor> {
        match self.by_name.get(route.name()) {
            Some(&index) => Some(std::mem::replace(&mut self.routes[index], route)),
            None => {
                self.by_name
                    .insert(route.name().to_string(), self.routes.len());
                self.routes.push(route);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&RouteDescriptor> {
        self.by_name.get(name).map(|&index| &self.routes[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }

    /// Route names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(RouteDescriptor::name)
    }

    /// Routes named `"{base}.{action}"` for any action.
    pub fn in_group<'a>(&'a self, base: &'a str) -> impl Iterator<Item = &'a RouteDescriptor> {
        self.routes.iter().filter(move |route| {
            route
                .name()
                .strip_prefix(base)
                .is_some_and(|rest| rest.starts_with('.'))
        })
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RouteRegistry for RouteTable {
    fn lookup(&self, name: &str) -> Option<&RouteDescriptor> {
        self.get(name)
    }
}

impl FromIterator<RouteDescriptor> for RouteTable {
    fn from_iter<I: IntoIterator<Item = RouteDescriptor>>(iter: I) -> Self {
        let mut table = Self::new();
        for route in iter {
            table.insert(route);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(name: &str, template: &str) -> RouteDescriptor {
        RouteDescriptor::parse(name, template, [("user", "User")]).unwrap()
    }

    #[test]
    fn test_lookup() {
        let table: RouteTable = [
            route("users.show", "users/{user}"),
            route("users.edit", "users/{user}/edit"),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("users.edit").unwrap().template(), "users/{user}/edit");
        assert!(table.lookup("users.destroy").is_none());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut table = RouteTable::new();
        table.insert(route("users.show", "users/{user}"));
        table.insert(route("users.edit", "users/{user}/edit"));

        let old = table.insert(route("users.show", "members/{user}"));
        assert_eq!(old.unwrap().template(), "users/{user}");
        assert_eq!(table.len(), 2);

        let names: Vec<_> = table.names().collect();
        assert_eq!(names, vec!["users.show", "users.edit"]);
        assert_eq!(table.get("users.show").unwrap().template(), "members/{user}");
    }

    #[test]
    fn test_in_group() {
        let table: RouteTable = [
            route("users.show", "users/{user}"),
            route("users_admin.show", "admin/users/{user}"),
            route("users.edit", "users/{user}/edit"),
        ]
        .into_iter()
        .collect();

        let names: Vec<_> = table.in_group("users").map(RouteDescriptor::name).collect();
        assert_eq!(names, vec!["users.show", "users.edit"]);
    }
}
