//! In-memory record store.
//!
//! Dynamic routables whose type, attributes and relations are data rather
//! than Rust types. Used by the CLI (records come from `routable.toml`) and
//! anywhere a persistence layer is not available.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{BaseRoute, Routable, RoutableRef};
use crate::core::{RouteKey, TypeTag};

// ============================================================================
// RecordRef
// ============================================================================

/// `Type:id` reference to a record (e.g. `Channel:3`, `app::User:1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordRef {
    pub ty: TypeTag,
    pub id: RouteKey,
}

impl RecordRef {
    pub fn new(ty: impl Into<TypeTag>, id: impl Into<RouteKey>) -> Self {
        Self {
            ty: ty.into(),
            id: id.into(),
        }
    }
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ty, self.id)
    }
}

/// Malformed `Type:id` reference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid record reference `{0}`, expected `Type:id`")]
pub struct ParseRecordRefError(pub String);

impl FromStr for RecordRef {
    type Err = ParseRecordRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // rsplit so namespaced types (`app::User:1`) keep their `::`
        match s.rsplit_once(':') {
            Some((ty, id)) if !ty.is_empty() && !id.is_empty() && !ty.ends_with(':') => {
                Ok(Self::new(TypeTag::owned(ty), RouteKey::parse(id)))
            }
            _ => Err(ParseRecordRefError(s.to_string())),
        }
    }
}

impl Serialize for RecordRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RecordRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Model settings
// ============================================================================

/// Per-type routing settings shared by all records of a type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelSettings {
    /// Attribute used as the route key (`None` = primary id).
    pub route_key: Option<String>,
    /// Base route override (`None` = derived from the type name).
    pub base_route: Option<String>,
}

// ============================================================================
// Record
// ============================================================================

/// Data for a record about to be inserted.
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub reference: RecordRef,
    pub attributes: FxHashMap<String, RouteKey>,
    pub relations: FxHashMap<String, RecordRef>,
}

impl NewRecord {
    pub fn new(ty: impl Into<TypeTag>, id: impl Into<RouteKey>) -> Self {
        Self {
            reference: RecordRef::new(ty, id),
            attributes: FxHashMap::default(),
            relations: FxHashMap::default(),
        }
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<RouteKey>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn relation(mut self, name: impl Into<String>, target: RecordRef) -> Self {
        self.relations.insert(name.into(), target);
        self
    }
}

/// A stored record.
///
/// Relations are looked up through the owning store on demand, so records
/// may reference each other in any order and even in cycles.
pub struct Record {
    reference: RecordRef,
    attributes: FxHashMap<String, RouteKey>,
    relations: FxHashMap<String, RecordRef>,
    route_key_name: String,
    base_route: BaseRoute,
    store: Weak<RecordStore>,
}

impl Record {
    #[inline]
    pub fn reference(&self) -> &RecordRef {
        &self.reference
    }

    #[inline]
    pub fn id(&self) -> &RouteKey {
        &self.reference.id
    }

    pub fn attribute(&self, name: &str) -> Option<&RouteKey> {
        self.attributes.get(name)
    }

    /// Declared relations, sorted by name.
    pub fn relations(&self) -> Vec<(&str, &RecordRef)> {
        let mut relations: Vec<_> = self
            .relations
            .iter()
            .map(|(name, target)| (name.as_str(), target))
            .collect();
        relations.sort_by(|a, b| a.0.cmp(b.0));
        relations
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("reference", &self.reference)
            .field("route_key_name", &self.route_key_name)
            .field("attributes", &self.attributes)
            .field("relations", &self.relations)
            .finish()
    }
}

impl Routable for Record {
    fn type_tag(&self) -> TypeTag {
        self.reference.ty.clone()
    }

    fn route_key(&self) -> RouteKey {
        if self.route_key_name == "id" {
            return self.reference.id.clone();
        }
        self.attributes
            .get(&self.route_key_name)
            .cloned()
            .unwrap_or_else(|| self.reference.id.clone())
    }

    fn route_key_name(&self) -> &str {
        &self.route_key_name
    }

    fn relation(&self, name: &str) -> Option<RoutableRef> {
        let target = self.relations.get(name)?;
        let store = self.store.upgrade()?;
        store.get(target).map(|record| record as RoutableRef)
    }

    fn base_route(&self) -> Option<&BaseRoute> {
        Some(&self.base_route)
    }
}

// ============================================================================
// RecordStore
// ============================================================================

/// A relation whose target is not in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingRelation {
    pub source: RecordRef,
    pub relation: String,
    pub target: RecordRef,
}

/// Thread-safe storage for records, keyed by `Type:id`.
#[derive(Debug, Default)]
pub struct RecordStore {
    models: RwLock<FxHashMap<TypeTag, ModelSettings>>,
    records: RwLock<BTreeMap<RecordRef, Arc<Record>>>,
}

impl RecordStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Register settings for a type. Applies to records inserted afterwards.
    pub fn define_model(&self, ty: impl Into<TypeTag>, settings: ModelSettings) {
        self.models.write().insert(ty.into(), settings);
    }

    pub fn model(&self, ty: &TypeTag) -> Option<ModelSettings> {
        self.models.read().get(ty).cloned()
    }

    /// Insert or replace a record.
    pub fn insert(self: &Arc<Self>, new: NewRecord) -> Arc<Record> {
        let record = Arc::new(self.detached(new));
        self.records
            .write()
            .insert(record.reference.clone(), Arc::clone(&record));
        record
    }

    /// Build a record with its model settings applied, without storing it.
    pub fn detached(self: &Arc<Self>, new: NewRecord) -> Record {
        let settings = self.model(&new.reference.ty).unwrap_or_default();
        Record {
            route_key_name: settings.route_key.unwrap_or_else(|| "id".to_string()),
            base_route: settings.base_route.map(BaseRoute::fixed).unwrap_or_default(),
            reference: new.reference,
            attributes: new.attributes,
            relations: new.relations,
            store: Arc::downgrade(self),
        }
    }

    pub fn get(&self, reference: &RecordRef) -> Option<Arc<Record>> {
        self.records.read().get(reference).cloned()
    }

    /// All records, ordered by reference.
    pub fn records(&self) -> Vec<Arc<Record>> {
        self.records.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Relations pointing at records that do not exist.
    pub fn dangling_relations(&self) -> Vec<DanglingRelation> {
        let records = self.records.read();
        let mut dangling = Vec::new();
        for record in records.values() {
            for (name, target) in record.relations() {
                if !records.contains_key(target) {
                    dangling.push(DanglingRelation {
                        source: record.reference.clone(),
                        relation: name.to_string(),
                        target: target.clone(),
                    });
                }
            }
        }
        dangling
    }
}
