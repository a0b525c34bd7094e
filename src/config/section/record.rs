//! `[[records]]` configuration.
//!
//! ```toml
//! [[records]]
//! type = "Thread"
//! id = 7
//! attributes = { slug = "hello" }
//! relations = { channel = "Channel:3" }
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::{RouteKey, TypeTag};
use crate::model::{NewRecord, RecordRef};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordConfig {
    #[serde(rename = "type")]
    pub ty: String,
    pub id: RouteKey,
    #[serde(default)]
    pub attributes: BTreeMap<String, RouteKey>,
    /// Relation name -> `Type:id` of the related record.
    #[serde(default)]
    pub relations: BTreeMap<String, RecordRef>,
}

impl RecordConfig {
    /// Reference of this record. `id = "7"` and `id = 7` name the same
    /// record, matching how `Type:7` is parsed.
    pub fn reference(&self) -> RecordRef {
        RecordRef::new(
            TypeTag::owned(self.ty.clone()),
            RouteKey::parse(&self.id.to_string()),
        )
    }

    pub fn to_new_record(&self) -> NewRecord {
        let mut record = NewRecord::new(TypeTag::owned(self.ty.clone()), self.reference().id);
        for (name, value) in &self.attributes {
            record = record.attribute(name.clone(), value.clone());
        }
        for (name, target) in &self.relations {
            record = record.relation(name.clone(), target.clone());
        }
        record
    }
}

/// Check record types, duplicates and relation targets.
pub fn validate_records(records: &[RecordConfig], diag: &mut ConfigDiagnostics) {
    let section = FieldPath::new("records");
    let mut seen = BTreeSet::new();

    for (index, record) in records.iter().enumerate() {
        if record.ty.trim().is_empty() {
            diag.error(section.index(index).field("type"), "record type is empty");
            continue;
        }
        let reference = record.reference();
        if !seen.insert(reference.clone()) {
            diag.warn(
                section.index(index),
                format!("`{reference}` replaces an earlier record"),
            );
        }
    }

    for (index, record) in records.iter().enumerate() {
        for (name, target) in &record.relations {
            if !seen.contains(target) {
                diag.warn(
                    section.index(index).field("relations").field(name),
                    format!("`{target}` is not defined; the relation will not resolve"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ty: &str, id: impl Into<RouteKey>, relations: &[(&str, &str)]) -> RecordConfig {
        RecordConfig {
            ty: ty.into(),
            id: id.into(),
            attributes: BTreeMap::new(),
            relations: relations
                .iter()
                .map(|(name, target)| (name.to_string(), target.parse().unwrap()))
                .collect(),
        }
    }

    #[test]
    fn test_string_and_integer_ids_match() {
        assert_eq!(record("Thread", "7", &[]).reference(), RecordRef::new("Thread", 7));
        assert_eq!(
            record("Post", "hello", &[]).reference(),
            RecordRef::new("Post", "hello")
        );
    }

    #[test]
    fn test_validate_records() {
        let records = [
            record("Channel", 3, &[]),
            record("Thread", 7, &[("channel", "Channel:3")]),
            record("Thread", 8, &[("channel", "Channel:99")]),
            record("Channel", "3", &[]),
            record("", 1, &[]),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_records(&records, &mut diag);

        let errors: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(errors, vec!["records[4].type"]);

        let warnings: Vec<_> = diag.warnings().iter().map(|w| w.field.as_str()).collect();
        assert_eq!(warnings, vec!["records[3]", "records[2].relations.channel"]);
    }

    #[test]
    fn test_to_new_record() {
        let mut config = record("Thread", 7, &[("channel", "Channel:3")]);
        config.attributes.insert("slug".into(), "hello".into());

        let new = config.to_new_record();
        assert_eq!(new.reference, RecordRef::new("Thread", 7));
        assert_eq!(new.attributes.get("slug"), Some(&RouteKey::from("hello")));
        assert_eq!(new.relations.get("channel"), Some(&RecordRef::new("Channel", 3)));
    }
}
