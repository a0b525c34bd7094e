//! `routable route`: print the route name of a record type.

use std::sync::Arc;

use crate::model::{NewRecord, RecordStore};
use crate::naming;

/// Route name for records of `ty`, honoring a configured base route.
pub fn route_for_type(store: &Arc<RecordStore>, ty: &str, action: Option<&str>) -> String {
    let record = store.detached(NewRecord::new(ty.to_string(), 0));
    naming::route_name(&record, action)
}

pub fn run_route(store: &Arc<RecordStore>, ty: &str, action: Option<&str>) {
    println!("{}", route_for_type(store, ty, action));
}
