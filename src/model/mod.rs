//! Routable domain objects.
//!
//! | Module     | Purpose                                           |
//! |------------|---------------------------------------------------|
//! | `routable` | The `Routable` capability and base route slot     |
//! | `relation` | Relation tables for statically typed routables    |
//! | `record`   | Dynamic records and the in-memory record store    |

mod record;
mod relation;
mod routable;

pub use record::{
    DanglingRelation, ModelSettings, NewRecord, ParseRecordRefError, Record, RecordRef,
    RecordStore,
};
pub use relation::{Accessor, Relations};
pub use routable::{BaseRoute, Routable, RoutableRef};
