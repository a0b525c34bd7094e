//! Utility modules.

pub mod case;
pub mod plural;

pub use case::snake_case;
pub use plural::{plural_count, plural_s, pluralize, pluralize_last_word};
