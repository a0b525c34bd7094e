//! Route parameter resolution.
//!
//! | Module     | Purpose                                              |
//! |------------|------------------------------------------------------|
//! | `params`   | Caller input: values, slots, normalization           |
//! | `resolver` | Binding declared parameters (name, type, relation)   |
//! | `resolved` | The ordered result handed to a URL builder           |

mod params;
mod resolved;
mod resolver;

pub use params::{CallerParameters, ParamInput, ParamMap, ParamValue, Slot};
pub use resolved::{Binding, ResolvedParameter, ResolvedParameters};
pub use resolver::resolve;
