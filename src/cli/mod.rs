//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod list;
pub mod route;
pub mod url;

pub use args::{Cli, Commands, UrlArgs};
