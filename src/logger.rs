//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro gated by the global verbose flag
//! - `status_success` / `status_error` for per-item check results
//!
//! Everything is written to stderr so that generated URLs on stdout stay
//! pipeable.
//!
//! # Example
//!
//! ```ignore
//! log!("route"; "{} routes registered", count);
//! debug!("resolve"; "`{}` bound by name", param);
//! ```

use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use std::{
    io::{Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stderr = stderr().lock();
    execute!(stderr, Clear(ClearType::UntilNewLine)).ok();
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "resolve" => prefix.bright_blue().bold().to_string(),
        "check" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// Check Status
// ============================================================================

/// Print a successful check line (✓ prefix, green).
pub fn status_success(message: &str) {
    status_line(&format!("{}", "✓".green()), message);
}

/// Print a failed check line (✗ prefix, red) with optional detail.
pub fn status_error(summary: &str, detail: &str) {
    if detail.is_empty() {
        status_line(&format!("{}", "✗".red()), summary);
    } else {
        status_line(
            &format!("{}", "✗".red()),
            &format!("{summary}\n  {}", detail.dimmed()),
        );
    }
}

fn status_line(symbol: &str, message: &str) {
    let mut stderr = stderr().lock();
    writeln!(stderr, "{symbol} {message}").ok();
    stderr.flush().ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorize_prefix_wraps_module() {
        owo_colors::set_override(false);
        assert_eq!(colorize_prefix("resolve", "resolve"), "[resolve]");
        assert_eq!(colorize_prefix("Route", "route"), "[Route]");
    }
}
