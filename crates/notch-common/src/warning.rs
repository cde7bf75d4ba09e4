//! Paint warnings with colored terminal output.
//!
//! Style values that are malformed but recoverable (a broken shorthand, a
//! corner longhand with the wrong number of values, an unreadable color) do
//! not abort a paint call. They are reported here instead, once per unique
//! message, so a host repainting every frame does not flood the terminal.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// A poisoned set only means another thread panicked mid-insert; the set
/// itself is still usable.
fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about a recoverable style problem (prints once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("Paint", "ignoring malformed --border-radius-reverse: 1px/2px/3px");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        eprintln!("{YELLOW}[Notch {component}] ⚠ {message}{RESET}");
    }
}

/// Whether `message` has already been reported for `component`.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings (call before painting a new document).
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_once_records_message() {
        warn_once("Test", "recorded message");
        assert!(has_warned("Test", "recorded message"));
        assert!(!has_warned("Other", "recorded message"));
    }

    #[test]
    fn test_unreported_message_is_absent() {
        assert!(!has_warned("Test", "never reported"));
    }
}
