//! Advisory notices with colored terminal output.
//!
//! Every notice is printed at most once per process. The record of what has
//! already been printed lives until [`clear_warnings`] is called, which only
//! test harnesses and long-running hosts starting a fresh build should do.

use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Notices already printed, keyed by `[component] message`.
static WARNED: Mutex<BTreeSet<String>> = Mutex::new(BTreeSet::new());

fn warned() -> MutexGuard<'static, BTreeSet<String>> {
    // A panic while holding the lock cannot leave the set half-updated.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Print an advisory notice to stderr unless the same notice was already
/// printed by this process.
///
/// Returns `true` when the notice was printed by this call.
///
/// # Example
/// ```ignore
/// let _ = warn_once("Variants", "The labeled variant is experimental and may not follow semver.");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let first_time = warned().insert(key(component, message));

    if first_time {
        eprintln!("{}", format!("[weft {component}] ⚠ {message}").yellow());
    }
    first_time
}

/// Whether [`warn_once`] has printed this notice since the last
/// [`clear_warnings`].
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    warned().contains(&key(component, message))
}

/// Forget every printed notice so the next [`warn_once`] prints again.
pub fn clear_warnings() {
    warned().clear();
}
