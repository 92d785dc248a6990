//! Process-wide configuration state.
//!
//! This is the single source of truth for the live style options, and the
//! only module allowed to touch it. All reads and writes go through one
//! mutex, so no caller can observe a partially-applied merge. Everything
//! outside this module mutates state exclusively through [`apply_policy`],
//! snapshot restore, the scoped context, or `configure`.

use std::sync::{Mutex, PoisonError};

use log::debug;

use super::style::{default_style, StyleMap};

/// Live option map. `None` until first touched, then lazily initialized to
/// `default_style()` so that an unconfigured process still has a complete,
/// well-defined policy.
static STATE: Mutex<Option<StyleMap>> = Mutex::new(None);

/// Run `f` with exclusive access to the (initialized) global state.
///
/// A poisoned lock still holds a fully-merged map, and restoration must be
/// able to proceed while a panic unwinds, so poisoning is stripped rather
/// than propagated.
fn with_state<R>(f: impl FnOnce(&mut StyleMap) -> R) -> R {
    let mut guard = STATE.lock().unwrap_or_else(PoisonError::into_inner);
    let state = guard.get_or_insert_with(default_style);
    f(state)
}

/// Copy of the entire current global state.
pub(crate) fn current() -> StyleMap {
    with_state(|state| state.clone())
}

/// Overwrite the global state with exactly `options`.
pub(crate) fn replace(options: StyleMap) {
    let mut guard = STATE.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = Some(options);
}

/// Capture the current state and merge `overrides` onto it, as one critical
/// section. Used by the scoped context so that no reader can run between
/// the capture and the override application.
pub(crate) fn capture_and_merge(overrides: &StyleMap) -> StyleMap {
    with_state(|state| {
        let previous = state.clone();
        for (key, value) in overrides {
            state.insert(key.clone(), value.clone());
        }
        previous
    })
}

/// Apply a policy to the global configuration state.
///
/// Builds `default_style()`, merges `overrides` on top (overrides win
/// key-for-key, shallow), and writes the merged result onto the global
/// state in a single lock acquisition. Note the merge base: this resets
/// every defaulted option, unlike the scoped context which layers onto the
/// live state. Values are not validated here; a bad value surfaces when the
/// renderer consumes it.
pub fn apply_policy(overrides: Option<&StyleMap>) {
    let mut merged = default_style();
    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            merged.insert(key.clone(), value.clone());
        }
    }

    debug!("applying policy ({} options)", merged.len());
    with_state(|state| {
        for (key, value) in merged {
            state.insert(key, value);
        }
    });
}

/// Drop the live state so the next access re-initializes from defaults.
#[cfg(test)]
pub(crate) fn reset_for_tests() {
    let mut guard = STATE.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::style::OptionValue;
    use crate::testutil;

    #[test]
    fn test_state_initializes_to_defaults() {
        let _lock = testutil::global_state_lock();
        reset_for_tests();

        assert_eq!(current(), default_style());
    }

    #[test]
    fn test_apply_policy_merges_overrides_onto_defaults() {
        let _lock = testutil::global_state_lock();
        reset_for_tests();

        let mut overrides = StyleMap::new();
        overrides.insert("lines.linewidth".into(), OptionValue::Num(3.5));
        overrides.insert("custom.option".into(), OptionValue::Flag(true));
        apply_policy(Some(&overrides));

        let state = current();
        assert_eq!(state["lines.linewidth"], OptionValue::Num(3.5));
        assert_eq!(state["custom.option"], OptionValue::Flag(true));
        // Untouched defaults survive
        assert_eq!(state["font.size"], default_style()["font.size"]);

        reset_for_tests();
    }

    #[test]
    fn test_apply_policy_resets_defaulted_options() {
        let _lock = testutil::global_state_lock();
        reset_for_tests();

        let mut first = StyleMap::new();
        first.insert("lines.linewidth".into(), OptionValue::Num(9.0));
        apply_policy(Some(&first));

        // A later apply without that override returns it to the default.
        apply_policy(None);
        assert_eq!(
            current()["lines.linewidth"],
            default_style()["lines.linewidth"]
        );

        reset_for_tests();
    }

    #[test]
    fn test_capture_and_merge_returns_previous() {
        let _lock = testutil::global_state_lock();
        reset_for_tests();

        let mut overrides = StyleMap::new();
        overrides.insert("font.size".into(), OptionValue::Num(20.0));

        let previous = capture_and_merge(&overrides);
        assert_eq!(previous, default_style());
        assert_eq!(current()["font.size"], OptionValue::Num(20.0));

        replace(previous);
        assert_eq!(current(), default_style());

        reset_for_tests();
    }
}
