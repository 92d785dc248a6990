//! Scoped overrides of the global configuration state.
//!
//! The only blessed way to mutate style options temporarily. Entering a
//! scope captures the live state and layers the overrides on top; dropping
//! the returned guard puts the captured state back, no matter how the scope
//! exits. Panics unwind through the restore and keep propagating.

use log::debug;

use super::snapshot::PolicySnapshot;
use super::state;
use super::style::{OptionValue, StyleMap};

/// A set of style overrides waiting to be entered.
///
/// Build with [`ScopedPolicy::new`] and chained [`set`](Self::set) calls,
/// then [`enter`](Self::enter) to activate. Entering consumes the builder,
/// so a scope cannot be re-entered after it has run.
///
/// Unlike [`apply_policy`](crate::apply_policy), which rebuilds from the
/// defaults, the overrides here merge onto the *captured live state*:
/// whatever was configured before the scope survives underneath and comes
/// back intact when the guard drops.
#[derive(Debug, Clone, Default)]
pub struct ScopedPolicy {
    overrides: StyleMap,
}

impl ScopedPolicy {
    /// Create an empty override set.
    pub fn new() -> Self {
        ScopedPolicy::default()
    }

    /// Create an override set from an existing map.
    pub fn with(overrides: StyleMap) -> Self {
        ScopedPolicy { overrides }
    }

    /// Add one override.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.overrides.insert(key.into(), value.into());
        self
    }

    /// The overrides this scope will apply.
    pub fn overrides(&self) -> &StyleMap {
        &self.overrides
    }

    /// Activate the scope: capture the current global state and merge the
    /// overrides onto it, in one critical section.
    ///
    /// The returned guard restores the captured state when dropped. Guards
    /// nest with stack discipline; an inner guard restores to the state the
    /// enclosing guard established.
    #[must_use = "the overrides are reverted as soon as the guard is dropped"]
    pub fn enter(self) -> PolicyGuard {
        debug!("entering scoped policy ({} overrides)", self.overrides.len());
        let previous = state::capture_and_merge(&self.overrides);
        PolicyGuard {
            previous: PolicySnapshot::from_options(previous),
        }
    }
}

/// Active scoped-override guard. Restores the captured state on drop.
#[derive(Debug)]
pub struct PolicyGuard {
    previous: PolicySnapshot,
}

impl PolicyGuard {
    /// The state that will be restored when this guard drops.
    pub fn previous(&self) -> &PolicySnapshot {
        &self.previous
    }
}

impl Drop for PolicyGuard {
    fn drop(&mut self) {
        debug!("exiting scoped policy");
        self.previous.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::state::reset_for_tests;
    use crate::policy::style::default_style;
    use crate::testutil;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn current_num(key: &str) -> Option<f64> {
        PolicySnapshot::capture().get(key).and_then(OptionValue::as_num)
    }

    #[test]
    fn test_overrides_visible_inside_scope_only() {
        let _lock = testutil::global_state_lock();
        reset_for_tests();

        {
            let _guard = ScopedPolicy::new().set("lines.linewidth", 5.0).enter();
            assert_eq!(current_num("lines.linewidth"), Some(5.0));
        }
        assert_eq!(
            PolicySnapshot::capture().options(),
            &default_style(),
            "state leaked past scope exit"
        );

        reset_for_tests();
    }

    #[test]
    fn test_nested_scopes_restore_lifo() {
        let _lock = testutil::global_state_lock();
        reset_for_tests();

        let default = current_num("font.size");
        {
            let _a = ScopedPolicy::new().set("font.size", 1.0).enter();
            assert_eq!(current_num("font.size"), Some(1.0));
            {
                let _b = ScopedPolicy::new().set("font.size", 2.0).enter();
                assert_eq!(current_num("font.size"), Some(2.0));
            }
            assert_eq!(current_num("font.size"), Some(1.0));
        }
        assert_eq!(current_num("font.size"), default);

        reset_for_tests();
    }

    #[test]
    fn test_scope_layers_onto_live_state() {
        let _lock = testutil::global_state_lock();
        reset_for_tests();

        // Prior non-default state must survive under and after the scope.
        let mut configured = StyleMap::new();
        configured.insert("font.size".into(), OptionValue::Num(14.0));
        crate::policy::state::apply_policy(Some(&configured));

        {
            let _guard = ScopedPolicy::new().set("lines.linewidth", 4.0).enter();
            assert_eq!(current_num("font.size"), Some(14.0));
            assert_eq!(current_num("lines.linewidth"), Some(4.0));
        }
        assert_eq!(current_num("font.size"), Some(14.0));

        reset_for_tests();
    }

    #[test]
    fn test_restores_on_panic() {
        let _lock = testutil::global_state_lock();
        reset_for_tests();

        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard = ScopedPolicy::new().set("lines.linewidth", 9.0).enter();
            panic!("boom");
        }));
        assert!(result.is_err(), "panic must propagate, not be swallowed");
        assert_eq!(
            PolicySnapshot::capture().options(),
            &default_style(),
            "state not restored on unwind"
        );

        reset_for_tests();
    }

    #[test]
    fn test_guard_exposes_previous_state() {
        let _lock = testutil::global_state_lock();
        reset_for_tests();

        let guard = ScopedPolicy::new().set("font.size", 30.0).enter();
        assert_eq!(
            guard.previous().get("font.size"),
            default_style().get("font.size")
        );
        drop(guard);

        reset_for_tests();
    }
}
