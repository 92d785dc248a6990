//! Immutable snapshots of the global configuration state.

use log::debug;

use super::state;
use super::style::{OptionValue, StyleMap};

/// Immutable point-in-time copy of the entire global configuration state.
///
/// Holds an owned copy with no aliasing of the live state; two snapshots
/// compare equal iff their option maps are equal key-for-key.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicySnapshot {
    options: StyleMap,
}

impl PolicySnapshot {
    /// Capture the current global configuration state. Never fails.
    pub fn capture() -> Self {
        let options = state::current();
        debug!("captured policy snapshot ({} options)", options.len());
        PolicySnapshot { options }
    }

    /// Overwrite the global configuration state with exactly the contents
    /// of this snapshot. A full replace, not an additive merge: options
    /// added after the capture are gone afterwards.
    pub fn restore(&self) {
        debug!("restoring policy snapshot ({} options)", self.options.len());
        state::replace(self.options.clone());
    }

    /// Build a snapshot from an already-captured option map. Used by the
    /// scoped context, whose capture happens inside the state lock.
    pub(crate) fn from_options(options: StyleMap) -> Self {
        PolicySnapshot { options }
    }

    /// Look up a single option.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    /// All captured options, in capture order.
    pub fn options(&self) -> &StyleMap {
        &self.options
    }

    /// Number of captured options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Numeric option with a fallback for missing or mistyped values.
    pub(crate) fn num(&self, key: &str, fallback: f64) -> f64 {
        self.get(key).and_then(OptionValue::as_num).unwrap_or(fallback)
    }

    /// Text option with a fallback.
    pub(crate) fn text<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.get(key).and_then(OptionValue::as_text).unwrap_or(fallback)
    }

    /// Boolean option with a fallback.
    pub(crate) fn flag(&self, key: &str, fallback: bool) -> bool {
        self.get(key).and_then(OptionValue::as_flag).unwrap_or(fallback)
    }

    /// Pair option with a fallback.
    pub(crate) fn pair(&self, key: &str, fallback: (f64, f64)) -> (f64, f64) {
        self.get(key).and_then(OptionValue::as_pair).unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::state::{apply_policy, reset_for_tests};
    use crate::policy::style::default_style;
    use crate::testutil;

    #[test]
    fn test_capture_restore_round_trip() {
        let _lock = testutil::global_state_lock();
        reset_for_tests();

        let before = PolicySnapshot::capture();

        let mut overrides = StyleMap::new();
        overrides.insert("lines.linewidth".into(), OptionValue::Num(7.0));
        overrides.insert("scratch.key".into(), OptionValue::Text("x".into()));
        apply_policy(Some(&overrides));
        assert_ne!(PolicySnapshot::capture(), before);

        before.restore();
        assert_eq!(PolicySnapshot::capture(), before);

        reset_for_tests();
    }

    #[test]
    fn test_restore_is_full_replace() {
        let _lock = testutil::global_state_lock();
        reset_for_tests();

        let before = PolicySnapshot::capture();

        let mut overrides = StyleMap::new();
        overrides.insert("scratch.key".into(), OptionValue::Flag(true));
        apply_policy(Some(&overrides));

        before.restore();
        assert!(PolicySnapshot::capture().get("scratch.key").is_none());

        reset_for_tests();
    }

    #[test]
    fn test_snapshot_not_aliased_to_live_state() {
        let _lock = testutil::global_state_lock();
        reset_for_tests();

        let snapshot = PolicySnapshot::capture();
        let mut overrides = StyleMap::new();
        overrides.insert("font.size".into(), OptionValue::Num(99.0));
        apply_policy(Some(&overrides));

        // The earlier snapshot is unaffected by the mutation.
        assert_eq!(snapshot.options(), &default_style());

        reset_for_tests();
    }

    #[test]
    fn test_structural_equality() {
        let _lock = testutil::global_state_lock();
        reset_for_tests();

        let a = PolicySnapshot::capture();
        let b = PolicySnapshot::capture();
        assert_eq!(a, b);

        reset_for_tests();
    }

    #[test]
    fn test_typed_getters() {
        let _lock = testutil::global_state_lock();
        reset_for_tests();

        let snapshot = PolicySnapshot::capture();
        assert_eq!(snapshot.num("font.size", 0.0), 11.0);
        assert_eq!(snapshot.flag("axes.grid", false), true);
        assert_eq!(snapshot.pair("figure.figsize", (0.0, 0.0)), (8.0, 6.0));
        assert_eq!(snapshot.text("missing.key", "fallback"), "fallback");

        reset_for_tests();
    }
}
