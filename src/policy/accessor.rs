//! Process-wide policy access point.
//!
//! Holds the policy snapshot taken when the singleton was first touched and
//! hands out scoped-override builders. Draws nothing, creates no figures,
//! and never mutates global state itself.

use std::sync::{Arc, Mutex, PoisonError};

use log::debug;

use super::context::ScopedPolicy;
use super::snapshot::PolicySnapshot;

static ACCESSOR: Mutex<Option<Arc<PolicyAccessor>>> = Mutex::new(None);

/// Read-only view of the policy plus a factory for scoped overrides.
#[derive(Debug)]
pub struct PolicyAccessor {
    policy: PolicySnapshot,
}

impl PolicyAccessor {
    /// The snapshot captured when this accessor was constructed.
    pub fn policy(&self) -> &PolicySnapshot {
        &self.policy
    }

    /// Build a scoped-override set bound to this accessor. The scope is
    /// constructed inactive; nothing changes until `enter()`.
    pub fn context(&self) -> ScopedPolicy {
        ScopedPolicy::new()
    }

    /// Drop the singleton so the next [`get_accessor`] call constructs a
    /// fresh one. Intended for test isolation.
    pub fn reset() {
        let mut guard = ACCESSOR.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }
}

/// Get the process-wide policy accessor, constructing it on first access.
///
/// Construction captures a [`PolicySnapshot`] and nothing else; accessing
/// the singleton has no rendering or global-state side effects.
pub fn get_accessor() -> Arc<PolicyAccessor> {
    let mut guard = ACCESSOR.lock().unwrap_or_else(PoisonError::into_inner);
    guard
        .get_or_insert_with(|| {
            debug!("constructing policy accessor");
            Arc::new(PolicyAccessor {
                policy: PolicySnapshot::capture(),
            })
        })
        .clone()
}
