//! catplot: opinionated Catppuccin-themed plotting.
//!
//! A thin styling and policy layer over a minimal SVG drawing backend.
//! Scatter and line primitives pick up a consistent Mocha color theme from a
//! process-wide style policy; the policy subsystem is the only place that
//! touches global state, and scoped overrides are guaranteed to be rolled
//! back on every exit path.
//!
//! ```
//! use catplot::{scatter, ScopedPolicy};
//!
//! let result = scatter(vec![1.0, 2.0, 3.0], vec![1.0, 4.0, 9.0])
//!     .title("Squares")
//!     .finish()
//!     .unwrap();
//! assert_eq!(result.metadata().n_points, 3);
//!
//! // Temporary overrides never leak past the guard.
//! {
//!     let _style = ScopedPolicy::new().set("lines.linewidth", 4.0).enter();
//!     // plots drawn here use the override
//! }
//! ```

pub mod data;
pub mod error;
pub mod policy;
pub mod primitives;
pub mod render;

pub use data::Series;
pub use error::PlotError;
pub use policy::{
    apply_policy, color_cycle, colors, configure, configure_from_file, default_style,
    get_accessor, OptionValue, PolicyAccessor, PolicyGuard, PolicySnapshot, ScopedPolicy,
    StyleMap,
};
pub use primitives::{line, scatter, LineBuilder, PlotMetadata, PlotResult, ScatterBuilder};
pub use render::Figure;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::data::Series;
    pub use crate::error::PlotError;
    pub use crate::policy::{
        color_cycle, colors, configure, default_style, get_accessor, OptionValue,
        PolicySnapshot, ScopedPolicy, StyleMap,
    };
    pub use crate::primitives::{line, scatter, PlotMetadata, PlotResult};
}

/// Serializes tests that touch the process-wide configuration state.
#[cfg(test)]
pub(crate) mod testutil {
    use std::sync::{Mutex, MutexGuard, PoisonError};

    static LOCK: Mutex<()> = Mutex::new(());

    pub fn global_state_lock() -> MutexGuard<'static, ()> {
        LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
