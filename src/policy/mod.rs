//! Style policy and controlled global-state mutation.
//!
//! `colors`/`style` are pure; `state` owns the process-wide option map;
//! `snapshot`, `context`, and `configure` are the only mutation paths;
//! `accessor` is the read-only singleton entry point.

pub mod accessor;
pub mod colors;
pub mod configure;
pub mod context;
pub mod snapshot;
pub mod state;
pub mod style;

pub use accessor::{get_accessor, PolicyAccessor};
pub use colors::{color_cycle, colors, CYCLE_LEN};
pub use configure::{configure, configure_from_file};
pub use context::{PolicyGuard, ScopedPolicy};
pub use snapshot::PolicySnapshot;
pub use state::apply_policy;
pub use style::{default_style, OptionValue, StyleMap};
