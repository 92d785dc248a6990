//! One-shot process-wide configuration.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use log::info;

use super::state::apply_policy;
use super::style::StyleMap;
use crate::error::PlotError;

/// Latched after the first successful `configure`. Deliberately no public
/// way to clear it: late reconfiguration would silently restyle plots that
/// already consumed the global state.
static CONFIGURED: AtomicBool = AtomicBool::new(false);

/// One-time global configuration.
///
/// Merges `overrides` onto the default style and writes the result to the
/// global configuration state. May only be called once per process; every
/// later call fails with [`PlotError::AlreadyConfigured`] and leaves the
/// first configuration untouched.
pub fn configure(overrides: StyleMap) -> Result<(), PlotError> {
    // Latch first so a racing second call can never double-apply.
    if CONFIGURED.swap(true, Ordering::SeqCst) {
        return Err(PlotError::AlreadyConfigured);
    }

    info!("configuring global plot policy ({} overrides)", overrides.len());
    apply_policy(Some(&overrides));
    Ok(())
}

/// One-time global configuration from a JSON file.
///
/// The file holds a single object of option-name → value overrides, e.g.
/// `{"lines.linewidth": 3.0, "font.family": "monospace"}`.
pub fn configure_from_file(path: impl AsRef<Path>) -> Result<(), PlotError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let overrides: StyleMap = serde_json::from_reader(reader)
        .map_err(|e| PlotError::InvalidConfig(format!("override file: {}", e)))?;
    configure(overrides)
}

/// Clear the configured latch. Test isolation only; production code must
/// not reconfigure.
#[doc(hidden)]
pub fn reset_configuration() {
    CONFIGURED.store(false, Ordering::SeqCst);
}
