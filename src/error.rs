//! Error types for catplot operations.

use std::fmt;
use std::io;

/// The main error type for catplot operations.
#[derive(Debug)]
pub enum PlotError {
    /// x and y inputs do not have the same shape.
    ShapeMismatch {
        /// Number of points in x
        x_len: usize,
        /// Number of points in y
        y_len: usize,
    },
    /// `configure` was called more than once in this process.
    AlreadyConfigured,
    /// Invalid configuration or parameters
    InvalidConfig(String),
    /// Empty data provided where non-empty data is required
    EmptyData,
    /// Error during IO operations (saving figures, reading override files)
    Io(io::Error),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::ShapeMismatch { x_len, y_len } => write!(
                f,
                "x and y must have the same shape: ({},) != ({},)",
                x_len, y_len
            ),
            PlotError::AlreadyConfigured => write!(
                f,
                "configure() may only be called once, before any plots are created"
            ),
            PlotError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            PlotError::EmptyData => write!(f, "Empty data provided"),
            PlotError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for PlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlotError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PlotError {
    fn from(err: io::Error) -> Self {
        PlotError::Io(err)
    }
}
