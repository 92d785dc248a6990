//! Immutable plot results.

use std::path::Path;

use crate::error::PlotError;
use crate::render::{Axes, Figure, MarkHandle};

/// Metadata describing what a primitive drew.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotMetadata {
    /// Number of points plotted
    pub n_points: usize,
    /// (min, max) of the x data
    pub x_range: (f64, f64),
    /// (min, max) of the y data
    pub y_range: (f64, f64),
    /// The resolved series color (hex)
    pub color_used: String,
}

/// Immutable result of a plotting primitive.
///
/// Owns the rendered figure, the handles of the drawn marks in draw order,
/// and the plot metadata. All fields are private and every accessor returns
/// a shared reference, so the result cannot be altered after construction:
///
/// ```compile_fail
/// let result = catplot::scatter(vec![1.0, 2.0], vec![3.0, 4.0])
///     .finish()
///     .unwrap();
/// result.metadata().n_points = 0;
/// ```
#[derive(Debug, Clone)]
pub struct PlotResult {
    figure: Figure,
    handles: Vec<MarkHandle>,
    metadata: PlotMetadata,
}

impl PlotResult {
    pub(crate) fn new(figure: Figure, handles: Vec<MarkHandle>, metadata: PlotMetadata) -> Self {
        PlotResult {
            figure,
            handles,
            metadata,
        }
    }

    /// The rendered figure.
    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    /// The figure's axes.
    pub fn axes(&self) -> &Axes {
        self.figure.axes()
    }

    /// Handles of the drawn marks, in draw order.
    pub fn handles(&self) -> &[MarkHandle] {
        &self.handles
    }

    /// Plot metadata (point count, data ranges, resolved color).
    pub fn metadata(&self) -> &PlotMetadata {
        &self.metadata
    }

    /// Save the figure as SVG to the given path.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PlotError> {
        self.figure.save(path)
    }
}
