//! Scatter plot primitive.

use crate::data::Series;
use crate::error::PlotError;
use crate::primitives::{render_plot, PlotLabels, PlotResult};

/// Start a scatter plot of `y` against `x`.
///
/// Returns a builder; call [`finish`](ScatterBuilder::finish) to validate,
/// draw, and get the [`PlotResult`].
///
/// # Examples
///
/// ```
/// let result = catplot::scatter(vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 9.0])
///     .title("Growth")
///     .xlabel("t")
///     .ylabel("value")
///     .finish()
///     .unwrap();
/// assert_eq!(result.metadata().n_points, 3);
/// ```
pub fn scatter(x: impl Series, y: impl Series) -> ScatterBuilder {
    ScatterBuilder {
        x: x.into_series(),
        y: y.into_series(),
        labels: PlotLabels::default(),
        color: None,
        size: 50.0,
        alpha: 0.7,
    }
}

/// Builder for scatter plots. Options mirror the defaults of the opinionated
/// style: size is marker area in points², alpha defaults to 0.7.
#[derive(Debug, Clone)]
pub struct ScatterBuilder {
    x: Vec<f64>,
    y: Vec<f64>,
    labels: PlotLabels,
    color: Option<String>,
    size: f64,
    alpha: f64,
}

impl ScatterBuilder {
    /// Set the plot title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.labels.title = Some(title.into());
        self
    }

    /// Set the x-axis label.
    pub fn xlabel(mut self, label: impl Into<String>) -> Self {
        self.labels.xlabel = Some(label.into());
        self
    }

    /// Set the y-axis label.
    pub fn ylabel(mut self, label: impl Into<String>) -> Self {
        self.labels.ylabel = Some(label.into());
        self
    }

    /// Set the marker color (hex). Defaults to the first cycle color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the marker size in points².
    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set the marker opacity (clamped to 0–1).
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Set the figure size in inches, overriding `figure.figsize`.
    pub fn figsize(mut self, width: f64, height: f64) -> Self {
        self.labels.figsize = Some((width, height));
        self
    }

    /// Validate, draw, and package the plot.
    pub fn finish(self) -> Result<PlotResult, PlotError> {
        let color = self.color;
        let size = self.size;
        let alpha = self.alpha;

        render_plot(self.x, self.y, self.labels, move |axes, x, y, _style, cycle| {
            let resolved = color.unwrap_or_else(|| cycle[0].to_string());
            // Area in points² → diameter in pixels, matplotlib convention
            let diameter = size.max(0.0).sqrt();
            let handle = axes.draw_points(x.to_vec(), y.to_vec(), resolved.clone(), diameter, alpha);
            (handle, resolved)
        })
    }
}
