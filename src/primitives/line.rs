//! Line plot primitive.

use crate::data::Series;
use crate::error::PlotError;
use crate::primitives::{render_plot, PlotLabels, PlotResult};

/// Start a line plot of `y` against `x`, connecting points in input order.
///
/// Returns a builder; call [`finish`](LineBuilder::finish) to validate,
/// draw, and get the [`PlotResult`].
pub fn line(x: impl Series, y: impl Series) -> LineBuilder {
    LineBuilder {
        x: x.into_series(),
        y: y.into_series(),
        labels: PlotLabels::default(),
        color: None,
        linewidth: None,
        alpha: 1.0,
    }
}

/// Builder for line plots.
#[derive(Debug, Clone)]
pub struct LineBuilder {
    x: Vec<f64>,
    y: Vec<f64>,
    labels: PlotLabels,
    color: Option<String>,
    linewidth: Option<f64>,
    alpha: f64,
}

impl LineBuilder {
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

    /// Set the line color (hex). Defaults to the first cycle color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the line width. Defaults to the `lines.linewidth` option.
    pub fn linewidth(mut self, width: f64) -> Self {
        self.linewidth = Some(width);
        self
    }

    /// Set the line opacity (clamped to 0–1).
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
        let linewidth = self.linewidth;
        let alpha = self.alpha;

        render_plot(self.x, self.y, self.labels, move |axes, x, y, style, cycle| {
            let resolved = color.unwrap_or_else(|| cycle[0].to_string());
            let width = linewidth.unwrap_or_else(|| style.num("lines.linewidth", 2.0));
            let handle = axes.draw_path(x.to_vec(), y.to_vec(), resolved.clone(), width, alpha);
            (handle, resolved)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::state::reset_for_tests;
    use crate::policy::style::{OptionValue, StyleMap};
    use crate::render::MarkKind;
    use crate::testutil;

    #[test]
    fn test_line_basic() {
        let _lock = testutil::global_state_lock();
        reset_for_tests();

        let result = line(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0])
            .title("squares")
            .finish()
            .unwrap();

        assert_eq!(result.metadata().n_points, 3);
        assert_eq!(result.handles()[0].kind(), MarkKind::Path);

        reset_for_tests();
    }

    #[test]
    fn test_line_metadata_ranges() {
        let _lock = testutil::global_state_lock();
        reset_for_tests();

        let result = line(vec![-1.0, 0.0, 3.0], vec![5.0, 2.0, 7.0])
            .finish()
            .unwrap();
        assert_eq!(result.metadata().x_range, (-1.0, 3.0));
        assert_eq!(result.metadata().y_range, (2.0, 7.0));

        reset_for_tests();
    }

    #[test]
    fn test_line_shape_mismatch() {
        let err = line(vec![1.0], vec![1.0, 2.0]).finish().unwrap_err();
        assert!(matches!(
            err,
            PlotError::ShapeMismatch { x_len: 1, y_len: 2 }
        ));
    }

    #[test]
    fn test_line_width_from_policy() {
        let _lock = testutil::global_state_lock();
        reset_for_tests();

        let mut overrides = StyleMap::new();
        overrides.insert("lines.linewidth".into(), OptionValue::Num(4.0));
        let guard = crate::ScopedPolicy::with(overrides).enter();

        let result = line(vec![0.0, 1.0], vec![0.0, 1.0]).finish().unwrap();
        let svg = result.figure().render();
        assert!(svg.contains("stroke-width=\"4\""));
        drop(guard);

        reset_for_tests();
    }

    #[test]
    fn test_line_explicit_width_wins() {
        let _lock = testutil::global_state_lock();
        reset_for_tests();

        let result = line(vec![0.0, 1.0], vec![0.0, 1.0])
            .linewidth(7.5)
            .finish()
            .unwrap();
        assert!(result.figure().render().contains("stroke-width=\"7.5\""));

        reset_for_tests();
    }
}
