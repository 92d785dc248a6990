//! Plotting primitives.
//!
//! Each primitive follows one canonical lifecycle, shared in
//! [`render_plot`]: validate inputs, take a read-only policy snapshot,
//! create a figure/axes pair styled per policy, delegate the actual mark
//! drawing, apply common styling, package a [`PlotResult`]. Primitives
//! never mutate the global configuration state.

pub mod line;
pub mod result;
pub mod scatter;

pub use line::{line, LineBuilder};
pub use result::{PlotMetadata, PlotResult};
pub use scatter::{scatter, ScatterBuilder};

use log::debug;

use crate::data::{series_range, validate_xy};
use crate::error::PlotError;
use crate::policy::colors::{color_cycle, CYCLE_LEN};
use crate::policy::snapshot::PolicySnapshot;
use crate::render::{Axes, Figure, MarkHandle};

/// Outcome of a primitive-specific draw step: the drawn mark and the color
/// it resolved to.
pub(crate) type DrawOutcome = (MarkHandle, String);

/// Labels and layout options common to every primitive.
#[derive(Debug, Clone, Default)]
pub(crate) struct PlotLabels {
    pub title: Option<String>,
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
    pub figsize: Option<(f64, f64)>,
}

/// Canonical plotting lifecycle.
pub(crate) fn render_plot(
    x: Vec<f64>,
    y: Vec<f64>,
    labels: PlotLabels,
    draw: impl FnOnce(&mut Axes, &[f64], &[f64], &PolicySnapshot, &[&'static str]) -> DrawOutcome,
) -> Result<PlotResult, PlotError> {
    validate_xy(&x, &y)?;

    // Read-only policy query; the primitive never writes back.
    let style = PolicySnapshot::capture();
    let cycle = color_cycle(CYCLE_LEN);

    let figsize = labels
        .figsize
        .unwrap_or_else(|| style.pair("figure.figsize", (8.0, 6.0)));
    let dpi = style.num("figure.dpi", 100.0);
    let mut figure = Figure::new(figsize, dpi, style.text("figure.facecolor", "#1e1e2e"));

    style_axes(figure.axes_mut(), &style);

    let (handle, color_used) = draw(figure.axes_mut(), &x, &y, &style, &cycle);

    apply_labels(figure.axes_mut(), &labels);

    let metadata = PlotMetadata {
        n_points: x.len(),
        x_range: series_range(&x),
        y_range: series_range(&y),
        color_used,
    };
    debug!(
        "plotted {} points in {} ({:.0}x{:.0}px)",
        metadata.n_points,
        metadata.color_used,
        figure.width(),
        figure.height()
    );

    Ok(PlotResult::new(figure, vec![handle], metadata))
}

/// Style an axes from the current policy snapshot.
fn style_axes(axes: &mut Axes, style: &PolicySnapshot) {
    axes.facecolor = style.text("axes.facecolor", "#1e1e2e").to_string();
    axes.spine_color = style.text("axes.edgecolor", "#6c7086").to_string();
    axes.spine_width = style.num("axes.linewidth", 1.2);
    axes.tick_color = style.text("xtick.color", "#cdd6f4").to_string();
    axes.tick_labelsize = style.num("xtick.labelsize", 10.0);
    axes.text_color = style.text("text.color", "#cdd6f4").to_string();
    axes.label_color = style.text("axes.labelcolor", "#cdd6f4").to_string();
    axes.font_size = style.num("font.size", 11.0);
    axes.font_family = style.text("font.family", "sans-serif").to_string();

    axes.grid.visible = style.flag("axes.grid", true);
    axes.grid.color = style.text("grid.color", "#45475a").to_string();
    axes.grid.linewidth = style.num("grid.linewidth", 0.8);
    axes.grid.alpha = style.num("grid.alpha", 0.3);
    axes.grid.linestyle = style.text("grid.linestyle", "-").to_string();
}

fn apply_labels(axes: &mut Axes, labels: &PlotLabels) {
    if let Some(ref title) = labels.title {
        axes.set_title(title.clone());
    }
    if let Some(ref xlabel) = labels.xlabel {
        axes.set_xlabel(xlabel.clone());
    }
    if let Some(ref ylabel) = labels.ylabel {
        axes.set_ylabel(ylabel.clone());
    }
}
