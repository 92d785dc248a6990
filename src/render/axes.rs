//! Axes: a single plot area with marks, grid, spines, ticks, and labels.

use super::scale::{format_tick, nice_ticks};
use super::svg::escape_xml;
use super::{transform_point, Bounds};

/// What kind of mark a handle points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkKind {
    /// Individual points (scatter)
    Points,
    /// A connected path (line)
    Path,
}

/// Handle to a mark drawn on an axes, in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkHandle {
    index: usize,
    kind: MarkKind,
    color: String,
}

impl MarkHandle {
    /// Position of the mark in draw order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The kind of mark drawn.
    pub fn kind(&self) -> MarkKind {
        self.kind
    }

    /// The resolved color the mark was drawn with.
    pub fn color(&self) -> &str {
        &self.color
    }
}

#[derive(Debug, Clone)]
enum Mark {
    Points {
        x: Vec<f64>,
        y: Vec<f64>,
        color: String,
        diameter: f64,
        alpha: f64,
    },
    Path {
        x: Vec<f64>,
        y: Vec<f64>,
        color: String,
        width: f64,
        alpha: f64,
    },
}

/// Grid display settings.
#[derive(Debug, Clone)]
pub struct GridConfig {
    pub visible: bool,
    pub color: String,
    pub linewidth: f64,
    pub alpha: f64,
    pub linestyle: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            visible: true,
            color: "#45475a".to_string(),
            linewidth: 0.8,
            alpha: 0.3,
            linestyle: "-".to_string(),
        }
    }
}

/// A single plot area inside a figure.
#[derive(Debug, Clone)]
pub struct Axes {
    /// Position within the figure, as fractions of figure size
    pub position: Bounds,
    /// Plot-area background color
    pub facecolor: String,
    /// Grid settings
    pub grid: GridConfig,
    /// Spine (border) color
    pub spine_color: String,
    /// Spine line width
    pub spine_width: f64,
    /// Tick mark and tick label color
    pub tick_color: String,
    /// Tick label font size
    pub tick_labelsize: f64,
    /// Color for title text
    pub text_color: String,
    /// Color for axis labels
    pub label_color: String,
    /// Base font size; title renders at base + 2
    pub font_size: f64,
    /// Font family for all text
    pub font_family: String,
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    marks: Vec<Mark>,
    data_bounds: Option<Bounds>,
}

impl Axes {
    /// Create a new axes with plain defaults. Callers normally restyle it
    /// from the current policy before drawing.
    pub fn new() -> Self {
        Axes {
            position: Bounds::new(0.12, 0.95, 0.1, 0.9),
            facecolor: "#1e1e2e".to_string(),
            grid: GridConfig::default(),
            spine_color: "#6c7086".to_string(),
            spine_width: 1.2,
            tick_color: "#cdd6f4".to_string(),
            tick_labelsize: 10.0,
            text_color: "#cdd6f4".to_string(),
            label_color: "#cdd6f4".to_string(),
            font_size: 11.0,
            font_family: "sans-serif".to_string(),
            title: None,
            x_label: None,
            y_label: None,
            marks: Vec::new(),
            data_bounds: None,
        }
    }

    /// Draw individual points. `diameter` is in pixels.
    pub fn draw_points(
        &mut self,
        x: Vec<f64>,
        y: Vec<f64>,
        color: impl Into<String>,
        diameter: f64,
        alpha: f64,
    ) -> MarkHandle {
        let color = color.into();
        self.include_data(&x, &y);
        self.marks.push(Mark::Points {
            x,
            y,
            color: color.clone(),
            diameter,
            alpha: alpha.clamp(0.0, 1.0),
        });
        MarkHandle {
            index: self.marks.len() - 1,
            kind: MarkKind::Points,
            color,
        }
    }

    /// Draw a connected path through the points, in input order.
    pub fn draw_path(
        &mut self,
        x: Vec<f64>,
        y: Vec<f64>,
        color: impl Into<String>,
        width: f64,
        alpha: f64,
    ) -> MarkHandle {
        let color = color.into();
        self.include_data(&x, &y);
        self.marks.push(Mark::Path {
            x,
            y,
            color: color.clone(),
            width,
            alpha: alpha.clamp(0.0, 1.0),
        });
        MarkHandle {
            index: self.marks.len() - 1,
            kind: MarkKind::Path,
            color,
        }
    }

    /// Set the axes title.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Set the x-axis label.
    pub fn set_xlabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.x_label = Some(label.into());
        self
    }

    /// Set the y-axis label.
    pub fn set_ylabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.y_label = Some(label.into());
        self
    }

    /// Number of marks drawn so far.
    pub fn mark_count(&self) -> usize {
        self.marks.len()
    }

    fn include_data(&mut self, x: &[f64], y: &[f64]) {
        let bounds = self.data_bounds.get_or_insert(Bounds::new(
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
        ));
        for (&xv, &yv) in x.iter().zip(y.iter()) {
            if xv.is_finite() && yv.is_finite() {
                bounds.include_point(xv, yv);
            }
        }
    }

    fn effective_data_bounds(&self) -> Bounds {
        let mut bounds = self.data_bounds.unwrap_or_default();
        // Degenerate ranges get a half-unit of breathing room
        if bounds.width() == 0.0 {
            bounds.x_min -= 0.5;
            bounds.x_max += 0.5;
        }
        if bounds.height() == 0.0 {
            bounds.y_min -= 0.5;
            bounds.y_max += 0.5;
        }
        bounds.pad(0.05)
    }

    /// Render the axes to an SVG fragment within a figure of the given
    /// pixel dimensions.
    pub fn render_svg(&self, figure_width: f64, figure_height: f64) -> String {
        let mut svg = String::new();

        let pixel = Bounds::new(
            self.position.x_min * figure_width,
            self.position.x_max * figure_width,
            (1.0 - self.position.y_max) * figure_height,
            (1.0 - self.position.y_min) * figure_height,
        );
        let data = self.effective_data_bounds();

        // Plot-area background
        svg.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>\n",
            pixel.x_min,
            pixel.y_min,
            pixel.width(),
            pixel.height(),
            self.facecolor
        ));

        let x_ticks = nice_ticks(data.x_min, data.x_max, 6);
        let y_ticks = nice_ticks(data.y_min, data.y_max, 6);

        if self.grid.visible {
            svg.push_str(&self.render_grid(&data, &pixel, &x_ticks, &y_ticks));
        }

        // Marks, clipped to the plot area
        let clip_id = format!("plot-clip-{:.0}-{:.0}", pixel.x_min, pixel.y_min);
        svg.push_str(&format!(
            "<defs><clipPath id=\"{}\"><rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"/></clipPath></defs>\n",
            clip_id, pixel.x_min, pixel.y_min, pixel.width(), pixel.height()
        ));
        svg.push_str(&format!("<g clip-path=\"url(#{})\">\n", clip_id));
        for mark in &self.marks {
            svg.push_str(&self.render_mark(mark, &data, &pixel));
        }
        svg.push_str("</g>\n");

        svg.push_str(&self.render_spines(&pixel));
        svg.push_str(&self.render_ticks(&data, &pixel, &x_ticks, &y_ticks));
        svg.push_str(&self.render_text(&pixel));

        svg
    }

    fn render_mark(&self, mark: &Mark, data: &Bounds, pixel: &Bounds) -> String {
        match mark {
            Mark::Points {
                x,
                y,
                color,
                diameter,
                alpha,
            } => {
                let radius = diameter / 2.0;
                let mut svg = format!(
                    "<g fill=\"{}\" fill-opacity=\"{}\">\n",
                    color, alpha
                );
                for (&xv, &yv) in x.iter().zip(y.iter()) {
                    if !xv.is_finite() || !yv.is_finite() {
                        continue;
                    }
                    let (px, py) = transform_point(xv, yv, data, pixel);
                    svg.push_str(&format!(
                        "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\"/>\n",
                        px, py, radius
                    ));
                }
                svg.push_str("</g>\n");
                svg
            }
            Mark::Path {
                x,
                y,
                color,
                width,
                alpha,
            } => {
                let points: Vec<String> = x
                    .iter()
                    .zip(y.iter())
                    .filter(|(xv, yv)| xv.is_finite() && yv.is_finite())
                    .map(|(&xv, &yv)| {
                        let (px, py) = transform_point(xv, yv, data, pixel);
                        format!("{:.2},{:.2}", px, py)
                    })
                    .collect();
                format!(
                    "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-opacity=\"{}\"/>\n",
                    points.join(" "),
                    color,
                    width,
                    alpha
                )
            }
        }
    }

    fn render_grid(
        &self,
        data: &Bounds,
        pixel: &Bounds,
        x_ticks: &[f64],
        y_ticks: &[f64],
    ) -> String {
        let dash = if self.grid.linestyle == "--" {
            " stroke-dasharray=\"4 3\""
        } else {
            ""
        };
        let mut svg = String::new();

        for &tick in x_ticks {
            let (px, _) = transform_point(tick, data.y_min, data, pixel);
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\" stroke-opacity=\"{}\"{}/>\n",
                px, pixel.y_min, px, pixel.y_max,
                self.grid.color, self.grid.linewidth, self.grid.alpha, dash
            ));
        }
        for &tick in y_ticks {
            let (_, py) = transform_point(data.x_min, tick, data, pixel);
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\" stroke-opacity=\"{}\"{}/>\n",
                pixel.x_min, py, pixel.x_max, py,
                self.grid.color, self.grid.linewidth, self.grid.alpha, dash
            ));
        }

        svg
    }

    fn render_spines(&self, pixel: &Bounds) -> String {
        format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            pixel.x_min,
            pixel.y_min,
            pixel.width(),
            pixel.height(),
            self.spine_color,
            self.spine_width
        )
    }

    fn render_ticks(
        &self,
        data: &Bounds,
        pixel: &Bounds,
        x_ticks: &[f64],
        y_ticks: &[f64],
    ) -> String {
        let mut svg = String::new();
        let tick_len = 5.0;

        for &tick in x_ticks {
            let (px, _) = transform_point(tick, data.y_min, data, pixel);
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
                px, pixel.y_max, px, pixel.y_max + tick_len, self.tick_color
            ));
            svg.push_str(&format!(
                "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" fill=\"{}\" font-size=\"{}\" font-family=\"{}\">{}</text>\n",
                px,
                pixel.y_max + tick_len + self.tick_labelsize + 2.0,
                self.tick_color,
                self.tick_labelsize,
                self.font_family,
                format_tick(tick)
            ));
        }
        for &tick in y_ticks {
            let (_, py) = transform_point(data.x_min, tick, data, pixel);
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
                pixel.x_min - tick_len, py, pixel.x_min, py, self.tick_color
            ));
            svg.push_str(&format!(
                "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\" fill=\"{}\" font-size=\"{}\" font-family=\"{}\">{}</text>\n",
                pixel.x_min - tick_len - 3.0,
                py + self.tick_labelsize / 3.0,
                self.tick_color,
                self.tick_labelsize,
                self.font_family,
                format_tick(tick)
            ));
        }

        svg
    }

    fn render_text(&self, pixel: &Bounds) -> String {
        let mut svg = String::new();
        let center_x = (pixel.x_min + pixel.x_max) / 2.0;

        if let Some(ref title) = self.title {
            svg.push_str(&format!(
                "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" fill=\"{}\" font-size=\"{}\" font-family=\"{}\" font-weight=\"bold\">{}</text>\n",
                center_x,
                pixel.y_min - 12.0,
                self.text_color,
                self.font_size + 2.0,
                self.font_family,
                escape_xml(title)
            ));
        }
        if let Some(ref label) = self.x_label {
            svg.push_str(&format!(
                "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" fill=\"{}\" font-size=\"{}\" font-family=\"{}\">{}</text>\n",
                center_x,
                pixel.y_max + 40.0,
                self.label_color,
                self.font_size,
                self.font_family,
                escape_xml(label)
            ));
        }
        if let Some(ref label) = self.y_label {
            let x = pixel.x_min - 45.0;
            let y = (pixel.y_min + pixel.y_max) / 2.0;
            svg.push_str(&format!(
                "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" fill=\"{}\" font-size=\"{}\" font-family=\"{}\" transform=\"rotate(-90,{:.2},{:.2})\">{}</text>\n",
                x, y, self.label_color, self.font_size, self.font_family, x, y,
                escape_xml(label)
            ));
        }

        svg
    }
}

impl Default for Axes {
    fn default() -> Self {
        Axes::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_handles_ordered() {
        let mut axes = Axes::new();
        let a = axes.draw_points(vec![1.0], vec![2.0], "#cba6f7", 6.0, 1.0);
        let b = axes.draw_path(vec![1.0, 2.0], vec![2.0, 3.0], "#89b4fa", 2.0, 1.0);

        assert_eq!(a.index(), 0);
        assert_eq!(a.kind(), MarkKind::Points);
        assert_eq!(b.index(), 1);
        assert_eq!(b.kind(), MarkKind::Path);
        assert_eq!(axes.mark_count(), 2);
    }

    #[test]
    fn test_render_contains_marks_and_chrome() {
        let mut axes = Axes::new();
        axes.draw_points(vec![1.0, 2.0], vec![3.0, 4.0], "#cba6f7", 6.0, 0.7);
        axes.set_title("T").set_xlabel("X").set_ylabel("Y");

        let svg = axes.render_svg(800.0, 600.0);
        assert!(svg.contains("<circle"));
        assert!(svg.contains("#cba6f7"));
        assert!(svg.contains(">T</text>"));
        assert!(svg.contains(">X</text>"));
        assert!(svg.contains(">Y</text>"));
        assert!(svg.contains("clip-path"));
    }

    #[test]
    fn test_path_mark_renders_polyline() {
        let mut axes = Axes::new();
        axes.draw_path(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0], "#89b4fa", 2.0, 1.0);

        let svg = axes.render_svg(800.0, 600.0);
        assert!(svg.contains("<polyline"));
        assert!(svg.contains("stroke=\"#89b4fa\""));
    }

    #[test]
    fn test_title_is_escaped() {
        let mut axes = Axes::new();
        axes.draw_points(vec![1.0], vec![1.0], "#cba6f7", 6.0, 1.0);
        axes.set_title("a<b");

        let svg = axes.render_svg(800.0, 600.0);
        assert!(svg.contains("a&lt;b"));
    }

    #[test]
    fn test_degenerate_range_still_renders() {
        let mut axes = Axes::new();
        axes.draw_points(vec![5.0, 5.0], vec![5.0, 5.0], "#cba6f7", 6.0, 1.0);
        let svg = axes.render_svg(800.0, 600.0);
        assert!(svg.contains("<circle"));
    }
}
