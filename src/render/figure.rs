//! Figure: the top-level canvas owning one axes.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::axes::Axes;
use super::svg::SvgCanvas;
use crate::error::PlotError;

/// A figure sized in inches at a given DPI, matplotlib-style.
#[derive(Debug, Clone)]
pub struct Figure {
    /// Width in pixels
    width: f64,
    /// Height in pixels
    height: f64,
    /// Background color
    facecolor: String,
    axes: Axes,
}

impl Figure {
    /// Create a figure from a (width, height) size in inches and a DPI.
    pub fn new(figsize: (f64, f64), dpi: f64, facecolor: impl Into<String>) -> Self {
        Figure {
            width: figsize.0 * dpi,
            height: figsize.1 * dpi,
            facecolor: facecolor.into(),
            axes: Axes::new(),
        }
    }

    /// Pixel width of the canvas.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Pixel height of the canvas.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The figure background color.
    pub fn facecolor(&self) -> &str {
        &self.facecolor
    }

    /// The figure's axes.
    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    /// Mutable access to the axes, for drawing and styling.
    pub fn axes_mut(&mut self) -> &mut Axes {
        &mut self.axes
    }

    /// Render the figure to an SVG document.
    pub fn render(&self) -> String {
        let mut canvas = SvgCanvas::new(self.width, self.height);
        canvas.add_content(format!(
            "<rect width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            self.width, self.height, self.facecolor
        ));
        canvas.add_content(self.axes.render_svg(self.width, self.height));
        canvas.render()
    }

    /// Save the figure as SVG to the given path.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PlotError> {
        let svg = self.render();
        let mut file = File::create(path)?;
        file.write_all(svg.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figsize_times_dpi() {
        let fig = Figure::new((8.0, 6.0), 100.0, "#1e1e2e");
        assert_eq!(fig.width(), 800.0);
        assert_eq!(fig.height(), 600.0);
    }

    #[test]
    fn test_render_paints_background() {
        let mut fig = Figure::new((4.0, 3.0), 100.0, "#1e1e2e");
        fig.axes_mut()
            .draw_points(vec![1.0, 2.0], vec![1.0, 2.0], "#cba6f7", 6.0, 1.0);

        let svg = fig.render();
        assert!(svg.contains("fill=\"#1e1e2e\""));
        assert!(svg.contains("<circle"));
    }

    #[test]
    fn test_save_writes_svg() {
        let mut fig = Figure::new((2.0, 2.0), 50.0, "#1e1e2e");
        fig.axes_mut()
            .draw_points(vec![0.0, 1.0], vec![0.0, 1.0], "#cba6f7", 4.0, 1.0);

        let path = std::env::temp_dir().join("catplot_figure_test.svg");
        fig.save(&path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("<?xml"));

        std::fs::remove_file(&path).ok();
    }
}
