//! Minimal SVG drawing backend.
//!
//! Consumed by the primitives through a narrow surface: create a
//! figure/axes pair sized per figsize and DPI, draw point/path marks,
//! style spines/ticks/labels, save to a path. The policy subsystem never
//! depends on anything in here.

pub mod axes;
pub mod figure;
pub mod scale;
pub mod svg;

pub use axes::{Axes, MarkHandle, MarkKind};
pub use figure::Figure;

/// Bounding box in data or pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Create a new bounds with the given values.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Get the width of the bounds.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Get the height of the bounds.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Expand bounds to include a point.
    pub fn include_point(&mut self, x: f64, y: f64) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }

    /// Add padding as a fraction of the range.
    pub fn pad(&self, fraction: f64) -> Bounds {
        let x_pad = self.width() * fraction;
        let y_pad = self.height() * fraction;
        Bounds {
            x_min: self.x_min - x_pad,
            x_max: self.x_max + x_pad,
            y_min: self.y_min - y_pad,
            y_max: self.y_max + y_pad,
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::new(0.0, 1.0, 0.0, 1.0)
    }
}

/// Transform a data point to pixel coordinates, flipping Y since SVG grows
/// downward.
pub(crate) fn transform_point(x: f64, y: f64, data: &Bounds, pixel: &Bounds) -> (f64, f64) {
    let x_norm = (x - data.x_min) / data.width();
    let y_norm = (y - data.y_min) / data.height();

    let px = pixel.x_min + x_norm * pixel.width();
    let py = pixel.y_max - y_norm * pixel.height();

    (px, py)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_point_expands() {
        let mut bounds = Bounds::new(0.0, 1.0, 0.0, 1.0);
        bounds.include_point(2.0, -1.0);
        assert_eq!(bounds, Bounds::new(0.0, 2.0, -1.0, 1.0));
    }

    #[test]
    fn test_transform_flips_y() {
        let data = Bounds::new(0.0, 10.0, 0.0, 10.0);
        let pixel = Bounds::new(0.0, 100.0, 0.0, 100.0);

        let (px, py) = transform_point(0.0, 0.0, &data, &pixel);
        assert_eq!((px, py), (0.0, 100.0));

        let (px, py) = transform_point(10.0, 10.0, &data, &pixel);
        assert_eq!((px, py), (100.0, 0.0));
    }
}
