//! Style policy: the option value type and the default style mapping.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::colors::colors;

/// A single style option value.
///
/// Variant order matters for untagged deserialization: booleans and numbers
/// must be tried before free-form text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Boolean flag (e.g. `axes.grid`)
    Flag(bool),
    /// Numeric value (e.g. `lines.linewidth`)
    Num(f64),
    /// Pair of numbers (e.g. `figure.figsize`), serialized as a 2-array
    Pair(f64, f64),
    /// Text value (color hex codes, font family, linestyle)
    Text(String),
}

impl OptionValue {
    /// Numeric value, if this option holds one.
    pub fn as_num(&self) -> Option<f64> {
        match self {
            OptionValue::Num(v) => Some(*v),
            _ => None,
        }
    }

    /// Text value, if this option holds one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean value, if this option holds one.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            OptionValue::Flag(v) => Some(*v),
            _ => None,
        }
    }

    /// Number pair, if this option holds one.
    pub fn as_pair(&self) -> Option<(f64, f64)> {
        match self {
            OptionValue::Pair(a, b) => Some((*a, *b)),
            _ => None,
        }
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        OptionValue::Num(v)
    }
}

impl From<i32> for OptionValue {
    fn from(v: i32) -> Self {
        OptionValue::Num(v as f64)
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Flag(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::Text(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::Text(v)
    }
}

impl From<(f64, f64)> for OptionValue {
    fn from((a, b): (f64, f64)) -> Self {
        OptionValue::Pair(a, b)
    }
}

/// Ordered mapping of style option name → value.
pub type StyleMap = IndexMap<String, OptionValue>;

macro_rules! style_map {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut map = StyleMap::new();
        $(map.insert($key.to_string(), OptionValue::from($value));)*
        map
    }};
}

/// Get the default style options.
///
/// Composes the Mocha palette into the full set of named options governing
/// figures, axes, grid, ticks, text, lines, legend, and save output.
/// Pure: recomputed on every call, reads no global state.
pub fn default_style() -> StyleMap {
    let colors = colors();

    style_map! {
        // Figure
        "figure.facecolor" => colors["base"],
        "figure.edgecolor" => colors["base"],
        "figure.figsize" => (8.0, 6.0),
        "figure.dpi" => 100.0,
        // Axes
        "axes.facecolor" => colors["base"],
        "axes.edgecolor" => colors["overlay0"],
        "axes.labelcolor" => colors["text"],
        "axes.linewidth" => 1.2,
        "axes.grid" => true,
        "axes.axisbelow" => true,
        // Grid
        "grid.color" => colors["surface1"],
        "grid.linestyle" => "-",
        "grid.linewidth" => 0.8,
        "grid.alpha" => 0.3,
        // Ticks
        "xtick.color" => colors["text"],
        "ytick.color" => colors["text"],
        "xtick.labelsize" => 10.0,
        "ytick.labelsize" => 10.0,
        // Text
        "text.color" => colors["text"],
        "font.size" => 11.0,
        "font.family" => "sans-serif",
        // Lines
        "lines.linewidth" => 2.0,
        "lines.markersize" => 6.0,
        // Legend
        "legend.frameon" => true,
        "legend.facecolor" => colors["mantle"],
        "legend.edgecolor" => colors["overlay0"],
        "legend.fontsize" => 10.0,
        // Savefig
        "savefig.facecolor" => colors["base"],
        "savefig.edgecolor" => colors["base"],
        "savefig.dpi" => 150.0,
    }
}
