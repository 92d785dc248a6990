//! Color policy: the Catppuccin Mocha palette and derived color cycles.
//!
//! Everything here is a pure function over fixed tables. The palette order
//! and the cycle order are part of the public contract: `color_cycle(n)` is
//! always a prefix of `color_cycle(CYCLE_LEN)`.

use indexmap::IndexMap;

/// Number of colors available in the cycle.
pub const CYCLE_LEN: usize = 12;

/// (name, hex) table for the Catppuccin Mocha palette, accent colors first.
const PALETTE: [(&str, &str); 26] = [
    ("rosewater", "#f5e0dc"),
    ("flamingo", "#f2cdcd"),
    ("pink", "#f5c2e7"),
    ("mauve", "#cba6f7"),
    ("red", "#f38ba8"),
    ("maroon", "#eba0ac"),
    ("peach", "#fab387"),
    ("yellow", "#f9e2af"),
    ("green", "#a6e3a1"),
    ("teal", "#94e2d5"),
    ("sky", "#89dceb"),
    ("sapphire", "#74c7ec"),
    ("blue", "#89b4fa"),
    ("lavender", "#b4befe"),
    ("text", "#cdd6f4"),
    ("subtext1", "#bac2de"),
    ("subtext0", "#a6adc8"),
    ("overlay2", "#9399b2"),
    ("overlay1", "#7f849c"),
    ("overlay0", "#6c7086"),
    ("surface2", "#585b70"),
    ("surface1", "#45475a"),
    ("surface0", "#313244"),
    ("base", "#1e1e2e"),
    ("mantle", "#181825"),
    ("crust", "#11111b"),
];

/// Cycle order, hand-picked for visual distinctness across series.
const CYCLE: [&str; CYCLE_LEN] = [
    "mauve", "blue", "green", "peach", "pink", "teal", "yellow", "red", "sapphire", "lavender",
    "flamingo", "sky",
];

/// Get the Catppuccin Mocha color palette.
///
/// Returns a name→hex mapping in presentation order (accents before
/// text/surface tones).
pub fn colors() -> IndexMap<&'static str, &'static str> {
    PALETTE.iter().copied().collect()
}

/// Look up a single palette color by name.
pub fn palette_color(name: &str) -> Option<&'static str> {
    PALETTE
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, hex)| *hex)
}

/// Get the color cycle for multi-series plots.
///
/// Returns the first `n` hex codes of the fixed cycle, clamped to
/// [`CYCLE_LEN`]. Deterministic: the same `n` always yields the same
/// sequence.
pub fn color_cycle(n: usize) -> Vec<&'static str> {
    if n > CYCLE_LEN {
        log::warn!("color_cycle({}) clamped to {}", n, CYCLE_LEN);
    }
    let n = n.min(CYCLE_LEN);
    CYCLE[..n]
        .iter()
        .map(|name| palette_color(name).unwrap_or("#000000"))
        .collect()
}
