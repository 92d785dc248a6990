//! SVG document assembly.

/// Accumulates SVG fragments and renders the final document.
#[derive(Debug)]
pub struct SvgCanvas {
    /// Image width in pixels
    pub width: f64,
    /// Image height in pixels
    pub height: f64,
    /// SVG content accumulated during rendering
    content: Vec<String>,
    /// SVG defs section (clip paths)
    defs: Vec<String>,
}

impl SvgCanvas {
    /// Create a new canvas with the given pixel dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        SvgCanvas {
            width,
            height,
            content: Vec::new(),
            defs: Vec::new(),
        }
    }

    /// Add raw SVG content.
    pub fn add_content(&mut self, content: String) {
        self.content.push(content);
    }

    /// Add a definition (clip path etc.).
    pub fn add_def(&mut self, def: String) {
        self.defs.push(def);
    }

    /// Render the final SVG string.
    pub fn render(self) -> String {
        let defs_section = if self.defs.is_empty() {
            String::new()
        } else {
            format!("  <defs>\n    {}\n  </defs>\n", self.defs.join("\n    "))
        };

        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
{}{}
</svg>"#,
            self.width,
            self.height,
            self.width,
            self.height,
            defs_section,
            self.content.join("\n  ")
        )
    }
}

/// Escape characters with special meaning in XML text content.
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
