// File: crates/trends-core/src/theme.rs
// Summary: Figure colors (publication light style) and palette parsing.

use skia_safe as skia;
use tracing::warn;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub title: skia::Color,
    pub text: skia::Color,
    pub grid: skia::Color,
    pub zero_line: skia::Color,
    pub axis_line: skia::Color,
    pub annotation: skia::Color,
    pub label_outline: skia::Color,
    /// Used when a palette entry cannot be parsed.
    pub fallback_stroke: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            title: skia::Color::from_argb(255, 0, 0, 0),
            text: skia::Color::from_argb(204, 0, 0, 0),
            grid: skia::Color::from_argb(51, 124, 112, 103),
            zero_line: skia::Color::from_argb(153, 124, 112, 103),
            axis_line: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            annotation: skia::Color::from_argb(51, 124, 112, 103),
            label_outline: skia::Color::from_argb(255, 255, 255, 255),
            fallback_stroke: skia::Color::from_argb(255, 0x00, 0x9e, 0xdb),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            title: skia::Color::from_argb(255, 245, 245, 250),
            text: skia::Color::from_argb(255, 210, 210, 220),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            zero_line: skia::Color::from_argb(255, 110, 110, 120),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            annotation: skia::Color::from_argb(255, 70, 70, 78),
            label_outline: skia::Color::from_argb(255, 18, 18, 20),
            fallback_stroke: skia::Color::from_argb(255, 64, 160, 255),
        }
    }

    /// Palette entry `index` (wrapping), or the fallback stroke when it does not parse.
    pub fn series_color(&self, palette: &[String], index: usize) -> skia::Color {
        if palette.is_empty() {
            return self.fallback_stroke;
        }
        let hex = &palette[index % palette.len()];
        parse_hex_color(hex).unwrap_or_else(|| {
            warn!(color = %hex, "unparsable palette color; using fallback");
            self.fallback_stroke
        })
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

/// `#rrggbb` (or `rrggbb`) to an opaque color.
pub fn parse_hex_color(hex: &str) -> Option<skia::Color> {
    let h = hex.trim().trim_start_matches('#');
    if h.len() != 6 || !h.is_ascii() { return None; }
    let byte = |i: usize| u8::from_str_radix(&h[i..i + 2], 16).ok();
    Some(skia::Color::from_argb(255, byte(0)?, byte(2)?, byte(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors() {
        assert_eq!(parse_hex_color("#009edb"), Some(skia::Color::from_argb(255, 0x00, 0x9e, 0xdb)));
        assert_eq!(parse_hex_color("f58220"), Some(skia::Color::from_argb(255, 0xf5, 0x82, 0x20)));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn palette_wraps() {
        let t = Theme::light();
        let p = vec!["#000001".to_string(), "#000002".to_string()];
        assert_eq!(t.series_color(&p, 3), skia::Color::from_argb(255, 0, 0, 2));
        assert_eq!(t.series_color(&[], 0), t.fallback_stroke);
        assert_eq!(find("DARK").name, "dark");
    }
}
