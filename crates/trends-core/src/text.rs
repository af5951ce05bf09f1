// File: crates/trends-core/src/text.rs
// Summary: Paragraph text (titles, captions, legend) via Skia textlayout, wrapped to a width.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Font weight used for a run of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Bold,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, weight: Weight) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Roboto", "Segoe UI", "Arial", "Helvetica", "DejaVu Sans", "sans-serif"]);
        if weight == Weight::Bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, weight: Weight, max_width: f32) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color, weight));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(max_width.max(1.0));
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, weight: Weight) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), weight, 10_000.0);
        p.longest_line()
    }

    /// Draw with the top-left corner at (x, top); returns the height used.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_block(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        top: f32,
        size: f32,
        color: skia::Color,
        weight: Weight,
        max_width: f32,
    ) -> f32 {
        let p = self.layout(text, size, color, weight, max_width);
        p.paint(canvas, (x, top));
        p.height()
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
