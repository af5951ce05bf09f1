// File: crates/trends-core/src/chart.rs
// Summary: Line figure and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::{CategoryAxis, ValueAxis};
use crate::bundle::ChartBundle;
use crate::format::{axis_tick, category_label, data_label};
use crate::options::ChartConfig;
use crate::series::Series;
use crate::text::{TextShaper, Weight};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text is skipped when false (keeps pixel output independent of installed fonts).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

pub struct LineFigure {
    pub series: Vec<Series>,
    pub config: ChartConfig,
    pub x_axis: CategoryAxis,
    pub y_axis: ValueAxis,
}

impl LineFigure {
    pub fn new(config: ChartConfig) -> Self {
        let y_axis = ValueAxis::from(config.y_axis);
        Self { series: Vec::new(), config, x_axis: CategoryAxis::default(), y_axis }
    }

    pub fn from_bundle(bundle: ChartBundle) -> Self {
        let mut fig = Self::new(bundle.config);
        fig.x_axis = CategoryAxis::new(bundle.categories);
        fig.series = bundle.series;
        fig
    }

    /// Use `categories` as the x axis order (typically the header order from `FigureData`).
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.x_axis = CategoryAxis::new(categories);
        self
    }

    /// Append a series; unseen labels are merged into the category axis in series order.
    pub fn add_series(&mut self, series: Series) {
        self.x_axis.merge(&series.labels);
        self.series.push(series);
    }

    /// Render the figure to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = Plot {
            l: opts.insets.left as f32,
            t: opts.insets.top as f32,
            r: (opts.width - opts.insets.right as i32) as f32,
            b: (opts.height - opts.insets.bottom as i32) as f32,
        };
        let shaper = opts.draw_labels.then(TextShaper::new);

        if let Some(sh) = &shaper {
            self.draw_header(canvas, sh, opts);
        }
        self.draw_y_grid(canvas, &plot, theme, opts.draw_labels);
        self.draw_x_axis(canvas, &plot, theme, opts.draw_labels);

        canvas.save();
        canvas.clip_rect(skia::Rect::from_ltrb(plot.l, plot.t, plot.r, plot.b), skia::ClipOp::Intersect, true);
        for (i, s) in self.series.iter().enumerate() {
            let color = theme.series_color(&self.config.colors, i);
            self.draw_line_series(canvas, &plot, s, color);
        }
        canvas.restore();

        if self.config.show_data_labels && opts.draw_labels {
            if let Some(first) = self.series.first() {
                let color = theme.series_color(&self.config.colors, 0);
                self.draw_data_labels(canvas, &plot, first, color, theme);
            }
        }
        if let Some(sh) = &shaper {
            self.draw_caption(canvas, sh, &plot, opts);
        }
    }

    fn draw_header(&self, canvas: &skia::Canvas, sh: &TextShaper, opts: &RenderOptions) {
        let theme = &opts.theme;
        let left = opts.insets.left as f32;
        let max_w = (opts.width as f32 - left - opts.insets.right as f32).max(1.0);
        let mut y = 20.0;
        y += sh.draw_block(canvas, &self.config.title, left, y, 30.0, theme.title, Weight::Bold, max_w);
        if let Some(sub) = self.config.subtitle.as_deref().filter(|s| !s.is_empty()) {
            y += 8.0;
            y += sh.draw_block(canvas, sub, left, y, 16.0, theme.text, Weight::Regular, max_w);
        }

        if self.config.legend_enabled(self.series.len()) {
            self.draw_legend(canvas, sh, opts, y + 16.0);
        }
    }

    /// Horizontal legend, right-aligned under the titles.
    fn draw_legend(&self, canvas: &skia::Canvas, sh: &TextShaper, opts: &RenderOptions, top: f32) {
        const SWATCH: f32 = 18.0;
        const GAP: f32 = 20.0;
        let items = self
            .series
            .iter()
            .enumerate()
            .map(|(i, s)| (s, sh.measure_width(&s.name, 14.0, Weight::Regular), opts.theme.series_color(&self.config.colors, i)))
            .collect::<Vec<_>>();
        let total: f32 = items.iter().map(|(_, w, _)| SWATCH + 6.0 + w).sum::<f32>() + GAP * (items.len().saturating_sub(1)) as f32;
        let mut x = (opts.width as f32 - opts.insets.right as f32 - total).max(opts.insets.left as f32);

        let mut swatch = skia::Paint::default();
        swatch.set_anti_alias(true);
        swatch.set_style(skia::paint::Style::Stroke);
        swatch.set_stroke_width(4.0);
        for (s, w, color) in items {
            swatch.set_color(color);
            canvas.draw_line((x, top + 9.0), (x + SWATCH, top + 9.0), &swatch);
            sh.draw_block(canvas, &s.name, x + SWATCH + 6.0, top, 14.0, opts.theme.title, Weight::Regular, w + 4.0);
            x += SWATCH + 6.0 + w + GAP;
        }
    }

    fn draw_y_grid(&self, canvas: &skia::Canvas, plot: &Plot, theme: &Theme, labels: bool) {
        let mut grid = skia::Paint::default();
        grid.set_color(theme.grid);
        grid.set_anti_alias(true);
        grid.set_stroke_width(1.0);
        grid.set_path_effect(skia::PathEffect::dash(&[2.0, 4.0], 0.0));

        let mut zero = skia::Paint::default();
        zero.set_color(theme.zero_line);
        zero.set_anti_alias(true);
        zero.set_stroke_width(1.0);

        let mut paint_text = skia::Paint::default();
        paint_text.set_color(theme.title);
        paint_text.set_anti_alias(true);
        let mut font = skia::Font::default();
        font.set_size(16.0);

        for (i, v) in self.y_axis.ticks().into_iter().enumerate() {
            let y = self.y_axis.to_px(v, plot.t, plot.b);
            let paint = if v == 0.0 { &zero } else { &grid };
            canvas.draw_line((plot.l, y), (plot.r, y), paint);

            if labels && (i > 0 || self.config.show_first_label) {
                let text = axis_tick(v, &self.config.suffix, self.config.allow_decimals);
                let (w, _) = font.measure_str(&text, Some(&paint_text));
                canvas.draw_str(&text, (plot.l - w - 10.0, y + 5.0), &font, &paint_text);
            }
        }
    }

    fn draw_x_axis(&self, canvas: &skia::Canvas, plot: &Plot, theme: &Theme, labels: bool) {
        let mut axis_paint = skia::Paint::default();
        axis_paint.set_color(theme.axis_line);
        axis_paint.set_anti_alias(true);
        axis_paint.set_stroke_width(1.0);
        canvas.draw_line((plot.l, plot.b), (plot.r, plot.b), &axis_paint);

        let mut paint_text = skia::Paint::default();
        paint_text.set_color(theme.text);
        paint_text.set_anti_alias(true);
        let mut font = skia::Font::default();
        font.set_size(14.0);

        for (i, cat) in self.x_axis.categories.iter().enumerate() {
            let x = self.x_axis.to_px(i as f64, plot.l, plot.r);
            canvas.draw_line((x, plot.b), (x, plot.b + 5.0), &axis_paint);
            if labels {
                let text = category_label(cat);
                let (w, _) = font.measure_str(text, Some(&paint_text));
                canvas.draw_str(text, (x - w * 0.5, plot.b + 25.0), &font, &paint_text);
            }
        }

        let mut marker = skia::Paint::default();
        marker.set_color(theme.annotation);
        marker.set_anti_alias(true);
        marker.set_stroke_width(1.0);
        let mut bold = skia::Font::default();
        bold.set_size(14.0);
        bold.set_embolden(true);
        for a in &self.config.annotations {
            let x = self.x_axis.to_px(a.value, plot.l, plot.r);
            if a.line {
                canvas.draw_line((x, plot.t), (x, plot.b), &marker);
            }
            if let (Some(text), true) = (&a.text, labels) {
                canvas.draw_str(text, (x, plot.b + 45.0), &bold, &paint_text);
            }
        }
    }

    fn draw_line_series(&self, canvas: &skia::Canvas, plot: &Plot, series: &Series, color: skia::Color) {
        let pts = series
            .indexed_values(&self.x_axis.categories)
            .into_iter()
            .map(|(i, v)| (self.x_axis.to_px(i as f64, plot.l, plot.r), self.y_axis.to_px(v, plot.t, plot.b)))
            .collect::<Vec<_>>();
        let Some(&first) = pts.first() else { return };

        let width = if series.line_width > 0.0 { series.line_width } else { self.config.line_width };
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_color(color);

        if pts.len() == 1 {
            stroke.set_style(skia::paint::Style::Fill);
            canvas.draw_circle(first, width.max(2.0), &stroke);
            return;
        }

        let mut path = skia::Path::new();
        path.move_to(first);
        for &p in pts.iter().skip(1) {
            path.line_to(p);
        }
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(width);
        stroke.set_stroke_join(skia::paint::Join::Round);
        stroke.set_stroke_cap(skia::paint::Cap::Round);
        canvas.draw_path(&path, &stroke);
    }

    fn draw_data_labels(&self, canvas: &skia::Canvas, plot: &Plot, series: &Series, color: skia::Color, theme: &Theme) {
        let mut font = skia::Font::default();
        font.set_size(18.0);
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(color);
        let mut outline = skia::Paint::default();
        outline.set_anti_alias(true);
        outline.set_style(skia::paint::Style::Stroke);
        outline.set_stroke_width(2.0);
        outline.set_color(theme.label_outline);

        for p in &series.data {
            let Some(i) = self.x_axis.categories.iter().position(|c| *c == p.name) else { continue };
            let x = self.x_axis.to_px(i as f64, plot.l, plot.r);
            let y = self.y_axis.to_px(p.y, plot.t, plot.b) + p.data_label_offset as f32;
            let text = data_label(p.y, &self.config.suffix);
            let (w, _) = font.measure_str(&text, Some(&fill));
            let origin = (x - w * 0.5, y);
            canvas.draw_str(&text, origin, &font, &outline);
            canvas.draw_str(&text, origin, &font, &fill);
        }
    }

    fn draw_caption(&self, canvas: &skia::Canvas, sh: &TextShaper, plot: &Plot, opts: &RenderOptions) {
        let max_w = (plot.r - plot.l).max(1.0);
        let mut y = plot.b + 70.0;
        for line in self.config.caption_lines() {
            y += sh.draw_block(canvas, &line, plot.l, y, 14.0, opts.theme.text, Weight::Regular, max_w) + 4.0;
        }
    }
}

/// Plot rectangle in pixels.
struct Plot {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
}
