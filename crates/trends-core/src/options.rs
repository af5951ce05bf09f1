// File: crates/trends-core/src/options.rs
// Summary: Presentation parameters handed to the renderer alongside the series.

use serde::{Deserialize, Serialize};

/// Fixed y axis window and tick spacing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct YAxisRange {
    pub min: f64,
    pub max: f64,
    pub tick_interval: f64,
}

impl Default for YAxisRange {
    fn default() -> Self {
        Self { min: -6.0, max: 8.0, tick_interval: 2.0 }
    }
}

/// Vertical marker on the category axis. `value` is in category units:
/// `0.0` is the first category, `-0.5` the left edge of the plot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct XAnnotation {
    pub value: f64,
    /// Text drawn under the axis labels (e.g. a year spanning several quarters).
    #[serde(default)]
    pub text: Option<String>,
    /// Draw a separator line at `value`.
    #[serde(default)]
    pub line: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct ChartConfig {
    pub title: String,
    pub subtitle: Option<String>,
    pub source: String,
    pub note: String,
    /// Appended to axis ticks, labels and tooltip values (e.g. `%`).
    pub suffix: String,
    pub show_first_label: bool,
    /// Chart-wide stroke width; series carry their own width which takes precedence.
    pub line_width: f32,
    /// Draw value labels on the first series.
    pub show_data_labels: bool,
    pub allow_decimals: bool,
    pub y_axis: YAxisRange,
    pub colors: Vec<String>,
    pub annotations: Vec<XAnnotation>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: None,
            source: String::new(),
            note: String::new(),
            suffix: String::new(),
            show_first_label: true,
            line_width: 5.0,
            show_data_labels: false,
            allow_decimals: true,
            y_axis: YAxisRange::default(),
            colors: vec!["#009edb".into(), "#f58220".into(), "#72bf44".into()],
            annotations: Vec::new(),
        }
    }
}

impl ChartConfig {
    /// The legend is only useful when there is more than one series.
    pub fn legend_enabled(&self, series_count: usize) -> bool {
        series_count > 1
    }

    /// Caption text under the plot: source line, then note line when present.
    pub fn caption_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.source.is_empty() {
            lines.push(format!("Source: {}", self.source));
        }
        if !self.note.is_empty() {
            lines.push(format!("Note: {}", self.note));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_figure() {
        let c = ChartConfig::default();
        assert_eq!(c.y_axis, YAxisRange { min: -6.0, max: 8.0, tick_interval: 2.0 });
        assert_eq!(c.colors.len(), 3);
        assert!(!c.legend_enabled(1));
        assert!(c.legend_enabled(3));
    }

    #[test]
    fn caption_skips_empty_parts() {
        let c = ChartConfig { source: "Stats office.".into(), ..ChartConfig::default() };
        assert_eq!(c.caption_lines(), vec!["Source: Stats office.".to_string()]);
    }
}
