// File: crates/trends-core/src/settings.rs
// Summary: Layered runtime settings: optional TOML file, then `TRENDS_*` environment overrides.
// Notes:
// - Nested keys use `__` in the environment, e.g. `TRENDS_SOURCE__BASE=https://storage.example.org/fig/`.
// - Every section has defaults, so an empty configuration is valid.

use std::path::Path;
use std::time::Duration;

use config::{ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::options::ChartConfig;
use crate::series::{LabelOffsets, SeriesBuilder};
use crate::source::DataSource;
use crate::types::{HEIGHT, WIDTH};

/// File looked up in the working directory when no explicit path is given.
pub const DEFAULT_FILE: &str = "trends.toml";
pub const ENV_PREFIX: &str = "TRENDS";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// Resolved base location for this deployment (URL or directory).
    pub base: String,
    pub file: String,
    /// The stored file has series as columns and needs transposing before parsing.
    pub transpose: bool,
    pub timeout_secs: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        let DataSource { base, file } = DataSource::default();
        Self { base, file, transpose: true, timeout_secs: 30 }
    }
}

impl SourceSettings {
    pub fn data_source(&self) -> DataSource {
        DataSource::new(self.base.clone(), self.file.clone())
    }

    pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs.max(1)) }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesSettings {
    pub label_offsets: LabelOffsets,
    pub line_width: f32,
}

impl Default for SeriesSettings {
    fn default() -> Self {
        let b = SeriesBuilder::default();
        Self { label_offsets: b.offsets, line_width: b.line_width }
    }
}

impl SeriesSettings {
    pub fn builder(&self) -> SeriesBuilder { SeriesBuilder::new(self.label_offsets, self.line_width) }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: i32,
    pub height: i32,
    pub theme: String,
    /// Delay between visibility and the single draw.
    pub settle_delay_ms: u64,
    pub output_dir: String,
    pub draw_labels: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: "light".to_string(),
            settle_delay_ms: 300,
            output_dir: "target/out".to_string(),
            draw_labels: true,
        }
    }
}

impl RenderSettings {
    pub fn settle_delay(&self) -> Duration { Duration::from_millis(self.settle_delay_ms) }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub source: SourceSettings,
    pub series: SeriesSettings,
    pub chart: ChartConfig,
    pub render: RenderSettings,
}

impl Settings {
    /// Load `path` (required when given) or `trends.toml` (optional), then apply the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::with_name(DEFAULT_FILE).required(false),
        };
        config::Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("_").separator("__"))
            .build()?
            .try_deserialize()
    }
}
