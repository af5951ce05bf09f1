// File: crates/trends-core/src/bundle.rs
// Summary: Series + config bundle as handed to a renderer, with JSON export for browser chart libraries.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::options::ChartConfig;
use crate::series::{FigureData, Series};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartBundle {
    pub config: ChartConfig,
    /// Category order for the x axis (header order of the data file).
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartBundle {
    pub fn new(config: ChartConfig, data: FigureData) -> Self {
        let FigureData { categories, series } = data;
        Self { config, categories, series }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = self.to_json_pretty().context("serializing chart bundle")?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
