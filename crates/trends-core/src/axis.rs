// File: crates/trends-core/src/axis.rs
// Summary: Axis models: categorical x (quarters) and fixed-window linear y.

use crate::grid::ticks;
use crate::options::YAxisRange;

/// Category axis: one band per label, points sit at band centers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryAxis {
    pub categories: Vec<String>,
}

impl CategoryAxis {
    pub fn new(categories: Vec<String>) -> Self {
        Self { categories }
    }

    pub fn len(&self) -> usize { self.categories.len() }
    pub fn is_empty(&self) -> bool { self.categories.is_empty() }

    /// Add unseen `labels`, each placed right after the label that precedes it in
    /// `labels`, so a series' own order is kept around categories it skipped.
    pub fn merge(&mut self, labels: &[String]) {
        let mut at = 0usize;
        for label in labels {
            match self.categories.iter().position(|c| c == label) {
                Some(i) => at = i + 1,
                None => {
                    self.categories.insert(at, label.clone());
                    at += 1;
                }
            }
        }
    }

    /// Pixel x of category coordinate `v` inside `[left, right]`. `-0.5` maps to `left`.
    pub fn to_px(&self, v: f64, left: f32, right: f32) -> f32 {
        let n = self.len().max(1) as f64;
        left + (((v + 0.5) / n) as f32) * (right - left)
    }
}

/// Linear value axis with an explicit window.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueAxis {
    pub min: f64,
    pub max: f64,
    pub tick_interval: f64,
}

impl ValueAxis {
    pub fn new(min: f64, max: f64, tick_interval: f64) -> Self {
        Self { min, max, tick_interval }
    }

    pub fn ticks(&self) -> Vec<f64> {
        ticks(self.min, self.max, self.tick_interval)
    }

    /// Pixel y of `v` inside `[top, bottom]` (larger values are higher up).
    pub fn to_px(&self, v: f64, top: f32, bottom: f32) -> f32 {
        let span = (self.max - self.min).max(1e-9);
        bottom - (((v - self.min) / span) as f32) * (bottom - top)
    }
}

impl From<YAxisRange> for ValueAxis {
    fn from(r: YAxisRange) -> Self {
        Self::new(r.min, r.max, r.tick_interval)
    }
}
