// File: crates/trends-core/src/series.rs
// Summary: Series model (name, category labels, points) and the record -> series builder.
// Notes:
// - `labels` is rebuilt from the surviving points, so `labels[i] == data[i].name` always holds.
// - Data label placement depends only on whether a record is the first one (see `LabelOffsets`).

use serde::{Deserialize, Serialize};

use crate::error::SeriesError;
use crate::table::Record;

/// Field holding the series name in every record.
pub const NAME_FIELD: &str = "Name";

/// One plotted value with its category label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub name: String,
    pub y: f64,
    /// Vertical offset of the value label, in pixels (negative = above the line).
    pub data_label_offset: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub name: String,
    pub labels: Vec<String>,
    pub data: Vec<Point>,
    pub line_width: f32,
}

impl Series {
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// (category index, value) pairs for plotting against `categories`.
    /// Points whose label is not among `categories` are skipped.
    pub fn indexed_values(&self, categories: &[String]) -> Vec<(usize, f64)> {
        self.data
            .iter()
            .filter_map(|p| categories.iter().position(|c| *c == p.name).map(|i| (i, p.y)))
            .collect()
    }
}

/// Built series plus the x axis category order taken from the record header.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FigureData {
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

impl FigureData {
    pub fn is_empty(&self) -> bool { self.series.is_empty() }
}

/// Header field names except `Name`, in column order. Every record shares the header,
/// so the first one decides.
pub fn categories(records: &[Record]) -> Vec<String> {
    records
        .first()
        .map(|r| r.field_names().filter(|k| *k != NAME_FIELD).map(str::to_string).collect())
        .unwrap_or_default()
}

/// Two-entry lookup for data label offsets, keyed by "is this the first record".
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOffsets {
    pub first: f64,
    pub rest: f64,
}

impl LabelOffsets {
    pub const fn new(first: f64, rest: f64) -> Self { Self { first, rest } }

    pub const fn for_record(&self, is_first: bool) -> f64 {
        if is_first { self.first } else { self.rest }
    }
}

impl Default for LabelOffsets {
    fn default() -> Self { Self::new(-10.0, 30.0) }
}

/// Turns parsed records into chart series. Pure: same records in, same series out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesBuilder {
    pub offsets: LabelOffsets,
    pub line_width: f32,
}

impl Default for SeriesBuilder {
    fn default() -> Self {
        Self { offsets: LabelOffsets::default(), line_width: 4.0 }
    }
}

impl SeriesBuilder {
    pub fn new(offsets: LabelOffsets, line_width: f32) -> Self {
        Self { offsets, line_width }
    }

    pub fn build(&self, records: &[Record]) -> Result<Vec<Series>, SeriesError> {
        records
            .iter()
            .enumerate()
            .map(|(i, r)| self.build_one(i, r))
            .collect()
    }

    /// Series together with the full category order, including categories where
    /// some series dropped a value.
    pub fn build_figure(&self, records: &[Record]) -> Result<FigureData, SeriesError> {
        Ok(FigureData { categories: categories(records), series: self.build(records)? })
    }

    fn build_one(&self, index: usize, record: &Record) -> Result<Series, SeriesError> {
        let name = record
            .get(NAME_FIELD)
            .ok_or(SeriesError::MissingName { record: index })?;
        let offset = self.offsets.for_record(index == 0);

        let data = record
            .iter()
            .filter(|(k, _)| *k != NAME_FIELD)
            .filter_map(|(label, raw)| {
                parse_lenient(raw).map(|y| Point {
                    name: label.to_string(),
                    y,
                    data_label_offset: offset,
                })
            })
            .collect::<Vec<_>>();
        let labels = data.iter().map(|p| p.name.clone()).collect();

        Ok(Series { name: name.to_string(), labels, data, line_width: self.line_width })
    }
}

/// Parse the longest numeric prefix of `raw` after leading whitespace:
/// `[+-]digits[.digits][(e|E)[+-]digits]`. Returns None when no digits are found
/// or the result is not finite.
pub fn parse_lenient(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let b = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() { i += 1; }
        i
    };

    let mut end = 0usize;
    if end < b.len() && (b[end] == b'+' || b[end] == b'-') { end += 1; }
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if end < b.len() && b[end] == b'.' {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 { return None; }

    // exponent only counts when at least one digit follows
    if end < b.len() && (b[end] == b'e' || b[end] == b'E') {
        let mut k = end + 1;
        if k < b.len() && (b[k] == b'+' || b[k] == b'-') { k += 1; }
        let exp_end = digits_from(k);
        if exp_end > k { end = exp_end; }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
