// File: crates/trends-core/src/lib.rs
// Summary: Core library entry point; data pipeline (fetch, table, series) and figure rendering.

pub mod error;
pub mod table;
pub mod series;
pub mod round;
pub mod format;
pub mod source;
pub mod pipeline;
pub mod gate;
pub mod options;
pub mod settings;
pub mod bundle;
pub mod chart;
pub mod axis;
pub mod grid;
pub mod types;
pub mod theme;
pub mod text;

pub use error::{FetchError, LoadError, SeriesError, TableError};
pub use table::{parse_records, transpose, Record, Table};
pub use series::{FigureData, LabelOffsets, Point, Series, SeriesBuilder};
pub use round::round_to;
pub use source::{DataSource, FileFetcher, Fetcher, HttpFetcher, SourceFetcher};
pub use pipeline::{shape, FigureState, Loader};
pub use gate::RenderGate;
pub use options::{ChartConfig, XAnnotation, YAxisRange};
pub use settings::Settings;
pub use bundle::ChartBundle;
pub use chart::{LineFigure, RenderOptions};
pub use theme::Theme;
