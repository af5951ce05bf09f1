// File: crates/trends-core/src/pipeline.rs
// Summary: One-shot load of the figure data: fetch -> (transpose) -> parse -> build series.
// Notes:
// - Any failure leaves the loader in `FigureState::Pending`; nothing partial is kept.
// - Failures are logged here so callers may ignore the returned error without losing it.

use tracing::{error, info};

use crate::error::LoadError;
use crate::series::{FigureData, Series, SeriesBuilder};
use crate::source::{DataSource, Fetcher};
use crate::table::Table;

/// Shape raw file text into series and their category order. Synchronous and pure.
pub fn shape(text: &str, transpose: bool, builder: &SeriesBuilder) -> Result<FigureData, LoadError> {
    let table = Table::read(text)?;
    let table = if transpose { table.transposed() } else { table };
    let records = table.into_records();
    Ok(builder.build_figure(&records)?)
}

/// Data held by the figure between load and teardown.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FigureState {
    /// No data yet (initial state, and the state after a failed load).
    #[default]
    Pending,
    Ready(FigureData),
}

impl FigureState {
    pub fn is_ready(&self) -> bool { matches!(self, FigureState::Ready(_)) }
}

pub struct Loader<F: Fetcher> {
    fetcher: F,
    source: DataSource,
    builder: SeriesBuilder,
    transpose: bool,
    state: FigureState,
}

impl<F: Fetcher> Loader<F> {
    pub fn new(fetcher: F, source: DataSource, builder: SeriesBuilder) -> Self {
        Self { fetcher, source, builder, transpose: true, state: FigureState::Pending }
    }

    /// Whether the fetched text is stored with series as columns (the default) and must be transposed.
    pub fn with_transpose(mut self, transpose: bool) -> Self {
        self.transpose = transpose;
        self
    }

    pub fn source(&self) -> &DataSource { &self.source }

    pub fn state(&self) -> &FigureState { &self.state }

    pub fn data(&self) -> Option<&FigureData> {
        match &self.state {
            FigureState::Ready(d) => Some(d),
            FigureState::Pending => None,
        }
    }

    pub fn series(&self) -> Option<&[Series]> { self.data().map(|d| d.series.as_slice()) }

    pub fn into_state(self) -> FigureState { self.state }

    /// Run the pipeline once. A second call after success returns `AlreadyLoaded`.
    pub fn load(&mut self) -> Result<&FigureData, LoadError> {
        if self.state.is_ready() {
            return Err(LoadError::AlreadyLoaded);
        }
        let location = self.source.location();
        match self.fetch_and_shape(&location) {
            Ok(data) => {
                info!(%location, series = data.series.len(), categories = data.categories.len(), "figure data loaded");
                self.state = FigureState::Ready(data);
                self.data().ok_or(LoadError::NoData { location })
            }
            Err(e) => {
                error!(%location, error = %e, "figure data load failed");
                Err(e)
            }
        }
    }

    fn fetch_and_shape(&self, location: &str) -> Result<FigureData, LoadError> {
        let text = self.fetcher.fetch_text(location)?;
        let data = shape(&text, self.transpose, &self.builder)?;
        if data.is_empty() {
            return Err(LoadError::NoData { location: location.to_string() });
        }
        Ok(data)
    }
}
