/// Forecast ingestion from external hydrological services.
///
/// Each data source gets its own file under ingest/ — today that is only
/// the Open-Meteo flood API, but GloFAS or PMD sources would slot in
/// alongside it rather than bloating one file.

pub mod open_meteo;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::model::{FetchError, Location, RawForecast};

/// The fetch boundary between the aggregation engine and a forecast source.
///
/// One call per location per refresh cycle. Implementations must return one
/// of the two outcomes — transport errors, bad statuses, and malformed
/// payloads are all converted into `FetchError`, never raised past this
/// boundary. No internal retry: a failed location is retried naturally on
/// the next refresh cycle.
pub trait ForecastFetcher: Send + Sync {
    fn fetch(&self, location: &Location) -> Result<RawForecast, FetchError>;
}
