use reqwest::StatusCode;
use thiserror::Error;

/// Failure while talking to the forecast service.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to reach the forecast service: {0}")]
    Request(#[source] reqwest::Error),

    #[error("forecast request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to parse forecast JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Failure while turning a wire response into a [`WeatherSnapshot`](crate::WeatherSnapshot).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("forecast response contained no forecast days")]
    NoForecastDays,

    #[error("forecast response contained an out-of-range timestamp: {0}")]
    InvalidTimestamp(i64),
}

/// Anything that can go wrong between `refresh()` and a published snapshot.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Mapping(#[from] MappingError),
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
