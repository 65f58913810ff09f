use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::TransportError, model::RawForecastResponse};

pub mod weatherapi;

pub use weatherapi::WeatherApiClient;

/// Anything that can produce a raw 3-day forecast.
///
/// The state controller only depends on this trait, so tests can swap the
/// HTTP client for an in-process double.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn fetch_forecast(&self) -> Result<RawForecastResponse, TransportError>;
}

/// Latitude/longitude pair sent as the `q` query parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// `lat,lon` as WeatherAPI.com expects it.
    pub fn to_query(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_query())
    }
}
