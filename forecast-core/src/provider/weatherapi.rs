use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::{
    config::Config,
    error::{TransportError, truncate_body},
    model::RawForecastResponse,
};

use super::{Coordinates, ForecastSource};

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com";
pub const DEFAULT_DAYS: u8 = 3;

/// HTTP client for `GET /v1/forecast.json` on WeatherAPI.com.
///
/// Every call is a fresh round trip; nothing is cached and failed requests are
/// not retried.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    api_key: String,
    base_url: String,
    coordinates: Coordinates,
    days: u8,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(api_key: String, coordinates: Coordinates) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            coordinates,
            days: DEFAULT_DAYS,
            http: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key()?.to_owned();

        Ok(Self::new(api_key, config.coordinates())
            .with_base_url(config.base_url.clone())
            .with_days(config.days))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_http(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn with_days(mut self, days: u8) -> Self {
        self.days = days;
        self
    }

    pub fn url(&self) -> String {
        forecast_url(&self.base_url)
    }

    fn query(&self) -> [(&'static str, String); 3] {
        [
            ("key", self.api_key.clone()),
            ("q", self.coordinates.to_query()),
            ("days", self.days.to_string()),
        ]
    }
}

#[async_trait]
impl ForecastSource for WeatherApiClient {
    async fn fetch_forecast(&self) -> Result<RawForecastResponse, TransportError> {
        let url = self.url();
        debug!(%url, q = %self.coordinates, days = self.days, "requesting forecast");

        let res = self
            .http
            .get(&url)
            .query(&self.query())
            .send()
            .await
            .map_err(request_error)?;

        let status = res.status();
        let body = res.text().await.map_err(request_error)?;

        debug!(%status, bytes = body.len(), "forecast response received");
        parse_response(status, &body)
    }
}

/// reqwest puts the full URL, query string and API key included, in its
/// `Display`; the message ends up on screen and in logs.
fn request_error(err: reqwest::Error) -> TransportError {
    TransportError::Request(err.without_url())
}

/// `<base>/v1/forecast.json`, tolerating a trailing slash on the base.
pub fn forecast_url(base_url: &str) -> String {
    format!("{}/v1/forecast.json", base_url.trim_end_matches('/'))
}

/// Interpret a completed HTTP exchange.
pub fn parse_response(status: StatusCode, body: &str) -> Result<RawForecastResponse, TransportError> {
    if !status.is_success() {
        return Err(TransportError::Status { status, body: truncate_body(body) });
    }

    serde_json::from_str(body).map_err(TransportError::Decode)
}
