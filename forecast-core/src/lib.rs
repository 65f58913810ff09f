//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WeatherAPI.com transport behind the [`ForecastSource`] abstraction
//! - Wire and domain models, and the mapping between them
//! - [`StateController`], the observable load/success/error state
//!
//! It is used by `forecast-cli`, but any front end can subscribe to the controller.

pub mod config;
pub mod controller;
pub mod error;
pub mod mapper;
pub mod model;
pub mod provider;

#[cfg(test)]
mod test_support;

pub use config::Config;
pub use controller::{FetchState, StateController};
pub use error::{ForecastError, MappingError, TransportError};
pub use mapper::ForecastMapper;
pub use model::{DailyPoint, HourlyPoint, RawForecastResponse, WeatherSnapshot};
pub use provider::{Coordinates, ForecastSource, WeatherApiClient};
