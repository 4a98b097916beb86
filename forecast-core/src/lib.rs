//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Location lookup through the ArcGIS geocoder (zip or place name to lat/long)
//! - Fetching and scraping forecast.weather.gov forecast pages
//! - The pipeline tying those stages together, and its error kinds
//! - Configuration file handling and settings resolution
//!
//! It is used by `nws-forecast-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod forecast;
pub mod geocode;
pub mod model;
pub mod pipeline;
pub mod provider;

pub use client::{ClientConfig, Endpoints, WeatherClient};
pub use config::{Config, MissingLocation, Overrides, Settings, resolve_settings};
pub use document::{DocumentQuery, ForecastPage};
pub use error::{LookupFailure, WeatherError};
pub use extract::extract_forecast;
pub use model::{Advisory, CanonicalLocation, Coordinate, ForecastPeriod, ForecastResult};
pub use provider::{NwsProvider, WeatherProvider};
