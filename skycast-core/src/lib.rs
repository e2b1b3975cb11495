//! Core library for the `skycast` weather dashboards.
//!
//! This crate defines:
//! - Condition glyph and air quality lookups
//! - The WeatherAPI.com forecast client behind the `ForecastSource` trait
//! - Normalization of the raw forecast into a display-ready record
//! - Configuration & credentials handling
//!
//! It is UI independent: `skycast-cli` renders both dashboard variants on top of it.

pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod normalize;
pub mod raw;
pub mod service;
pub mod source;

pub use config::{Config, Variant};
pub use error::WeatherError;
pub use lookup::{AirQualityCategory, aqi_label_and_color, emoji_for};
pub use model::{AirQuality, CurrentConditions, DailySummary, HourlyPoint, Location, NormalizedWeather};
pub use normalize::{normalize, normalize_json};
pub use raw::{RawForecastResponse, parse_forecast};
pub use service::query_weather;
pub use source::{ForecastSource, SourceSettings, WeatherApiSource};
