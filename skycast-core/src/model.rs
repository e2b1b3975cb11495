use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::lookup::{self, AirQualityCategory};

/// Display-ready record built from one forecast response.
///
/// Built fresh for every query and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedWeather {
    pub location: Location,
    pub current: CurrentConditions,
    /// One entry per forecast day, chronological.
    pub daily_forecast: Vec<DailySummary>,
    /// Hourly temperatures across all forecast days, non-decreasing in time.
    pub hourly_series: Vec<HourlyPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub name: String,
    pub country: String,
}

impl Location {
    /// `"London, United Kingdom"`
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub feels_like_c: f64,
    pub condition_text: String,
    pub condition_icon_url: String,
    pub condition_code: i64,
    pub wind_kph: f64,
    pub wind_dir: String,
    pub humidity_pct: i64,
    pub uv_index: f64,
    pub air_quality: Option<AirQuality>,
}

impl CurrentConditions {
    pub fn glyph(&self) -> &'static str {
        lookup::emoji_for(self.condition_code)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirQuality {
    pub pm2_5: f64,
    pub pm10: f64,
    /// Kept as reported; values outside 1..=6 render as "Unknown".
    pub us_epa_index: i64,
}

impl AirQuality {
    pub fn category(&self) -> AirQualityCategory {
        AirQualityCategory::from_epa_index(self.us_epa_index)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub weekday_name: String,
    pub max_temp_c: f64,
    pub min_temp_c: f64,
    pub condition_text: String,
    pub condition_icon_url: String,
    pub condition_code: i64,
    pub rain_chance_pct: i64,
}

impl DailySummary {
    pub fn glyph(&self) -> &'static str {
        lookup::emoji_for(self.condition_code)
    }
}

/// One chart sample, in the queried location's wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlyPoint {
    pub timestamp: NaiveDateTime,
    pub temp_c: f64,
}
