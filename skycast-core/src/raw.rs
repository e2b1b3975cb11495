//! Wire model of the WeatherAPI.com `forecast.json` response.
//!
//! Only the fields the dashboards read are declared; everything else in the
//! body is ignored. `current`, `location` and `forecast.forecastday` are
//! required, so a body missing any of them fails to parse.

use serde::Deserialize;

use crate::error::WeatherError;

#[derive(Debug, Clone, Deserialize)]
pub struct RawForecastResponse {
    pub location: RawLocation,
    pub current: RawCurrent,
    pub forecast: RawForecast,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLocation {
    pub name: String,
    pub country: String,
    /// Location wall clock, `YYYY-MM-DD HH:MM`.
    pub localtime: Option<String>,
    pub localtime_epoch: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCondition {
    pub text: String,
    pub icon: String,
    pub code: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAirQuality {
    pub pm2_5: f64,
    pub pm10: f64,
    #[serde(rename = "us-epa-index")]
    pub us_epa_index: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCurrent {
    pub temp_c: f64,
    pub feelslike_c: f64,
    pub condition: RawCondition,
    pub wind_kph: f64,
    pub wind_dir: String,
    pub humidity: i64,
    pub uv: f64,
    pub air_quality: Option<RawAirQuality>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawForecast {
    pub forecastday: Vec<RawForecastDay>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawForecastDay {
    /// `YYYY-MM-DD`
    pub date: String,
    pub day: RawDaySummary,
    pub hour: Vec<RawHour>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDaySummary {
    pub maxtemp_c: f64,
    pub mintemp_c: f64,
    pub condition: RawCondition,
    pub daily_chance_of_rain: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawHour {
    pub time_epoch: i64,
    pub temp_c: f64,
}

/// Parse a response body into the wire model.
pub fn parse_forecast(body: &str) -> Result<RawForecastResponse, WeatherError> {
    serde_json::from_str(body).map_err(|e| WeatherError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_forecast_section_is_malformed() {
        let body = r#"{
            "location": {"name": "London", "country": "United Kingdom"},
            "current": {
                "temp_c": 18.5, "feelslike_c": 17.0,
                "condition": {"text": "Partly cloudy", "icon": "//cdn/116.png", "code": 1003},
                "wind_kph": 11.2, "wind_dir": "SW", "humidity": 60, "uv": 4.0
            }
        }"#;

        let err = parse_forecast(body).unwrap_err();
        match err {
            WeatherError::Malformed(msg) => assert!(msg.contains("forecast"), "{msg}"),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn air_quality_is_optional_and_epa_key_is_hyphenated() {
        let with_aqi = r#"{
            "temp_c": 1.0, "feelslike_c": 1.0,
            "condition": {"text": "Sunny", "icon": "//x.png", "code": 1000},
            "wind_kph": 1.0, "wind_dir": "N", "humidity": 10, "uv": 1.0,
            "air_quality": {"co": 200.1, "pm2_5": 12.34, "pm10": 20.0, "us-epa-index": 2, "gb-defra-index": 1}
        }"#;
        let current: RawCurrent = serde_json::from_str(with_aqi).unwrap();
        let aq = current.air_quality.unwrap();
        assert_eq!(aq.us_epa_index, 2);
        assert!((aq.pm2_5 - 12.34).abs() < f64::EPSILON);

        let without_aqi = r#"{
            "temp_c": 1.0, "feelslike_c": 1.0,
            "condition": {"text": "Sunny", "icon": "//x.png", "code": 1000},
            "wind_kph": 1.0, "wind_dir": "N", "humidity": 10, "uv": 1.0
        }"#;
        let current: RawCurrent = serde_json::from_str(without_aqi).unwrap();
        assert!(current.air_quality.is_none());
    }

    #[test]
    fn not_json_is_malformed() {
        assert!(matches!(parse_forecast("<html>"), Err(WeatherError::Malformed(_))));
    }
}
