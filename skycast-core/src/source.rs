use std::{fmt::Debug, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::{
    error::WeatherError,
    raw::{RawForecastResponse, parse_forecast},
};

pub const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1";

/// Forecast horizon requested from the data source.
pub const FORECAST_DAYS: u8 = 3;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where forecasts come from.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    /// One request for `city`; no retries.
    async fn fetch(&self, city: &str) -> Result<RawForecastResponse, WeatherError>;
}

/// Connection settings for [`WeatherApiSource`].
#[derive(Debug, Clone)]
pub struct SourceSettings {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl SourceSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast.json", self.base_url.trim_end_matches('/'))
    }
}

/// WeatherAPI.com `forecast.json` client.
#[derive(Debug, Clone)]
pub struct WeatherApiSource {
    settings: SourceSettings,
    http: Client,
}

impl WeatherApiSource {
    pub fn new(settings: SourceSettings) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| WeatherError::Transient(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { settings, http })
    }
}

#[async_trait]
impl ForecastSource for WeatherApiSource {
    #[instrument(skip(self), fields(base_url = %self.settings.base_url))]
    async fn fetch(&self, city: &str) -> Result<RawForecastResponse, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::EmptyQuery);
        }

        let days = FORECAST_DAYS.to_string();
        let res = self
            .http
            .get(self.settings.forecast_url())
            .query(&[
                ("key", self.settings.api_key.as_str()),
                ("q", city),
                ("days", days.as_str()),
                ("aqi", "yes"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            warn!(%status, body = %truncate_body(&body), "forecast request rejected");
            return Err(WeatherError::NotFound { query: city.to_string(), status: status.as_u16() });
        }

        debug!(%status, bytes = body.len(), "forecast response received");
        parse_forecast(&body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_url_tolerates_trailing_slash() {
        let settings = SourceSettings::new("KEY").with_base_url("http://localhost:8080/v1/");
        assert_eq!(settings.forecast_url(), "http://localhost:8080/v1/forecast.json");
    }

    #[test]
    fn default_settings_use_ten_second_timeout() {
        let settings = SourceSettings::new("KEY");
        assert_eq!(settings.timeout, Duration::from_secs(10));
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn long_bodies_are_truncated_on_char_boundaries() {
        let body = "é".repeat(300);
        let out = truncate_body(&body);
        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), 203);

        assert_eq!(truncate_body("short"), "short");
    }

    #[tokio::test]
    async fn empty_city_is_rejected_without_request() {
        // Port 9 (discard) is never contacted because validation fails first.
        let settings = SourceSettings::new("KEY").with_base_url("http://127.0.0.1:9");
        let source = WeatherApiSource::new(settings).unwrap();

        let err = source.fetch("   ").await.unwrap_err();
        assert!(matches!(err, WeatherError::EmptyQuery));
    }
}
