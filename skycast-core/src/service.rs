use tracing::{error, info, warn};

use crate::{
    error::WeatherError, model::NormalizedWeather, normalize::normalize, source::ForecastSource,
};

/// Fetch and normalize the forecast for one city submission.
///
/// Exactly one request is made. When the source reports `NotFound` the
/// normalizer is not run.
pub async fn query_weather(
    source: &dyn ForecastSource,
    city: &str,
) -> Result<NormalizedWeather, WeatherError> {
    let city = city.trim();
    if city.is_empty() {
        return Err(WeatherError::EmptyQuery);
    }

    let result = match source.fetch(city).await {
        Ok(raw) => normalize(&raw),
        Err(e) => Err(e),
    };

    match &result {
        Ok(weather) => info!(
            city,
            location = %weather.location.display_name(),
            days = weather.daily_forecast.len(),
            "forecast ready"
        ),
        Err(e @ WeatherError::NotFound { .. }) => warn!(city, error = %e, "city not found"),
        Err(WeatherError::EmptyQuery) => {}
        Err(e) => error!(city, error = %e, "forecast query failed"),
    }

    result
}
