//! Raw forecast response → [`NormalizedWeather`].
//!
//! Normalization either produces a complete record or an error; a partly
//! filled record is never returned.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};
use tracing::debug;

use crate::{
    error::WeatherError,
    model::{AirQuality, CurrentConditions, DailySummary, HourlyPoint, Location, NormalizedWeather},
    raw::{RawCondition, RawCurrent, RawForecastDay, RawForecastResponse, RawLocation},
};

/// Real-world UTC offsets are multiples of 15 minutes.
const OFFSET_GRANULARITY_SECS: i64 = 15 * 60;

/// Build the display record from a parsed response.
pub fn normalize(raw: &RawForecastResponse) -> Result<NormalizedWeather, WeatherError> {
    let days = &raw.forecast.forecastday;
    if days.is_empty() {
        return Err(WeatherError::Malformed("forecast.forecastday is empty".to_string()));
    }

    let offset = location_offset(&raw.location);

    let daily_forecast = days.iter().map(daily_summary).collect::<Result<Vec<_>, _>>()?;
    let hourly_series = hourly_series(days, offset)?;

    debug!(
        location = %raw.location.name,
        days = daily_forecast.len(),
        hours = hourly_series.len(),
        utc_offset = %offset,
        "normalized forecast"
    );

    Ok(NormalizedWeather {
        location: Location {
            name: raw.location.name.clone(),
            country: raw.location.country.clone(),
        },
        current: current_conditions(&raw.current),
        daily_forecast,
        hourly_series,
    })
}

/// Normalize an untyped JSON value; missing sections are `Malformed`.
pub fn normalize_json(value: serde_json::Value) -> Result<NormalizedWeather, WeatherError> {
    let raw: RawForecastResponse = serde_json::from_value(value)?;
    normalize(&raw)
}

fn current_conditions(current: &RawCurrent) -> CurrentConditions {
    CurrentConditions {
        temp_c: current.temp_c,
        feels_like_c: current.feelslike_c,
        condition_text: current.condition.text.clone(),
        condition_icon_url: icon_url(&current.condition),
        condition_code: current.condition.code,
        wind_kph: current.wind_kph,
        wind_dir: current.wind_dir.clone(),
        humidity_pct: current.humidity,
        uv_index: current.uv,
        air_quality: current.air_quality.as_ref().map(|aq| AirQuality {
            pm2_5: aq.pm2_5,
            pm10: aq.pm10,
            us_epa_index: aq.us_epa_index,
        }),
    }
}

fn daily_summary(day: &RawForecastDay) -> Result<DailySummary, WeatherError> {
    let date = NaiveDate::parse_from_str(&day.date, "%Y-%m-%d").map_err(|e| {
        WeatherError::Malformed(format!("invalid forecast date '{}': {e}", day.date))
    })?;

    Ok(DailySummary {
        date,
        weekday_name: date.format("%A").to_string(),
        max_temp_c: day.day.maxtemp_c,
        min_temp_c: day.day.mintemp_c,
        condition_text: day.day.condition.text.clone(),
        condition_icon_url: icon_url(&day.day.condition),
        condition_code: day.day.condition.code,
        rain_chance_pct: day.day.daily_chance_of_rain,
    })
}

fn hourly_series(
    days: &[RawForecastDay],
    offset: FixedOffset,
) -> Result<Vec<HourlyPoint>, WeatherError> {
    let capacity = days.iter().map(|d| d.hour.len()).sum();
    let mut series: Vec<HourlyPoint> = Vec::with_capacity(capacity);

    for hour in days.iter().flat_map(|d| d.hour.iter()) {
        let timestamp = local_timestamp(hour.time_epoch, offset).ok_or_else(|| {
            WeatherError::Malformed(format!("hour epoch {} out of range", hour.time_epoch))
        })?;

        if let Some(prev) = series.last() {
            if timestamp < prev.timestamp {
                return Err(WeatherError::Malformed(format!(
                    "hourly samples out of order: {} after {}",
                    timestamp, prev.timestamp
                )));
            }
        }

        series.push(HourlyPoint { timestamp, temp_c: hour.temp_c });
    }

    Ok(series)
}

/// UTC offset of the queried location, derived from its reported wall clock.
///
/// Falls back to UTC when the location carries no local time.
fn location_offset(location: &RawLocation) -> FixedOffset {
    let utc = Utc.fix();

    let (Some(localtime), Some(epoch)) = (&location.localtime, location.localtime_epoch) else {
        return utc;
    };

    let Ok(local) = NaiveDateTime::parse_from_str(localtime, "%Y-%m-%d %H:%M") else {
        debug!(localtime = %localtime, "unparseable location localtime, using UTC");
        return utc;
    };
    let Some(at_epoch) = DateTime::from_timestamp(epoch, 0) else {
        return utc;
    };

    let diff = (local - at_epoch.naive_utc()).num_seconds();
    let rounded = (diff + OFFSET_GRANULARITY_SECS / 2).div_euclid(OFFSET_GRANULARITY_SECS)
        * OFFSET_GRANULARITY_SECS;

    i32::try_from(rounded).ok().and_then(FixedOffset::east_opt).unwrap_or(utc)
}

fn local_timestamp(epoch: i64, offset: FixedOffset) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(epoch, 0).map(|dt| dt.with_timezone(&offset).naive_local())
}

/// The API hands out protocol-relative icon URLs (`//cdn.weatherapi.com/...`).
fn icon_url(condition: &RawCondition) -> String {
    if condition.icon.starts_with("//") {
        format!("https:{}", condition.icon)
    } else {
        condition.icon.clone()
    }
}
