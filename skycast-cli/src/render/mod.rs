//! Terminal rendering of a [`NormalizedWeather`].
//!
//! Both variants only read the normalized record; they never talk to the
//! data source themselves.

use skycast_core::{AirQuality, NormalizedWeather, Variant, WeatherError, lookup::hex_to_rgb};

pub mod chart;
mod plain;
pub mod theme;
mod vista;

use theme::Theme;

#[derive(Debug, Clone, Copy)]
pub struct Style {
    /// Emit 24-bit ANSI colour escapes.
    pub color: bool,
}

impl Style {
    pub fn paint(&self, text: &str, hex: &str) -> String {
        match (self.color, hex_to_rgb(hex)) {
            (true, Some((r, g, b))) => format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.color { format!("\x1b[1m{text}\x1b[0m") } else { text.to_string() }
    }
}

pub fn theme_for(variant: Variant) -> &'static Theme {
    match variant {
        Variant::Plain => &theme::PLAIN,
        Variant::Vista => &theme::VISTA,
    }
}

/// Page heading, e.g. `🌤️ Weather App`.
pub fn title(variant: Variant, style: &Style) -> String {
    let theme = theme_for(variant);
    style.bold(&style.paint(&format!("{} {}", theme.page_icon, theme.page_title), theme.accent))
}

/// Full page: heading followed by the dashboard.
pub fn render(weather: &NormalizedWeather, variant: Variant, style: &Style) -> String {
    format!("{}\n\n{}", title(variant, style), render_body(weather, variant, style))
}

/// Dashboard cards without the page heading.
pub fn render_body(weather: &NormalizedWeather, variant: Variant, style: &Style) -> String {
    match variant {
        Variant::Plain => plain::render(weather, style),
        Variant::Vista => vista::render(weather, style),
    }
}

pub fn error_line(err: &WeatherError, style: &Style) -> String {
    style.paint(&format!("✖ {}", err.user_message()), theme::PLAIN.error)
}

/// Follow-up line for failures where resubmitting the same city may help.
pub fn retry_hint(err: &WeatherError) -> Option<&'static str> {
    err.is_retryable().then_some("Press Enter to try the same city again.")
}

pub(crate) fn card(title: &str, lines: &[String], theme: &Theme, style: &Style) -> String {
    let mut out = format!("╭─ {}\n", style.bold(&style.paint(title, theme.card_title)));
    for line in lines {
        out.push_str(&format!("│  {line}\n"));
    }
    out.push_str("╰─\n");
    out
}

pub(crate) fn temp(value: f64) -> String {
    format!("{value:.1}°C")
}

/// Location, glyph, current temperature and condition.
pub(crate) fn header_card(weather: &NormalizedWeather, theme: &Theme, style: &Style) -> String {
    let current = &weather.current;
    card(
        &weather.location.display_name(),
        &[
            format!("{}  {}", current.glyph(), style.bold(&temp(current.temp_c))),
            current.condition_text.clone(),
        ],
        theme,
        style,
    )
}

pub(crate) fn air_quality_card(aq: &AirQuality, theme: &Theme, style: &Style) -> String {
    let category = aq.category();
    card(
        "Air Quality",
        &[
            style.bold(&style.paint(category.label(), category.color())),
            format!("PM2.5  {:.1}    PM10  {:.1}", aq.pm2_5, aq.pm10),
        ],
        theme,
        style,
    )
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{NaiveDate, NaiveDateTime};
    use skycast_core::{
        AirQuality, CurrentConditions, DailySummary, HourlyPoint, Location, NormalizedWeather,
    };

    pub fn london() -> NormalizedWeather {
        let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let daily_forecast = (0..3u64)
            .map(|i| {
                let date = start + chrono::Days::new(i);
                DailySummary {
                    date,
                    weekday_name: date.format("%A").to_string(),
                    max_temp_c: 21.0 + i as f64,
                    min_temp_c: 11.0 + i as f64,
                    condition_text: "Patchy rain nearby".into(),
                    condition_icon_url: "https://cdn.weatherapi.com/weather/64x64/day/176.png"
                        .into(),
                    condition_code: 1063,
                    rain_chance_pct: 20,
                }
            })
            .collect();

        let origin: NaiveDateTime = start.and_hms_opt(0, 0, 0).unwrap();
        let hourly_series = (0..72i64)
            .map(|h| HourlyPoint {
                timestamp: origin + chrono::Duration::hours(h),
                temp_c: 12.0 + (h % 24) as f64 * 0.5,
            })
            .collect();

        NormalizedWeather {
            location: Location { name: "London".into(), country: "United Kingdom".into() },
            current: CurrentConditions {
                temp_c: 18.5,
                feels_like_c: 17.9,
                condition_text: "Partly cloudy".into(),
                condition_icon_url: "https://cdn.weatherapi.com/weather/64x64/day/116.png".into(),
                condition_code: 1003,
                wind_kph: 13.0,
                wind_dir: "WSW".into(),
                humidity_pct: 55,
                uv_index: 5.0,
                air_quality: Some(AirQuality { pm2_5: 14.84, pm10: 19.2, us_epa_index: 3 }),
            },
            daily_forecast,
            hourly_series,
        }
    }
}
