use skycast_core::NormalizedWeather;

use super::{
    Style, air_quality_card, card,
    chart::{day_markers, sparkline, temp_range},
    header_card, temp,
    theme::VISTA,
};

/// Plain layout plus UV, daily min/max, the hourly chart and air quality.
pub fn render(weather: &NormalizedWeather, style: &Style) -> String {
    let current = &weather.current;
    let mut out = header_card(weather, &VISTA, style);

    out.push_str(&card(
        "Now",
        &[
            format!("Feels like  {}", temp(current.feels_like_c)),
            format!("Wind        {:.1} km/h {}", current.wind_kph, current.wind_dir),
            format!("Humidity    {}%", current.humidity_pct),
            format!("UV index    {:.1}", current.uv_index),
        ],
        &VISTA,
        style,
    ));

    let strip: Vec<String> = weather
        .daily_forecast
        .iter()
        .map(|day| {
            format!(
                "{:<10} {}  {} / {}  {}  ☔ {}%",
                day.weekday_name,
                day.glyph(),
                temp(day.max_temp_c),
                temp(day.min_temp_c),
                day.condition_text,
                day.rain_chance_pct
            )
        })
        .collect();
    let heading = format!("{}-Day Forecast", weather.daily_forecast.len());
    out.push_str(&card(&heading, &strip, &VISTA, style));

    if let Some((lo, hi)) = temp_range(&weather.hourly_series) {
        let line = style.paint(&sparkline(&weather.hourly_series), VISTA.chart_line);
        out.push_str(&card(
            "Hourly Temperature",
            &[
                line,
                day_markers(&weather.hourly_series),
                format!("min {}  max {}", temp(lo), temp(hi)),
            ],
            &VISTA,
            style,
        ));
    }

    if let Some(aq) = &current.air_quality {
        out.push_str(&air_quality_card(aq, &VISTA, style));
    }

    out
}
