use skycast_core::NormalizedWeather;

use super::{Style, air_quality_card, card, header_card, temp, theme::PLAIN};

pub fn render(weather: &NormalizedWeather, style: &Style) -> String {
    let current = &weather.current;
    let mut out = header_card(weather, &PLAIN, style);

    out.push_str(&card(
        "Temperature",
        &[temp(current.temp_c), format!("Feels like: {}", temp(current.feels_like_c))],
        &PLAIN,
        style,
    ));
    out.push_str(&card(
        "Wind",
        &[format!("{:.1} km/h", current.wind_kph), format!("Direction: {}", current.wind_dir)],
        &PLAIN,
        style,
    ));
    out.push_str(&card(
        "Conditions",
        &[format!("{}%", current.humidity_pct), "Humidity".to_string()],
        &PLAIN,
        style,
    ));

    let heading = format!("{}-Day Forecast", weather.daily_forecast.len());
    out.push_str(&format!("\n{}\n", style.bold(&heading)));
    for day in &weather.daily_forecast {
        out.push_str(&card(
            &day.weekday_name,
            &[
                format!("{}  {}", day.glyph(), temp(day.max_temp_c)),
                day.condition_text.clone(),
                format!("Rain: {}%", day.rain_chance_pct),
            ],
            &PLAIN,
            style,
        ));
    }

    if let Some(aq) = &current.air_quality {
        out.push('\n');
        out.push_str(&air_quality_card(aq, &PLAIN, style));
    }

    out
}
