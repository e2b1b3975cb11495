//! Hourly temperature chart: a terminal sparkline and an SVG export.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use plotters::{coord::Shift, coord::types::RangedDateTime, prelude::*};
use skycast_core::{HourlyPoint, lookup::hex_to_rgb};

use super::theme::Theme;

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

const SVG_WIDTH: u32 = 800;
const SVG_HEIGHT: u32 = 300;

/// Lowest and highest temperature in the series.
pub fn temp_range(series: &[HourlyPoint]) -> Option<(f64, f64)> {
    series.iter().map(|p| p.temp_c).fold(None, |acc, t| match acc {
        None => Some((t, t)),
        Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
    })
}

/// One bar per sample, scaled between the series minimum and maximum.
pub fn sparkline(series: &[HourlyPoint]) -> String {
    let Some((lo, hi)) = temp_range(series) else {
        return String::new();
    };
    let span = hi - lo;
    let top = (BARS.len() - 1) as f64;

    series
        .iter()
        .map(|p| {
            let level = if span <= f64::EPSILON { 0.0 } else { (p.temp_c - lo) / span * top };
            BARS[(level.round() as usize).min(BARS.len() - 1)]
        })
        .collect()
}

/// Short weekday names placed under the first sample of each day.
pub fn day_markers(series: &[HourlyPoint]) -> String {
    let mut line = vec![' '; series.len()];

    for (i, _) in day_starts(series) {
        let label = series[i].timestamp.format("%a").to_string();
        for (offset, ch) in label.chars().enumerate() {
            if let Some(slot) = line.get_mut(i + offset) {
                *slot = ch;
            }
        }
    }

    line.into_iter().collect::<String>().trim_end().to_string()
}

/// Index and date of every sample that starts a new calendar day.
fn day_starts(series: &[HourlyPoint]) -> Vec<(usize, NaiveDate)> {
    let mut starts = Vec::new();
    let mut current: Option<NaiveDate> = None;

    for (i, point) in series.iter().enumerate() {
        let date = point.timestamp.date();
        if current != Some(date) {
            starts.push((i, date));
            current = Some(date);
        }
    }

    starts
}

/// Standalone SVG line chart of the series, one labelled marker per day.
pub fn hourly_svg(series: &[HourlyPoint], title: &str, theme: &Theme) -> anyhow::Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (SVG_WIDTH, SVG_HEIGHT)).into_drawing_area();
        draw_hourly(&root, series, title, theme)?;
        root.present()?;
    }
    Ok(svg)
}

fn draw_hourly<DB>(
    root: &DrawingArea<DB, Shift>,
    series: &[HourlyPoint],
    title: &str,
    theme: &Theme,
) -> anyhow::Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&rgb(theme.chart_background, WHITE))?;

    let (Some(first), Some(last), Some((lo, hi))) =
        (series.first(), series.last(), temp_range(series))
    else {
        root.titled(title, ("sans-serif", 20).into_font())?;
        return Ok(());
    };

    // A single sample still needs a non-empty time axis.
    let (start, end) = if first.timestamp < last.timestamp {
        (first.timestamp, last.timestamp)
    } else {
        (first.timestamp - Duration::hours(1), last.timestamp + Duration::hours(1))
    };
    let pad = if hi - lo > 1e-6 { (hi - lo) * 0.1 } else { 1.0 };
    let (y_start, y_end) = (lo - pad, hi + pad);

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(RangedDateTime::from(start..end), y_start..y_end)?;

    chart
        .configure_mesh()
        .x_labels(6)
        .x_label_formatter(&|dt: &NaiveDateTime| dt.format("%H:%M").to_string())
        .y_label_formatter(&|t: &f64| format!("{t:.0}°C"))
        .light_line_style(BLACK.mix(0.15))
        .draw()?;

    let days = day_starts(series);
    chart.draw_series(days.iter().map(|&(i, _)| {
        let at = series[i].timestamp;
        PathElement::new(vec![(at, y_start), (at, y_end)], BLACK.mix(0.3))
    }))?;
    chart.draw_series(days.iter().map(|&(i, date)| {
        Text::new(
            date.format("%a %d").to_string(),
            (series[i].timestamp, y_end),
            ("sans-serif", 12).into_font(),
        )
    }))?;

    chart.draw_series(LineSeries::new(
        series.iter().map(|p| (p.timestamp, p.temp_c)),
        rgb(theme.chart_line, BLUE).stroke_width(2),
    ))?;

    Ok(())
}

fn rgb(hex: &str, fallback: RGBColor) -> RGBColor {
    hex_to_rgb(hex).map(|(r, g, b)| RGBColor(r, g, b)).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{fixtures, theme};

    #[test]
    fn sparkline_has_one_bar_per_hour() {
        let weather = fixtures::london();
        let line = sparkline(&weather.hourly_series);

        assert_eq!(line.chars().count(), 72);
        assert_eq!(line.chars().next(), Some('▁'));
        assert_eq!(line.chars().nth(23), Some('█'));
    }

    #[test]
    fn flat_series_renders_lowest_bar() {
        let mut series = fixtures::london().hourly_series;
        series.iter_mut().for_each(|p| p.temp_c = 15.0);

        assert!(sparkline(&series).chars().all(|c| c == '▁'));
        assert_eq!(sparkline(&[]), "");
    }

    #[test]
    fn markers_label_each_day() {
        let weather = fixtures::london();
        let markers = day_markers(&weather.hourly_series);

        assert!(markers.starts_with("Sat"));
        assert_eq!(markers.find("Sun"), Some(24));
        assert_eq!(markers.find("Mon"), Some(48));
    }

    #[test]
    fn range_spans_series() {
        let weather = fixtures::london();
        assert_eq!(temp_range(&weather.hourly_series), Some((12.0, 23.5)));
        assert_eq!(temp_range(&[]), None);
    }

    #[test]
    fn svg_draws_line_and_day_labels() {
        let weather = fixtures::london();
        let svg = hourly_svg(&weather.hourly_series, "Hourly temperature, London", &theme::VISTA)
            .unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Hourly temperature, London"));
        assert!(svg.contains("<polyline"));
        assert!(svg.contains("Sat 01"));
        assert!(svg.contains("Sun 02"));
        assert!(svg.contains("Mon 03"));
        assert!(svg.contains("°C"));
        // VISTA chart line
        assert!(svg.to_uppercase().contains("#2575FC"));
    }

    #[test]
    fn single_sample_still_charts() {
        let series = &fixtures::london().hourly_series[..1];
        let svg = hourly_svg(series, "One hour", &theme::PLAIN).unwrap();

        assert!(svg.contains("One hour"));
        assert!(svg.contains("Sat 01"));
    }

    #[test]
    fn empty_series_still_yields_document() {
        let svg = hourly_svg(&[], "Nothing", &theme::PLAIN).unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("Nothing"));
        assert!(!svg.contains("<polyline"));
    }
}
