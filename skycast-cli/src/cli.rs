use std::{
    io::Write,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use inquire::{InquireError, Password, Select, Text};
use skycast_core::{
    Config, NormalizedWeather, Variant, WeatherApiSource, WeatherError, query_weather,
};
use tracing::debug;

use crate::render::{self, Style, chart};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather dashboards for the terminal")]
pub struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable ANSI colours.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum VariantArg {
    Plain,
    Vista,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Plain => Variant::Plain,
            VariantArg::Vista => Variant::Vista,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI key and dashboard defaults.
    Configure,

    /// Show the dashboard for a city once.
    Show {
        /// City name; defaults to the configured city (London).
        city: Option<String>,

        /// Dashboard layout; defaults to the configured one.
        #[arg(long, value_enum)]
        variant: Option<VariantArg>,

        /// Print the normalized record as JSON instead of the dashboard.
        #[arg(long)]
        json: bool,

        /// Write the hourly temperature chart as SVG (vista only).
        #[arg(long, value_name = "FILE")]
        chart: Option<PathBuf>,
    },

    /// Prompt for cities until an empty answer or Esc / Ctrl-C.
    Interactive {
        #[arg(long, value_enum)]
        variant: Option<VariantArg>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let style = Style { color: !self.no_color && std::env::var_os("NO_COLOR").is_none() };

        match self.command {
            Command::Configure => {
                configure()?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Show { city, variant, json, chart } => {
                let config = Config::load()?;
                let variant = variant.map(Variant::from).unwrap_or_else(|| config.variant());
                if chart.is_some() && variant != Variant::Vista {
                    bail!("--chart is only available with --variant vista");
                }

                let source = build_source(&config)?;
                let city = city.unwrap_or_else(|| config.default_city().to_string());

                let weather = match query_weather(&source, &city).await {
                    Ok(weather) => weather,
                    Err(e) => {
                        report(&e, &style);
                        return Ok(ExitCode::FAILURE);
                    }
                };

                if json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&weather)
                            .context("Failed to serialize forecast")?
                    );
                } else {
                    print!("{}", render::render(&weather, variant, &style));
                }

                if let Some(path) = chart {
                    // stdout may be carrying --json output.
                    write_chart(&weather, &path, &mut std::io::stderr())?;
                }

                Ok(ExitCode::SUCCESS)
            }
            Command::Interactive { variant } => {
                let config = Config::load()?;
                let variant = variant.map(Variant::from).unwrap_or_else(|| config.variant());
                let source = build_source(&config)?;

                interactive(&source, config.default_city(), variant, &style).await?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn build_source(config: &Config) -> anyhow::Result<WeatherApiSource> {
    let settings = config.source_settings()?;
    debug!(base_url = %settings.base_url, timeout = ?settings.timeout, "using WeatherAPI source");
    WeatherApiSource::new(settings).context("Failed to initialise the weather source")
}

/// Each submission is a single attempt; failures are shown and the prompt returns.
/// The prompt is pre-filled with the last city; clearing it and pressing Enter quits.
async fn interactive(
    source: &WeatherApiSource,
    default_city: &str,
    variant: Variant,
    style: &Style,
) -> anyhow::Result<()> {
    println!("{}", render::title(variant, style));
    let mut last_city = default_city.to_string();

    loop {
        let answer = Text::new("Enter City Name:")
            .with_initial_value(&last_city)
            .with_placeholder("Enter city name...")
            .with_help_message("Press Enter to look up, submit an empty name or Esc to quit")
            .prompt();

        let answer = match answer {
            Ok(answer) => answer,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read city name"),
        };
        let Some(city) = submitted_city(&answer) else {
            break;
        };
        last_city = city.to_string();

        match query_weather(source, city).await {
            Ok(weather) => print!("{}", render::render_body(&weather, variant, style)),
            Err(e) => {
                report(&e, style);
                if let Some(hint) = render::retry_hint(&e) {
                    eprintln!("{hint}");
                }
            }
        }
    }

    Ok(())
}

/// Trimmed city name, `None` when the answer is blank.
fn submitted_city(answer: &str) -> Option<&str> {
    Some(answer.trim()).filter(|city| !city.is_empty())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI key:")
        .without_confirmation()
        .with_help_message("Create one at https://www.weatherapi.com/my/")
        .prompt()
        .context("Failed to read API key")?;
    if api_key.trim().is_empty() {
        bail!("API key must not be empty");
    }
    config.set_api_key(api_key.trim().to_string());

    let city = Text::new("Default city:")
        .with_default(config.default_city())
        .prompt()
        .context("Failed to read default city")?;
    config.default_city = Some(city.trim().to_string()).filter(|c| !c.is_empty());

    let variants = vec![Variant::Plain, Variant::Vista];
    let start = variants.iter().position(|v| *v == config.variant()).unwrap_or(0);
    let variant = Select::new("Dashboard layout:", variants)
        .with_starting_cursor(start)
        .prompt()
        .context("Failed to read dashboard layout")?;
    config.variant = Some(variant);

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}

/// Write the SVG chart to `path`; the confirmation goes to `status`.
fn write_chart(
    weather: &NormalizedWeather,
    path: &Path,
    status: &mut impl Write,
) -> anyhow::Result<()> {
    let title = format!("Hourly temperature, {}", weather.location.display_name());
    let svg = chart::hourly_svg(&weather.hourly_series, &title, &render::theme::VISTA)
        .context("Failed to draw chart")?;
    std::fs::write(path, svg)
        .with_context(|| format!("Failed to write chart: {}", path.display()))?;
    writeln!(status, "Chart written to {}", path.display())?;
    Ok(())
}

fn report(err: &WeatherError, style: &Style) {
    eprintln!("{}", render::error_line(err, style));
}
