use anyhow::Context;
use clap::{CommandFactory, Parser};
use nws_forecast_core::{
    ClientConfig, Config, MissingLocation, NwsProvider, Overrides, WeatherProvider,
    resolve_settings,
};
use std::{path::PathBuf, time::Duration};

use crate::output::{self, Painter};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Forecast and hazard advisories from forecast.weather.gov"
)]
pub struct Cli {
    /// Zip code or place name to look up.
    pub location: Option<String>,

    /// Location to look up; takes precedence over the positional argument.
    #[arg(long = "zip", value_name = "LOCATION")]
    pub zip: Option<String>,

    /// User agent to send with requests.
    #[arg(short = 'u', value_name = "USER_AGENT")]
    pub user_agent: Option<String>,

    /// Config file location.
    #[arg(short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Print the forecast as JSON.
    #[arg(long)]
    pub json: bool,

    /// Log debug output to stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Accept Go-style single-dash long flags (`-zip 53226`).
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|arg| match arg.strip_prefix("-zip") {
            Some("") => "--zip".to_string(),
            Some(rest) if rest.starts_with('=') => format!("--zip{rest}"),
            _ => arg,
        })
        .collect()
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load(self.config.as_deref())?;

        let overrides = Overrides {
            user_agent: self.user_agent,
            location: self.zip,
            positional: self.location,
        };
        let settings = match resolve_settings(overrides, &config, std::env::var("USER_AGENT").ok())
        {
            Ok(settings) => settings,
            Err(MissingLocation) => {
                eprintln!("No location provided!\n");
                eprintln!("{}", Cli::command().render_help());
                return Err(MissingLocation.into());
            }
        };

        let provider = NwsProvider::new(ClientConfig {
            user_agent: settings.user_agent,
            timeout: self.timeout.map(Duration::from_secs),
            ..ClientConfig::default()
        })?;

        let report = forecast_report(&provider, &settings.location, self.json, &Painter::for_stdout())
            .await?;
        print!("{report}");

        Ok(())
    }
}

/// Fetch the forecast and format it for stdout.
pub async fn forecast_report(
    provider: &dyn WeatherProvider,
    location: &str,
    json: bool,
    painter: &Painter,
) -> anyhow::Result<String> {
    let result = provider
        .get_forecast(location)
        .await
        .with_context(|| format!("Failed to get the forecast for {location:?}"))?;

    if json {
        let mut text =
            serde_json::to_string_pretty(&result).context("Failed to serialize forecast")?;
        text.push('\n');
        Ok(text)
    } else {
        Ok(output::render(&result, painter))
    }
}
