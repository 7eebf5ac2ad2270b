mod analyzer;
mod config;
mod endpoints;
mod fetcher;
mod forecast;
mod model;
mod normalizer;
mod plotter;
mod report;
mod series_set;

use analyzer::{last_year, peak_day, top_volatility, weekday_averages, widest_week};
use config::{AppConfig, load_config};
use endpoints::Endpoint;
use fetcher::{BcraClient, SeriesFetcher};
use forecast::forecast;
use model::{PlotError, RadarError};
use report::ReportInputs;
use series_set::SeriesSet;

use chrono::Utc;
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration from file
    let config: AppConfig = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let client = match BcraClient::new(config.api.clone()) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to build API client: {}", e);
            return;
        }
    };

    if let Err(e) = run(&config, &client).await {
        error!("Analysis run failed: {}", e);
        std::process::exit(1);
    }
}

/// One full analysis run: fetch every endpoint, answer the consignas over
/// the trailing year, print the report and write the diagnostic plots.
/// Any failure aborts the run; there is no partial-result mode.
async fn run(config: &AppConfig, fetcher: &dyn SeriesFetcher) -> Result<(), RadarError> {
    let points = [
        Endpoint::Usd,
        Endpoint::UsdOf,
        Endpoint::VarUsdVsUsdOf,
        Endpoint::InflacionMensualOficial,
        Endpoint::VarUsdAnual,
        Endpoint::VarUsdOfAnual,
        Endpoint::Milestones,
    ];

    info!("Fetching {} endpoints...", points.len());
    let mut series = SeriesSet::new();
    series.populate(fetcher, &points).await?;

    let today = Utc::now().date_naive();
    let blue = series.get(Endpoint::Usd)?;
    let official = series.get(Endpoint::UsdOf)?;
    let spread = series.get(Endpoint::VarUsdVsUsdOf)?;

    info!("Running analyzers over the trailing 365-day window...");
    let spread_year = last_year(spread, today);
    let peak = peak_day(&spread_year)?;
    let blue_volatility = top_volatility(&last_year(blue, today))?;
    let official_volatility = top_volatility(&last_year(official, today))?;
    let week = widest_week(&spread_year)?;
    let weekday_means = weekday_averages(&spread_year);

    // The regression runs over the full history on purpose; only the
    // consignas above are window-filtered.
    info!("Fitting trend forecasts ({} months ahead)...", config.forecast_months);
    let blue_forecast = forecast(blue, config.forecast_months, today)?;
    let official_forecast = forecast(official, config.forecast_months, today)?;

    let inputs = ReportInputs {
        peak_day: peak,
        blue_volatility: &blue_volatility,
        official_volatility: &official_volatility,
        week,
        weekday_means: &weekday_means,
        blue_forecast: blue_forecast.summary(config.verbose_forecast),
        official_forecast: official_forecast.summary(config.verbose_forecast),
    };
    println!("{}", report::render(&inputs));

    info!("Rendering plots into {}...", config.plot_dir);
    let plot_dir = Path::new(&config.plot_dir);
    fs::create_dir_all(plot_dir)
        .map_err(|e| PlotError::Render(format!("cannot create {}: {}", config.plot_dir, e)))?;

    if let Err(e) = plotter::render_series_comparison(
        &plot_dir.join("dolar_events.png"),
        blue,
        official,
        series.milestones(),
    ) {
        // Needs two overlapping months of data; thin series only skip the plot.
        warn!("Series comparison plot skipped: {}", e);
    }
    plotter::render_regression(
        &plot_dir.join("regression_blue.png"),
        blue,
        &blue_forecast.model,
    )?;
    plotter::render_regression(
        &plot_dir.join("regression_oficial.png"),
        official,
        &official_forecast.model,
    )?;

    info!("Run finished.");
    Ok(())
}
