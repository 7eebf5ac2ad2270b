use serde::Deserialize;
use std::fs;

/// Explicit configuration for the statistics API client. Passed by value
/// to the fetcher; there is no process-wide token or header state.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub token: String,
}

fn default_base_url() -> String {
    "https://api.estadisticasbcra.com/".to_string()
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub api: ClientConfig,
    /// Horizon for the trend forecast, in calendar months.
    pub forecast_months: u32,
    /// When true the forecast section includes train/test errors and scores.
    #[serde(default)]
    pub verbose_forecast: bool,
    /// Directory where the diagnostic PNGs are written.
    #[serde(default = "default_plot_dir")]
    pub plot_dir: String,
}

fn default_plot_dir() -> String {
    "plots".to_string()
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_in_missing_fields() {
        let cfg: AppConfig = serde_json::from_str(
            r#"{"api": {"token": "abc"}, "forecast_months": 3}"#,
        )
        .unwrap();
        assert_eq!(cfg.api.base_url, "https://api.estadisticasbcra.com/");
        assert_eq!(cfg.forecast_months, 3);
        assert!(!cfg.verbose_forecast);
        assert_eq!(cfg.plot_dir, "plots");
    }
}
