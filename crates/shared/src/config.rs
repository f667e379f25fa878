//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Simulation gateway configuration.
    #[serde(default)]
    pub gateway: GatewayConfig,
    /// Report composition configuration.
    #[serde(default)]
    pub report: ReportConfig,
    /// Artifact output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Simulation gateway configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the simulations API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token issued by the session layer, if any.
    #[serde(default)]
    pub bearer_token: Option<String>,
    /// Page size used when exhausting an amortization schedule.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            bearer_token: None,
            page_size: default_page_size(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_page_size() -> u32 {
    120
}

/// Language used for report labels and placeholders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum ReportLocale {
    /// Spanish (Peru).
    #[default]
    #[serde(rename = "es-PE", alias = "es")]
    EsPe,
    /// English.
    #[serde(rename = "en")]
    En,
}

impl std::str::FromStr for ReportLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "es-pe" | "es" => Ok(Self::EsPe),
            "en" | "en-us" => Ok(Self::En),
            _ => Err(format!("Unknown report locale: {s}")),
        }
    }
}

/// Report composition configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Label language.
    #[serde(default)]
    pub locale: ReportLocale,
    /// Schedules longer than this are composed on a blocking worker.
    #[serde(default = "default_background_threshold")]
    pub background_threshold_rows: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            locale: ReportLocale::default(),
            background_threshold_rows: default_background_threshold(),
        }
    }
}

fn default_background_threshold() -> usize {
    1000
}

/// Artifact output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory where exported reports are written.
    #[serde(default = "default_output_dir")]
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> String {
    "./reports".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("SIMUCREDITO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_defaults_without_sources() {
        let config = temp_env::with_vars_unset(
            [
                "SIMUCREDITO__GATEWAY__BASE_URL",
                "SIMUCREDITO__GATEWAY__PAGE_SIZE",
                "SIMUCREDITO__REPORT__LOCALE",
            ],
            || AppConfig::load().expect("defaults should load"),
        );

        assert_eq!(config.gateway.base_url, "http://localhost:8080/api");
        assert_eq!(config.gateway.page_size, 120);
        assert!(config.gateway.bearer_token.is_none());
        assert_eq!(config.report.locale, ReportLocale::EsPe);
        assert_eq!(config.report.background_threshold_rows, 1000);
        assert_eq!(config.output.dir, "./reports");
    }

    #[test]
    fn test_environment_overrides() {
        let config = temp_env::with_vars(
            [
                (
                    "SIMUCREDITO__GATEWAY__BASE_URL",
                    Some("https://api.example.com/api"),
                ),
                ("SIMUCREDITO__GATEWAY__PAGE_SIZE", Some("25")),
                ("SIMUCREDITO__REPORT__LOCALE", Some("en")),
            ],
            || AppConfig::load().expect("config should load"),
        );

        assert_eq!(config.gateway.base_url, "https://api.example.com/api");
        assert_eq!(config.gateway.page_size, 25);
        assert_eq!(config.report.locale, ReportLocale::En);
    }

    #[test]
    fn test_report_locale_from_str() {
        assert_eq!(ReportLocale::from_str("es-PE").unwrap(), ReportLocale::EsPe);
        assert_eq!(ReportLocale::from_str("ES").unwrap(), ReportLocale::EsPe);
        assert_eq!(ReportLocale::from_str("en").unwrap(), ReportLocale::En);
        assert!(ReportLocale::from_str("fr").is_err());
    }
}
