use crate::adapters::{FixedAscendant, HorizonsOracle};
use crate::adapters::horizons::DEFAULT_ENDPOINT;
use crate::core::catalog::Catalog;
use crate::core::reading::ReadingEngine;
use crate::domain::model::Body;
use crate::domain::ports::CalcFlags;
use crate::utils::error::{OracleError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "chiron.toml";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub ephemeris: EphemerisConfig,
    pub chart: ChartConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EphemerisConfig {
    pub endpoint: String,
    pub timeout_seconds: u64,
    pub body: Body,
    /// Ask the oracle for daily speeds as well as positions.
    pub speed: bool,
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: 30,
            body: Body::Chiron,
            speed: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// 0 = Aries .. 11 = Pisces.
    pub ascendant_sign: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            ascendant_sign: FixedAscendant::DEFAULT_SIGN.index(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads `path` if given, else `chiron.toml` when present, else defaults.
    /// `HOST` and `PORT` from the environment override the file.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                if !Path::new(path).exists() {
                    return Err(OracleError::MissingConfigError {
                        field: format!("config file '{}'", path),
                    });
                }
                Self::from_file(path)?
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE)?,
            None => {
                tracing::debug!("No {} found, using default configuration", DEFAULT_CONFIG_FILE);
                Self::default()
            }
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| OracleError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value, leaving unknown names as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| OracleError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Applies `HOST`/`PORT` overrides from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!("⚠️ Ignoring invalid PORT value '{}'", port),
            }
        }
    }

    pub fn calc_flags(&self) -> CalcFlags {
        if self.ephemeris.speed {
            CalcFlags::SWIEPH | CalcFlags::SPEED
        } else {
            CalcFlags::SWIEPH
        }
    }

    pub fn ascendant(&self) -> Result<FixedAscendant> {
        FixedAscendant::from_index(self.chart.ascendant_sign).ok_or_else(|| {
            OracleError::InvalidConfigValueError {
                field: "chart.ascendant_sign".to_string(),
                value: self.chart.ascendant_sign.to_string(),
                reason: "Value must be between 0 and 11".to_string(),
            }
        })
    }

    /// Wires the Horizons oracle, shared catalog and chart settings into an engine.
    pub fn build_engine(&self) -> Result<ReadingEngine> {
        let oracle = HorizonsOracle::new(
            self.ephemeris.endpoint.clone(),
            Duration::from_secs(self.ephemeris.timeout_seconds),
        )?;
        let catalog = Catalog::shared()?;

        let ascendant = Arc::new(self.ascendant()?);

        Ok(ReadingEngine::new(Arc::new(oracle), ascendant, catalog)
            .with_body(self.ephemeris.body)
            .with_flags(self.calc_flags()))
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.server.host)?;
        validate_positive_number("server.port", u64::from(self.server.port), 1)?;

        validate_url("ephemeris.endpoint", &self.ephemeris.endpoint)?;
        validate_positive_number("ephemeris.timeout_seconds", self.ephemeris.timeout_seconds, 1)?;

        validate_range("chart.ascendant_sign", self.chart.ascendant_sign, 0, 11)?;

        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(OracleError::InvalidConfigValueError {
                field: "logging.level".to_string(),
                value: self.logging.level.clone(),
                reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
            });
        }

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ephemeris.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.ephemeris.body, Body::Chiron);
        assert_eq!(config.chart.ascendant_sign, 7);
        assert_eq!(config.calc_flags(), CalcFlags::SWIEPH | CalcFlags::SPEED);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
[ephemeris]
timeout_seconds = 5
speed = false

[chart]
ascendant_sign = 0
"#,
        )
        .unwrap();
        assert_eq!(config.ephemeris.timeout_seconds, 5);
        assert_eq!(config.calc_flags(), CalcFlags::SWIEPH);
        assert_eq!(config.ascendant().unwrap().0.index(), 0);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("CHIRON_TEST_ENDPOINT", "http://127.0.0.1:9999/api/horizons.api");
        let config = AppConfig::from_toml_str(
            r#"
[ephemeris]
endpoint = "${CHIRON_TEST_ENDPOINT}"
"#,
        )
        .unwrap();
        assert_eq!(config.ephemeris.endpoint, "http://127.0.0.1:9999/api/horizons.api");
    }

    #[test]
    fn test_overrides() {
        let mut config = AppConfig::default();
        config.apply_overrides(|key| match key {
            "PORT" => Some("9090".to_string()),
            "HOST" => Some("127.0.0.1".to_string()),
            _ => None,
        });
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");

        config.apply_overrides(|key| (key == "PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn test_validation_failures() {
        let mut config = AppConfig::default();
        config.chart.ascendant_sign = 12;
        assert!(config.validate().is_err());
        assert!(config.ascendant().is_err());

        let mut config = AppConfig::default();
        config.ephemeris.endpoint = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.ephemeris.timeout_seconds = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_body_is_rejected() {
        let result = AppConfig::from_toml_str("[ephemeris]\nbody = \"vulcan\"\n");
        assert!(matches!(result, Err(OracleError::ConfigValidationError { .. })));
    }
}
