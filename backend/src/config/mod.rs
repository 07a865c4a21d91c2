//! Configuration management for the BMI calculator backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: BMI__)

use anyhow::Result;
use bmi_calculator_shared::{EvaluationOptions, DISPLAY_DECIMALS};
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub calculator: CalculatorConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Calculator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Fractional digits for BMI, range bounds and target weight
    pub display_decimals: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            display_decimals: DISPLAY_DECIMALS,
        }
    }
}

impl CalculatorConfig {
    pub fn evaluation_options(&self) -> EvaluationOptions {
        EvaluationOptions {
            decimals: self.display_decimals,
        }
    }
}

/// HTTP middleware settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub request_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            calculator: CalculatorConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with BMI__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., BMI__SERVER__PORT=9000 sets server.port
            .add_source(config::Environment::with_prefix("BMI").separator("__"))
            .build()?;

        let loaded: AppConfig = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject settings the calculator cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.calculator.display_decimals > 6 {
            anyhow::bail!(
                "calculator.display_decimals must be at most 6, got {}",
                self.calculator.display_decimals
            );
        }
        if self.http.request_timeout_secs == 0 {
            anyhow::bail!("http.request_timeout_secs must be greater than 0");
        }
        Ok(())
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
