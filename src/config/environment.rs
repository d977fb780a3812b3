// ABOUTME: Environment-based configuration for the HTTP server and safety engine
// ABOUTME: Parses ports, host, CORS origins, simulator seed, and threshold overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

//! Environment-based configuration
//!
//! There are no configuration files. Every setting has a default and can be
//! overridden by an environment variable; a variable that is set but cannot be
//! parsed is a configuration error rather than a silent fallback.

use crate::errors::{AppError, AppResult};
use prenatal_core::constants::ports;
use prenatal_intelligence::SafetyThresholds;
use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;
use tracing::{info, warn};

/// Environment variable names
pub mod env_vars {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// HTTP listen address
    pub const HOST: &str = "HOST";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Comma-separated allowed CORS origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Seed for deterministic simulated vitals
    pub const SIMULATOR_SEED: &str = "SIMULATOR_SEED";
    /// Posture below this is poor
    pub const SAFETY_POSTURE_POOR: &str = "SAFETY_POSTURE_POOR";
    /// Posture above this is good
    pub const SAFETY_POSTURE_GOOD: &str = "SAFETY_POSTURE_GOOD";
    /// Elevated heart rate threshold
    pub const SAFETY_HR_HIGH: &str = "SAFETY_HR_HIGH";
    /// Dangerous heart rate threshold
    pub const SAFETY_HR_VERY_HIGH: &str = "SAFETY_HR_VERY_HIGH";
    /// Elevated fatigue threshold
    pub const SAFETY_FATIGUE_HIGH: &str = "SAFETY_FATIGUE_HIGH";
    /// Pause-forcing fatigue threshold
    pub const SAFETY_FATIGUE_VERY_HIGH: &str = "SAFETY_FATIGUE_VERY_HIGH";
    /// Low SpO2 threshold
    pub const SAFETY_SPO2_LOW: &str = "SAFETY_SPO2_LOW";
    /// Boundary between optimal and moderate exertion heart rate
    pub const SAFETY_HR_OPTIMAL_CEILING: &str = "SAFETY_HR_OPTIMAL_CEILING";
}

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*` for any origin
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Vitals simulator settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulatorConfig {
    /// Fixed RNG seed; entropy-seeded when absent
    pub seed: Option<u64>,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// HTTP listen address
    pub host: IpAddr,
    /// Deployment environment
    pub environment: Environment,
    /// CORS settings
    pub cors: CorsConfig,
    /// Simulator settings
    pub simulator: SimulatorConfig,
    /// Thresholds for the safety fusion engine
    pub safety: SafetyThresholds,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: ports::DEFAULT_HTTP_PORT,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            environment: Environment::default(),
            cors: CorsConfig::default(),
            simulator: SimulatorConfig::default(),
            safety: SafetyThresholds::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the variable when a set value
    /// cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let defaults = Self::default();
        let config = Self {
            http_port: parse_env(env_vars::HTTP_PORT, defaults.http_port)?,
            host: parse_env(env_vars::HOST, defaults.host)?,
            environment: env::var(env_vars::ENVIRONMENT)
                .map_or(defaults.environment, |value| {
                    Environment::from_str_or_default(&value)
                }),
            cors: CorsConfig {
                allowed_origins: env::var(env_vars::CORS_ALLOWED_ORIGINS)
                    .unwrap_or(defaults.cors.allowed_origins),
            },
            simulator: SimulatorConfig {
                seed: parse_optional_env(env_vars::SIMULATOR_SEED)?,
            },
            safety: safety_thresholds_from_env(defaults.safety)?,
        };

        if config.safety.posture_poor > config.safety.posture_good
            || config.safety.hr_high > config.safety.hr_very_high
            || config.safety.fatigue_high > config.safety.fatigue_very_high
        {
            warn!(
                thresholds = ?config.safety,
                "Safety threshold overrides are not in ascending order"
            );
        }

        Ok(config)
    }

    /// One-line summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        let seed = self
            .simulator
            .seed
            .map_or_else(|| "entropy".to_owned(), |seed| seed.to_string());
        format!(
            "Prenatal Fit server: {}:{} ({}), CORS origins: {}, simulator seed: {}, \
             thresholds: posture {}/{}, heart rate {}/{}, fatigue {}/{}, SpO2 {}",
            self.host,
            self.http_port,
            self.environment,
            self.cors.allowed_origins,
            seed,
            self.safety.posture_poor,
            self.safety.posture_good,
            self.safety.hr_high,
            self.safety.hr_very_high,
            self.safety.fatigue_high,
            self.safety.fatigue_very_high,
            self.safety.spo2_low,
        )
    }
}

fn safety_thresholds_from_env(defaults: SafetyThresholds) -> AppResult<SafetyThresholds> {
    Ok(SafetyThresholds {
        posture_poor: parse_env(env_vars::SAFETY_POSTURE_POOR, defaults.posture_poor)?,
        posture_good: parse_env(env_vars::SAFETY_POSTURE_GOOD, defaults.posture_good)?,
        hr_high: parse_env(env_vars::SAFETY_HR_HIGH, defaults.hr_high)?,
        hr_very_high: parse_env(env_vars::SAFETY_HR_VERY_HIGH, defaults.hr_very_high)?,
        fatigue_high: parse_env(env_vars::SAFETY_FATIGUE_HIGH, defaults.fatigue_high)?,
        fatigue_very_high: parse_env(
            env_vars::SAFETY_FATIGUE_VERY_HIGH,
            defaults.fatigue_very_high,
        )?,
        spo2_low: parse_env(env_vars::SAFETY_SPO2_LOW, defaults.spo2_low)?,
        hr_optimal_ceiling: parse_env(
            env_vars::SAFETY_HR_OPTIMAL_CEILING,
            defaults.hr_optimal_ceiling,
        )?,
        fatigue_optimal_ceiling: defaults.fatigue_optimal_ceiling,
    })
}

fn parse_env<T>(name: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    Ok(parse_optional_env(name)?.unwrap_or(default))
}

fn parse_optional_env<T>(name: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| AppError::config(format!("Invalid value '{raw}' for {name}: {e}"))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing_falls_back_to_development() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }

    #[test]
    fn test_summary_mentions_port_and_seed() {
        let config = ServerConfig {
            simulator: SimulatorConfig { seed: Some(7) },
            ..ServerConfig::default()
        };
        let summary = config.summary();
        assert!(summary.contains("0.0.0.0:8081"));
        assert!(summary.contains("simulator seed: 7"));
    }
}
