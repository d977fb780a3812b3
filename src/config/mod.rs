// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Loads network, CORS, simulator, and safety threshold settings from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

//! Configuration module for the Prenatal Fit server
//!
//! - **Environment**: server configuration from environment variables,
//!   including overrides for the safety engine thresholds

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, ServerConfig, SimulatorConfig};
