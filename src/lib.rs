// ABOUTME: Main library entry point for the Prenatal Fit API server
// ABOUTME: Wires configuration, logging, vitals simulation, stores, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

#![deny(unsafe_code)]

//! # Prenatal Fit Server
//!
//! HTTP backend for a pregnancy fitness app. During an exercise session the
//! client streams a posture score and rep count; the server fuses them with
//! wearable vitals and answers whether it is safe to continue.
//!
//! ## Architecture
//!
//! - **`prenatal_core`**: domain models, error taxonomy, constants
//! - **`prenatal_intelligence`**: the safety fusion engine and dashboard rules
//! - **Config**: environment-driven server and threshold configuration
//! - **Vitals**: simulated wearable feed and the vitals history store
//! - **Routes**: axum handlers for vitals, safety checks, and profiles
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use prenatal_fit_server::config::environment::ServerConfig;
//! use prenatal_fit_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Prenatal Fit server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Unified error handling re-exported from `prenatal_core`
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware: caller identity, CORS, request tracing
pub mod middleware;

/// Pregnancy profile storage
pub mod profiles;

/// Shared server resources handed to every route
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and serving
pub mod server;

/// Vitals simulation and history storage
pub mod vitals;
