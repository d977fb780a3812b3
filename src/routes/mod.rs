// ABOUTME: Route module organization for the Prenatal Fit HTTP API
// ABOUTME: Groups health checks, vitals, exercise safety, and profile endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

//! HTTP routes
//!
//! Each group exposes a `routes` constructor returning an axum `Router`;
//! [`crate::server::build_router`] merges them and adds the middleware stack.

/// Liveness and readiness
pub mod health;
/// Pregnancy profile
pub mod profile;
/// Exercise safety checks and level lookups
pub mod safety;
/// Current vitals, history, and dashboard
pub mod vitals;

pub use health::HealthRoutes;
pub use profile::ProfileRoutes;
pub use safety::SafetyRoutes;
pub use vitals::VitalsRoutes;
