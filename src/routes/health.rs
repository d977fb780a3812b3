// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Provides liveness and readiness endpoints for load balancers and orchestrators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

//! Health check routes for service monitoring
//!
//! Unauthenticated; the payload carries the service name and version so a
//! rollout can be verified from the load balancer.

use axum::{routing::get, Json, Router};
use chrono::Utc;
use prenatal_core::constants::service_names;
use serde_json::{json, Value};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
    }

    async fn handle_health() -> Json<Value> {
        Json(Self::status_body("healthy"))
    }

    async fn handle_ready() -> Json<Value> {
        Json(Self::status_body("ready"))
    }

    fn status_body(status: &str) -> Value {
        json!({
            "status": status,
            "service": service_names::PRENATAL_FIT_SERVER,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339(),
        })
    }
}
