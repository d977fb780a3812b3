// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Builds seeded server resources and failing collaborators for route tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod axum_test;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use prenatal_core::errors::{AppError, AppResult};
use prenatal_core::models::{SimulatedVitals, VitalsSnapshot};
use prenatal_fit_server::config::environment::{ServerConfig, SimulatorConfig};
use prenatal_fit_server::resources::ServerResources;
use prenatal_fit_server::server::build_router;
use prenatal_fit_server::vitals::{VitalsRequest, VitalsSource};
use std::sync::Arc;

/// Seed used by every route test so simulated vitals are reproducible
pub const TEST_SEED: u64 = 20_251_018;

/// Default configuration with the simulator seeded
pub fn seeded_config() -> ServerConfig {
    ServerConfig {
        simulator: SimulatorConfig {
            seed: Some(TEST_SEED),
        },
        ..ServerConfig::default()
    }
}

/// Resources backed by a seeded simulator and empty in-memory stores
pub fn test_resources() -> Arc<ServerResources> {
    Arc::new(ServerResources::new(seeded_config()))
}

/// The full application router over `resources`
pub fn app(resources: &Arc<ServerResources>) -> axum::Router {
    build_router(resources)
}

/// A vitals source whose device is unreachable
pub struct FailingVitalsSource;

#[async_trait]
impl VitalsSource for FailingVitalsSource {
    async fn current_vitals(&self, _request: VitalsRequest) -> AppResult<SimulatedVitals> {
        Err(AppError::external_service("wearable", "device offline"))
    }

    async fn historical_vitals(
        &self,
        _pregnancy_week: u32,
        _days: u32,
        _now: DateTime<Utc>,
    ) -> AppResult<Vec<SimulatedVitals>> {
        Err(AppError::external_service("wearable", "device offline"))
    }
}

/// A vitals source that always reports the same reading
pub struct FixedVitalsSource {
    pub snapshot: VitalsSnapshot,
    pub daily_active_minutes: i32,
}

#[async_trait]
impl VitalsSource for FixedVitalsSource {
    async fn current_vitals(&self, request: VitalsRequest) -> AppResult<SimulatedVitals> {
        Ok(SimulatedVitals {
            snapshot: self.snapshot,
            daily_active_minutes: self.daily_active_minutes,
            is_simulated: true,
            pregnancy_week: request.pregnancy_week,
            trimester: prenatal_core::models::Trimester::from_week(request.pregnancy_week)
                .label()
                .to_owned(),
            timestamp: None,
        })
    }

    async fn historical_vitals(
        &self,
        pregnancy_week: u32,
        _days: u32,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<SimulatedVitals>> {
        let mut vitals = self
            .current_vitals(VitalsRequest::current(pregnancy_week, false))
            .await?;
        vitals.timestamp = Some(now);
        Ok(vec![vitals])
    }
}

/// Resources whose vitals source always returns `snapshot`
pub fn fixed_vitals_resources(snapshot: VitalsSnapshot) -> Arc<ServerResources> {
    let source = FixedVitalsSource {
        snapshot,
        daily_active_minutes: 30,
    };
    Arc::new(ServerResources::new(seeded_config()).with_vitals_source(Arc::new(source)))
}

/// Resources whose vitals source always fails
pub fn failing_vitals_resources() -> Arc<ServerResources> {
    Arc::new(
        ServerResources::new(seeded_config()).with_vitals_source(Arc::new(FailingVitalsSource)),
    )
}
