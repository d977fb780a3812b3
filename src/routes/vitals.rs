// ABOUTME: Health vitals route handlers for current readings, history, and the dashboard
// ABOUTME: Serves simulated vitals, stored history with derived indicators, and trend summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

//! Health vitals routes
//!
//! Every handler requires the caller's identity. The pregnancy week comes from
//! the caller's profile and defaults to week 20.

use crate::errors::AppError;
use crate::middleware::AuthenticatedUser;
use crate::resources::ServerResources;
use crate::vitals::VitalsRequest;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use prenatal_core::constants::request_defaults;
use prenatal_core::models::{HealthVitalsRecord, SimulatedVitals, Trimester};
use prenatal_intelligence::{health_recommendations, HealthRecommendation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const DEFAULT_HISTORY_DAYS: u32 = 7;
const MAX_HISTORY_DAYS: u32 = 30;

/// Query for `GET /api/health/vitals/current`
#[derive(Debug, Default, Deserialize)]
pub struct CurrentVitalsQuery {
    /// Generate exercising vitals
    #[serde(default)]
    pub exercising: bool,
    /// Store the reading in the caller's history
    #[serde(default)]
    pub save: bool,
}

/// Query for `GET /api/health/vitals/simulated-history`
#[derive(Debug, Default, Deserialize)]
pub struct SimulatedHistoryQuery {
    /// Days to cover, 1 to 30
    pub days: Option<u32>,
}

/// A stored reading with its derived indicators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthVitalsView {
    /// The stored reading
    #[serde(flatten)]
    pub record: HealthVitalsRecord,
    /// Heart rate within 70-110 BPM
    pub is_heart_rate_normal: bool,
    /// SpO2 at or above 95%
    pub is_spo2_normal: bool,
    /// 100 minus fatigue
    pub energy_level: i32,
}

impl From<HealthVitalsRecord> for HealthVitalsView {
    fn from(record: HealthVitalsRecord) -> Self {
        Self {
            is_heart_rate_normal: record.is_heart_rate_normal(),
            is_spo2_normal: record.is_spo2_normal(),
            energy_level: record.energy_level(),
            record,
        }
    }
}

/// Response for `GET /api/health/vitals/history`
#[derive(Debug, Serialize, Deserialize)]
pub struct VitalsHistoryResponse {
    /// Number of readings returned
    pub count: usize,
    /// Readings, newest first
    pub vitals: Vec<HealthVitalsView>,
}

/// Response for `GET /api/health/vitals/simulated-history`
#[derive(Debug, Serialize, Deserialize)]
pub struct SimulatedHistoryResponse {
    /// Days covered
    pub days: u32,
    /// Week the series was generated for
    pub pregnancy_week: u32,
    /// Number of readings
    pub count: usize,
    /// Readings, oldest first
    pub vitals: Vec<SimulatedVitals>,
}

/// Averages over the most recent stored readings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardTrends {
    /// Mean heart rate
    pub avg_heart_rate_7d: f64,
    /// Mean SpO2
    pub avg_spo2_7d: f64,
    /// Mean energy level
    pub avg_energy_7d: f64,
}

impl DashboardTrends {
    /// Average the given readings, or use the current reading when there are none
    #[must_use]
    pub fn from_history(history: &[HealthVitalsRecord], current: &SimulatedVitals) -> Self {
        if history.is_empty() {
            let snapshot = &current.snapshot;
            return Self {
                avg_heart_rate_7d: f64::from(snapshot.heart_rate),
                avg_spo2_7d: f64::from(snapshot.spo2),
                avg_energy_7d: f64::from(100 - snapshot.fatigue_level),
            };
        }

        let count = history.len() as f64;
        let mean = |value: fn(&HealthVitalsRecord) -> i32| {
            round_to_tenth(history.iter().map(|r| f64::from(value(r))).sum::<f64>() / count)
        };

        Self {
            avg_heart_rate_7d: mean(|r| r.heart_rate),
            avg_spo2_7d: mean(|r| r.spo2),
            avg_energy_7d: mean(HealthVitalsRecord::energy_level),
        }
    }
}

/// Where the caller is in the pregnancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PregnancyContext {
    /// Gestational week
    pub week: u32,
    /// Trimester number, 1 to 3
    pub trimester: u8,
}

/// Response for `GET /api/health/dashboard-summary`
#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Fresh resting reading
    pub current_vitals: SimulatedVitals,
    /// Averages over recent history
    pub trends: DashboardTrends,
    /// Pregnancy position
    pub pregnancy_context: PregnancyContext,
    /// Wellness recommendations for the current reading
    pub recommendations: Vec<HealthRecommendation>,
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Health vitals routes
pub struct VitalsRoutes;

impl VitalsRoutes {
    /// Create all vitals routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/health/vitals/current",
                get(Self::handle_current_vitals),
            )
            .route(
                "/api/health/vitals/history",
                get(Self::handle_vitals_history),
            )
            .route(
                "/api/health/vitals/simulated-history",
                get(Self::handle_simulated_history),
            )
            .route(
                "/api/health/dashboard-summary",
                get(Self::handle_dashboard_summary),
            )
            .with_state(resources)
    }

    /// Handle a request for a fresh reading, optionally storing it
    async fn handle_current_vitals(
        State(resources): State<Arc<ServerResources>>,
        user: AuthenticatedUser,
        Query(query): Query<CurrentVitalsQuery>,
    ) -> Result<Response, AppError> {
        let week = resources.pregnancy_week(user.user_id).await?;
        let vitals = resources
            .vitals_source
            .current_vitals(VitalsRequest::current(week, query.exercising))
            .await
            .map_err(|e| e.context("Failed to read vitals"))?;

        if query.save {
            resources
                .vitals_store
                .save(HealthVitalsRecord::from_simulated(user.user_id, &vitals))
                .await
                .map_err(|e| e.context("Failed to store vitals"))?;
        }

        Ok(Json(vitals).into_response())
    }

    /// Handle listing the caller's most recent stored readings
    async fn handle_vitals_history(
        State(resources): State<Arc<ServerResources>>,
        user: AuthenticatedUser,
    ) -> Result<Response, AppError> {
        let records = resources
            .vitals_store
            .recent(user.user_id, request_defaults::HISTORY_LIMIT)
            .await
            .map_err(|e| e.context("Failed to load vitals history"))?;

        let vitals: Vec<HealthVitalsView> = records.into_iter().map(Into::into).collect();
        Ok(Json(VitalsHistoryResponse {
            count: vitals.len(),
            vitals,
        })
        .into_response())
    }

    /// Handle generating a simulated series for charts
    async fn handle_simulated_history(
        State(resources): State<Arc<ServerResources>>,
        user: AuthenticatedUser,
        Query(query): Query<SimulatedHistoryQuery>,
    ) -> Result<Response, AppError> {
        let days = query.days.unwrap_or(DEFAULT_HISTORY_DAYS);
        if !(1..=MAX_HISTORY_DAYS).contains(&days) {
            return Err(AppError::invalid_input(format!(
                "days must be between 1 and {MAX_HISTORY_DAYS}, got {days}"
            )));
        }

        let week = resources.pregnancy_week(user.user_id).await?;
        let vitals = resources
            .vitals_source
            .historical_vitals(week, days, Utc::now())
            .await
            .map_err(|e| e.context("Failed to generate vitals history"))?;

        Ok(Json(SimulatedHistoryResponse {
            days,
            pregnancy_week: week,
            count: vitals.len(),
            vitals,
        })
        .into_response())
    }

    /// Handle the dashboard summary: current reading, trends, and recommendations
    async fn handle_dashboard_summary(
        State(resources): State<Arc<ServerResources>>,
        user: AuthenticatedUser,
    ) -> Result<Response, AppError> {
        let week = resources.pregnancy_week(user.user_id).await?;
        let current_vitals = resources
            .vitals_source
            .current_vitals(VitalsRequest::current(week, false))
            .await
            .map_err(|e| e.context("Failed to read vitals"))?;

        let history = resources
            .vitals_store
            .recent(user.user_id, request_defaults::TREND_WINDOW)
            .await
            .map_err(|e| e.context("Failed to load vitals history"))?;

        let summary = DashboardSummary {
            trends: DashboardTrends::from_history(&history, &current_vitals),
            pregnancy_context: PregnancyContext {
                week,
                trimester: Trimester::from_week(week).number(),
            },
            recommendations: health_recommendations(&current_vitals, false),
            current_vitals,
        };

        Ok(Json(summary).into_response())
    }
}
