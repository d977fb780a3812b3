// ABOUTME: Exercise safety route handlers for in-session checks and safety level lookups
// ABOUTME: Fuses the client's posture score with current vitals into a continue/pause verdict
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

//! Exercise safety routes
//!
//! The client polls `check-exercise-safety` during a session with its latest
//! posture score and rep count. Any failure while gathering vitals is reported
//! as a 500 with a `Safety check failed: ...` message so the client can fall
//! back to its own conservative behavior.

use crate::errors::AppError;
use crate::logging::AppLogger;
use crate::middleware::AuthenticatedUser;
use crate::resources::ServerResources;
use crate::vitals::{ExerciseIntensity, VitalsRequest};
use axum::{
    body::Bytes,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use prenatal_core::constants::request_defaults;
use prenatal_core::models::SimulatedVitals;
use prenatal_intelligence::{color_for, message_for, SafetyLevel, SafetyVerdict};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body of `POST /api/health/check-exercise-safety`; every field is optional
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SafetyCheckRequest {
    /// Posture score 0-100 from the pose tracker, default 100
    pub posture_score: Option<f64>,
    /// Reps completed in the current set, default 0
    pub current_reps: Option<i64>,
    /// Session intensity, if the client knows it
    pub intensity: Option<ExerciseIntensity>,
}

impl SafetyCheckRequest {
    /// Parse a request body, treating an empty body as all defaults
    ///
    /// # Errors
    ///
    /// Returns an invalid input error if the body is not a valid request
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
            .map_err(|e| AppError::invalid_input(format!("Invalid safety check request: {e}")))
    }
}

/// Verdict plus the vitals it was computed from
#[derive(Debug, Serialize, Deserialize)]
pub struct SafetyCheckResponse {
    /// The safety verdict
    #[serde(flatten)]
    pub verdict: SafetyVerdict,
    /// Vitals used for the evaluation
    pub current_vitals: SimulatedVitals,
}

/// Display information for one safety level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyLevelInfo {
    /// Level name as requested
    pub level: String,
    /// Display colour
    pub color: String,
    /// User-facing message
    pub message: String,
}

impl SafetyLevelInfo {
    fn for_name(level: &str) -> Self {
        Self {
            level: level.to_owned(),
            color: color_for(level).to_owned(),
            message: message_for(level).to_owned(),
        }
    }
}

fn safety_check_failed(error: AppError) -> AppError {
    AppError::internal(format!("Safety check failed: {}", error.message)).with_source(error)
}

/// Exercise safety routes
pub struct SafetyRoutes;

impl SafetyRoutes {
    /// Create all safety routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/health/check-exercise-safety",
                post(Self::handle_check_exercise_safety),
            )
            .route("/api/health/safety-levels", get(Self::handle_list_levels))
            .route(
                "/api/health/safety-levels/:level",
                get(Self::handle_get_level),
            )
            .with_state(resources)
    }

    /// Handle an in-session safety check
    async fn handle_check_exercise_safety(
        State(resources): State<Arc<ServerResources>>,
        user: AuthenticatedUser,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let request = SafetyCheckRequest::from_body(&body)?;
        let posture_score = request
            .posture_score
            .unwrap_or(request_defaults::POSTURE_SCORE);
        let current_reps = request
            .current_reps
            .unwrap_or(request_defaults::CURRENT_REPS);

        let week = resources
            .pregnancy_week(user.user_id)
            .await
            .map_err(safety_check_failed)?;
        let current_vitals = resources
            .vitals_source
            .current_vitals(VitalsRequest::exercising(week, request.intensity))
            .await
            .map_err(safety_check_failed)?;

        let verdict =
            resources
                .safety_engine
                .evaluate(posture_score, &current_vitals.snapshot, current_reps);

        AppLogger::log_safety_check(
            user.user_id,
            verdict.safety_level.as_str(),
            verdict.should_pause,
            verdict.alerts.len(),
        );

        Ok(Json(SafetyCheckResponse {
            verdict,
            current_vitals,
        })
        .into_response())
    }

    /// Handle listing all safety levels in ascending severity
    async fn handle_list_levels() -> Json<Vec<SafetyLevelInfo>> {
        Json(
            SafetyLevel::ALL
                .iter()
                .map(|level| SafetyLevelInfo::for_name(level.as_str()))
                .collect(),
        )
    }

    /// Handle a single level lookup; unknown names get the neutral fallback
    async fn handle_get_level(Path(level): Path<String>) -> Json<SafetyLevelInfo> {
        Json(SafetyLevelInfo::for_name(&level))
    }
}
