// ABOUTME: Pregnancy profile route handlers
// ABOUTME: Lets the caller record their LMP date and read back derived pregnancy dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

use crate::errors::AppError;
use crate::logging::AppLogger;
use crate::middleware::AuthenticatedUser;
use crate::resources::ServerResources;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use prenatal_core::models::PregnancyProfile;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Body of `PUT /api/health/profile`
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateProfileRequest {
    /// First day of the last menstrual period; null clears it
    pub lmp_date: Option<NaiveDate>,
}

/// A profile with its derived dates as of today
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// Owning user
    pub user_id: Uuid,
    /// Recorded LMP date
    pub lmp_date: Option<NaiveDate>,
    /// Gestational week
    pub current_week: Option<u32>,
    /// Trimester number, 1 to 3
    pub trimester: Option<u8>,
    /// Estimated due date
    pub due_date: Option<NaiveDate>,
    /// Weeks until full term
    pub weeks_remaining: Option<u32>,
}

impl ProfileResponse {
    fn new(profile: &PregnancyProfile, today: NaiveDate) -> Self {
        Self {
            user_id: profile.user_id,
            lmp_date: profile.lmp_date,
            current_week: profile.current_week(today),
            trimester: profile.trimester(today).map(|t| t.number()),
            due_date: profile.due_date(),
            weeks_remaining: profile.weeks_remaining(today),
        }
    }
}

/// Pregnancy profile routes
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create all profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/health/profile",
                get(Self::handle_get_profile).put(Self::handle_update_profile),
            )
            .with_state(resources)
    }

    /// Handle reading the caller's profile
    async fn handle_get_profile(
        State(resources): State<Arc<ServerResources>>,
        user: AuthenticatedUser,
    ) -> Result<Response, AppError> {
        let profile = resources
            .profile_store
            .get_profile(user.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Pregnancy profile"))?;

        let today = Utc::now().date_naive();
        Ok(Json(ProfileResponse::new(&profile, today)).into_response())
    }

    /// Handle creating or replacing the caller's profile
    async fn handle_update_profile(
        State(resources): State<Arc<ServerResources>>,
        user: AuthenticatedUser,
        Json(request): Json<UpdateProfileRequest>,
    ) -> Result<Response, AppError> {
        let today = Utc::now().date_naive();
        if request.lmp_date.is_some_and(|lmp| lmp > today) {
            return Err(AppError::invalid_input("lmp_date cannot be in the future"));
        }

        let profile = PregnancyProfile::new(user.user_id, request.lmp_date);
        resources
            .profile_store
            .upsert_profile(profile.clone())
            .await
            .map_err(|e| e.context("Failed to save profile"))?;

        AppLogger::log_profile_update(user.user_id, profile.lmp_date.is_some());
        Ok(Json(ProfileResponse::new(&profile, today)).into_response())
    }
}
