// ABOUTME: Centralized resource container shared by all HTTP routes
// ABOUTME: Holds configuration, the safety engine, the vitals source, and the stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

use crate::config::environment::ServerConfig;
use crate::errors::AppResult;
use crate::profiles::{InMemoryProfileStore, ProfileStore};
use crate::vitals::{InMemoryVitalsStore, SimulatedVitalsSource, VitalsSource, VitalsStore};
use chrono::Utc;
use prenatal_core::constants::request_defaults;
use prenatal_intelligence::SafetyFusionEngine;
use std::sync::Arc;
use uuid::Uuid;

/// Centralized resource container for dependency injection
///
/// Cloning is cheap: every collaborator sits behind an `Arc` and the engine
/// is a small `Copy` value.
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded server configuration
    pub config: Arc<ServerConfig>,
    /// Safety engine built from the configured thresholds
    pub safety_engine: SafetyFusionEngine,
    /// Wearable feed
    pub vitals_source: Arc<dyn VitalsSource>,
    /// Recorded vitals history
    pub vitals_store: Arc<dyn VitalsStore>,
    /// Pregnancy profiles
    pub profile_store: Arc<dyn ProfileStore>,
}

impl ServerResources {
    /// Create resources backed by the simulator and in-memory stores
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let vitals_source = SimulatedVitalsSource::new(config.simulator.seed);
        Self {
            safety_engine: SafetyFusionEngine::new(config.safety),
            config: Arc::new(config),
            vitals_source: Arc::new(vitals_source),
            vitals_store: Arc::new(InMemoryVitalsStore::new()),
            profile_store: Arc::new(InMemoryProfileStore::new()),
        }
    }

    /// Replace the vitals source
    #[must_use]
    pub fn with_vitals_source(mut self, vitals_source: Arc<dyn VitalsSource>) -> Self {
        self.vitals_source = vitals_source;
        self
    }

    /// Replace the vitals store
    #[must_use]
    pub fn with_vitals_store(mut self, vitals_store: Arc<dyn VitalsStore>) -> Self {
        self.vitals_store = vitals_store;
        self
    }

    /// Replace the profile store
    #[must_use]
    pub fn with_profile_store(mut self, profile_store: Arc<dyn ProfileStore>) -> Self {
        self.profile_store = profile_store;
        self
    }

    /// The user's gestational week today
    ///
    /// Falls back to week 20 when the user has no profile or no LMP date.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile store fails
    pub async fn pregnancy_week(&self, user_id: Uuid) -> AppResult<u32> {
        let today = Utc::now().date_naive();
        Ok(self
            .profile_store
            .get_profile(user_id)
            .await?
            .and_then(|profile| profile.current_week(today))
            .unwrap_or(request_defaults::PREGNANCY_WEEK))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use prenatal_core::models::PregnancyProfile;

    #[tokio::test]
    async fn test_pregnancy_week_defaults_without_profile() {
        let resources = ServerResources::new(ServerConfig::default());
        let user_id = Uuid::new_v4();

        assert_eq!(resources.pregnancy_week(user_id).await.unwrap(), 20);

        resources
            .profile_store
            .upsert_profile(PregnancyProfile::new(user_id, None))
            .await
            .unwrap();
        assert_eq!(resources.pregnancy_week(user_id).await.unwrap(), 20);
    }

    #[tokio::test]
    async fn test_pregnancy_week_from_lmp() {
        let resources = ServerResources::new(ServerConfig::default());
        let user_id = Uuid::new_v4();
        let lmp = Utc::now().date_naive() - Duration::days(12 * 7 + 3);

        resources
            .profile_store
            .upsert_profile(PregnancyProfile::new(user_id, Some(lmp)))
            .await
            .unwrap();
        assert_eq!(resources.pregnancy_week(user_id).await.unwrap(), 12);
    }
}
