// ABOUTME: Pregnancy profile storage used to derive the user's gestational week
// ABOUTME: Defines the ProfileStore trait and a concurrent in-memory implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

use crate::errors::AppResult;
use async_trait::async_trait;
use dashmap::DashMap;
use prenatal_core::models::PregnancyProfile;
use uuid::Uuid;

/// Pregnancy profiles keyed by user
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// The user's profile, if one was saved
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<PregnancyProfile>>;

    /// Insert or replace the user's profile
    async fn upsert_profile(&self, profile: PregnancyProfile) -> AppResult<()>;
}

/// `DashMap`-backed profile store, lost on restart
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: DashMap<Uuid, PregnancyProfile>,
}

impl InMemoryProfileStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<PregnancyProfile>> {
        Ok(self
            .profiles
            .get(&user_id)
            .map(|entry| entry.value().clone()))
    }

    async fn upsert_profile(&self, profile: PregnancyProfile) -> AppResult<()> {
        self.profiles.insert(profile.user_id, profile);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_upsert_replaces_existing_profile() {
        let store = InMemoryProfileStore::new();
        let user_id = Uuid::new_v4();

        store
            .upsert_profile(PregnancyProfile::new(user_id, None))
            .await
            .unwrap();
        let lmp = NaiveDate::from_ymd_opt(2026, 3, 1);
        store
            .upsert_profile(PregnancyProfile::new(user_id, lmp))
            .await
            .unwrap();

        let profile = store.get_profile(user_id).await.unwrap().unwrap();
        assert_eq!(profile.lmp_date, lmp);
        assert!(store.get_profile(Uuid::new_v4()).await.unwrap().is_none());
    }
}
