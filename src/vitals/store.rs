// ABOUTME: Storage for recorded vitals readings per user
// ABOUTME: Defines the VitalsStore trait and a concurrent in-memory implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

use crate::errors::AppResult;
use async_trait::async_trait;
use dashmap::DashMap;
use prenatal_core::models::HealthVitalsRecord;
use std::cmp::Reverse;
use uuid::Uuid;

/// Recorded vitals history
#[async_trait]
pub trait VitalsStore: Send + Sync {
    /// Persist one reading
    async fn save(&self, record: HealthVitalsRecord) -> AppResult<()>;

    /// Up to `limit` readings for `user_id`, newest first
    async fn recent(&self, user_id: Uuid, limit: usize) -> AppResult<Vec<HealthVitalsRecord>>;
}

/// `DashMap`-backed vitals history, lost on restart
#[derive(Default)]
pub struct InMemoryVitalsStore {
    records: DashMap<Uuid, Vec<HealthVitalsRecord>>,
}

impl InMemoryVitalsStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VitalsStore for InMemoryVitalsStore {
    async fn save(&self, record: HealthVitalsRecord) -> AppResult<()> {
        self.records.entry(record.user_id).or_default().push(record);
        Ok(())
    }

    async fn recent(&self, user_id: Uuid, limit: usize) -> AppResult<Vec<HealthVitalsRecord>> {
        let Some(records) = self.records.get(&user_id) else {
            return Ok(Vec::new());
        };

        let mut recent = records.value().clone();
        drop(records);
        recent.sort_by_key(|record| Reverse(record.timestamp));
        recent.truncate(limit);
        Ok(recent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use prenatal_core::models::StressLevel;

    fn record(user_id: Uuid, minutes_ago: i64, heart_rate: i32) -> HealthVitalsRecord {
        HealthVitalsRecord {
            id: Uuid::new_v4(),
            user_id,
            timestamp: Utc::now() - Duration::minutes(minutes_ago),
            heart_rate,
            spo2: 98,
            stress_level: StressLevel::Low,
            fatigue_level: 30,
            daily_active_minutes: 20,
            is_simulated: true,
        }
    }

    #[tokio::test]
    async fn test_recent_is_newest_first_and_limited() {
        let store = InMemoryVitalsStore::new();
        let user_id = Uuid::new_v4();
        store.save(record(user_id, 30, 81)).await.unwrap();
        store.save(record(user_id, 10, 83)).await.unwrap();
        store.save(record(user_id, 20, 82)).await.unwrap();
        store.save(record(Uuid::new_v4(), 0, 99)).await.unwrap();

        let recent = store.recent(user_id, 2).await.unwrap();
        let rates: Vec<_> = recent.iter().map(|r| r.heart_rate).collect();
        assert_eq!(rates, vec![83, 82]);
    }

    #[tokio::test]
    async fn test_unknown_user_has_no_history() {
        let store = InMemoryVitalsStore::new();
        assert!(store.recent(Uuid::new_v4(), 24).await.unwrap().is_empty());
    }
}
