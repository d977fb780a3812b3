// ABOUTME: Pluggable source of wearable vitals for the HTTP handlers
// ABOUTME: Defines the VitalsSource trait and the seeded simulator-backed implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

use super::simulator::{ExerciseIntensity, HealthDataSimulator, TimeOfDay};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use prenatal_core::models::SimulatedVitals;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Mutex;
use tracing::debug;

/// What the caller wants a reading for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VitalsRequest {
    /// Gestational week of the user
    pub pregnancy_week: u32,
    /// Whether the user is currently exercising
    pub is_exercising: bool,
    /// Time-of-day adjustment, if any
    pub time_of_day: Option<TimeOfDay>,
    /// Session intensity; implies exercising and ignores `time_of_day`
    pub intensity: Option<ExerciseIntensity>,
}

impl VitalsRequest {
    /// A resting or exercising reading adjusted for the current time of day
    #[must_use]
    pub fn current(pregnancy_week: u32, is_exercising: bool) -> Self {
        Self {
            pregnancy_week,
            is_exercising,
            time_of_day: Some(TimeOfDay::now()),
            intensity: None,
        }
    }

    /// A reading taken mid-session, optionally at a known intensity
    #[must_use]
    pub const fn exercising(pregnancy_week: u32, intensity: Option<ExerciseIntensity>) -> Self {
        Self {
            pregnancy_week,
            is_exercising: true,
            time_of_day: None,
            intensity,
        }
    }
}

/// Source of current and historical vitals
///
/// The simulator implements this today; a device integration can replace it
/// without touching the handlers.
#[async_trait]
pub trait VitalsSource: Send + Sync {
    /// A single current reading
    async fn current_vitals(&self, request: VitalsRequest) -> AppResult<SimulatedVitals>;

    /// A resting series covering the last `days` days, oldest first
    async fn historical_vitals(
        &self,
        pregnancy_week: u32,
        days: u32,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<SimulatedVitals>>;
}

/// Simulator-backed vitals source
pub struct SimulatedVitalsSource {
    rng: Mutex<ChaCha8Rng>,
}

impl SimulatedVitalsSource {
    /// Create a source; a fixed seed makes the sequence reproducible
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn with_rng<T>(&self, generate: impl FnOnce(&mut ChaCha8Rng) -> T) -> AppResult<T> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| AppError::internal("Vitals simulator RNG lock poisoned"))?;
        Ok(generate(&mut *rng))
    }
}

#[async_trait]
impl VitalsSource for SimulatedVitalsSource {
    async fn current_vitals(&self, request: VitalsRequest) -> AppResult<SimulatedVitals> {
        let vitals = self.with_rng(|rng| match request.intensity {
            Some(intensity) => {
                HealthDataSimulator::generate_exercise_vitals(rng, request.pregnancy_week, intensity)
            }
            None => HealthDataSimulator::generate_vitals(
                rng,
                request.pregnancy_week,
                request.is_exercising,
                request.time_of_day,
            ),
        })?;

        debug!(
            pregnancy_week = request.pregnancy_week,
            is_exercising = request.is_exercising,
            heart_rate = vitals.snapshot.heart_rate,
            "Generated simulated vitals"
        );
        Ok(vitals)
    }

    async fn historical_vitals(
        &self,
        pregnancy_week: u32,
        days: u32,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<SimulatedVitals>> {
        self.with_rng(|rng| {
            HealthDataSimulator::generate_historical_data(rng, pregnancy_week, days, now)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_sources_agree() {
        let request = VitalsRequest {
            pregnancy_week: 30,
            is_exercising: false,
            time_of_day: Some(TimeOfDay::Afternoon),
            intensity: None,
        };
        let first = SimulatedVitalsSource::new(Some(42));
        let second = SimulatedVitalsSource::new(Some(42));

        for _ in 0..5 {
            assert_eq!(
                first.current_vitals(request).await.unwrap(),
                second.current_vitals(request).await.unwrap()
            );
        }
    }

    #[tokio::test]
    async fn test_low_intensity_caps_heart_rate() {
        let source = SimulatedVitalsSource::new(Some(7));
        let request = VitalsRequest::exercising(34, Some(ExerciseIntensity::Low));

        for _ in 0..50 {
            let vitals = source.current_vitals(request).await.unwrap();
            assert!(vitals.snapshot.heart_rate <= 100);
            assert!(vitals.daily_active_minutes >= 20);
        }
    }
}
