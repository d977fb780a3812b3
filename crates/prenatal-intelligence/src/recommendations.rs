// ABOUTME: Wellness recommendations for the health dashboard based on current vitals
// ABOUTME: Flags stress, fatigue, low activity, and resting heart rate, or praises good readings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

use prenatal_core::models::{SimulatedVitals, StressLevel};
use serde::{Deserialize, Serialize};

const HIGH_FATIGUE: i32 = 70;
const LOW_ACTIVE_MINUTES: i32 = 20;
const HIGH_RESTING_HEART_RATE: i32 = 100;
const POSITIVE_MAX_FATIGUE: i32 = 50;
const POSITIVE_MIN_SPO2: i32 = 97;

/// What a dashboard recommendation is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthRecommendationType {
    /// Elevated stress
    Stress,
    /// High fatigue
    Fatigue,
    /// Not enough activity today
    Activity,
    /// Elevated resting heart rate
    HeartRate,
    /// Everything looks good
    Positive,
}

/// A dashboard recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthRecommendation {
    /// Topic
    #[serde(rename = "type")]
    pub kind: HealthRecommendationType,
    /// What was observed
    pub message: String,
    /// Suggested action
    pub action: String,
}

impl HealthRecommendation {
    fn new(kind: HealthRecommendationType, message: &str, action: &str) -> Self {
        Self {
            kind,
            message: message.to_owned(),
            action: action.to_owned(),
        }
    }
}

/// Recommendations for the dashboard, in a fixed topic order
///
/// The heart rate check only applies at rest; an elevated rate during
/// exercise is the safety engine's concern.
#[must_use]
pub fn health_recommendations(
    vitals: &SimulatedVitals,
    is_exercising: bool,
) -> Vec<HealthRecommendation> {
    let snapshot = &vitals.snapshot;
    let mut recommendations = Vec::new();

    if snapshot.stress_level == StressLevel::High {
        recommendations.push(HealthRecommendation::new(
            HealthRecommendationType::Stress,
            "Your stress level is elevated",
            "Try gentle breathing exercises or prenatal yoga",
        ));
    }

    if snapshot.fatigue_level > HIGH_FATIGUE {
        recommendations.push(HealthRecommendation::new(
            HealthRecommendationType::Fatigue,
            "High fatigue detected",
            "Ensure adequate rest and stay hydrated",
        ));
    }

    if vitals.daily_active_minutes < LOW_ACTIVE_MINUTES {
        recommendations.push(HealthRecommendation::new(
            HealthRecommendationType::Activity,
            "Low activity today",
            "Try a gentle 15-minute walk if feeling well",
        ));
    }

    if snapshot.heart_rate > HIGH_RESTING_HEART_RATE && !is_exercising {
        recommendations.push(HealthRecommendation::new(
            HealthRecommendationType::HeartRate,
            "Elevated resting heart rate",
            "Rest and monitor. Consult doctor if persistent",
        ));
    }

    if snapshot.stress_level == StressLevel::Low
        && snapshot.fatigue_level < POSITIVE_MAX_FATIGUE
        && snapshot.spo2 >= POSITIVE_MIN_SPO2
    {
        recommendations.push(HealthRecommendation::new(
            HealthRecommendationType::Positive,
            "Great job! All vitals look excellent",
            "Keep up the healthy routine",
        ));
    }

    recommendations
}
