// ABOUTME: Safety threshold configuration for the exercise safety fusion engine
// ABOUTME: Immutable posture, heart rate, fatigue, and SpO2 limits with production defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

//! Safety Threshold Configuration
//!
//! The engine never mutates these values. Deployments may override individual
//! fields at startup and tests may construct custom tables; everything else
//! uses [`SafetyThresholds::default`].

use serde::{Deserialize, Serialize};

/// Named thresholds consulted by the safety rules
///
/// Comparisons are strict unless noted on the rule that uses them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyThresholds {
    /// Posture below this is poor
    pub posture_poor: f64,
    /// Posture above this is good
    pub posture_good: f64,
    /// Heart rate above this is elevated (BPM)
    pub hr_high: i32,
    /// Heart rate above this is dangerous (BPM)
    pub hr_very_high: i32,
    /// Fatigue above this is elevated
    pub fatigue_high: i32,
    /// Fatigue above this forces a pause
    pub fatigue_very_high: i32,
    /// SpO2 below this is low (percent)
    pub spo2_low: i32,
    /// Heart rate below this counts as optimal; at or above it is moderate exertion
    pub hr_optimal_ceiling: i32,
    /// Fatigue below this counts as well rested
    pub fatigue_optimal_ceiling: i32,
}

impl Default for SafetyThresholds {
    fn default() -> Self {
        Self {
            posture_poor: 70.0,
            posture_good: 85.0,
            hr_high: 100,
            hr_very_high: 120,
            fatigue_high: 70,
            fatigue_very_high: 85,
            spo2_low: 95,
            hr_optimal_ceiling: 95,
            fatigue_optimal_ceiling: 50,
        }
    }
}
