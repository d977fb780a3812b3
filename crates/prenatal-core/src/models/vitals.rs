// ABOUTME: Vitals data models for simulated or device-derived wearable readings
// ABOUTME: Defines VitalsSnapshot, SimulatedVitals, StressLevel, and HealthVitalsRecord
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

//! Vitals models.
//!
//! Numeric readings are kept as signed integers and never clamped: a reading
//! is whatever the source produced, and downstream threshold comparisons are
//! responsible for interpreting it.

use crate::constants::{reference_ranges, vitals_defaults};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Perceived stress level reported by the wearable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    /// Low stress
    #[default]
    Low,
    /// Medium stress
    Medium,
    /// High stress
    High,
}

impl StressLevel {
    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StressLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown stress level: {other}")),
        }
    }
}

/// Point-in-time physiological readings
///
/// Missing fields fall back to the system-wide defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VitalsSnapshot {
    /// Heart rate in BPM
    pub heart_rate: i32,
    /// Blood oxygen saturation percentage
    pub spo2: i32,
    /// Perceived stress
    pub stress_level: StressLevel,
    /// Fatigue on a 0-100 scale, higher is more fatigued
    pub fatigue_level: i32,
}

impl Default for VitalsSnapshot {
    fn default() -> Self {
        Self {
            heart_rate: vitals_defaults::HEART_RATE,
            spo2: vitals_defaults::SPO2,
            stress_level: StressLevel::Low,
            fatigue_level: vitals_defaults::FATIGUE_LEVEL,
        }
    }
}

/// Vitals produced by the simulator, with generation metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatedVitals {
    /// The readings themselves
    #[serde(flatten)]
    pub snapshot: VitalsSnapshot,
    /// Active minutes accumulated today
    pub daily_active_minutes: i32,
    /// Always true for simulator output
    pub is_simulated: bool,
    /// Pregnancy week the readings were generated for
    pub pregnancy_week: u32,
    /// Human-readable trimester label, e.g. "Second Trimester"
    pub trimester: String,
    /// Generation time, set for historical series
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// A stored vitals reading with derived health indicators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthVitalsRecord {
    /// Record identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// When the reading was stored
    pub timestamp: DateTime<Utc>,
    /// Heart rate in BPM
    pub heart_rate: i32,
    /// Blood oxygen saturation percentage
    pub spo2: i32,
    /// Perceived stress
    pub stress_level: StressLevel,
    /// Fatigue on a 0-100 scale
    pub fatigue_level: i32,
    /// Active minutes accumulated today
    pub daily_active_minutes: i32,
    /// Whether the reading came from the simulator
    pub is_simulated: bool,
}

impl HealthVitalsRecord {
    /// Build a record for `user_id` from simulator output, stamped now
    #[must_use]
    pub fn from_simulated(user_id: Uuid, vitals: &SimulatedVitals) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            timestamp: Utc::now(),
            heart_rate: vitals.snapshot.heart_rate,
            spo2: vitals.snapshot.spo2,
            stress_level: vitals.snapshot.stress_level,
            fatigue_level: vitals.snapshot.fatigue_level,
            daily_active_minutes: vitals.daily_active_minutes,
            is_simulated: vitals.is_simulated,
        }
    }

    /// Heart rate within the pregnancy-adjusted normal range (70-110 BPM)
    #[must_use]
    pub const fn is_heart_rate_normal(&self) -> bool {
        self.heart_rate >= reference_ranges::HEART_RATE_NORMAL_MIN
            && self.heart_rate <= reference_ranges::HEART_RATE_NORMAL_MAX
    }

    /// SpO2 at or above 95%
    #[must_use]
    pub const fn is_spo2_normal(&self) -> bool {
        self.spo2 >= reference_ranges::SPO2_NORMAL_MIN
    }

    /// Energy level, the inverse of fatigue
    #[must_use]
    pub const fn energy_level(&self) -> i32 {
        100 - self.fatigue_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(heart_rate: i32, spo2: i32, fatigue_level: i32) -> HealthVitalsRecord {
        HealthVitalsRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            heart_rate,
            spo2,
            stress_level: StressLevel::Low,
            fatigue_level,
            daily_active_minutes: 30,
            is_simulated: true,
        }
    }

    #[test]
    fn test_snapshot_defaults_fill_missing_fields() {
        let snapshot: VitalsSnapshot = serde_json::from_str(r#"{"heart_rate": 110}"#).unwrap();
        assert_eq!(snapshot.heart_rate, 110);
        assert_eq!(snapshot.spo2, 98);
        assert_eq!(snapshot.stress_level, StressLevel::Low);
        assert_eq!(snapshot.fatigue_level, 30);
    }

    #[test]
    fn test_stress_level_parsing() {
        assert_eq!("HIGH".parse::<StressLevel>().unwrap(), StressLevel::High);
        assert!("extreme".parse::<StressLevel>().is_err());
        assert_eq!(serde_json::to_string(&StressLevel::Medium).unwrap(), "\"medium\"");
    }

    #[test]
    fn test_derived_indicators() {
        let normal = record(90, 97, 30);
        assert!(normal.is_heart_rate_normal());
        assert!(normal.is_spo2_normal());
        assert_eq!(normal.energy_level(), 70);

        let edges = record(110, 95, 100);
        assert!(edges.is_heart_rate_normal());
        assert!(edges.is_spo2_normal());
        assert_eq!(edges.energy_level(), 0);

        let abnormal = record(111, 94, 30);
        assert!(!abnormal.is_heart_rate_normal());
        assert!(!abnormal.is_spo2_normal());
        assert!(!record(69, 98, 30).is_heart_rate_normal());
    }

    #[test]
    fn test_simulated_vitals_flatten_snapshot() {
        let vitals = SimulatedVitals {
            snapshot: VitalsSnapshot::default(),
            daily_active_minutes: 25,
            is_simulated: true,
            pregnancy_week: 20,
            trimester: "Second Trimester".to_owned(),
            timestamp: None,
        };
        let json = serde_json::to_value(&vitals).unwrap();
        assert_eq!(json["heart_rate"], 80);
        assert_eq!(json["stress_level"], "low");
        assert_eq!(json["trimester"], "Second Trimester");
        assert!(json.get("timestamp").is_none());
    }
}
