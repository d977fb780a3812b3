// ABOUTME: Safety fusion engine combining exercise posture with wearable vitals
// ABOUTME: Produces continue/pause verdicts with severity, alerts, and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

//! # Safety Fusion Engine
//!
//! Evaluates every rule in [`crate::rules::ORDERED_RULES`] against the same
//! inputs, collects whatever alerts and recommendations they emit, and folds
//! their proposed severities with `max`. The fold makes the escalation
//! invariant structural: a later rule can raise the level but never lower it.
//!
//! Inputs are not validated. Out-of-range values (negative heart rate, posture
//! above 100) flow through the threshold comparisons unchanged.

use crate::config::SafetyThresholds;
use crate::rules::{RuleInputs, ORDERED_RULES};
use prenatal_core::constants::safety_colors;
use prenatal_core::models::{StressLevel, VitalsSnapshot};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Message shown for unrecognized safety levels
const UNKNOWN_LEVEL_MESSAGE: &str = "Monitoring your safety...";

/// Ordered severity classification: safe < caution < warning < danger
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    /// No concerns
    #[default]
    Safe,
    /// Advisory concerns, exercise may continue
    Caution,
    /// Exercise should stop
    Warning,
    /// Exercise must stop immediately
    Danger,
}

impl SafetyLevel {
    /// All levels in ascending severity
    pub const ALL: [Self; 4] = [Self::Safe, Self::Caution, Self::Warning, Self::Danger];

    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Caution => "caution",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    /// Whether exercise may continue at this level
    #[must_use]
    pub const fn is_safe_to_continue(self) -> bool {
        matches!(self, Self::Safe | Self::Caution)
    }

    /// Display colour for this level
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Safe => safety_colors::SAFE,
            Self::Caution => safety_colors::CAUTION,
            Self::Warning => safety_colors::WARNING,
            Self::Danger => safety_colors::DANGER,
        }
    }

    /// User-facing message for this level
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Safe => "All systems go! You're exercising safely.",
            Self::Caution => "Be mindful of your form and intensity.",
            Self::Warning => "Please slow down or take a break.",
            Self::Danger => "Stop immediately and rest.",
        }
    }
}

impl fmt::Display for SafetyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SafetyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("unknown safety level: {s}"))
    }
}

/// Colour code for a level name, gray for anything unrecognized
#[must_use]
pub fn color_for(level: &str) -> &'static str {
    level
        .parse::<SafetyLevel>()
        .map_or(safety_colors::UNKNOWN, SafetyLevel::color)
}

/// User-facing message for a level name, with a neutral fallback
#[must_use]
pub fn message_for(level: &str) -> &'static str {
    level
        .parse::<SafetyLevel>()
        .map_or(UNKNOWN_LEVEL_MESSAGE, SafetyLevel::message)
}

/// Severity of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    /// Stop and recover
    Warning,
    /// Stop immediately
    Danger,
}

/// Urgency of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    /// Act soon
    High,
    /// Act now
    Critical,
}

/// A result item that may force the session to pause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyAlert {
    /// Alert severity
    pub level: AlertLevel,
    /// Alert urgency
    pub priority: AlertPriority,
    /// What was detected
    pub message: String,
    /// What the user should do
    pub action: String,
    /// Whether the client must pause the session
    pub should_pause: bool,
}

/// Tone of an advisory recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationLevel {
    /// Neutral information
    Info,
    /// Mild concern
    Caution,
    /// Encouragement
    Positive,
}

/// Advisory result item, never forces a pause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyRecommendation {
    /// Recommendation tone
    pub level: RecommendationLevel,
    /// What was observed
    pub message: String,
    /// Suggested action
    pub action: String,
}

/// The inputs echoed back with every verdict
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyMetrics {
    /// Posture score as supplied
    pub posture_score: f64,
    /// Heart rate in BPM
    pub heart_rate: i32,
    /// Perceived stress
    pub stress_level: StressLevel,
    /// Fatigue on a 0-100 scale
    pub fatigue_level: i32,
    /// Blood oxygen saturation percentage
    pub spo2: i32,
    /// Rep counter as supplied
    pub current_reps: i64,
}

/// Outcome of one safety evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyVerdict {
    /// True iff `safety_level` is safe or caution
    pub safe_to_continue: bool,
    /// True iff any alert requests a pause
    pub should_pause: bool,
    /// Highest severity reached by any rule
    pub safety_level: SafetyLevel,
    /// Alerts in rule order
    pub alerts: Vec<SafetyAlert>,
    /// Recommendations in rule order
    pub recommendations: Vec<SafetyRecommendation>,
    /// Inputs echoed back
    pub metrics: SafetyMetrics,
}

/// Rule-based evaluator fusing posture with vitals
///
/// Holds only its threshold table, so it is `Copy` and can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SafetyFusionEngine {
    thresholds: SafetyThresholds,
}

impl SafetyFusionEngine {
    /// Create an engine with a custom threshold table
    #[must_use]
    pub const fn new(thresholds: SafetyThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds this engine evaluates against
    #[must_use]
    pub const fn thresholds(&self) -> &SafetyThresholds {
        &self.thresholds
    }

    /// Evaluate every rule and fold the results into a verdict
    #[must_use]
    pub fn evaluate(
        &self,
        posture_score: f64,
        vitals: &VitalsSnapshot,
        current_reps: i64,
    ) -> SafetyVerdict {
        let inputs = RuleInputs {
            posture_score,
            vitals,
        };

        let mut safety_level = SafetyLevel::Safe;
        let mut alerts = Vec::new();
        let mut recommendations = Vec::new();

        for rule in ORDERED_RULES {
            let outcome = rule.evaluate(&inputs, &self.thresholds);
            if outcome.alert.is_some() || outcome.recommendation.is_some() {
                trace!(
                    safety.rule = rule.name(),
                    safety.proposed_level = %outcome.proposed_level,
                    "Safety rule fired"
                );
            }
            safety_level = safety_level.max(outcome.proposed_level);
            alerts.extend(outcome.alert);
            recommendations.extend(outcome.recommendation);
        }

        let should_pause = alerts.iter().any(|alert| alert.should_pause);

        debug!(
            safety.level = %safety_level,
            safety.alerts = alerts.len(),
            safety.recommendations = recommendations.len(),
            safety.should_pause = should_pause,
            "Evaluated exercise safety"
        );

        SafetyVerdict {
            safe_to_continue: safety_level.is_safe_to_continue(),
            should_pause,
            safety_level,
            alerts,
            recommendations,
            metrics: SafetyMetrics {
                posture_score,
                heart_rate: vitals.heart_rate,
                stress_level: vitals.stress_level,
                fatigue_level: vitals.fatigue_level,
                spo2: vitals.spo2,
                current_reps,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        assert!(SafetyLevel::Safe < SafetyLevel::Caution);
        assert!(SafetyLevel::Caution < SafetyLevel::Warning);
        assert!(SafetyLevel::Warning < SafetyLevel::Danger);
        assert_eq!(SafetyLevel::default(), SafetyLevel::Safe);
    }

    #[test]
    fn test_safe_to_continue_by_level() {
        assert!(SafetyLevel::Safe.is_safe_to_continue());
        assert!(SafetyLevel::Caution.is_safe_to_continue());
        assert!(!SafetyLevel::Warning.is_safe_to_continue());
        assert!(!SafetyLevel::Danger.is_safe_to_continue());
    }

    #[test]
    fn test_color_lookup_is_total() {
        assert_eq!(color_for("safe"), "#10B981");
        assert_eq!(color_for("caution"), "#F59E0B");
        assert_eq!(color_for("warning"), "#EF4444");
        assert_eq!(color_for("danger"), "#DC2626");
        assert_eq!(color_for("unknown"), "#6B7280");
        assert_eq!(color_for(""), "#6B7280");
    }

    #[test]
    fn test_message_lookup_is_total() {
        for level in SafetyLevel::ALL {
            assert!(!message_for(level.as_str()).is_empty());
        }
        assert_eq!(message_for("danger"), "Stop immediately and rest.");
        assert_eq!(message_for("SAFE"), "Monitoring your safety...");
    }

    #[test]
    fn test_level_round_trips_through_wire_name() {
        for level in SafetyLevel::ALL {
            assert_eq!(level.as_str().parse::<SafetyLevel>(), Ok(level));
        }
    }

    #[test]
    fn test_metrics_echo_inputs() {
        let vitals = VitalsSnapshot {
            heart_rate: -5,
            spo2: 150,
            stress_level: StressLevel::Medium,
            fatigue_level: 10,
        };
        let verdict = SafetyFusionEngine::default().evaluate(140.0, &vitals, 12);

        assert_eq!(verdict.metrics.heart_rate, -5);
        assert_eq!(verdict.metrics.spo2, 150);
        assert_eq!(verdict.metrics.current_reps, 12);
        assert_eq!(verdict.metrics.stress_level, StressLevel::Medium);
    }
}
