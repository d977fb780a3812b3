// ABOUTME: Independent safety rules combining posture and vitals thresholds
// ABOUTME: Each rule emits at most one alert or recommendation plus a proposed severity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

//! Safety rules
//!
//! Every rule sees the same inputs and none short-circuits another, so
//! several alerts and recommendations can co-occur. The engine evaluates
//! [`ORDERED_RULES`] in order; the order fixes the order of alerts and
//! recommendations in the verdict.

use crate::config::SafetyThresholds;
use crate::safety_fusion::{
    AlertLevel, AlertPriority, RecommendationLevel, SafetyAlert, SafetyLevel,
    SafetyRecommendation,
};
use prenatal_core::models::{StressLevel, VitalsSnapshot};

/// Inputs shared by every rule in one evaluation
#[derive(Debug, Clone, Copy)]
pub struct RuleInputs<'a> {
    /// Live posture score, nominally 0-100
    pub posture_score: f64,
    /// Current vitals
    pub vitals: &'a VitalsSnapshot,
}

impl RuleInputs<'_> {
    fn poor_posture(&self, thresholds: &SafetyThresholds) -> bool {
        self.posture_score < thresholds.posture_poor
    }

    fn good_posture(&self, thresholds: &SafetyThresholds) -> bool {
        self.posture_score > thresholds.posture_good
    }
}

/// What a single rule contributes to a verdict
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleOutcome {
    /// Alert to append, if the rule fired with one
    pub alert: Option<SafetyAlert>,
    /// Recommendation to append, if the rule fired with one
    pub recommendation: Option<SafetyRecommendation>,
    /// Severity this rule asks for; `Safe` leaves the level untouched
    pub proposed_level: SafetyLevel,
}

impl RuleOutcome {
    /// The rule did not fire
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    fn alert(
        level: AlertLevel,
        priority: AlertPriority,
        message: &str,
        action: &str,
        proposed_level: SafetyLevel,
    ) -> Self {
        Self {
            alert: Some(SafetyAlert {
                level,
                priority,
                message: message.to_owned(),
                action: action.to_owned(),
                should_pause: true,
            }),
            recommendation: None,
            proposed_level,
        }
    }

    fn recommendation(
        level: RecommendationLevel,
        message: &str,
        action: &str,
        proposed_level: SafetyLevel,
    ) -> Self {
        Self {
            alert: None,
            recommendation: Some(SafetyRecommendation {
                level,
                message: message.to_owned(),
                action: action.to_owned(),
            }),
            proposed_level,
        }
    }
}

/// A single safety check
pub trait SafetyRule: Sync {
    /// Stable identifier for logs and tests
    fn name(&self) -> &'static str;

    /// Check the inputs against the thresholds
    fn evaluate(&self, inputs: &RuleInputs<'_>, thresholds: &SafetyThresholds) -> RuleOutcome;
}

/// Poor posture while heart rate is elevated
pub struct PoorPostureElevatedHeartRate;

impl SafetyRule for PoorPostureElevatedHeartRate {
    fn name(&self) -> &'static str {
        "poor_posture_elevated_heart_rate"
    }

    fn evaluate(&self, inputs: &RuleInputs<'_>, thresholds: &SafetyThresholds) -> RuleOutcome {
        if inputs.poor_posture(thresholds) && inputs.vitals.heart_rate > thresholds.hr_high {
            RuleOutcome::alert(
                AlertLevel::Warning,
                AlertPriority::High,
                "Poor posture detected with elevated heart rate",
                "Please slow down and focus on proper form",
                SafetyLevel::Warning,
            )
        } else {
            RuleOutcome::none()
        }
    }
}

/// Heart rate above the danger ceiling
pub struct VeryHighHeartRate;

impl SafetyRule for VeryHighHeartRate {
    fn name(&self) -> &'static str {
        "very_high_heart_rate"
    }

    fn evaluate(&self, inputs: &RuleInputs<'_>, thresholds: &SafetyThresholds) -> RuleOutcome {
        if inputs.vitals.heart_rate > thresholds.hr_very_high {
            RuleOutcome::alert(
                AlertLevel::Danger,
                AlertPriority::Critical,
                "Heart rate is very high",
                "Stop exercise immediately and rest",
                SafetyLevel::Danger,
            )
        } else {
            RuleOutcome::none()
        }
    }
}

/// Elevated fatigue: a caution below the very-high mark, a pausing alert above it
pub struct HighFatigue;

impl SafetyRule for HighFatigue {
    fn name(&self) -> &'static str {
        "high_fatigue"
    }

    fn evaluate(&self, inputs: &RuleInputs<'_>, thresholds: &SafetyThresholds) -> RuleOutcome {
        let fatigue = inputs.vitals.fatigue_level;
        if fatigue <= thresholds.fatigue_high {
            return RuleOutcome::none();
        }

        if fatigue > thresholds.fatigue_very_high {
            RuleOutcome::alert(
                AlertLevel::Warning,
                AlertPriority::High,
                "Very high fatigue level detected",
                "Stop and rest. Do not push through fatigue",
                SafetyLevel::Warning,
            )
        } else {
            RuleOutcome::recommendation(
                RecommendationLevel::Caution,
                "Elevated fatigue detected",
                "Consider taking a break after this set",
                SafetyLevel::Caution,
            )
        }
    }
}

/// High stress; advisory only
pub struct HighStress;

impl SafetyRule for HighStress {
    fn name(&self) -> &'static str {
        "high_stress"
    }

    fn evaluate(&self, inputs: &RuleInputs<'_>, _thresholds: &SafetyThresholds) -> RuleOutcome {
        if inputs.vitals.stress_level == StressLevel::High {
            RuleOutcome::recommendation(
                RecommendationLevel::Info,
                "Elevated stress detected",
                "Try gentle exercises or breathing techniques instead",
                SafetyLevel::Safe,
            )
        } else {
            RuleOutcome::none()
        }
    }
}

/// Poor posture without elevated heart rate
pub struct PoorPosture;

impl SafetyRule for PoorPosture {
    fn name(&self) -> &'static str {
        "poor_posture"
    }

    fn evaluate(&self, inputs: &RuleInputs<'_>, thresholds: &SafetyThresholds) -> RuleOutcome {
        if inputs.poor_posture(thresholds) && inputs.vitals.heart_rate <= thresholds.hr_high {
            RuleOutcome::recommendation(
                RecommendationLevel::Caution,
                "Posture needs improvement",
                "Focus on form. Slow down if needed",
                SafetyLevel::Caution,
            )
        } else {
            RuleOutcome::none()
        }
    }
}

/// Blood oxygen below the normal floor
///
/// Proposes `Warning`, so under the max-fold it lifts safe or caution to
/// warning and leaves an existing warning or danger as it is.
pub struct LowBloodOxygen;

impl SafetyRule for LowBloodOxygen {
    fn name(&self) -> &'static str {
        "low_blood_oxygen"
    }

    fn evaluate(&self, inputs: &RuleInputs<'_>, thresholds: &SafetyThresholds) -> RuleOutcome {
        if inputs.vitals.spo2 < thresholds.spo2_low {
            RuleOutcome::alert(
                AlertLevel::Warning,
                AlertPriority::High,
                "Blood oxygen level is low",
                "Stop exercise and take deep breaths",
                SafetyLevel::Warning,
            )
        } else {
            RuleOutcome::none()
        }
    }
}

/// Good posture, optimal heart rate, low stress, and low fatigue
pub struct ExcellentConditions;

impl SafetyRule for ExcellentConditions {
    fn name(&self) -> &'static str {
        "excellent_conditions"
    }

    fn evaluate(&self, inputs: &RuleInputs<'_>, thresholds: &SafetyThresholds) -> RuleOutcome {
        let vitals = inputs.vitals;
        if inputs.good_posture(thresholds)
            && vitals.heart_rate < thresholds.hr_optimal_ceiling
            && vitals.stress_level == StressLevel::Low
            && vitals.fatigue_level < thresholds.fatigue_optimal_ceiling
        {
            RuleOutcome::recommendation(
                RecommendationLevel::Positive,
                "Excellent! All vitals are optimal",
                "You're doing great - continue at this pace",
                SafetyLevel::Safe,
            )
        } else {
            RuleOutcome::none()
        }
    }
}

/// Good posture with heart rate between the optimal ceiling and the high mark, inclusive
pub struct ModerateExertion;

impl SafetyRule for ModerateExertion {
    fn name(&self) -> &'static str {
        "moderate_exertion"
    }

    fn evaluate(&self, inputs: &RuleInputs<'_>, thresholds: &SafetyThresholds) -> RuleOutcome {
        let heart_rate = inputs.vitals.heart_rate;
        if inputs.good_posture(thresholds)
            && (thresholds.hr_optimal_ceiling..=thresholds.hr_high).contains(&heart_rate)
        {
            RuleOutcome::recommendation(
                RecommendationLevel::Info,
                "Good form with moderate intensity",
                "Maintain this pace for optimal benefits",
                SafetyLevel::Safe,
            )
        } else {
            RuleOutcome::none()
        }
    }
}

/// Rules in evaluation order
pub static ORDERED_RULES: &[&dyn SafetyRule] = &[
    &PoorPostureElevatedHeartRate,
    &VeryHighHeartRate,
    &HighFatigue,
    &HighStress,
    &PoorPosture,
    &LowBloodOxygen,
    &ExcellentConditions,
    &ModerateExertion,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn vitals(heart_rate: i32, spo2: i32, stress_level: StressLevel, fatigue: i32) -> VitalsSnapshot {
        VitalsSnapshot {
            heart_rate,
            spo2,
            stress_level,
            fatigue_level: fatigue,
        }
    }

    fn run(rule: &dyn SafetyRule, posture_score: f64, vitals: &VitalsSnapshot) -> RuleOutcome {
        let inputs = RuleInputs {
            posture_score,
            vitals,
        };
        rule.evaluate(&inputs, &SafetyThresholds::default())
    }

    #[test]
    fn test_rule_names_are_unique() {
        let mut names: Vec<_> = ORDERED_RULES.iter().map(|rule| rule.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ORDERED_RULES.len());
    }

    #[test]
    fn test_poor_posture_elevated_heart_rate_boundaries() {
        let fired = run(
            &PoorPostureElevatedHeartRate,
            69.9,
            &vitals(101, 98, StressLevel::Low, 30),
        );
        assert_eq!(fired.proposed_level, SafetyLevel::Warning);
        assert!(fired.alert.is_some_and(|alert| alert.should_pause));

        let at_threshold = run(
            &PoorPostureElevatedHeartRate,
            70.0,
            &vitals(110, 98, StressLevel::Low, 30),
        );
        assert_eq!(at_threshold, RuleOutcome::none());

        let hr_at_high = run(
            &PoorPostureElevatedHeartRate,
            50.0,
            &vitals(100, 98, StressLevel::Low, 30),
        );
        assert_eq!(hr_at_high, RuleOutcome::none());
    }

    #[test]
    fn test_very_high_heart_rate_is_danger() {
        let outcome = run(&VeryHighHeartRate, 90.0, &vitals(121, 98, StressLevel::Low, 30));
        let alert = outcome.alert.unwrap();
        assert_eq!(alert.level, AlertLevel::Danger);
        assert_eq!(alert.priority, AlertPriority::Critical);
        assert_eq!(outcome.proposed_level, SafetyLevel::Danger);

        let at_ceiling = run(&VeryHighHeartRate, 90.0, &vitals(120, 98, StressLevel::Low, 30));
        assert_eq!(at_ceiling, RuleOutcome::none());
    }

    #[test]
    fn test_high_fatigue_tiers() {
        let none = run(&HighFatigue, 90.0, &vitals(80, 98, StressLevel::Low, 70));
        assert_eq!(none, RuleOutcome::none());

        let caution = run(&HighFatigue, 90.0, &vitals(80, 98, StressLevel::Low, 85));
        assert!(caution.alert.is_none());
        assert_eq!(
            caution.recommendation.unwrap().level,
            RecommendationLevel::Caution
        );
        assert_eq!(caution.proposed_level, SafetyLevel::Caution);

        let warning = run(&HighFatigue, 90.0, &vitals(80, 98, StressLevel::Low, 86));
        assert!(warning.recommendation.is_none());
        assert_eq!(warning.alert.unwrap().level, AlertLevel::Warning);
        assert_eq!(warning.proposed_level, SafetyLevel::Warning);
    }

    #[test]
    fn test_high_stress_never_escalates() {
        let outcome = run(&HighStress, 90.0, &vitals(80, 98, StressLevel::High, 30));
        assert_eq!(outcome.proposed_level, SafetyLevel::Safe);
        assert_eq!(
            outcome.recommendation.unwrap().level,
            RecommendationLevel::Info
        );
        assert_eq!(
            run(&HighStress, 90.0, &vitals(80, 98, StressLevel::Medium, 30)),
            RuleOutcome::none()
        );
    }

    #[test]
    fn test_poor_posture_requires_normal_heart_rate() {
        let outcome = run(&PoorPosture, 50.0, &vitals(100, 98, StressLevel::Low, 30));
        assert_eq!(outcome.proposed_level, SafetyLevel::Caution);

        let elevated = run(&PoorPosture, 50.0, &vitals(101, 98, StressLevel::Low, 30));
        assert_eq!(elevated, RuleOutcome::none());
    }

    #[test]
    fn test_low_blood_oxygen_boundary() {
        let outcome = run(&LowBloodOxygen, 95.0, &vitals(80, 94, StressLevel::Low, 30));
        assert_eq!(outcome.proposed_level, SafetyLevel::Warning);
        assert_eq!(
            run(&LowBloodOxygen, 95.0, &vitals(80, 95, StressLevel::Low, 30)),
            RuleOutcome::none()
        );
    }

    #[test]
    fn test_excellent_and_moderate_partition_heart_rate() {
        let excellent = run(&ExcellentConditions, 86.0, &vitals(94, 98, StressLevel::Low, 49));
        assert_eq!(
            excellent.recommendation.unwrap().level,
            RecommendationLevel::Positive
        );
        assert_eq!(
            run(&ExcellentConditions, 86.0, &vitals(95, 98, StressLevel::Low, 49)),
            RuleOutcome::none()
        );
        assert_eq!(
            run(&ExcellentConditions, 86.0, &vitals(80, 98, StressLevel::Low, 50)),
            RuleOutcome::none()
        );

        let moderate = run(&ModerateExertion, 86.0, &vitals(95, 98, StressLevel::High, 90));
        assert_eq!(moderate.proposed_level, SafetyLevel::Safe);
        assert_eq!(
            moderate.recommendation.unwrap().level,
            RecommendationLevel::Info
        );
        assert!(run(&ModerateExertion, 86.0, &vitals(100, 98, StressLevel::Low, 30))
            .recommendation
            .is_some());
        assert_eq!(
            run(&ModerateExertion, 85.0, &vitals(97, 98, StressLevel::Low, 30)),
            RuleOutcome::none()
        );
    }
}
