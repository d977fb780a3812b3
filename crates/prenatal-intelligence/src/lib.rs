// ABOUTME: Exercise safety intelligence for pregnant users
// ABOUTME: Fuses posture scores with wearable vitals into pause/continue verdicts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

#![deny(unsafe_code)]

//! # Prenatal Intelligence
//!
//! Stateless decision logic for the prenatal fitness platform:
//!
//! - **`safety_fusion`**: combines a live posture score with a vitals snapshot
//!   into a [`SafetyVerdict`] (continue/pause, severity, alerts, recommendations)
//! - **rules**: the ordered, independent rules the engine folds over
//! - **recommendations**: wellness recommendations for the health dashboard
//! - **config**: immutable threshold tables
//!
//! Nothing here performs I/O or holds shared state; every function is safe to
//! call concurrently from any number of request handlers.

/// Threshold configuration for the safety engine
pub mod config;

/// Dashboard wellness recommendations derived from current vitals
pub mod recommendations;

/// Individual safety rules evaluated by the fusion engine
pub mod rules;

/// Safety fusion engine and verdict types
pub mod safety_fusion;

pub use config::SafetyThresholds;
pub use recommendations::{health_recommendations, HealthRecommendation, HealthRecommendationType};
pub use safety_fusion::{
    color_for, message_for, AlertLevel, AlertPriority, RecommendationLevel, SafetyAlert,
    SafetyFusionEngine, SafetyLevel, SafetyMetrics, SafetyRecommendation, SafetyVerdict,
};
