// ABOUTME: Vitals module covering the wearable feed and recorded history
// ABOUTME: Exposes the simulator, the pluggable vitals source, and the vitals store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

/// Pregnancy-adjusted vitals generator
pub mod simulator;
/// Pluggable current/historical vitals feed
pub mod source;
/// Recorded vitals history
pub mod store;

pub use simulator::{ExerciseIntensity, HealthDataSimulator, TimeOfDay};
pub use source::{SimulatedVitalsSource, VitalsRequest, VitalsSource};
pub use store::{InMemoryVitalsStore, VitalsStore};
