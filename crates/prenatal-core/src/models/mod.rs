// ABOUTME: Core data models for vitals readings and pregnancy profiles
// ABOUTME: Re-exports model types shared by the intelligence crate and the server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

/// Pregnancy profile and trimester classification
pub mod pregnancy;
/// Vitals snapshots and stored vitals records
pub mod vitals;

pub use pregnancy::{PregnancyProfile, Trimester};
pub use vitals::{HealthVitalsRecord, SimulatedVitals, StressLevel, VitalsSnapshot};
