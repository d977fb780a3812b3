// ABOUTME: Configuration types for the prenatal intelligence engine
// ABOUTME: Re-exports the safety threshold table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

/// Safety threshold table
pub mod safety;

pub use safety::SafetyThresholds;
