// ABOUTME: Core types and constants for the prenatal fitness safety platform
// ABOUTME: Foundation crate with error handling, vitals and pregnancy models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

#![deny(unsafe_code)]

//! # Prenatal Core
//!
//! Foundation crate providing shared types and constants for the prenatal
//! fitness platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Default vitals, ports, and service identifiers
//! - **models**: Vitals snapshots, stored vitals records, and pregnancy profiles

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (vitals, pregnancy profile, trimester)
pub mod models;
