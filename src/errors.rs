// ABOUTME: Unified error handling for the server package
// ABOUTME: Re-exports the shared error taxonomy so handlers and binaries use one error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

//! Every fallible server operation returns [`AppResult`]. The HTTP mapping
//! lives with the type in `prenatal_core` behind its `http-response` feature.

pub use prenatal_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
