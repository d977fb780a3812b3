// ABOUTME: Caller identity extraction for authenticated API routes
// ABOUTME: Reads the gateway-supplied x-user-id header and records it on the request span
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

//! Caller identity
//!
//! Token validation happens in the authenticating gateway in front of this
//! service. The gateway forwards the authenticated user's ID in `x-user-id`;
//! handlers take [`AuthenticatedUser`] as an extractor to require it.

use crate::errors::AppError;
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use http::request::Parts;
use tracing::Span;
use uuid::Uuid;

/// Header carrying the authenticated user's ID
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// User ID from the gateway
    pub user_id: Uuid,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or_else(AppError::auth_required)?;

        let raw = header
            .to_str()
            .map_err(|_| AppError::auth_invalid(format!("{USER_ID_HEADER} header is not valid text")))?;

        let user_id = Uuid::parse_str(raw.trim()).map_err(|e| {
            AppError::auth_invalid(format!("{USER_ID_HEADER} header is not a valid UUID: {e}"))
        })?;

        Span::current().record("user_id", user_id.to_string());
        Ok(Self { user_id })
    }
}
