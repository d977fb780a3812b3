// ABOUTME: HTTP middleware for caller identity, CORS, and request tracing
// ABOUTME: Provides the identity extractor, CORS layer, request IDs, and per-request spans

/// Caller identity extraction
pub mod auth;
/// Cross-origin configuration
pub mod cors;
/// Request IDs and spans
pub mod tracing;

pub use self::auth::{AuthenticatedUser, USER_ID_HEADER};
pub use self::cors::setup_cors;
pub use self::tracing::{create_request_span, with_request_tracing, REQUEST_ID_HEADER};
