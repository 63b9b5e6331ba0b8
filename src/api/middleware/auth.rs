//! Caller identity middleware.
//!
//! Authentication happens upstream. This layer only insists that a bearer
//! token was forwarded, and injects a `CallerContext` built from it into
//! request extensions for downstream handlers.

use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::api::error::ApiError;
use crate::api::types::CallerContext;

/// Require `Authorization: Bearer <token>` with a non-blank token.
pub async fn require_caller(req: Request<axum::body::Body>, next: Next) -> Response {
    match require_caller_inner(req, next).await {
        Ok(resp) => resp,
        Err(err) => err.into_response(),
    }
}

async fn require_caller_inner(
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::Unauthorized)?;

    let caller = CallerContext::from_token(token);
    req.extensions_mut().insert(caller);

    Ok(next.run(req).await)
}
