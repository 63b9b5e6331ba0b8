//! Symptom check endpoint.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::checker::{check_request, parse_request};
use crate::models::PredictionResponse;

/// `POST /api/predict_disease`: rank candidate diseases for 4 to 6 symptoms.
///
/// The body is parsed by hand so that every malformed payload maps to
/// `INVALID_PAYLOAD` (400) instead of axum's extractor rejections.
/// Catalog loading and scoring are blocking, so they run on the
/// blocking pool.
pub async fn predict(
    State(ctx): State<ApiContext>,
    body: Bytes,
) -> Result<Json<PredictionResponse>, ApiError> {
    let request = parse_request(&body)?;

    let response = tokio::task::spawn_blocking(move || {
        let mut rng = ctx.rng();
        check_request(&request, ctx.catalog.as_ref(), &mut rng)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Symptom check task failed: {e}")))??;

    Ok(Json(response))
}
