use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use tracing::debug;

use super::domain::EstimateResult;
use super::engine::estimate;
use super::intake::SupportEstimateForm;
use crate::error::AppError;

pub const ESTIMATE_ROUTE: &str = "/api/v1/support/estimate";

/// Router exposing the stateless support estimator. Nothing submitted here is
/// stored.
pub fn support_router() -> Router {
    Router::new().route(ESTIMATE_ROUTE, post(estimate_handler))
}

pub(crate) async fn estimate_handler(
    payload: Result<Json<SupportEstimateForm>, JsonRejection>,
) -> Result<Json<EstimateResult>, AppError> {
    let Json(form) = payload?;
    let input = form.to_input()?;

    if form.overnights_mismatch() {
        debug!("overnightsParentB disagrees with the derived value; using 365 - overnightsParentA");
    }

    let result = estimate(&input)?;
    debug!(
        paying_parent = %result.paying_parent,
        median = result.median,
        factors = result.factors.len(),
        "support estimate computed"
    );
    Ok(Json(result))
}
