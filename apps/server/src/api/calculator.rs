use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{CalculatorRequest, CalculatorResponse},
};

#[utoipa::path(
    post,
    path = "/api/v1/profitability-calculator",
    request_body = CalculatorRequest,
    responses(
        (status = 200, body = CalculatorResponse),
        (status = 400, description = "Missing or invalid input fields"),
        (status = 500, description = "Rate table could not resolve the request")
    )
)]
pub async fn calculate_profitability(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CalculatorRequest>, JsonRejection>,
) -> ApiResult<Json<CalculatorResponse>> {
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let response = state.fee_calculator_service.calculate(request.into())?;
    Ok(Json(response.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/profitability-calculator", post(calculate_profitability))
}
