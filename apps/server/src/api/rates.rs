use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::{error::ApiResult, main_lib::AppState, models::RateTableSummary};

/// Summary of the currently loaded rate table.
#[utoipa::path(get, path = "/api/v1/rates", responses((status = 200, body = RateTableSummary)))]
pub async fn get_rate_table_summary(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<RateTableSummary>> {
    let summary = state.rate_table_service.summary()?;
    Ok(Json(summary.into()))
}

/// Reload the rate table from its source. On failure the previous table stays
/// active.
#[utoipa::path(post, path = "/api/v1/rates/refresh", responses((status = 200, body = RateTableSummary)))]
pub async fn refresh_rate_table(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<RateTableSummary>> {
    let summary = state.rate_table_service.refresh().await?;
    tracing::info!(total = summary.total, "Rate table refreshed on request");
    Ok(Json(summary.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rates", get(get_rate_table_summary))
        .route("/rates/refresh", post(refresh_rate_table))
}
