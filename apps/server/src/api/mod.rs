use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::Config,
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{CalculatorRequest, CalculatorResponse, FeeBreakdown, RateTableSummary},
};

pub mod calculator;
pub mod rates;

#[utoipa::path(get, path = "/api/v1/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[utoipa::path(
    get,
    path = "/api/v1/readyz",
    responses(
        (status = 200, description = "Rate table loaded"),
        (status = 503, description = "No rate table loaded yet")
    )
)]
pub async fn readyz(State(state): State<Arc<AppState>>) -> ApiResult<&'static str> {
    if state.rate_table_service.is_loaded() {
        Ok("ok")
    } else {
        Err(ApiError::ServiceUnavailable(
            "Rate table not loaded".to_string(),
        ))
    }
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "This port serves as the backend for the marketplace pricing calculator."
    }))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        healthz,
        readyz,
        calculator::calculate_profitability,
        rates::get_rate_table_summary,
        rates::refresh_rate_table
    ),
    components(schemas(CalculatorRequest, CalculatorResponse, FeeBreakdown, RateTableSummary)),
    tags((name = "pricing-calculator"))
)]
pub struct ApiDoc;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin {:?}", o);
                    None
                }
            })
            .collect::<Vec<HeaderValue>>();
        CorsLayer::new().allow_origin(origins)
    }
    .allow_methods(Any)
    .allow_headers(Any);

    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .merge(calculator::router())
        .merge(rates::router());

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", api)
        .with_state(state)
        .fallback(|| async { (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" }))) })
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
