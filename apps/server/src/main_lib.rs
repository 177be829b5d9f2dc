use std::sync::Arc;

use pricing_calculator_core::{
    fees::{FeeCalculatorService, FeeCalculatorServiceTrait},
    rates::{
        CsvDirectoryProvider, GoogleSheetsProvider, RateTableProvider, RateTableService,
        RateTableServiceTrait, RuleSetStore,
    },
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, RateSource};

pub struct AppState {
    pub fee_calculator_service: Arc<dyn FeeCalculatorServiceTrait + Send + Sync>,
    pub rate_table_service: Arc<dyn RateTableServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("PC_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_provider(source: &RateSource) -> Arc<dyn RateTableProvider> {
    match source {
        RateSource::CsvDirectory(dir) => Arc::new(CsvDirectoryProvider::new(dir.clone())),
        RateSource::GoogleSheets {
            spreadsheet_id,
            base_url,
            timeout,
        } => Arc::new(GoogleSheetsProvider::with_base_url(
            base_url.clone(),
            spreadsheet_id.clone(),
            *timeout,
        )),
    }
}

/// Wires services together and performs the initial rate table load.
///
/// A failed initial load is logged, not fatal: the server starts, `readyz`
/// reports unavailable and calculations fail until a refresh succeeds.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = build_provider(&config.rate_source);
    tracing::info!("Rate table source: {}", provider.name());

    let store = Arc::new(RuleSetStore::new());
    let rate_table_service = Arc::new(RateTableService::new(provider, store.clone()));
    let fee_calculator_service = Arc::new(FeeCalculatorService::new(store));

    match rate_table_service.refresh().await {
        Ok(summary) => tracing::info!(
            total = summary.total,
            referral = summary.referral,
            closing = summary.closing,
            weight = summary.weight,
            other = summary.other,
            "Rate table loaded"
        ),
        Err(e) => tracing::warn!("Initial rate table load failed: {}", e),
    }

    Ok(Arc::new(AppState {
        fee_calculator_service,
        rate_table_service,
    }))
}
