use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;
use pricing_calculator_core::rates::DEFAULT_SHEETS_BASE_URL;

/// Where the rate table is loaded from.
#[derive(Debug, Clone, PartialEq)]
pub enum RateSource {
    /// Directory holding one CSV export per rate-sheet tab.
    CsvDirectory(PathBuf),
    /// Link-shared Google spreadsheet.
    GoogleSheets {
        spreadsheet_id: String,
        base_url: String,
        timeout: Duration,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub rate_source: RateSource,
    /// Periodic rate table reload interval; `None` disables the scheduler.
    pub rates_refresh_interval: Option<Duration>,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_u64(key: &str, default: u64) -> u64 {
    env_or(key, &default.to_string()).parse().unwrap_or(default)
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = env_or("PC_LISTEN_ADDR", "0.0.0.0:3000")
            .parse()
            .context("Invalid PC_LISTEN_ADDR")?;
        let cors_allow = env_or("PC_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let request_timeout = Duration::from_millis(env_u64("PC_REQUEST_TIMEOUT_MS", 30000));

        let rate_source = match std::env::var("PC_SHEET_ID")
            .ok()
            .filter(|id| !id.trim().is_empty())
        {
            Some(spreadsheet_id) => RateSource::GoogleSheets {
                spreadsheet_id: spreadsheet_id.trim().to_string(),
                base_url: env_or("PC_SHEETS_BASE_URL", DEFAULT_SHEETS_BASE_URL),
                timeout: Duration::from_millis(env_u64("PC_SHEETS_TIMEOUT_MS", 10000)),
            },
            None => RateSource::CsvDirectory(PathBuf::from(env_or("PC_RATES_DIR", "./rates"))),
        };

        let refresh_secs = env_u64("PC_RATES_REFRESH_SECS", 0);
        let rates_refresh_interval = (refresh_secs > 0).then(|| Duration::from_secs(refresh_secs));

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout,
            rate_source,
            rates_refresh_interval,
        })
    }
}
