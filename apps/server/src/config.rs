use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use papertrade_market_data::provider::yahoo::DEFAULT_BASE_URL;
use papertrade_market_data::{ClosePreference, SnapshotSource};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub quote_base_url: String,
    pub snapshot_source: SnapshotSource,
    pub close_preference: ClosePreference,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("PT_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid PT_LISTEN_ADDR")?;
        let cors_allow = std::env::var("PT_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("PT_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or_else(|_| {
                tracing::warn!("Invalid PT_REQUEST_TIMEOUT_MS, using 30000");
                30000
            });
        let quote_base_url =
            std::env::var("PT_QUOTE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let snapshot_source = std::env::var("PT_SNAPSHOT_SOURCE")
            .ok()
            .and_then(|v| {
                v.parse()
                    .map_err(|e| tracing::warn!("{}, using chart", e))
                    .ok()
            })
            .unwrap_or_default();
        let close_preference = match std::env::var("PT_PREFER_ADJUSTED_CLOSE") {
            Ok(v) if v.trim().eq_ignore_ascii_case("false") || v.trim() == "0" => {
                ClosePreference::RawOnly
            }
            _ => ClosePreference::PreferAdjusted,
        };
        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            quote_base_url,
            snapshot_source,
            close_preference,
        })
    }
}
