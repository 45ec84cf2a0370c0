use std::sync::Arc;

use crate::config::Config;
use papertrade_market_data::{
    MarketGateway, QuoteClient, ResponseNormalizer, YahooClient,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub gateway: MarketGateway,
}

pub fn init_tracing() {
    let log_format = std::env::var("PT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
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

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let client = YahooClient::with_base_url(config.quote_base_url.as_str())?
        .with_snapshot_source(config.snapshot_source);
    tracing::info!(
        "Quote upstream: {} (snapshot source {:?})",
        client.base_url(),
        client.snapshot_source()
    );
    Ok(build_state_with_client(config, Arc::new(client)))
}

/// State over an arbitrary quote client.
pub fn build_state_with_client(config: &Config, client: Arc<dyn QuoteClient>) -> Arc<AppState> {
    let gateway = MarketGateway::new(client)
        .with_normalizer(ResponseNormalizer::new(config.close_preference));
    Arc::new(AppState { gateway })
}
