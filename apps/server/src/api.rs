use std::{collections::HashMap, sync::Arc};

use crate::{
    config::Config,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    error_handling::HandleErrorLayer,
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    routing::get,
    BoxError, Json, Router,
};
use papertrade_market_data::{
    GatewayResponse, MarketRequest, QueryKind, DEFAULT_HISTORY_DAYS,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tower::{timeout::error::Elapsed, ServiceBuilder};

pub async fn healthz() -> &'static str {
    "ok"
}

/// Build a gateway request from the path ticker and raw query parameters.
///
/// Parsing never fails: an unknown `type` is a price query and an
/// unparsable `days` is the default lookback.
pub fn market_request(ticker: &str, params: &HashMap<String, String>) -> MarketRequest {
    let kind = QueryKind::from_param(params.get("type").map(String::as_str));
    let days = params
        .get("days")
        .and_then(|d| d.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_HISTORY_DAYS);
    let debug = params.get("debug").is_some_and(|d| d.trim() == "1");

    MarketRequest::new(ticker, kind)
        .with_days(days)
        .with_debug(debug)
}

async fn get_market_data(
    State(state): State<Arc<AppState>>,
    ticker: Result<Path<String>, PathRejection>,
    params: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> ApiResult<Response> {
    let Path(ticker) = ticker.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let request = market_request(&ticker, &params);
    let response = state.gateway.handle(&request).await?;

    Ok(match response {
        GatewayResponse::Snapshot(snapshot) => Json(snapshot).into_response(),
        GatewayResponse::History(series) => Json(series).into_response(),
        GatewayResponse::Earnings(event) => Json(event).into_response(),
        GatewayResponse::Raw(body) => {
            ([(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
    })
}

async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        tracing::warn!("Request exceeded the configured timeout");
        ApiError::Timeout
    } else {
        ApiError::Internal(err.to_string())
    }
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| {
                o.parse()
                    .map_err(|_| tracing::warn!("Ignoring invalid CORS origin {}", o))
                    .ok()
            })
            .collect::<Vec<HeaderValue>>();
        CorsLayer::new().allow_origin(origins)
    };

    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/market/{ticker}", get(get_market_data));

    Router::new()
        .nest("/api", api)
        .with_state(state)
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(config.request_timeout),
        )
        .layer(TraceLayer::new_for_http())
}
