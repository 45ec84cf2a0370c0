use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use papertrade_market_data::MarketDataError;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    MarketData(#[from] MarketDataError),
    #[error("{0}")]
    BadRequest(String),
    #[error("Request timed out")]
    Timeout,
    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::MarketData(MarketDataError::NoData { raw }) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "No data".to_string(),
                    raw: Some(raw),
                },
            ),
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: message,
                    raw: None,
                },
            ),
            ApiError::Timeout => (
                StatusCode::GATEWAY_TIMEOUT,
                ErrorBody {
                    error: "Request timed out".to_string(),
                    raw: None,
                },
            ),
            e @ (ApiError::MarketData(_) | ApiError::Internal(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: e.to_string(),
                    raw: None,
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
