//! Basic arithmetic calculator endpoint
//!
//! Thin HTTP shim over `calc_common::arith`. Evaluation errors are regular
//! 400 responses carrying the user-facing error text.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use calc_common::arith::{evaluate, ArithError, Operation};

use super::bmi::parse_number;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Basic calculation request
///
/// `num1`/`num2` accept JSON numbers or numeric strings. `num2` defaults to
/// 0 when absent (sqrt ignores it; the form always submits both fields).
#[derive(Debug, Deserialize)]
pub struct BasicRequest {
    pub operation: String,
    pub num1: Value,
    #[serde(default)]
    pub num2: Option<Value>,
}

/// Basic calculation response
#[derive(Debug, Serialize)]
pub struct BasicResponse {
    pub success: bool,
    pub result: f64,
}

/// Basic calculator endpoint errors
#[derive(Debug)]
pub enum BasicError {
    NotJson,
    MissingFields,
    InvalidNumber,
    Arith(ArithError),
}

impl IntoResponse for BasicError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            BasicError::NotJson => {
                (StatusCode::BAD_REQUEST, "Request must be JSON".to_string())
            }
            BasicError::MissingFields => (
                StatusCode::BAD_REQUEST,
                "Missing required fields".to_string(),
            ),
            BasicError::InvalidNumber => {
                (StatusCode::BAD_REQUEST, "Invalid number value".to_string())
            }
            BasicError::Arith(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

// ============================================================================
// Handler
// ============================================================================

/// POST /calculate
///
/// Consumes `{operation, num1, num2?}` and answers
/// `{success: true, result}` or `{error: message}`.
pub async fn calculate_basic(
    payload: Result<Json<BasicRequest>, JsonRejection>,
) -> Result<Json<BasicResponse>, BasicError> {
    let Json(req) = payload.map_err(|rejection| match rejection {
        // Well-formed JSON that doesn't match the schema (missing fields)
        JsonRejection::JsonDataError(_) => BasicError::MissingFields,
        _ => BasicError::NotJson,
    })?;

    let op = Operation::from_str(&req.operation)
        .ok_or(BasicError::Arith(ArithError::InvalidOperation))?;

    let num1 = parse_number(&req.num1).ok_or(BasicError::InvalidNumber)?;
    let num2 = match &req.num2 {
        Some(v) => parse_number(v).ok_or(BasicError::InvalidNumber)?,
        None => 0.0,
    };

    let result = evaluate(op, num1, num2).map_err(BasicError::Arith)?;

    Ok(Json(BasicResponse {
        success: true,
        result,
    }))
}
