//! BMI calculator endpoint
//!
//! Validates the JSON payload, normalizes weight/height to canonical units
//! (kg, m), evaluates BMI and shapes the response. Validation failures map
//! to 400 with a specific message; anything unexpected maps to 500 with a
//! generic message and a server-side log of the cause.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::error;

use calc_common::bmi::{bmi, round2, BmiCategory};
use calc_common::units::{
    feet_inches_to_meters, height_to_meters, weight_to_kg, HeightUnit, WeightUnit,
};

// ============================================================================
// Request/Response Types
// ============================================================================

/// BMI calculation response
#[derive(Debug, Serialize)]
pub struct BmiResponse {
    pub success: bool,
    pub bmi: f64,
    pub category: &'static str,
    pub color: &'static str,
    pub advice: &'static str,
    pub weight_kg: f64,
    pub height_m: f64,
}

/// BMI endpoint errors
///
/// Client errors carry the exact message served in the `error` field.
#[derive(Debug)]
pub enum BmiError {
    NotJson,
    NoData,
    MissingFields,
    InvalidWeight,
    NonPositiveWeight,
    InvalidWeightUnit,
    InvalidHeightUnit,
    EmptyFeetInches,
    InvalidFeetInches,
    InvalidHeight,
    NonPositiveHeight,
    CmOutOfRange,
    MetersOutOfRange,
    HeightComputation,
    Internal(String),
}

impl IntoResponse for BmiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            BmiError::NotJson => (StatusCode::BAD_REQUEST, "Request must be JSON"),
            BmiError::NoData => (StatusCode::BAD_REQUEST, "No data provided"),
            BmiError::MissingFields => (StatusCode::BAD_REQUEST, "Missing required fields"),
            BmiError::InvalidWeight => (StatusCode::BAD_REQUEST, "Invalid weight value"),
            BmiError::NonPositiveWeight => {
                (StatusCode::BAD_REQUEST, "Weight must be a positive number")
            }
            BmiError::InvalidWeightUnit => (StatusCode::BAD_REQUEST, "Invalid weight unit"),
            BmiError::InvalidHeightUnit => (StatusCode::BAD_REQUEST, "Invalid height unit"),
            BmiError::EmptyFeetInches => {
                (StatusCode::BAD_REQUEST, "Please enter valid feet and inches")
            }
            BmiError::InvalidFeetInches => {
                (StatusCode::BAD_REQUEST, "Invalid feet or inches value")
            }
            BmiError::InvalidHeight => (StatusCode::BAD_REQUEST, "Invalid height value"),
            BmiError::NonPositiveHeight => {
                (StatusCode::BAD_REQUEST, "Height must be a positive number")
            }
            BmiError::CmOutOfRange => (
                StatusCode::BAD_REQUEST,
                "Height must be between 1 and 300 centimeters",
            ),
            BmiError::MetersOutOfRange => (
                StatusCode::BAD_REQUEST,
                "Height must be between 0.01 and 3 meters",
            ),
            BmiError::HeightComputation => {
                (StatusCode::BAD_REQUEST, "Invalid height calculation")
            }
            BmiError::Internal(cause) => {
                // Full cause stays server-side; the client gets a generic message
                error!("BMI calculation error: {}", cause);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

// ============================================================================
// Handler
// ============================================================================

/// POST /calculate_bmi
///
/// Consumes `{weight, weight_unit, height_unit, height?, feet?, inches?}`.
/// Numeric fields accept JSON numbers or numeric strings (HTML forms submit
/// strings).
pub async fn calculate_bmi(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<BmiResponse>, BmiError> {
    let Json(data) = payload.map_err(|_| BmiError::NotJson)?;

    let data = match data {
        Value::Object(map) if !map.is_empty() => map,
        _ => return Err(BmiError::NoData),
    };

    if !data.contains_key("weight")
        || !data.contains_key("weight_unit")
        || !data.contains_key("height_unit")
    {
        return Err(BmiError::MissingFields);
    }

    let weight = parse_number(&data["weight"]).ok_or(BmiError::InvalidWeight)?;
    if weight <= 0.0 {
        return Err(BmiError::NonPositiveWeight);
    }

    let weight_unit = data["weight_unit"]
        .as_str()
        .and_then(WeightUnit::from_str)
        .ok_or(BmiError::InvalidWeightUnit)?;
    let height_unit = data["height_unit"]
        .as_str()
        .and_then(HeightUnit::from_str)
        .ok_or(BmiError::InvalidHeightUnit)?;

    let weight_kg = weight_to_kg(weight, weight_unit);
    let height_m = validate_height(&data, height_unit)?;

    if height_m <= 0.0 {
        return Err(BmiError::HeightComputation);
    }

    let bmi_value = bmi(weight_kg, height_m);
    if !bmi_value.is_finite() {
        return Err(BmiError::Internal(format!(
            "non-finite BMI from weight_kg={}, height_m={}",
            weight_kg, height_m
        )));
    }

    let category = BmiCategory::classify(bmi_value);

    Ok(Json(BmiResponse {
        success: true,
        bmi: bmi_value,
        category: category.display_name(),
        color: category.color(),
        advice: category.advice(),
        weight_kg: round2(weight_kg),
        height_m: round2(height_m),
    }))
}

/// Validate the height fields for the given unit and convert to meters
fn validate_height(data: &Map<String, Value>, unit: HeightUnit) -> Result<f64, BmiError> {
    match unit {
        HeightUnit::Ft => {
            // feet/inches default to 0 when absent, matching form behavior
            let feet = match data.get("feet") {
                Some(v) => parse_number(v).ok_or(BmiError::InvalidFeetInches)?,
                None => 0.0,
            };
            let inches = match data.get("inches") {
                Some(v) => parse_number(v).ok_or(BmiError::InvalidFeetInches)?,
                None => 0.0,
            };

            if feet <= 0.0 && inches <= 0.0 {
                return Err(BmiError::EmptyFeetInches);
            }
            if feet < 0.0 || inches < 0.0 || inches >= 12.0 {
                return Err(BmiError::InvalidFeetInches);
            }

            Ok(feet_inches_to_meters(feet, inches))
        }
        HeightUnit::Cm | HeightUnit::M => {
            let height = data
                .get("height")
                .and_then(parse_number)
                .ok_or(BmiError::InvalidHeight)?;
            if height <= 0.0 {
                return Err(BmiError::NonPositiveHeight);
            }

            match unit {
                HeightUnit::Cm if !(1.0..=300.0).contains(&height) => {
                    return Err(BmiError::CmOutOfRange)
                }
                HeightUnit::M if !(0.01..=3.0).contains(&height) => {
                    return Err(BmiError::MetersOutOfRange)
                }
                _ => {}
            }

            Ok(height_to_meters(height, unit))
        }
    }
}

/// Parse a JSON number or numeric string into a finite f64
pub(crate) fn parse_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}
