//! Basic arithmetic evaluation
//!
//! Stateless evaluator behind the plain calculator form. Operations are
//! parsed once at the boundary; evaluation returns a tagged result whose
//! error `Display` texts are the exact strings shown to the user.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Arithmetic evaluation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithError {
    #[error("Error: Division by zero")]
    DivisionByZero,

    #[error("Error: Cannot calculate square root of negative number")]
    NegativeSqrt,

    #[error("Error: Invalid operation")]
    InvalidOperation,

    /// Result overflowed or was otherwise not representable
    #[error("Error: Result is not a finite number")]
    NotFinite,
}

/// Supported calculator operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Sqrt,
    Percentage,
}

impl Operation {
    /// Parse from a wire string, case-insensitive
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "add" => Some(Operation::Add),
            "subtract" => Some(Operation::Subtract),
            "multiply" => Some(Operation::Multiply),
            "divide" => Some(Operation::Divide),
            "power" => Some(Operation::Power),
            "sqrt" => Some(Operation::Sqrt),
            "percentage" => Some(Operation::Percentage),
            _ => None,
        }
    }

    /// Canonical wire form
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::Sqrt => "sqrt",
            Operation::Percentage => "percentage",
        }
    }
}

/// Evaluate an operation on two operands
///
/// `num2` is ignored for `Sqrt`. Percentage computes `num1 * num2 / 100`
/// ("num2 percent of num1").
pub fn evaluate(op: Operation, num1: f64, num2: f64) -> Result<f64, ArithError> {
    let result = match op {
        Operation::Add => num1 + num2,
        Operation::Subtract => num1 - num2,
        Operation::Multiply => num1 * num2,
        Operation::Divide => {
            if num2 == 0.0 {
                return Err(ArithError::DivisionByZero);
            }
            num1 / num2
        }
        Operation::Power => num1.powf(num2),
        Operation::Sqrt => {
            if num1 < 0.0 {
                return Err(ArithError::NegativeSqrt);
            }
            num1.sqrt()
        }
        Operation::Percentage => (num1 * num2) / 100.0,
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(ArithError::NotFinite)
    }
}
