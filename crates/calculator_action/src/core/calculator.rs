use std::fmt;
use std::str::FromStr;

use crate::core::{
    error::{CalculatorError, CalculatorResult},
    models::{CalculatorRequest, CalculatorResponse},
};

/// Operand names read from the request parameters
pub const LEFT_OPERAND: &str = "a";
pub const RIGHT_OPERAND: &str = "b";

/// Arithmetic operation selected by the request's `action`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Wire names, matched exactly and case-sensitively
    pub const ALL: [(&'static str, Operation); 4] = [
        ("add", Operation::Add),
        ("subtract", Operation::Subtract),
        ("multiply", Operation::Multiply),
        ("divide", Operation::Divide),
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Apply the operation to `a` and `b`
    ///
    /// Only an exact zero divisor is rejected; every other value follows
    /// IEEE-754 arithmetic.
    pub fn apply(self, a: f64, b: f64) -> CalculatorResult<f64> {
        match self {
            Operation::Add => Ok(a + b),
            Operation::Subtract => Ok(a - b),
            Operation::Multiply => Ok(a * b),
            Operation::Divide if b == 0.0 => Err(CalculatorError::DivisionByZero { a, b }),
            Operation::Divide => Ok(a / b),
        }
    }
}

impl FromStr for Operation {
    type Err = CalculatorError;

    fn from_str(action: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|(name, _)| *name == action)
            .map(|(_, operation)| *operation)
            .ok_or_else(|| CalculatorError::UnknownAction {
                action: action.to_string(),
            })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Evaluate a decoded request
pub fn evaluate(request: &CalculatorRequest) -> CalculatorResult<CalculatorResponse> {
    let operation: Operation = request.action.parse()?;
    let a = request.operand(LEFT_OPERAND);
    let b = request.operand(RIGHT_OPERAND);

    let result = operation.apply(a, b)?;
    tracing::debug!(%operation, a, b, result, "evaluated calculator request");

    Ok(CalculatorResponse { result })
}
