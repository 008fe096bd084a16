/// Failures that terminate a calculator invocation
#[derive(Debug, thiserror::Error)]
pub enum CalculatorError {
    #[error("Error reading input: {0}")]
    InputDecode(#[source] serde_json::Error),
    #[error("Unknown action: {action}")]
    UnknownAction { action: String },
    #[error("Division by zero error: {a:.6} / {b:.6}")]
    DivisionByZero { a: f64, b: f64 },
    #[error("Error writing output: {0}")]
    OutputEncode(#[source] serde_json::Error),
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
}

impl CalculatorError {
    /// Process exit status reported for this error
    pub fn exit_code(&self) -> u8 {
        1
    }
}

pub type CalculatorResult<T> = Result<T, CalculatorError>;
