use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstateFinanceError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Financial impossibility: {0}")]
    FinancialImpossibility(String),

    #[error("Compounding overflow: (1 + {rate})^{periods} exceeds decimal range")]
    CompoundingOverflow { rate: Decimal, periods: u32 },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for EstateFinanceError {
    fn from(e: serde_json::Error) -> Self {
        EstateFinanceError::SerializationError(e.to_string())
    }
}
