pub mod error;
pub mod time_value;
pub mod types;

#[cfg(feature = "mortgage")]
pub mod mortgage;

#[cfg(feature = "proximity")]
pub mod proximity;

pub use error::EstateFinanceError;
pub use types::*;

/// Standard result type for all estate-finance operations
pub type EstateFinanceResult<T> = Result<T, EstateFinanceError>;
