pub mod breakdown;
pub mod compound;
pub mod error;
pub mod rates;
pub mod types;

#[cfg(feature = "loan")]
pub mod loan;

#[cfg(feature = "recurring")]
pub mod recurring;

#[cfg(feature = "single_investment")]
pub mod single;

pub use error::FincalcError;
pub use types::*;

/// Standard result type for all fincalc operations
pub type FincalcResult<T> = Result<T, FincalcError>;
