pub mod error;
pub mod frame;
pub mod stability;
pub mod types;

pub use error::DriftError;
pub use types::*;

/// Standard result type for all driftwatch operations
pub type DriftResult<T> = Result<T, DriftError>;
