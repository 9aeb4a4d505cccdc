//! Result type alias for engine operations

use crate::error::HrError;

/// Standard Result type for engine operations
pub type HrResult<T> = Result<T, HrError>;
