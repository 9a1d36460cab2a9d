//! Error types for set operations at the input boundary

/// Errors raised when input cannot be turned into set members
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntSetError {
    /// A negative value was offered as a member
    NegativeValue,
    /// Value does not fit in the platform's `usize`
    ValueOverflow,
    /// Text is not of the form `{v1 v2 ...}`
    InvalidFormat,
    /// A token is not a decimal integer
    InvalidNumber,
}

/// Coarse classification of [`IntSetError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The value itself is outside the set's domain
    InvalidArgument,
    /// The input text could not be read
    Parse,
}

impl IntSetError {
    /// Get the category this error belongs to
    pub const fn category(&self) -> ErrorCategory {
        match self {
            IntSetError::NegativeValue | IntSetError::ValueOverflow => {
                ErrorCategory::InvalidArgument
            }
            IntSetError::InvalidFormat | IntSetError::InvalidNumber => ErrorCategory::Parse,
        }
    }
}

impl core::fmt::Display for IntSetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            IntSetError::NegativeValue => "Negative values cannot be set members",
            IntSetError::ValueOverflow => "Value does not fit in usize",
            IntSetError::InvalidFormat => "Expected a set of the form {v1 v2 ...}",
            IntSetError::InvalidNumber => "Invalid decimal integer",
        };
        write!(f, "{msg}")
    }
}

/// Result type for set input handling
pub type Result<T> = core::result::Result<T, IntSetError>;
