//! Range checks for signed input

use crate::layout::MAX_MEMBER;
use crate::IntSetError;

/// Convert a signed value into a set member
///
/// Negative values are outside the set's domain and are rejected rather
/// than wrapped into a bit index. Values above [`MAX_MEMBER`] are rejected
/// as [`IntSetError::ValueOverflow`].
pub fn member_from_i64(value: i64) -> Result<usize, IntSetError> {
    if value < 0 {
        return Err(IntSetError::NegativeValue);
    }

    let member = usize::try_from(value).map_err(|_| IntSetError::ValueOverflow)?;
    validate_member(member)
}

/// Reject members above [`MAX_MEMBER`]
pub const fn validate_member(value: usize) -> Result<usize, IntSetError> {
    if value > MAX_MEMBER {
        return Err(IntSetError::ValueOverflow);
    }

    Ok(value)
}

/// Validate a capacity bound, i.e. "hold every value below `bound`"
pub const fn validate_capacity(bound: usize) -> Result<usize, IntSetError> {
    if bound > 0 && bound - 1 > MAX_MEMBER {
        return Err(IntSetError::ValueOverflow);
    }

    Ok(bound)
}
