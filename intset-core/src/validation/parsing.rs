//! Parsing of members and of the `{v1 v2 ...}` text form
//!
//! [`parse_set`] is the inverse of `IntSet`'s `Display` output. It is
//! lenient about whitespace and duplicates, strict about the braces.

use crate::validation::bounds::validate_member;
use crate::{IntSet, IntSetError};

/// Parse a single non-negative decimal member
///
/// `-N` with `N > 0` is reported as [`IntSetError::NegativeValue`] so
/// callers can tell a domain error from a malformed token. Values above
/// [`MAX_MEMBER`](crate::MAX_MEMBER) are [`IntSetError::ValueOverflow`].
pub fn parse_member(token: &str) -> Result<usize, IntSetError> {
    if let Some(digits) = token.strip_prefix('-') {
        return match parse_digits(digits)? {
            0 => Ok(0),
            _ => Err(IntSetError::NegativeValue),
        };
    }

    validate_member(parse_digits(token.strip_prefix('+').unwrap_or(token))?)
}

/// Parse ASCII digits with overflow checking
fn parse_digits(s: &str) -> Result<usize, IntSetError> {
    if s.is_empty() {
        return Err(IntSetError::InvalidNumber);
    }

    let mut result: usize = 0;

    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err(IntSetError::InvalidNumber);
        }

        let digit = (byte - b'0') as usize;

        if result > (usize::MAX - digit) / 10 {
            return Err(IntSetError::ValueOverflow);
        }

        result = result * 10 + digit;
    }

    Ok(result)
}

/// Parse the text form `{v1 v2 ...}` into a set
pub fn parse_set(text: &str) -> Result<IntSet, IntSetError> {
    let inner = text
        .trim()
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or(IntSetError::InvalidFormat)?;

    let mut set = IntSet::new();
    for token in inner.split_ascii_whitespace() {
        set.add(parse_member(token)?);
    }

    Ok(set)
}

/// Parse members separated by commas and/or whitespace, e.g. `1,2, 3 4`
pub fn parse_member_list(text: &str) -> Result<IntSet, IntSetError> {
    let mut set = IntSet::new();
    for token in text
        .split(|c: char| c == ',' || c.is_ascii_whitespace())
        .filter(|token| !token.is_empty())
    {
        set.add(parse_member(token)?);
    }

    Ok(set)
}
