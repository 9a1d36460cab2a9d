//! Input validation for the set's non-negative domain
//!
//! Pure functions that turn signed integers and text into set members, so
//! out-of-domain input is rejected before any bit index is computed.

pub mod bounds;
pub mod parsing;

pub use bounds::{member_from_i64, validate_capacity, validate_member};
pub use parsing::{parse_member, parse_member_list, parse_set};
