#![no_std]

//! intset core - Bit-vector set of non-negative integers
//!
//! This crate provides the packed word encoding, the growable [`IntSet`]
//! and the validation needed to bring signed or textual input into the
//! set's non-negative domain. It performs no I/O and holds no global state.

extern crate alloc;

pub mod error;
pub mod int_set;
pub mod layout;
pub mod traits;
pub mod validation;

pub use error::*;
pub use int_set::{Bits, IntSet, Iter};
pub use layout::{BitLocation, BITS_PER_WORD, MAX_MEMBER};
pub use traits::IntegerSet;
pub use validation::{
    member_from_i64, parse_member, parse_member_list, parse_set, validate_capacity,
    validate_member,
};
