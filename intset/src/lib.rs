//! intset - Bit-vector sets of non-negative integers
//!
//! This library builds on the `no_std` [`intset_core`] set with the pieces
//! that need `std`: a lock-guarded shared handle, set-expression
//! evaluation with logging, and the `intset` command-line front end.
//!
//! ## Architecture
//!
//! - **intset-core**: the packed word encoding, `IntSet`, validation (no I/O)
//! - **intset**: concurrency boundary, evaluation, output rendering, CLI
//!
//! ## Quick Start
//!
//! ```rust
//! use intset::IntSet;
//!
//! let mut s: IntSet = [1, 2, 3].into_iter().collect();
//! let t: IntSet = [2, 3, 4].into_iter().collect();
//!
//! assert_eq!(s.intersect_with(&t), vec![2, 3]);
//! assert_eq!(s.difference_with(&t), vec![1]);
//! assert_eq!(s.symmetric_difference(&t), vec![1, 4]);
//!
//! s.union_with(&t);
//! assert_eq!(s.to_string(), "{1 2 3 4}");
//! ```

// Re-export core abstractions
pub use intset_core::{
    // Set and iteration
    Bits, IntSet, Iter, IntegerSet,
    // Layout
    BitLocation, BITS_PER_WORD, MAX_MEMBER,
    // Error handling
    IntSetError, Result, ErrorCategory,
    // Validation utilities
    member_from_i64, parse_member, parse_member_list, parse_set, validate_capacity,
    validate_member,
};

pub mod eval;
pub mod shared;

pub use eval::{evaluate, parse_operand, EvalConfig, EvalError, OutputFormat, Report, SetOp};
pub use shared::SharedIntSet;
