//! Set-expression evaluation and output rendering
//!
//! Evaluates one binary set operation over two operands without mutating
//! either, and renders the result as the canonical `{v1 v2 ...}` text or as
//! JSON.

use intset_core::{parse_member_list, parse_set, IntSet, IntSetError};
use tracing::{debug, trace};

/// Binary set operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SetOp {
    /// Members of either operand
    Union,
    /// Members of both operands
    Intersection,
    /// Members of the left operand only
    Difference,
    /// Members of exactly one operand
    SymmetricDifference,
}

/// Output encoding for evaluation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Canonical `{v1 v2 ...}` text
    #[default]
    Text,
    /// JSON object with the operation, members and count
    Json,
}

/// Configuration for operand parsing and output
#[derive(Debug, Clone, Default)]
pub struct EvalConfig {
    /// Values operands are pre-sized to hold without growing
    pub initial_capacity: usize,
    /// How reports are rendered
    pub format: OutputFormat,
}

impl EvalConfig {
    /// Set the capacity operands are pre-sized to
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// Errors from evaluation and rendering
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("invalid operand: {0}")]
    Operand(IntSetError),

    #[error("JSON output requires the `serde` feature")]
    JsonUnavailable,

    #[error("JSON encoding failed: {0}")]
    Json(String),
}

impl From<IntSetError> for EvalError {
    fn from(err: IntSetError) -> Self {
        EvalError::Operand(err)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for EvalError {
    fn from(err: serde_json::Error) -> Self {
        EvalError::Json(err.to_string())
    }
}

/// Result of evaluating one operation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    /// Operation that produced the members
    pub op: SetOp,
    /// Resulting members, ascending
    pub members: Vec<usize>,
    /// Number of members
    pub len: usize,
}

impl Report {
    /// Evaluate `op` over `lhs` and `rhs` into a report
    pub fn new(op: SetOp, lhs: &IntSet, rhs: &IntSet) -> Self {
        let members = evaluate(op, lhs, rhs);
        let len = members.len();
        Self { op, members, len }
    }

    /// Render the report in the requested format
    pub fn render(&self, format: OutputFormat) -> Result<String, EvalError> {
        match format {
            OutputFormat::Text => {
                let set: IntSet = self.members.iter().copied().collect();
                Ok(set.to_string())
            }
            #[cfg(feature = "serde")]
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
            #[cfg(not(feature = "serde"))]
            OutputFormat::Json => Err(EvalError::JsonUnavailable),
        }
    }
}

/// Evaluate `op` over two operands, returning members in ascending order
///
/// Neither operand is modified; union works on a copy of `lhs`.
pub fn evaluate(op: SetOp, lhs: &IntSet, rhs: &IntSet) -> Vec<usize> {
    let members = match op {
        SetOp::Union => {
            let mut union = lhs.clone();
            union.union_with(rhs);
            union.iter().collect()
        }
        SetOp::Intersection => lhs.intersect_with(rhs),
        SetOp::Difference => lhs.difference_with(rhs),
        SetOp::SymmetricDifference => lhs.symmetric_difference(rhs),
    };

    debug!(
        ?op,
        lhs_len = lhs.len(),
        rhs_len = rhs.len(),
        result_len = members.len(),
        "evaluated set operation"
    );

    members
}

/// Parse an operand given as `{v1 v2 ...}` or as a list like `1,2,3`
pub fn parse_operand(text: &str, config: &EvalConfig) -> Result<IntSet, EvalError> {
    let parsed = if text.trim_start().starts_with('{') {
        parse_set(text)?
    } else {
        parse_member_list(text)?
    };

    let mut set = IntSet::try_with_capacity(config.initial_capacity)?;
    set.union_with(&parsed);

    trace!(
        members = set.len(),
        words = set.word_count(),
        "parsed operand"
    );
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(values: &[usize]) -> IntSet {
        values.iter().copied().collect()
    }

    #[test]
    fn test_evaluate() {
        let s = set_of(&[1, 2, 3]);
        let t = set_of(&[2, 3, 4]);

        assert_eq!(evaluate(SetOp::Union, &s, &t), vec![1, 2, 3, 4]);
        assert_eq!(evaluate(SetOp::Intersection, &s, &t), vec![2, 3]);
        assert_eq!(evaluate(SetOp::Difference, &s, &t), vec![1]);
        assert_eq!(evaluate(SetOp::SymmetricDifference, &s, &t), vec![1, 4]);

        // Operands are left untouched
        assert_eq!(s.to_string(), "{1 2 3}");
        assert_eq!(t.to_string(), "{2 3 4}");
    }

    #[test]
    fn test_parse_operand() {
        let config = EvalConfig::default().with_initial_capacity(256);

        let braces = parse_operand("{3 1}", &config).unwrap();
        assert_eq!(braces.to_string(), "{1 3}");
        assert_eq!(braces.word_count(), 4);

        let list = parse_operand("1,3", &config).unwrap();
        assert_eq!(list, braces);

        let wide = parse_operand("{1000}", &config).unwrap();
        assert_eq!(wide.word_count(), 16);

        assert!(matches!(
            parse_operand("1,-3", &config),
            Err(EvalError::Operand(IntSetError::NegativeValue))
        ));
        assert!(matches!(
            parse_operand("{1 2", &config),
            Err(EvalError::Operand(IntSetError::InvalidFormat))
        ));
    }

    #[test]
    fn test_parse_operand_rejects_huge_input() {
        let config = EvalConfig::default();
        assert!(matches!(
            parse_operand("{18446744073709551615}", &config),
            Err(EvalError::Operand(IntSetError::ValueOverflow))
        ));
        assert!(matches!(
            parse_operand("1,4294967296", &config),
            Err(EvalError::Operand(IntSetError::ValueOverflow))
        ));

        let oversized = EvalConfig::default().with_initial_capacity(usize::MAX);
        assert!(matches!(
            parse_operand("{1}", &oversized),
            Err(EvalError::Operand(IntSetError::ValueOverflow))
        ));
    }

    #[test]
    fn test_render_text() {
        let report = Report::new(SetOp::Intersection, &set_of(&[1, 2, 3]), &set_of(&[2, 3, 4]));
        assert_eq!(report.len, 2);
        assert_eq!(report.render(OutputFormat::Text).unwrap(), "{2 3}");

        let empty = Report::new(SetOp::Difference, &set_of(&[1]), &set_of(&[1]));
        assert_eq!(empty.render(OutputFormat::Text).unwrap(), "{}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_render_json() {
        let report = Report::new(
            SetOp::SymmetricDifference,
            &set_of(&[1, 2, 3]),
            &set_of(&[2, 3, 4]),
        );
        let json = report.render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["op"], "symmetric_difference");
        assert_eq!(value["members"], serde_json::json!([1, 4]));
        assert_eq!(value["len"], 2);
    }
}
