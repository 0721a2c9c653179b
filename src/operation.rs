//! Edit operations and the steps of a reconstructed transformation.
use std::fmt;

use pa_types::Cost;
use serde::{Deserialize, Serialize};

/// The operations that turn the starting word into the target word.
///
/// An operation only names *what* happens. The price of each operation lives
/// in [`EditCosts`](crate::cost_model::EditCosts), so that costs can be
/// configured per engine.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "lowercase")]
pub enum EditOp {
    /// Keep a symbol that is equal in both words.
    Copy,
    /// Substitute a symbol by a different one.
    Replace,
    /// Swap two adjacent symbols.
    Twiddle,
    /// Remove a symbol of the starting word.
    Delete,
    /// Add a symbol of the target word.
    Insert,
    /// Discard the remainder of the starting word.
    Kill,
}

impl EditOp {
    /// Character used in edit scripts.
    pub fn to_char(self) -> char {
        match self {
            EditOp::Copy => '=',
            EditOp::Replace => 'X',
            EditOp::Twiddle => 'T',
            EditOp::Delete => 'D',
            EditOp::Insert => 'I',
            EditOp::Kill => 'K',
        }
    }

    /// Number of symbols of (starting word, target word) consumed by one step.
    pub fn delta(self) -> (usize, usize) {
        match self {
            EditOp::Copy | EditOp::Replace => (1, 1),
            EditOp::Twiddle => (2, 2),
            EditOp::Delete | EditOp::Kill => (1, 0),
            EditOp::Insert => (0, 1),
        }
    }
}

/// One step of the reconstructed transformation.
///
/// `i` and `j` are the matrix cell the step ends in, i.e. the step has
/// consumed the first `i` symbols of the starting word and produced the first
/// `j` symbols of the target word.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct AppliedOp {
    pub op: EditOp,
    pub i: usize,
    pub j: usize,
    /// The cost charged for this step.
    pub cost: Cost,
}

impl fmt::Display for AppliedOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}[cost={}] ({},{})}}", self.op, self.cost, self.i, self.j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn names() {
        let names = EditOp::iter().map(|op| op.to_string()).collect::<Vec<_>>();
        assert_eq!(
            names,
            ["COPY", "REPLACE", "TWIDDLE", "DELETE", "INSERT", "KILL"]
        );
    }

    #[test]
    fn applied_op_display() {
        let op = AppliedOp {
            op: EditOp::Replace,
            i: 3,
            j: 2,
            cost: 1,
        };
        assert_eq!(op.to_string(), "{REPLACE[cost=1] (3,2)}");
    }

    #[test]
    fn script_chars_are_distinct() {
        let mut chars = EditOp::iter().map(EditOp::to_char).collect::<Vec<_>>();
        chars.sort();
        chars.dedup();
        assert_eq!(chars.len(), 6);
    }
}
