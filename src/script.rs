//! Compact edit scripts, and replaying/verifying an operation sequence.
use std::fmt;

use pa_types::{Cost, Seq, Sequence};

use crate::{
    cost_model::EditCosts,
    operation::{AppliedOp, EditOp},
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScriptElement {
    pub op: EditOp,
    pub length: usize,
}

/// Run-length encoded operations, e.g. `2=1X1I1=`.
///
/// The origin `Copy` at `(0,0)` is not part of the script.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct EditScript {
    pub elements: Vec<ScriptElement>,
}

impl EditScript {
    pub fn from_ops(ops: &[AppliedOp]) -> Self {
        let mut script = Self::default();
        for s in ops.iter().filter(|s| (s.i, s.j) != (0, 0)) {
            script.push(s.op);
        }
        script
    }

    pub fn push(&mut self, op: EditOp) {
        if let Some(s) = self.elements.last_mut() {
            if s.op == op {
                s.length += 1;
                return;
            }
        }
        self.elements.push(ScriptElement { op, length: 1 });
    }

    /// The number of steps in the script.
    pub fn len(&self) -> usize {
        self.elements.iter().map(|e| e.length).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn count(&self, op: EditOp) -> usize {
        self.elements
            .iter()
            .filter(|e| e.op == op)
            .map(|e| e.length)
            .sum()
    }
}

impl fmt::Display for EditScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.elements {
            write!(f, "{}{}", e.length, e.op.to_char())?;
        }
        Ok(())
    }
}

/// Apply `ops` to `a`. Replaced and inserted symbols are taken from `b`.
///
/// Copied and twiddled symbols are taken from `a`, so that the result only
/// equals `b` when the operations are correct.
pub fn replay(a: Seq, b: Seq, ops: &[AppliedOp]) -> Sequence {
    let mut out = Sequence::with_capacity(b.len());
    for s in ops {
        match s.op {
            EditOp::Copy if (s.i, s.j) == (0, 0) => {}
            EditOp::Copy => out.push(a[s.i - 1]),
            EditOp::Replace | EditOp::Insert => out.push(b[s.j - 1]),
            EditOp::Twiddle => {
                out.push(a[s.i - 1]);
                out.push(a[s.i - 2]);
            }
            EditOp::Delete | EditOp::Kill => {}
        }
    }
    out
}

/// Check that `ops` transforms `a` into `b` and return its total cost.
///
/// Panics when:
/// - the sequence does not start with `Copy` at `(0,0)` or end at `(|a|,|b|)`,
/// - a step does not advance by the size of its operation,
/// - a copy is applied to different symbols or a replace to equal ones,
/// - a cost differs from `costs`, except for kill steps, of which exactly the
///   last one of the run is charged,
/// - replaying does not give `b`.
pub fn verify(a: Seq, b: Seq, ops: &[AppliedOp], costs: &EditCosts) -> Cost {
    let (Some(first), Some(last)) = (ops.first(), ops.last()) else {
        panic!("empty operation sequence");
    };
    assert_eq!((first.op, first.i, first.j), (EditOp::Copy, 0, 0));
    assert_eq!((last.i, last.j), (a.len(), b.len()));

    let mut cost = first.cost;
    assert_eq!(first.cost, costs.cost(EditOp::Copy));
    for (k, w) in ops.windows(2).enumerate() {
        let (prev, s) = (w[0], w[1]);
        let (di, dj) = s.op.delta();
        assert_eq!(
            (prev.i + di, prev.j + dj),
            (s.i, s.j),
            "step {} {s} does not follow {prev}",
            k + 1
        );
        match s.op {
            EditOp::Copy => assert_eq!(a[s.i - 1], b[s.j - 1]),
            EditOp::Replace => assert_ne!(a[s.i - 1], b[s.j - 1]),
            EditOp::Twiddle => {
                assert_eq!(a[s.i - 1], b[s.j - 2]);
                assert_eq!(a[s.i - 2], b[s.j - 1]);
            }
            _ => {}
        }
        if s.op == EditOp::Kill {
            let is_last = k + 2 == ops.len();
            assert_eq!(s.cost, if is_last { costs.cost(EditOp::Kill) } else { 0 });
        } else {
            assert_ne!(prev.op, EditOp::Kill, "{s} follows a kill");
            assert_eq!(s.cost, costs.cost(s.op));
        }
        cost = cost.saturating_add(s.cost);
    }

    assert_eq!(replay(a, b, ops), b);
    cost
}
