//! The edit distance engine: fills the cost and operation matrices, applies
//! the kill pass and reconstructs the optimal operation sequence.
use std::fmt;

use pa_types::{seq_to_string, Cost, Seq, Sequence};

use crate::{
    config::EngineConfig,
    matrix::{format_with_headings, Matrix},
    operation::{AppliedOp, EditOp},
    traceback::traceback,
};

/// Heading used for the row and column of the empty prefix.
pub const EMPTY_PREFIX: char = 'ε';

/// The edit distance between a starting word and a target word.
///
/// Everything is computed on construction; afterwards the value is
/// read-only. Row and column 0 of the matrices stand for the empty prefix, so
/// row `i` corresponds to symbol `a[i-1]` of the starting word. The empty
/// prefix is a position and never a symbol, so any byte is valid input.
#[derive(Clone, Debug)]
pub struct EditDistance {
    a: Sequence,
    b: Sequence,
    config: EngineConfig,
    costs: Matrix<Cost>,
    ops: Matrix<EditOp>,
    /// The row the kill truncation starts from, when kill won.
    kill_row: Option<usize>,
    operations: Vec<AppliedOp>,
    distance: Cost,
}

impl EditDistance {
    /// Compute with the default configuration.
    pub fn new(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> Self {
        Self::with_config(a, b, &EngineConfig::default())
    }

    pub fn with_config(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>, config: &EngineConfig) -> Self {
        let a = a.as_ref().to_vec();
        let b = b.as_ref().to_vec();
        let (mut costs, mut ops) = fill(&a, &b, config);
        let kill_row = if config.kill {
            kill_pass(&mut costs, &mut ops, config.cost(EditOp::Kill))
        } else {
            None
        };
        let operations = traceback(&ops, &config.costs, kill_row);
        let distance = operations
            .iter()
            .fold(0 as Cost, |d, s| d.saturating_add(s.cost));
        Self {
            a,
            b,
            config: *config,
            costs,
            ops,
            kill_row,
            operations,
            distance,
        }
    }

    pub fn distance(&self) -> Cost {
        self.distance
    }

    /// The steps transforming the starting word into the target word, the
    /// origin `Copy` at `(0,0)` first.
    pub fn operations(&self) -> &[AppliedOp] {
        &self.operations
    }

    pub fn starting_word(&self) -> Seq {
        &self.a
    }

    pub fn target_word(&self) -> Seq {
        &self.b
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// A copy of the cost matrix, of size `(|a|+1) x (|b|+1)`.
    pub fn cost_matrix(&self) -> Matrix<Cost> {
        self.costs.clone()
    }

    /// A copy of the operation matrix.
    pub fn operation_matrix(&self) -> Matrix<EditOp> {
        self.ops.clone()
    }

    pub fn kill_row(&self) -> Option<usize> {
        self.kill_row
    }

    fn headings(&self) -> (Vec<char>, Vec<char>) {
        let heading = |s: Seq| {
            std::iter::once(EMPTY_PREFIX)
                .chain(s.iter().map(|&c| c as char))
                .collect::<Vec<_>>()
        };
        (heading(&self.a), heading(&self.b))
    }

    pub fn cost_matrix_string(&self) -> String {
        let (rows, cols) = self.headings();
        format!("COST MATRIX:\n{}", format_with_headings(&rows, &cols, &self.costs))
    }

    pub fn operation_matrix_string(&self) -> String {
        let (rows, cols) = self.headings();
        let chars = {
            let mut m = Matrix::new(self.ops.rows(), self.ops.cols(), ' ');
            for i in 0..self.ops.rows() {
                for j in 0..self.ops.cols() {
                    m[(i, j)] = self.ops[(i, j)].to_char();
                }
            }
            m
        };
        format!(
            "OPERATION MATRIX:\n{}",
            format_with_headings(&rows, &cols, &chars)
        )
    }
}

impl fmt::Display for EditDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:?} -> {:?}",
            seq_to_string(&self.a),
            seq_to_string(&self.b)
        )?;
        writeln!(f, "Edit Distance = {}", self.distance)?;
        write!(f, "{}", self.cost_matrix_string())
    }
}

/// Fill both matrices row by row. Costs saturate at `Cost::MAX`.
///
/// Candidates are tried in the order diagonal (copy or replace), twiddle,
/// delete, insert, and a later candidate only wins when it is strictly
/// cheaper.
fn fill(a: Seq, b: Seq, config: &EngineConfig) -> (Matrix<Cost>, Matrix<EditOp>) {
    let cm = &config.costs;
    let copy = cm.cost(EditOp::Copy);
    let replace = cm.cost(EditOp::Replace);
    let twiddle = cm.cost(EditOp::Twiddle);
    let delete = cm.cost(EditOp::Delete);
    let insert = cm.cost(EditOp::Insert);

    let (m, n) = (a.len(), b.len());
    let mut d = Matrix::new(m + 1, n + 1, 0 as Cost);
    let mut ops = Matrix::new(m + 1, n + 1, EditOp::Copy);

    d[(0, 0)] = copy;
    for i in 1..=m {
        d[(i, 0)] = (i as Cost).saturating_mul(delete);
        ops[(i, 0)] = EditOp::Delete;
    }
    for j in 1..=n {
        d[(0, j)] = (j as Cost).saturating_mul(insert);
        ops[(0, j)] = EditOp::Insert;
    }

    for i in 1..=m {
        for j in 1..=n {
            let (mut best, mut op) = if a[i - 1] == b[j - 1] {
                (d[(i - 1, j - 1)].saturating_add(copy), EditOp::Copy)
            } else {
                (d[(i - 1, j - 1)].saturating_add(replace), EditOp::Replace)
            };
            if config.twiddle && i >= 2 && j >= 2 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                let cost = d[(i - 2, j - 2)].saturating_add(twiddle);
                if cost < best {
                    (best, op) = (cost, EditOp::Twiddle);
                }
            }
            let cost = d[(i - 1, j)].saturating_add(delete);
            if cost < best {
                (best, op) = (cost, EditOp::Delete);
            }
            let cost = d[(i, j - 1)].saturating_add(insert);
            if cost < best {
                (best, op) = (cost, EditOp::Insert);
            }
            d[(i, j)] = best;
            ops[(i, j)] = op;
        }
    }
    (d, ops)
}

/// Replace the last cell by a kill when truncating the starting word after
/// some row of the last column is strictly cheaper.
///
/// Returns the row the truncation starts from. On ties the lowest row wins.
fn kill_pass(costs: &mut Matrix<Cost>, ops: &mut Matrix<EditOp>, kill: Cost) -> Option<usize> {
    let (m, n) = (costs.rows() - 1, costs.cols() - 1);
    let (k, kill_cost) = costs
        .column(n)
        .into_iter()
        .map(|c| c.saturating_add(kill))
        .enumerate()
        .min_by_key(|&(_, c)| c)?;
    if kill_cost >= costs[(m, n)] {
        return None;
    }
    log::debug!(
        "kill after row {k} costs {kill_cost}, cheaper than {}",
        costs[(m, n)]
    );
    costs[(m, n)] = kill_cost;
    ops[(m, n)] = EditOp::Kill;
    Some(k)
}
