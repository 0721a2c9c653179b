//! Cost-only computation in linear memory.
use std::cmp::min;

use pa_types::{Cost, Seq};

use crate::{config::EngineConfig, operation::EditOp};

/// The value of the last cell of the cost matrix, without building the
/// matrices or the operation sequence.
///
/// Keeps only the last three rows, as twiddle looks two rows back, plus the
/// minimum of the last column for the kill pass. Candidates and ties are
/// handled exactly as in [`EditDistance`](crate::engine::EditDistance), so
/// the result equals its `cost_matrix()` at `(|a|, |b|)`, and its
/// `distance()` whenever copying costs 0.
pub fn edit_distance(a: Seq, b: Seq, config: &EngineConfig) -> Cost {
    let copy = config.cost(EditOp::Copy);
    let replace = config.cost(EditOp::Replace);
    let twiddle = config.cost(EditOp::Twiddle);
    let delete = config.cost(EditOp::Delete);
    let insert = config.cost(EditOp::Insert);

    let n = b.len();
    let mut prev2: Vec<Cost> = vec![0; n + 1];
    let mut prev: Vec<Cost> = (0..=n).map(|j| (j as Cost).saturating_mul(insert)).collect();
    prev[0] = copy;
    let mut cur: Vec<Cost> = vec![0; n + 1];
    let mut min_last_column = prev[n];

    for i in 1..=a.len() {
        cur[0] = (i as Cost).saturating_mul(delete);
        for j in 1..=n {
            let diagonal = if a[i - 1] == b[j - 1] { copy } else { replace };
            let mut best = prev[j - 1].saturating_add(diagonal);
            if config.twiddle && i >= 2 && j >= 2 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = min(best, prev2[j - 2].saturating_add(twiddle));
            }
            best = min(best, prev[j].saturating_add(delete));
            best = min(best, cur[j - 1].saturating_add(insert));
            cur[j] = best;
        }
        min_last_column = min(min_last_column, cur[n]);
        std::mem::swap(&mut prev2, &mut prev);
        std::mem::swap(&mut prev, &mut cur);
    }

    let last = prev[n];
    let kill = min_last_column.saturating_add(config.cost(EditOp::Kill));
    if config.kill && kill < last {
        kill
    } else {
        last
    }
}
