//! Reconstruction of the operation sequence from a filled operation matrix.
use crate::{
    cost_model::EditCosts,
    matrix::Matrix,
    operation::{AppliedOp, EditOp},
};

/// Walk the operation matrix from the last cell back to the origin.
///
/// Returns the steps in the order they are applied: the origin `Copy` at
/// `(0,0)` first, the step ending in the last cell last.
///
/// When the last cell holds `Kill`, `kill_row` must be the row the truncation
/// starts from. Every discarded symbol gets its own `Kill` step; only the step
/// in the last cell is charged the kill cost, the others cost 0.
///
/// Panics when the matrix is inconsistent: a step leaving the matrix, or a
/// `Kill` anywhere but the last cell.
pub fn traceback(
    ops: &Matrix<EditOp>,
    costs: &EditCosts,
    kill_row: Option<usize>,
) -> Vec<AppliedOp> {
    assert!(ops.rows() > 0 && ops.cols() > 0, "empty operation matrix");
    let mut i = ops.rows() - 1;
    let mut j = ops.cols() - 1;
    let mut path = Vec::with_capacity(i + j + 1);

    if let Some(k) = kill_row {
        assert_eq!(
            ops[(i, j)],
            EditOp::Kill,
            "Traceback error! Kill row {k} given but ({i},{j}) is not a kill"
        );
        assert!(k < i, "Traceback error! Kill row {k} is not above row {i}");
        path.push(AppliedOp {
            op: EditOp::Kill,
            i,
            j,
            cost: costs.cost(EditOp::Kill),
        });
        i -= 1;
        while i > k {
            path.push(AppliedOp {
                op: EditOp::Kill,
                i,
                j,
                cost: 0,
            });
            i -= 1;
        }
    }

    while (i, j) != (0, 0) {
        let op = ops[(i, j)];
        let (di, dj) = op.delta();
        assert!(
            op != EditOp::Kill && di <= i && dj <= j,
            "Traceback error! Cannot apply {op} at ({i},{j})"
        );
        path.push(AppliedOp {
            op,
            i,
            j,
            cost: costs.cost(op),
        });
        i -= di;
        j -= dj;
    }

    let origin = ops[(0, 0)];
    assert_eq!(origin, EditOp::Copy, "Traceback error! Origin holds {origin}");
    path.push(AppliedOp {
        op: origin,
        i: 0,
        j: 0,
        cost: costs.cost(origin),
    });
    path.reverse();
    log::trace!(
        "traceback of {}x{} matrix: {} steps",
        ops.rows(),
        ops.cols(),
        path.len()
    );
    path
}
