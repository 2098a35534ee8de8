//! Win evaluation: the leftmost-anchored run rule
//!
//! For each row, only the run of consecutive equal symbols starting at
//! column 0 can pay, and only at length ≥ 2. Equal runs further right in
//! the same row never score. This is the game's paytable as shipped, kept
//! literally; it is not a full line-scan or cluster-pay evaluation.

use serde::{Deserialize, Serialize};

use crate::result::ResultGrid;

/// Outcome of evaluating one result grid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinEvaluation {
    /// Total credits won (0 = no win)
    pub win_amount: u32,
    /// Every (column, row) cell in a paying run
    pub winning_positions: Vec<(u8, u8)>,
}

impl WinEvaluation {
    /// Did anything pay?
    pub fn is_win(&self) -> bool {
        self.win_amount > 0
    }
}

/// Evaluate a result grid. Pure and idempotent; each paying run contributes
/// `run_length × symbol_value` credits.
pub fn evaluate(grid: &ResultGrid, symbol_value: u32) -> WinEvaluation {
    let mut win_amount = 0u32;
    let mut winning_positions = Vec::new();

    for row in 0..grid.rows() {
        let anchor = grid.symbol(0, row);
        let mut run = 1;
        while run < grid.columns() && grid.symbol(run, row) == anchor {
            run += 1;
        }

        if run >= 2 {
            win_amount += run as u32 * symbol_value;
            for col in 0..run {
                winning_positions.push((col as u8, row as u8));
            }
        }
    }

    WinEvaluation {
        win_amount,
        winning_positions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(columns: Vec<Vec<u8>>) -> ResultGrid {
        ResultGrid::new(columns)
    }

    #[test]
    fn test_anchored_run_pays() {
        // 2 rows × 3 columns: row 0 = (1,1,2) pays a 2-run, row 1 = (1,2,2)
        // breaks at column 1 and the later 2-run must not pay.
        let g = grid(vec![vec![1, 1], vec![1, 2], vec![2, 2]]);
        let eval = evaluate(&g, 1);
        assert_eq!(eval.win_amount, 2);
        assert_eq!(eval.winning_positions, vec![(0, 0), (1, 0)]);
    }

    #[test]
    fn test_full_row_pays_row_length() {
        let g = grid(vec![vec![3, 1, 2], vec![3, 2, 2], vec![3, 2, 1]]);
        // Row 0: (3,3,3) → 3 credits. Row 1: (1,2,2) → nothing (not anchored).
        // Row 2: (2,2,1) → 2 credits.
        let eval = evaluate(&g, 1);
        assert_eq!(eval.win_amount, 5);
        assert_eq!(
            eval.winning_positions,
            vec![(0, 0), (1, 0), (2, 0), (0, 2), (1, 2)]
        );
    }

    #[test]
    fn test_no_win_when_every_anchor_breaks() {
        let g = grid(vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 1]]);
        let eval = evaluate(&g, 1);
        assert_eq!(eval.win_amount, 0);
        assert!(eval.winning_positions.is_empty());
        assert!(!eval.is_win());
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let g = grid(vec![vec![4, 4, 4], vec![4, 4, 1], vec![4, 1, 1]]);
        let first = evaluate(&g, 1);
        let second = evaluate(&g, 1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_symbol_value_scales_payout() {
        let g = grid(vec![vec![2, 1], vec![2, 1], vec![1, 1]]);
        // Row 0: run of 2. Row 1: run of 3.
        assert_eq!(evaluate(&g, 1).win_amount, 5);
        assert_eq!(evaluate(&g, 3).win_amount, 15);
    }
}
