use thiserror::Error;

/// Errors raised before any solve state exists.
///
/// Every other terminal condition in the algorithm (singular basis,
/// unbounded, infeasible, iteration limit) is a [`crate::solver::Status`],
/// not an `Err` — the solve still ran and produced a step trace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverError {
    /// A constraint row's column count doesn't match `n`.
    #[error("constraint row {row} has {actual} columns, expected {expected}")]
    RowShape {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// `signs` length is neither 0 nor the number of constraint rows.
    #[error("{len} signs provided for {rows} constraint rows")]
    SignsShape { rows: usize, len: usize },
}
