use std::collections::HashSet;

use nalgebra::{DMatrix, DVector};

use crate::error::SolverError;
use crate::model::{Goal, Problem, Relation};

/// Canonical maximization form: `(A, b, c_ext, basis, artificial_set)`,
/// plus whether the original request was a `MINIMIZE` so the optimal
/// value can be negated back on the way out.
#[derive(Debug, Clone)]
pub struct CanonicalForm {
    /// Original decision variable count, `n`.
    pub n: usize,
    /// `n` plus slack/surplus/artificial columns.
    pub total_vars: usize,
    pub a: DMatrix<f64>,
    pub b: DVector<f64>,
    pub c_ext: DVector<f64>,
    pub basis: Vec<usize>,
    pub artificial_set: HashSet<usize>,
    pub was_minimize: bool,
}

impl CanonicalForm {
    /// Converts `problem` into canonical maximization form: negates the
    /// objective for `MINIMIZE`, flips negative-rhs rows, and adds a
    /// slack/surplus/artificial column per constraint with a Big-M
    /// penalty on the artificial ones.
    pub fn normalize(problem: Problem, big_m: f64) -> Result<Self, SolverError> {
        let n = problem.n_vars();
        let m = problem.n_constraints();

        for (row, constraint) in problem.constraints.iter().enumerate() {
            if constraint.coefficients.len() != n {
                return Err(SolverError::RowShape {
                    row,
                    expected: n,
                    actual: constraint.coefficients.len(),
                });
            }
        }

        // step 1: MINIMIZE requests solve -c in maximization form.
        let was_minimize = problem.goal == Goal::Min;
        let sign = if was_minimize { -1.0 } else { 1.0 };

        // step 2: negate rows with rhs < 0, flipping <= <-> >=.
        let normalised: Vec<_> = problem.constraints.iter().map(|c| c.normalised()).collect();

        // step 3: one extra column per <= or =, two per >= (surplus + artificial).
        let extra: usize = normalised
            .iter()
            .map(|c| match c.relation {
                Relation::LessEqual => 1,
                Relation::GreaterEqual => 2,
                Relation::Equal => 1,
            })
            .sum();
        let total_vars = n + extra;

        let mut a = DMatrix::<f64>::zeros(m, total_vars);
        for (i, constraint) in normalised.iter().enumerate() {
            for (j, &coeff) in constraint.coefficients.iter().enumerate() {
                a[(i, j)] = coeff;
            }
        }

        let mut b = DVector::<f64>::zeros(m);
        let mut basis = vec![0usize; m];
        let mut artificial_set = HashSet::new();
        let mut col = n;

        // step 4/5: slack, surplus+artificial, or artificial column per row.
        for (i, constraint) in normalised.iter().enumerate() {
            b[i] = constraint.rhs;
            match constraint.relation {
                Relation::LessEqual => {
                    a[(i, col)] = 1.0;
                    basis[i] = col;
                    col += 1;
                }
                Relation::GreaterEqual => {
                    a[(i, col)] = -1.0;
                    col += 1;
                    a[(i, col)] = 1.0;
                    basis[i] = col;
                    artificial_set.insert(col);
                    col += 1;
                }
                Relation::Equal => {
                    a[(i, col)] = 1.0;
                    basis[i] = col;
                    artificial_set.insert(col);
                    col += 1;
                }
            }
        }

        // step 6: extended objective row, Big-M penalty on artificial columns.
        let mut c_ext = DVector::<f64>::zeros(total_vars);
        for (j, &coeff) in problem.objective.iter().enumerate() {
            c_ext[j] = sign * coeff;
        }
        for &j in &artificial_set {
            c_ext[j] = -big_m;
        }

        Ok(CanonicalForm {
            n,
            total_vars,
            a,
            b,
            c_ext,
            basis,
            artificial_set,
            was_minimize,
        })
    }

    /// Number of constraint rows, `m`.
    pub fn m(&self) -> usize {
        self.a.nrows()
    }

    pub fn non_basis_columns(&self) -> Vec<usize> {
        let mut in_basis = vec![false; self.total_vars];
        for &col in &self.basis {
            in_basis[col] = true;
        }
        (0..self.total_vars).filter(|&j| !in_basis[j]).collect()
    }
}
