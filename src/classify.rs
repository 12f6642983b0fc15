use nalgebra::DVector;

use crate::canonical::CanonicalForm;

/// What the Termination Classifier decided about a finished pivot loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Infeasible,
    OptimalUnique,
    OptimalMultiple,
}

/// A decision-variable assignment and the objective value it attains,
/// in the original request's sense (MINIMIZE values already un-negated).
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub values: Vec<f64>,
    pub objective: f64,
}

/// Classifies a finished basis: checks for a basic artificial with
/// positive value (infeasible), otherwise assembles the solution and
/// checks the final non-basic reduced costs for alternate optima.
pub fn classify(
    canonical: &CanonicalForm,
    basis: &[usize],
    b: &DVector<f64>,
    priced_nonbasis: &[(usize, f64)],
    feasibility_eps: f64,
) -> (Classification, Solution) {
    for (row, &col) in basis.iter().enumerate() {
        if canonical.artificial_set.contains(&col) && b[row] > feasibility_eps {
            return (
                Classification::Infeasible,
                Solution {
                    values: partial_solution(canonical, basis, b),
                    objective: 0.0,
                },
            );
        }
    }

    let values = partial_solution(canonical, basis, b);
    let raw_objective: f64 = basis
        .iter()
        .zip(b.iter())
        .filter(|(&col, _)| col < canonical.n)
        .map(|(&col, &val)| canonical.c_ext[col] * val)
        .sum();
    let objective = if canonical.was_minimize {
        -raw_objective
    } else {
        raw_objective
    };

    let has_alternate_optimum = priced_nonbasis
        .iter()
        .any(|&(_, reduced)| reduced.abs() < feasibility_eps);

    let classification = if has_alternate_optimum {
        Classification::OptimalMultiple
    } else {
        Classification::OptimalUnique
    };

    (classification, Solution { values, objective })
}

fn partial_solution(canonical: &CanonicalForm, basis: &[usize], b: &DVector<f64>) -> Vec<f64> {
    let mut values = vec![0.0; canonical.n];
    for (row, &col) in basis.iter().enumerate() {
        if col < canonical.n {
            values[col] = b[row];
        }
    }
    values
}
