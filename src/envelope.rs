use serde::{Deserialize, Serialize};

use crate::config::SolverConfig;
use crate::error::SolverError;
use crate::model::{Goal, Problem, Relation};
use crate::solver::{self, SolveOutcome};
use crate::step::StepRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectiveEnvelope {
    pub n: usize,
    pub coefficients: Vec<f64>,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstraintsEnvelope {
    pub rows: usize,
    pub cols: usize,
    pub vars: Vec<f64>,
    #[serde(default)]
    pub signs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequestEnvelope {
    pub objective: ObjectiveEnvelope,
    pub constraints: ConstraintsEnvelope,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepEnvelope {
    pub iteration: usize,
    /// 1-based.
    pub basis: Vec<usize>,
    /// 1-based.
    pub nonbasis: Vec<usize>,
    pub reduced_costs: Vec<f64>,
    pub b: Vec<f64>,
    pub entering: usize,
    pub leaving: usize,
    pub t: f64,
    pub tableau: Vec<Vec<f64>>,
    pub cj: Vec<f64>,
    pub cb: Vec<f64>,
    pub pivot_row: usize,
    pub pivot_col: usize,
}

impl From<StepRecord> for StepEnvelope {
    fn from(step: StepRecord) -> Self {
        StepEnvelope {
            iteration: step.iteration,
            basis: step.basis_before.iter().map(|c| c + 1).collect(),
            nonbasis: step.nonbasis_before.iter().map(|c| c + 1).collect(),
            reduced_costs: step.reduced_costs,
            b: step.b_before,
            entering: step.entering,
            leaving: step.leaving,
            t: step.t,
            tableau: step.tableau,
            cj: step.cj,
            cb: step.cb,
            pivot_row: step.pivot_row,
            pivot_col: step.pivot_col,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResponseEnvelope {
    pub optimal_value: f64,
    pub solution: Vec<f64>,
    pub steps: Vec<StepEnvelope>,
    pub warning: String,
}

/// Parses the wire request, runs the core solver, and renders the wire
/// response. No networking; the caller owns HTTP decoding.
pub fn solve_request(envelope: SolveRequestEnvelope) -> Result<SolveResponseEnvelope, SolverError> {
    let n = envelope.objective.n;
    let rows = envelope.constraints.rows;
    let cols = envelope.constraints.cols;

    if cols != n + 1 {
        return Err(SolverError::RowShape {
            row: 0,
            expected: n + 1,
            actual: cols,
        });
    }
    if !envelope.constraints.signs.is_empty() && envelope.constraints.signs.len() != rows {
        return Err(SolverError::SignsShape {
            rows,
            len: envelope.constraints.signs.len(),
        });
    }

    let goal = if envelope.objective.kind.eq_ignore_ascii_case("minimize") {
        Goal::Min
    } else {
        Goal::Max
    };
    let mut problem = Problem::new(envelope.objective.coefficients, goal);

    for i in 0..rows {
        let row_start = i * cols;
        if row_start + cols > envelope.constraints.vars.len() {
            return Err(SolverError::RowShape {
                row: i,
                expected: cols,
                actual: envelope.constraints.vars.len().saturating_sub(row_start),
            });
        }
        let coefficients = envelope.constraints.vars[row_start..row_start + n].to_vec();
        let rhs = envelope.constraints.vars[row_start + n];
        let relation = match envelope.constraints.signs.get(i).map(String::as_str) {
            Some("<=") | None => Relation::LessEqual,
            Some(">=") => Relation::GreaterEqual,
            Some("=") => Relation::Equal,
            Some(_) => Relation::LessEqual,
        };
        problem.add_constraint(coefficients, relation, rhs);
    }

    let outcome = solver::solve(problem, &SolverConfig::default())?;
    Ok(render(outcome))
}

fn render(outcome: SolveOutcome) -> SolveResponseEnvelope {
    SolveResponseEnvelope {
        optimal_value: outcome.objective,
        solution: outcome.values,
        steps: outcome.steps.into_iter().map(StepEnvelope::from).collect(),
        warning: outcome.warning.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s1_scenario_round_trips_through_the_envelope() {
        let request = SolveRequestEnvelope {
            objective: ObjectiveEnvelope {
                n: 3,
                coefficients: vec![5.0, 4.0, 3.0],
                kind: "maximize".to_string(),
            },
            constraints: ConstraintsEnvelope {
                rows: 3,
                cols: 4,
                vars: vec![
                    2.0, 3.0, 1.0, 5.0, //
                    4.0, 1.0, 2.0, 11.0, //
                    3.0, 4.0, 2.0, 8.0,
                ],
                signs: Vec::new(),
            },
        };
        let response = solve_request(request).unwrap();
        assert!((response.optimal_value - 13.0).abs() < 1e-6);
        assert_eq!(response.warning, "");
    }

    #[test]
    fn column_count_mismatch_is_invalid_shape() {
        let request = SolveRequestEnvelope {
            objective: ObjectiveEnvelope {
                n: 2,
                coefficients: vec![1.0, 1.0],
                kind: "maximize".to_string(),
            },
            constraints: ConstraintsEnvelope {
                rows: 1,
                cols: 2,
                vars: vec![1.0, 1.0],
                signs: Vec::new(),
            },
        };
        assert!(solve_request(request).is_err());
    }

    #[test]
    fn mismatched_signs_length_is_invalid_shape() {
        let request = SolveRequestEnvelope {
            objective: ObjectiveEnvelope {
                n: 1,
                coefficients: vec![1.0],
                kind: "maximize".to_string(),
            },
            constraints: ConstraintsEnvelope {
                rows: 2,
                cols: 2,
                vars: vec![1.0, 1.0, 1.0, 1.0],
                signs: vec!["<=".to_string()],
            },
        };
        let err = solve_request(request).unwrap_err();
        assert_eq!(err, SolverError::SignsShape { rows: 2, len: 1 });
    }
}
