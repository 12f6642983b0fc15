use tracing::{debug, info, instrument};

use crate::classify::{classify, Classification};
use crate::config::SolverConfig;
use crate::error::SolverError;
use crate::model::Problem;
use crate::pivot::{PivotEngine, PivotOutcome};
use crate::step::StepRecord;

/// Terminal state of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// `multiple` is set when a non-basic column has zero reduced cost
    /// at termination: the optimal vertex is not unique.
    Optimal { multiple: bool },
    /// A basic artificial variable is still positive at termination.
    Infeasible,
    Unbounded,
    /// The basis matrix failed to factor.
    SingularBasis,
    /// The pivot loop hit `max_iterations` without reaching optimality.
    IterationLimit,
}

/// Full result of a solve: the classification, the assembled solution,
/// and the per-iteration step trace.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub status: Status,
    pub values: Vec<f64>,
    pub objective: f64,
    pub steps: Vec<StepRecord>,
    pub warning: Option<String>,
}

/// Normalizes `problem` into canonical form, runs the Big-M revised
/// simplex pivot loop, and classifies the result.
#[instrument(skip(problem, config), fields(n = problem.n_vars(), m = problem.n_constraints()))]
pub fn solve(problem: Problem, config: &SolverConfig) -> Result<SolveOutcome, SolverError> {
    let canonical = problem.into_canonical(config.big_m)?;
    let mut engine = PivotEngine::new(&canonical);
    let mut steps = Vec::new();

    for iteration in 0..config.max_iterations {
        match engine.iterate(iteration, config) {
            PivotOutcome::Pivoted(step) => {
                debug!(
                    iteration,
                    entering = step.entering,
                    leaving = step.leaving,
                    t = step.t,
                    "pivot"
                );
                steps.push(step);
            }
            PivotOutcome::Optimal(priced) => {
                let (classification, solution) = classify(
                    &canonical,
                    engine.basis(),
                    engine.b(),
                    &priced,
                    config.feasibility_eps,
                );
                let status = status_for(classification);
                info!(?status, iterations = steps.len(), "solve finished");
                return Ok(SolveOutcome {
                    status,
                    values: solution.values,
                    objective: solution.objective,
                    steps,
                    warning: warning_for(status),
                });
            }
            PivotOutcome::Unbounded => {
                info!(iterations = steps.len(), "solve finished: unbounded");
                return Ok(SolveOutcome {
                    status: Status::Unbounded,
                    values: Vec::new(),
                    objective: 0.0,
                    steps,
                    warning: warning_for(Status::Unbounded),
                });
            }
            PivotOutcome::Singular => {
                info!(iterations = steps.len(), "solve finished: singular basis");
                return Ok(SolveOutcome {
                    status: Status::SingularBasis,
                    values: Vec::new(),
                    objective: 0.0,
                    steps,
                    warning: warning_for(Status::SingularBasis),
                });
            }
        }
    }

    // Iteration cap reached: classify the best-so-far basis rather than
    // discarding the work. `classify`'s infeasibility check still applies
    // if an artificial is stuck in the basis.
    let (_classification, solution) = classify(&canonical, engine.basis(), engine.b(), &[], config.feasibility_eps);
    info!(iterations = steps.len(), "solve finished: iteration limit");
    Ok(SolveOutcome {
        status: Status::IterationLimit,
        values: solution.values,
        objective: solution.objective,
        steps,
        warning: warning_for(Status::IterationLimit),
    })
}

fn status_for(classification: Classification) -> Status {
    match classification {
        Classification::Infeasible => Status::Infeasible,
        Classification::OptimalUnique => Status::Optimal { multiple: false },
        Classification::OptimalMultiple => Status::Optimal { multiple: true },
    }
}

pub(crate) fn warning_for(status: Status) -> Option<String> {
    match status {
        Status::Optimal { multiple: false } => None,
        Status::Optimal { multiple: true } => {
            Some("Solución óptima no única: existen infinitas soluciones".to_string())
        }
        Status::Infeasible => Some("Problema infactible: no existe solución".to_string()),
        Status::Unbounded => Some("Problema no acotado".to_string()),
        Status::SingularBasis => {
            Some("Matriz singular, problema infactible o mal planteado".to_string())
        }
        Status::IterationLimit => None,
    }
}
