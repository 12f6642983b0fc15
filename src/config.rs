/// Tunable constants for a solve.
///
/// `big_m`, `max_iterations`, and the three epsilons are boundary-sensitive
/// enough that tests rely on their exact values, so they're exposed here
/// rather than hard-coded, defaulting to values known to behave well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Big-M penalty placed on artificial-variable objective coefficients.
    pub big_m: f64,
    /// Hard cap on pivot iterations.
    pub max_iterations: usize,
    /// Absolute tolerance for reduced-cost optimality / zero checks.
    pub reduced_cost_eps: f64,
    /// Strict-positivity threshold for ratio-test direction entries.
    pub ratio_eps: f64,
    /// Tolerance for "basic artificial is actually zero" and constraint
    /// feasibility checks.
    pub feasibility_eps: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            big_m: 1e7,
            max_iterations: 200,
            reduced_cost_eps: 1e-9,
            ratio_eps: 1e-12,
            feasibility_eps: 1e-9,
        }
    }
}
