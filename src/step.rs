/// Full snapshot of one pivot iteration. Entering/leaving labels are
/// 1-based to match the external step trace; `pivot_row`/`pivot_col` stay
/// 0-based since they index directly into `tableau`.
#[derive(Debug, Clone)]
pub struct StepRecord {
    /// Zero-based.
    pub iteration: usize,
    pub basis_before: Vec<usize>,
    pub nonbasis_before: Vec<usize>,
    /// Reduced costs over `nonbasis_before`, same order.
    pub reduced_costs: Vec<f64>,
    pub b_before: Vec<f64>,
    /// 1-based column label of the entering variable.
    pub entering: usize,
    /// 1-based column label of the leaving variable.
    pub leaving: usize,
    /// Ratio-test minimum, `theta`.
    pub t: f64,
    /// `m x (total_vars + 1)` snapshot, last column is `b`.
    pub tableau: Vec<Vec<f64>>,
    /// Full extended objective row, `c_ext`.
    pub cj: Vec<f64>,
    /// Objective coefficients of the basic variables, in basis order.
    pub cb: Vec<f64>,
    pub pivot_row: usize,
    pub pivot_col: usize,
}
