use nalgebra::{DMatrix, DVector};

use crate::basis::BasisManager;
use crate::canonical::CanonicalForm;
use crate::config::SolverConfig;
use crate::step::StepRecord;

/// Result of one call to [`PivotEngine::iterate`].
pub enum PivotOutcome {
    /// A pivot was applied; the basis has changed and another iteration
    /// is needed to re-check optimality.
    Pivoted(StepRecord),
    /// No entering column improves the objective; the loop is done.
    /// Carries `(column, reduced_cost)` for every non-basic column so the
    /// caller can check for alternate optima.
    Optimal(Vec<(usize, f64)>),
    /// The ratio test found no positive direction entry.
    Unbounded,
    /// The basis matrix `B` failed to factor.
    Singular,
}

/// Runs the revised-simplex pivot loop over a fixed `A`/`c_ext`, mutating
/// only the basis and `b` between calls to [`Self::iterate`].
pub struct PivotEngine {
    a: DMatrix<f64>,
    c_ext: DVector<f64>,
    basis_mgr: BasisManager,
    total_vars: usize,
}

impl PivotEngine {
    pub fn new(canonical: &CanonicalForm) -> Self {
        Self {
            a: canonical.a.clone(),
            c_ext: canonical.c_ext.clone(),
            basis_mgr: BasisManager::new(canonical.basis.clone(), canonical.b.clone()),
            total_vars: canonical.total_vars,
        }
    }

    pub fn basis(&self) -> &[usize] {
        self.basis_mgr.current_basis_columns()
    }

    pub fn b(&self) -> &DVector<f64> {
        self.basis_mgr.b()
    }

    /// Assembles `B`, factors it once, prices out the non-basic columns,
    /// picks an entering/leaving pair, and pivots.
    pub fn iterate(&mut self, iteration: usize, config: &SolverConfig) -> PivotOutcome {
        let m = self.a.nrows();
        let basis = self.basis_mgr.current_basis_columns().to_vec();
        let nonbasis = self.basis_mgr.non_basis_columns(self.total_vars);

        let mut b_mat = DMatrix::<f64>::zeros(m, m);
        let mut cb = DVector::<f64>::zeros(m);
        for (k, &col) in basis.iter().enumerate() {
            b_mat.set_column(k, &self.a.column(col));
            cb[k] = self.c_ext[col];
        }
        let lu_b = b_mat.clone().lu();

        // Simplex multipliers: solve B^T y = Cb, reusing B's factorization.
        let y = match lu_b.solve_transpose(&cb) {
            Some(y) => y,
            None => return PivotOutcome::Singular,
        };

        // Reduced cost per non-basic column: c_j - y . A_j.
        let mut reduced_costs = Vec::with_capacity(nonbasis.len());
        let mut entering_pos: Option<usize> = None;
        let mut entering_val = 0.0;
        for (pos, &col) in nonbasis.iter().enumerate() {
            let price = y.dot(&self.a.column(col));
            let reduced = self.c_ext[col] - price;
            reduced_costs.push(reduced);
            if reduced > config.reduced_cost_eps {
                let improves = match entering_pos {
                    None => true,
                    Some(_) => reduced > entering_val,
                };
                if improves {
                    entering_pos = Some(pos);
                    entering_val = reduced;
                }
            }
        }

        let entering_pos = match entering_pos {
            Some(pos) => pos,
            None => {
                let priced: Vec<(usize, f64)> = nonbasis
                    .iter()
                    .copied()
                    .zip(reduced_costs.iter().copied())
                    .collect();
                return PivotOutcome::Optimal(priced);
            }
        };
        let entering_col = nonbasis[entering_pos];

        // Direction vector: solve B d = A_entering.
        let direction = match lu_b.solve(&self.a.column(entering_col).clone_owned()) {
            Some(d) => d,
            None => return PivotOutcome::Singular,
        };

        // Ratio test: min b_i / d_i over d_i > ratio_eps.
        let b_before = self.basis_mgr.b().clone();
        let mut leaving_row: Option<usize> = None;
        let mut min_ratio = f64::INFINITY;
        for i in 0..m {
            let d_i = direction[i];
            if d_i > config.ratio_eps {
                let ratio = b_before[i] / d_i;
                if ratio < min_ratio {
                    min_ratio = ratio;
                    leaving_row = Some(i);
                }
            }
        }
        let leaving_row = match leaving_row {
            Some(row) => row,
            None => return PivotOutcome::Unbounded,
        };
        let theta = min_ratio;
        let leaving_col = basis[leaving_row];

        let tableau = self.snapshot_tableau(&lu_b, &b_before);

        let step = StepRecord {
            iteration,
            basis_before: basis.clone(),
            nonbasis_before: nonbasis.clone(),
            reduced_costs,
            b_before: b_before.iter().copied().collect(),
            entering: entering_col + 1,
            leaving: leaving_col + 1,
            t: theta,
            tableau,
            cj: self.c_ext.iter().copied().collect(),
            cb: cb.iter().copied().collect(),
            pivot_row: leaving_row,
            pivot_col: entering_col,
        };

        self.basis_mgr.pivot(leaving_row, entering_col, theta, &direction);

        PivotOutcome::Pivoted(step)
    }

    /// `B^{-1} A` augmented with `b`. Shares the iteration's one `B`
    /// factorization rather than re-factoring.
    fn snapshot_tableau(&self, lu_b: &nalgebra::linalg::LU<f64, nalgebra::Dyn, nalgebra::Dyn>, b: &DVector<f64>) -> Vec<Vec<f64>> {
        let m = self.a.nrows();
        let binv_a = match lu_b.solve(&self.a) {
            Some(x) => x,
            None => DMatrix::<f64>::zeros(m, self.total_vars),
        };
        (0..m)
            .map(|i| {
                let mut row: Vec<f64> = binv_a.row(i).iter().copied().collect();
                row.push(b[i]);
                row
            })
            .collect()
    }
}
