use nalgebra::DVector;

/// Owns the current basis column list and right-hand-side vector, and
/// applies the pivot update rule: `b[leaving] <- theta`, every
/// other row `b[i] -= theta * direction[i]`.
#[derive(Debug, Clone)]
pub struct BasisManager {
    basis: Vec<usize>,
    b: DVector<f64>,
}

impl BasisManager {
    pub fn new(basis: Vec<usize>, b: DVector<f64>) -> Self {
        Self { basis, b }
    }

    pub fn current_basis_columns(&self) -> &[usize] {
        &self.basis
    }

    pub fn non_basis_columns(&self, total_vars: usize) -> Vec<usize> {
        let mut in_basis = vec![false; total_vars];
        for &col in &self.basis {
            in_basis[col] = true;
        }
        (0..total_vars).filter(|&j| !in_basis[j]).collect()
    }

    pub fn b(&self) -> &DVector<f64> {
        &self.b
    }

    /// Replaces the basic variable in `leaving_row` with `entering_col`
    /// and updates `b` along the pivot's ratio-test direction.
    pub fn pivot(&mut self, leaving_row: usize, entering_col: usize, theta: f64, direction: &DVector<f64>) {
        for i in 0..self.b.len() {
            if i == leaving_row {
                self.b[i] = theta;
            } else {
                self.b[i] -= theta * direction[i];
            }
        }
        self.basis[leaving_row] = entering_col;
    }
}
