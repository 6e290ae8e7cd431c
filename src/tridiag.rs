//! Tridiagonal linear systems and the Thomas algorithm.

use crate::{AdiError, Result};

/// Tridiagonal matrix given by its three diagonals.
///
/// Row `i` reads `sub[i-1] x[i-1] + diag[i] x[i] + sup[i] x[i+1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalSystem {
  sub: Vec<f64>,
  diag: Vec<f64>,
  sup: Vec<f64>,
}

// constructors
impl TridiagonalSystem {
  pub fn new(sub: Vec<f64>, diag: Vec<f64>, sup: Vec<f64>) -> Result<Self> {
    check_lengths(&sub, &diag, &sup)?;
    Ok(Self { sub, diag, sup })
  }

  /// Implicit 1D diffusion operator `I - R D_xx` with Dirichlet ends.
  ///
  /// The first and last row are decoupled from the interior, so the boundary
  /// unknowns are solved for independently and overwritten by the caller.
  pub fn implicit_diffusion(n: usize, r: f64) -> Result<Self> {
    if n < 3 {
      return Err(AdiError::TooFewNodes { n });
    }
    let mut sub = vec![-r; n - 1];
    let diag = vec![1.0 + 2.0 * r; n];
    let mut sup = sub.clone();
    sub[0] = 0.0;
    sup[n - 2] = 0.0;
    Ok(Self { sub, diag, sup })
  }
}

// getters
impl TridiagonalSystem {
  pub fn len(&self) -> usize {
    self.diag.len()
  }
  pub fn is_empty(&self) -> bool {
    self.diag.is_empty()
  }
  pub fn sub(&self) -> &[f64] {
    &self.sub
  }
  pub fn diag(&self) -> &[f64] {
    &self.diag
  }
  pub fn sup(&self) -> &[f64] {
    &self.sup
  }
}

impl TridiagonalSystem {
  pub fn solve(&self, rhs: &[f64]) -> Result<na::DVector<f64>> {
    thomas_solve(&self.sub, &self.diag, &self.sup, rhs)
  }

  /// Matrix-vector product `A x`.
  pub fn apply(&self, x: &[f64]) -> Result<na::DVector<f64>> {
    let n = self.len();
    if x.len() != n {
      return Err(AdiError::DimensionMismatch {
        what: "x",
        expected: n,
        got: x.len(),
      });
    }
    let mut ax = na::DVector::zeros(n);
    for i in 0..n {
      ax[i] = self.diag[i] * x[i];
      if i > 0 {
        ax[i] += self.sub[i - 1] * x[i - 1];
      }
      if i + 1 < n {
        ax[i] += self.sup[i] * x[i + 1];
      }
    }
    Ok(ax)
  }

  pub fn to_dense(&self) -> na::DMatrix<f64> {
    let n = self.len();
    let mut mat = na::DMatrix::zeros(n, n);
    for i in 0..n {
      mat[(i, i)] = self.diag[i];
    }
    for i in 0..n.saturating_sub(1) {
      mat[(i + 1, i)] = self.sub[i];
      mat[(i, i + 1)] = self.sup[i];
    }
    mat
  }
}

/// Thomas algorithm: forward elimination followed by back substitution.
///
/// `sub` and `sup` have length `n-1`, `diag` and `rhs` length `n`.
/// The inputs are left untouched, elimination happens on private copies.
/// Stable for strictly diagonally dominant systems. A pivot that is exactly
/// zero or not finite aborts the solve.
pub fn thomas_solve(
  sub: &[f64],
  diag: &[f64],
  sup: &[f64],
  rhs: &[f64],
) -> Result<na::DVector<f64>> {
  check_lengths(sub, diag, sup)?;
  let n = diag.len();
  if rhs.len() != n {
    return Err(AdiError::DimensionMismatch {
      what: "rhs",
      expected: n,
      got: rhs.len(),
    });
  }
  if n == 0 {
    return Ok(na::DVector::zeros(0));
  }

  let mut diag = diag.to_vec();
  let mut rhs = rhs.to_vec();

  for row in 1..n {
    let pivot = checked_pivot(diag[row - 1], row - 1)?;
    let m = sub[row - 1] / pivot;
    diag[row] -= m * sup[row - 1];
    rhs[row] -= m * rhs[row - 1];
  }

  let mut x = na::DVector::zeros(n);
  x[n - 1] = rhs[n - 1] / checked_pivot(diag[n - 1], n - 1)?;
  for row in (0..n - 1).rev() {
    x[row] = (rhs[row] - sup[row] * x[row + 1]) / checked_pivot(diag[row], row)?;
  }

  Ok(x)
}

fn checked_pivot(pivot: f64, row: usize) -> Result<f64> {
  if pivot == 0.0 || !pivot.is_finite() {
    Err(AdiError::ZeroPivot { row })
  } else {
    Ok(pivot)
  }
}

fn check_lengths(sub: &[f64], diag: &[f64], sup: &[f64]) -> Result<()> {
  let noff = diag.len().saturating_sub(1);
  if sub.len() != noff {
    return Err(AdiError::DimensionMismatch {
      what: "sub",
      expected: noff,
      got: sub.len(),
    });
  }
  if sup.len() != noff {
    return Err(AdiError::DimensionMismatch {
      what: "sup",
      expected: noff,
      got: sup.len(),
    });
  }
  Ok(())
}
