//! One ADI half step: explicit across the lines, implicit along them.

use crate::{tridiag::TridiagonalSystem, AdiError, Result};

use itertools::izip;
use rayon::prelude::*;

/// Axis along which the implicit solve of a half step runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepAxis {
  X,
  Y,
}
impl SweepAxis {
  pub fn other(self) -> Self {
    match self {
      Self::X => Self::Y,
      Self::Y => Self::X,
    }
  }
}

/// Half-step operator shared by all lines of all sweeps of a run.
#[derive(Debug, Clone)]
pub struct DiffusionSweep {
  system: TridiagonalSystem,
  r: f64,
  boundary: f64,
}

impl DiffusionSweep {
  /// `r` is the diffusion number `sigma dt / (2 dx^2)`,
  /// `boundary` the fixed temperature on the edge of the domain.
  pub fn new(nnodes: usize, r: f64, boundary: f64) -> Result<Self> {
    let system = TridiagonalSystem::implicit_diffusion(nnodes, r)?;
    Ok(Self {
      system,
      r,
      boundary,
    })
  }

  pub fn system(&self) -> &TridiagonalSystem {
    &self.system
  }
  pub fn diffusion_number(&self) -> f64 {
    self.r
  }
  pub fn boundary(&self) -> f64 {
    self.boundary
  }

  /// Advance the field `(ix, iy)` by one half step, implicit along `axis`.
  pub fn sweep(&self, field: &na::DMatrix<f64>, axis: SweepAxis) -> Result<na::DMatrix<f64>> {
    match axis {
      SweepAxis::X => self.sweep_lines(field),
      SweepAxis::Y => Ok(self.sweep_lines(&field.transpose())?.transpose()),
    }
  }

  /// Advance every column of `grid` by one implicit solve along the column.
  ///
  /// The right-hand side of column `j` is the explicit stencil across
  /// columns `j-1, j, j+1`. Columns are solved in parallel and all of them
  /// are finished before this returns.
  /// The returned grid carries the boundary value on its first and last
  /// row and column.
  pub fn sweep_lines(&self, grid: &na::DMatrix<f64>) -> Result<na::DMatrix<f64>> {
    let len = self.system.len();
    if grid.nrows() != len {
      return Err(AdiError::DimensionMismatch {
        what: "grid line",
        expected: len,
        got: grid.nrows(),
      });
    }
    let nlines = grid.ncols();
    if nlines < 3 {
      return Err(AdiError::TooFewNodes { n: nlines });
    }

    let lines = (0..nlines)
      .into_par_iter()
      .map(|iline| {
        if iline == 0 || iline == nlines - 1 {
          Ok(na::DVector::from_element(len, self.boundary))
        } else {
          self.solve_line(grid, iline)
        }
      })
      .collect::<Result<Vec<_>>>()?;

    Ok(na::DMatrix::from_columns(&lines))
  }

  fn solve_line(&self, grid: &na::DMatrix<f64>, iline: usize) -> Result<na::DVector<f64>> {
    let r = self.r;
    let len = grid.nrows();

    let mut rhs: Vec<f64> = izip!(
      grid.column(iline - 1).iter(),
      grid.column(iline).iter(),
      grid.column(iline + 1).iter()
    )
    .map(|(prev, this, next)| r * prev + r * next + (1.0 - 2.0 * r) * this)
    .collect();

    // known boundary values, moved to the right-hand side
    rhs[1] += r * self.boundary;
    rhs[len - 2] += r * self.boundary;

    let mut line = self.system.solve(&rhs)?;
    line[0] = self.boundary;
    line[len - 1] = self.boundary;
    Ok(line)
  }
}
