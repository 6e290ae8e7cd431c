//! Uniform coordinate axes of the square domain and of time.

use crate::{AdiError, Result};

use itertools::Itertools;

/// Relative tolerance for comparing the spacing of the two spatial axes.
const SPACING_RTOL: f64 = 1e-9;

/// `n` evenly spaced samples over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
  match n {
    0 => Vec::new(),
    1 => vec![start],
    _ => {
      let step = (end - start) / (n - 1) as f64;
      (0..n)
        .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
        .collect()
    }
  }
}

/// Spacing of an axis, taken from its first two samples.
pub fn axis_spacing(axis: &[f64], name: &'static str) -> Result<f64> {
  let [x0, x1, ..] = axis else {
    return Err(AdiError::DimensionMismatch {
      what: name,
      expected: 2,
      got: axis.len(),
    });
  };
  let spacing = x1 - x0;
  if !(spacing > 0.0) {
    return Err(AdiError::NonPositiveSpacing {
      axis: name,
      spacing,
    });
  }
  Ok(spacing)
}

/// Whether all consecutive samples are strictly increasing.
pub fn is_increasing(axis: &[f64]) -> bool {
  axis.iter().tuple_windows().all(|(a, b)| b > a)
}

/// Square tensor-product grid of the spatial domain.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareGrid {
  x: Vec<f64>,
  y: Vec<f64>,
  spacing: f64,
}

// constructors
impl SquareGrid {
  pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
    let n = x.len();
    if n < 3 {
      return Err(AdiError::TooFewNodes { n });
    }
    if y.len() != n {
      return Err(AdiError::AxisLengthMismatch { nx: n, ny: y.len() });
    }
    let dx = axis_spacing(&x, "x")?;
    let dy = axis_spacing(&y, "y")?;
    if (dx - dy).abs() > SPACING_RTOL * dx.max(dy) {
      return Err(AdiError::NonSquareSpacing { dx, dy });
    }
    if !is_increasing(&x) {
      tracing::warn!("x axis is not monotonically increasing beyond its first interval");
    }
    if !is_increasing(&y) {
      tracing::warn!("y axis is not monotonically increasing beyond its first interval");
    }
    Ok(Self { x, y, spacing: dx })
  }

  /// `nnodes` nodes per axis covering `[-half_width, half_width]`.
  pub fn symmetric(half_width: f64, nnodes: usize) -> Result<Self> {
    let axis = linspace(-half_width, half_width, nnodes);
    Self::new(axis.clone(), axis)
  }
}

// getters
impl SquareGrid {
  pub fn nnodes(&self) -> usize {
    self.x.len()
  }
  pub fn x(&self) -> &[f64] {
    &self.x
  }
  pub fn y(&self) -> &[f64] {
    &self.y
  }
  pub fn spacing(&self) -> f64 {
    self.spacing
  }
  /// Index of the grid line through the domain center.
  pub fn center_index(&self) -> usize {
    self.nnodes() / 2
  }
  pub fn x_max(&self) -> f64 {
    self.x[self.x.len() - 1]
  }
  pub fn y_max(&self) -> f64 {
    self.y[self.y.len() - 1]
  }
}

/// Uniformly sampled time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxis {
  times: Vec<f64>,
  dt: f64,
}
impl TimeAxis {
  pub fn new(times: Vec<f64>) -> Result<Self> {
    if times.len() < 2 {
      return Err(AdiError::TooFewTimeSteps { m: times.len() });
    }
    let dt = axis_spacing(&times, "time")?;
    Ok(Self { times, dt })
  }

  pub fn uniform(max_time: f64, nsamples: usize) -> Result<Self> {
    Self::new(linspace(0.0, max_time, nsamples))
  }

  pub fn times(&self) -> &[f64] {
    &self.times
  }
  pub fn nsamples(&self) -> usize {
    self.times.len()
  }
  pub fn dt(&self) -> f64 {
    self.dt
  }
}

#[cfg(test)]
mod test {
  use super::{linspace, SquareGrid, TimeAxis};
  use crate::AdiError;

  #[test]
  fn linspace_endpoints() {
    assert_eq!(linspace(-1.0, 1.0, 5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
    assert!(linspace(0.0, 1.0, 0).is_empty());
  }

  #[test]
  fn symmetric_grid() {
    let grid = SquareGrid::symmetric(1.0, 5).unwrap();
    assert_eq!(grid.spacing(), 0.5);
    assert_eq!(grid.center_index(), 2);
    assert_eq!(grid.x()[grid.center_index()], 0.0);
    assert_eq!(grid.x_max(), 1.0);
  }

  #[test]
  fn malformed_grids() {
    assert_eq!(
      SquareGrid::symmetric(1.0, 2),
      Err(AdiError::TooFewNodes { n: 2 })
    );
    assert_eq!(
      SquareGrid::new(linspace(-1.0, 1.0, 5), linspace(-1.0, 1.0, 4)),
      Err(AdiError::AxisLengthMismatch { nx: 5, ny: 4 })
    );
    assert!(matches!(
      SquareGrid::new(linspace(1.0, -1.0, 5), linspace(1.0, -1.0, 5)),
      Err(AdiError::NonPositiveSpacing { axis: "x", .. })
    ));
    assert!(matches!(
      SquareGrid::new(linspace(-1.0, 1.0, 5), linspace(-2.0, 2.0, 5)),
      Err(AdiError::NonSquareSpacing { .. })
    ));
  }

  #[test]
  fn time_axis() {
    let time = TimeAxis::uniform(1.0, 3).unwrap();
    assert_eq!(time.dt(), 0.5);
    assert_eq!(time.nsamples(), 3);
    assert_eq!(
      TimeAxis::uniform(1.0, 1),
      Err(AdiError::TooFewTimeSteps { m: 1 })
    );
  }
}
