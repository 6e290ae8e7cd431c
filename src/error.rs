use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdiError {
  #[error("grid needs at least 3 nodes per axis, got {n}")]
  TooFewNodes { n: usize },
  #[error("time axis needs at least 2 samples, got {m}")]
  TooFewTimeSteps { m: usize },
  #[error("axes differ in length: x has {nx} nodes, y has {ny}")]
  AxisLengthMismatch { nx: usize, ny: usize },
  #[error("axis `{axis}` is not strictly increasing (spacing {spacing})")]
  NonPositiveSpacing { axis: &'static str, spacing: f64 },
  #[error("domain is not square: dx={dx}, dy={dy}")]
  NonSquareSpacing { dx: f64, dy: f64 },
  #[error("diffusivity must be finite and non-negative, got {sigma}")]
  InvalidDiffusivity { sigma: f64 },
  #[error("`{what}` has length {got}, expected {expected}")]
  DimensionMismatch {
    what: &'static str,
    expected: usize,
    got: usize,
  },
  #[error("zero pivot in tridiagonal solve at row {row}")]
  ZeroPivot { row: usize },
  #[error("exponential fit did not converge after {iterations} iterations")]
  FitDidNotConverge { iterations: usize },
  #[error("exponential fit needs positive trace samples at positive times")]
  FitNonPositiveTrace,
}
