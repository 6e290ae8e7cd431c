//! Run parameters.

use crate::{
  grid::{SquareGrid, TimeAxis},
  heat::{self, HeatSolution, Profile},
  Result,
};

/// Parameters of a heat run on `[-half_width, half_width]^2` over `[0, max_time]`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatConfig {
  /// Grid nodes per axis.
  pub nnodes: usize,
  /// Time samples, including `t = 0`.
  pub nsamples: usize,
  pub half_width: f64,
  pub max_time: f64,
  /// Thermal diffusivity.
  pub sigma: f64,
  pub profile: Profile,
}

impl Default for HeatConfig {
  fn default() -> Self {
    Self {
      nnodes: 200,
      nsamples: 5000,
      half_width: 1.0,
      max_time: 10.0,
      sigma: 1.0,
      profile: Profile::ZeroBoundary,
    }
  }
}

impl HeatConfig {
  pub fn new(nnodes: usize, nsamples: usize, max_time: f64) -> Self {
    Self {
      nnodes,
      nsamples,
      max_time,
      ..Self::default()
    }
  }
  pub fn with_sigma(mut self, sigma: f64) -> Self {
    self.sigma = sigma;
    self
  }
  pub fn with_half_width(mut self, half_width: f64) -> Self {
    self.half_width = half_width;
    self
  }
  pub fn with_profile(mut self, profile: Profile) -> Self {
    self.profile = profile;
    self
  }

  pub fn grid(&self) -> Result<SquareGrid> {
    SquareGrid::symmetric(self.half_width, self.nnodes)
  }
  pub fn time_axis(&self) -> Result<TimeAxis> {
    TimeAxis::uniform(self.max_time, self.nsamples)
  }

  pub fn solve(&self) -> Result<HeatSolution> {
    let grid = self.grid()?;
    let time = self.time_axis()?;
    heat::solve_heat2d_on(&grid, &time, self.sigma, self.profile)
  }
}
