//! Least-squares fit of the decay model `u(t) = exp(a t)` to a temperature trace.

use crate::{AdiError, Result};

const MAX_ITERATIONS: usize = 100;
const MAX_BACKTRACKS: usize = 30;
const REL_TOL: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpFit {
  /// Fitted exponent `a`. Negative for a decaying trace.
  pub rate: f64,
  /// Euclidean norm of the residual at the fitted rate.
  pub residual_norm: f64,
  pub iterations: usize,
}
impl ExpFit {
  pub fn eval(&self, t: f64) -> f64 {
    (self.rate * t).exp()
  }
}

fn residual(rate: f64, times: &na::DVector<f64>, values: &na::DVector<f64>) -> na::DVector<f64> {
  values - times.map(|t| (rate * t).exp())
}

/// Log-linear least squares through the origin, `ln u = a t`.
fn initial_rate(times: &[f64], values: &[f64]) -> Result<f64> {
  let (num, den) = times
    .iter()
    .zip(values)
    .filter(|&(&t, &u)| t > 0.0 && u > 0.0)
    .fold((0.0, 0.0), |(num, den), (&t, &u)| {
      (num + t * u.ln(), den + t * t)
    });
  if den == 0.0 {
    return Err(AdiError::FitNonPositiveTrace);
  }
  Ok(num / den)
}

/// Gauss–Newton fit of `exp(a t)` against `values` sampled at `times`.
///
/// Steps that increase the residual are halved until they don't.
pub fn fit_exponential(times: &[f64], values: &[f64]) -> Result<ExpFit> {
  if values.len() != times.len() {
    return Err(AdiError::DimensionMismatch {
      what: "trace",
      expected: times.len(),
      got: values.len(),
    });
  }
  let mut rate = initial_rate(times, values)?;

  let times = na::DVector::from_column_slice(times);
  let values = na::DVector::from_column_slice(values);

  let mut res = residual(rate, &times, &values);
  for iteration in 1..=MAX_ITERATIONS {
    let jacobian = times.map(|t| t * (rate * t).exp());
    let normal = jacobian.norm_squared();
    if normal == 0.0 {
      break;
    }
    let mut step = jacobian.dot(&res) / normal;

    let mut next_rate = rate + step;
    let mut next_res = residual(next_rate, &times, &values);
    for _ in 0..MAX_BACKTRACKS {
      if next_res.norm() <= res.norm() {
        break;
      }
      step *= 0.5;
      next_rate = rate + step;
      next_res = residual(next_rate, &times, &values);
    }

    rate = next_rate;
    res = next_res;
    if step.abs() <= REL_TOL * (1.0 + rate.abs()) {
      return Ok(ExpFit {
        rate,
        residual_norm: res.norm(),
        iterations: iteration,
      });
    }
  }

  Err(AdiError::FitDidNotConverge {
    iterations: MAX_ITERATIONS,
  })
}

#[cfg(test)]
mod test {
  use super::fit_exponential;
  use crate::{grid::linspace, AdiError};

  use approx::assert_relative_eq;

  #[test]
  fn recovers_exact_rate() {
    let times = linspace(0.0, 4.0, 50);
    let values: Vec<f64> = times.iter().map(|t| (-1.7 * t).exp()).collect();
    let fit = fit_exponential(&times, &values).unwrap();
    assert_relative_eq!(fit.rate, -1.7, epsilon = 1e-9);
    assert!(fit.residual_norm < 1e-9);
    assert_relative_eq!(fit.eval(1.0), (-1.7f64).exp(), epsilon = 1e-9);
  }

  #[test]
  fn tolerates_perturbed_data() {
    let times = linspace(0.0, 2.0, 40);
    let values: Vec<f64> = times
      .iter()
      .enumerate()
      .map(|(i, t)| (-0.8 * t).exp() * (1.0 + if i % 2 == 0 { 1e-3 } else { -1e-3 }))
      .collect();
    let fit = fit_exponential(&times, &values).unwrap();
    assert_relative_eq!(fit.rate, -0.8, epsilon = 1e-2);
  }

  #[test]
  fn rejects_unusable_traces() {
    assert_eq!(
      fit_exponential(&[0.0, 1.0], &[1.0, 0.0]),
      Err(AdiError::FitNonPositiveTrace)
    );
    assert!(matches!(
      fit_exponential(&[0.0, 1.0], &[1.0]),
      Err(AdiError::DimensionMismatch { .. })
    ));
  }
}
