//! Cooling of a parabolic temperature bump on the square [-1,1]^2.
//!
//! Writes the field shortly after the start (for a surface plot), the final
//! field (for a contour plot) and the center temperature trace to `out/`,
//! then fits an exponential decay to the trace.

use adiheat::{config::HeatConfig, fit::fit_exponential, io};

use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt::init();

  let config = HeatConfig::new(100, 1000, 10.0);
  let grid = config.grid()?;
  let time = config.time_axis()?;

  let solution = config.solve()?;

  fs::create_dir_all("out")?;
  io::save_vector(grid.x(), "out/x.txt")?;
  io::save_vector(grid.y(), "out/y.txt")?;
  io::save_matrix(&solution.field[1], "out/field_early.txt")?;
  io::save_matrix(solution.last(), "out/field_final.txt")?;
  io::save_trace(time.times(), &solution.center_temperature, "out/center.txt")?;

  let fit = fit_exponential(time.times(), &solution.center_temperature)?;
  tracing::info!(
    rate = fit.rate,
    residual = fit.residual_norm,
    iterations = fit.iterations,
    "fitted center temperature with exp(a t)"
  );
  println!("Fitted with {:.2}", fit.rate);

  Ok(())
}
