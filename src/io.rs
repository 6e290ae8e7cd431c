//! Plain-text output of axes, traces and field snapshots for external plotting.

use std::{fs::File, io::BufWriter, path::Path};

/// One value per line.
pub fn save_vector(values: &[f64], path: impl AsRef<Path>) -> std::io::Result<()> {
  let file = File::create(path)?;
  write_vector(BufWriter::new(file), values)
}

pub fn write_vector<W: std::io::Write>(mut writer: W, values: &[f64]) -> std::io::Result<()> {
  for v in values {
    writeln!(writer, "{v}")?;
  }
  writer.flush()
}

/// Row `ix` of the file holds the temperatures along y at that x node.
pub fn save_matrix(mat: &na::DMatrix<f64>, path: impl AsRef<Path>) -> std::io::Result<()> {
  let file = File::create(path)?;
  write_matrix(BufWriter::new(file), mat)
}

pub fn write_matrix<W: std::io::Write>(
  mut writer: W,
  mat: &na::DMatrix<f64>,
) -> std::io::Result<()> {
  for row in mat.row_iter() {
    for (icol, v) in row.iter().enumerate() {
      if icol > 0 {
        write!(writer, " ")?;
      }
      write!(writer, "{v:.6}")?;
    }
    writeln!(writer)?;
  }
  writer.flush()
}

/// Two columns: time and value.
pub fn save_trace(times: &[f64], values: &[f64], path: impl AsRef<Path>) -> std::io::Result<()> {
  let file = File::create(path)?;
  write_trace(BufWriter::new(file), times, values)
}

pub fn write_trace<W: std::io::Write>(
  mut writer: W,
  times: &[f64],
  values: &[f64],
) -> std::io::Result<()> {
  for (t, v) in times.iter().zip(values) {
    writeln!(writer, "{t} {v}")?;
  }
  writer.flush()
}
