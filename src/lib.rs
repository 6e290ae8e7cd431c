//! Two-dimensional transient heat diffusion on a square,
//! solved with the Peaceman–Rachford Alternating-Direction-Implicit scheme.
//!
//! Each time step is split into two half steps. The first is implicit along x
//! and explicit along y, the second the other way around. Every implicit half
//! step decomposes into independent tridiagonal systems, one per grid line,
//! which are solved with the Thomas algorithm.

extern crate nalgebra as na;

pub mod config;
pub mod error;
pub mod fit;
pub mod grid;
pub mod heat;
pub mod io;
pub mod sweep;
pub mod tridiag;

pub use error::AdiError;

pub type Result<T> = std::result::Result<T, AdiError>;

/// Temperature values on the N×N grid at a single instant, indexed `(ix, iy)`.
pub type TemperatureSlice = na::DMatrix<f64>;
