//! Line fitting for building rejection/projection frames.

mod line;

pub use line::{fit_line, LineFit};
