//! Implements utility functions: mesh adapters and field plotting

mod cell_centers;
mod plot_field;
pub use crate::util::cell_centers::*;
pub use crate::util::plot_field::*;
