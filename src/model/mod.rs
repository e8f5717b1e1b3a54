//! Implements the conductivity model of the cased borehole

mod casing_geometry;
mod conductivity_model;
mod fdem_run;
mod field_registry;
mod gap;
mod source_indices;
pub use crate::model::casing_geometry::*;
pub use crate::model::conductivity_model::*;
pub use crate::model::fdem_run::*;
pub use crate::model::field_registry::*;
pub use crate::model::gap::*;
pub use crate::model::source_indices::*;
