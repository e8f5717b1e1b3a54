//! Cbsim - Cased-borehole electromagnetic model builder
//!
//! This crate implements the model-building side of a frequency-domain
//! electromagnetic (FDEM) simulation over a steel-cased borehole. It maps
//! sample points (e.g., the cell centers of a mesh) to scalar conductivities
//! representing air, formation, casing wall, and casing interior, applies
//! localized casing defects (gaps), locates the source electrodes, and exposes
//! named field results to external solver and visualization collaborators.
//!
//! The mesh generation, the PDE discretization, and the linear solve are
//! performed by external engines behind narrow interfaces (see
//! [crate::model::ForwardSolver]); this crate only produces correctly shaped,
//! correctly ordered arrays for them.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod model;
pub mod prelude;
pub mod util;
