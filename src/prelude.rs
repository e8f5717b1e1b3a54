//! Makes available common structures needed to build and run a model
//!
//! You may write `use cbsim::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{point_elevation, point_radius, skin_depth, Config, Region};
pub use crate::base::{ParamCasing, ParamConductivities, ParamGap, ParamSource};
pub use crate::base::{SampleGrids, SampleParams, DEFAULT_OUT_DIR, DEFAULT_TEST_DIR};
pub use crate::model::{CasingGeometry, ConductivityModel, FieldRegistry, Gap, SourceIndices};
pub use crate::model::{FdemResults, FdemRun, ForwardSolver};
pub use crate::util::{cell_centers, extract_profile, render_profile, FieldViewState, ProfileLine};
