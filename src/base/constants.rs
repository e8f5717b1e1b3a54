/// Magnetic permeability of free space μ₀ [H/m]
pub const MU_0: f64 = 1.25663706212e-6;

/// Maximum recommended conductivity contrast (max σ over min σ)
///
/// Larger contrasts are not rejected by this crate; the ratio is a caller
/// contract carried into the external solver for conditioning reasons.
pub const MAX_CONDUCTIVITY_CONTRAST: f64 = 1e10;

/// Defines the directory where the result files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/cbsim/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/cbsim/test";
