use crate::base::MAX_CONDUCTIVITY_CONTRAST;
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds raw parameters for the borehole casing
///
/// The diameter is measured at the wall centerline, thus the inner and outer
/// radii of the wall are `(diameter ∓ wall_thickness) / 2`. The casing hangs
/// from the ground surface and occupies depths `-length ≤ z ≤ 0` (z positive up).
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ParamCasing {
    /// Casing diameter at the wall centerline [m]
    pub diameter: f64,

    /// Casing wall thickness [m]
    pub wall_thickness: f64,

    /// Casing length [m]
    pub length: f64,
}

/// Holds the conductivities assigned to the four spatial regions [S/m]
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ParamConductivities {
    /// Conductivity of the air above the ground surface
    pub sigma_air: f64,

    /// Conductivity of the casing wall
    pub sigma_casing: f64,

    /// Conductivity of the material filling the casing
    pub sigma_inside: f64,

    /// Conductivity of the background formation
    pub sigma_background: f64,
}

impl ParamConductivities {
    /// Validates that all four conductivities are strictly positive
    pub fn validate(&self) -> Result<(), StrError> {
        if self.sigma_air <= 0.0
            || self.sigma_casing <= 0.0
            || self.sigma_inside <= 0.0
            || self.sigma_background <= 0.0
        {
            return Err("all conductivities must be > 0.0");
        }
        Ok(())
    }

    /// Returns the conductivity contrast (maximum σ over minimum σ)
    ///
    /// Ratios beyond [MAX_CONDUCTIVITY_CONTRAST] are not rejected; they are a
    /// caller contract because the contrast is carried into the external
    /// solver and harms its conditioning.
    pub fn contrast(&self) -> f64 {
        let values = [self.sigma_air, self.sigma_casing, self.sigma_inside, self.sigma_background];
        let mut min = values[0];
        let mut max = values[0];
        for v in &values[1..] {
            min = f64::min(min, *v);
            max = f64::max(max, *v);
        }
        max / min
    }

    /// Indicates whether the contrast exceeds the recommended maximum
    pub fn exceeds_recommended_contrast(&self) -> bool {
        self.contrast() > MAX_CONDUCTIVITY_CONTRAST
    }
}

/// Holds raw parameters for a casing gap (defect)
///
/// A gap is a closed depth interval `[z_min, z_max]` where the casing-wall
/// conductivity is replaced by `sigma_gap`. The interval length must be at
/// least the vertical cell size of the consuming mesh, otherwise the gap
/// cannot be represented (a caller-side constraint).
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ParamGap {
    /// Lower (deeper) end of the depth interval [m]
    pub z_min: f64,

    /// Upper (shallower) end of the depth interval [m]
    pub z_max: f64,

    /// Override conductivity inside the gap [S/m]
    pub sigma_gap: f64,
}

/// Holds parameters for the source electrodes
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ParamSource {
    /// Depth of the downhole electrode on the casing axis [m] (negative down)
    pub downhole_z: f64,

    /// Radial distance of the return electrode at the surface [m]
    pub return_radius: f64,

    /// Injected current [A]
    pub current: f64,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
