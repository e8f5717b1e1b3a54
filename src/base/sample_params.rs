use super::{ParamCasing, ParamConductivities, ParamGap, ParamSource};

/// Holds samples of casing/conductivity parameters
pub struct SampleParams {}

impl SampleParams {
    /// Returns sample parameters for a 1 km casing (SI units)
    ///
    /// The wall occupies the radial band from 0.04 m to 0.05 m.
    pub fn param_casing() -> ParamCasing {
        ParamCasing {
            diameter: 0.09,       // m (wall centerline)
            wall_thickness: 0.01, // m
            length: 1000.0,       // m
        }
    }

    /// Returns sample conductivities for the resistive-casing scenario
    ///
    /// The casing is atypically resistive relative to the formation; the
    /// contrast sits exactly at the recommended maximum.
    pub fn param_conductivities_resistive_casing() -> ParamConductivities {
        ParamConductivities {
            sigma_air: 1e-8,        // S/m
            sigma_casing: 1e-10,    // S/m
            sigma_inside: 1.0,      // S/m
            sigma_background: 1e-2, // S/m
        }
    }

    /// Returns sample conductivities for a steel (conductive) casing
    pub fn param_conductivities_steel_casing() -> ParamConductivities {
        ParamConductivities {
            sigma_air: 1e-8,        // S/m
            sigma_casing: 5.5e6,    // S/m
            sigma_inside: 1.0,      // S/m
            sigma_background: 1e-2, // S/m
        }
    }

    /// Returns a sample gap near the bottom of the casing
    pub fn param_gap() -> ParamGap {
        ParamGap {
            z_min: -805.0, // m
            z_max: -800.0, // m
            sigma_gap: 1.0, // S/m
        }
    }

    /// Returns sample parameters for the source electrodes
    pub fn param_source() -> ParamSource {
        ParamSource {
            downhole_z: -950.0,   // m
            return_radius: 500.0, // m
            current: 1.0,         // A
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
