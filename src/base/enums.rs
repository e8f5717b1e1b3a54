use serde::{Deserialize, Serialize};

/// Defines the spatial regions of the cased-borehole model
///
/// The four regions partition space: every sample point belongs to exactly one
/// region. The classification convention is fixed by
/// [crate::model::CasingGeometry::region_of].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Region {
    /// Above the ground surface (z > 0), regardless of radius
    Air,

    /// Within the casing wall radial band and the casing depth range
    CasingWall,

    /// Inside the casing (r smaller than the inner radius) within the casing depth range
    CasingInterior,

    /// Everything else (the formation)
    Background,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
