use crate::base::{point_elevation, point_radius, ParamCasing, Region};
use crate::StrError;

/// Holds the derived, validated casing geometry
///
/// The wall radii derive from the centerline diameter `d` and the wall
/// thickness `t` as `inner = (d - t)/2` and `outer = (d + t)/2`, hence
/// `outer - inner = t`. The casing extends from `top_z = 0` down to
/// `bottom_z = -length` (z positive up, negative below the surface).
#[derive(Clone, Copy, Debug)]
pub struct CasingGeometry {
    /// Inner radius of the casing wall **(readonly)**
    pub inner_radius: f64,

    /// Outer radius of the casing wall **(readonly)**
    pub outer_radius: f64,

    /// Elevation of the casing top **(readonly)**
    pub top_z: f64,

    /// Elevation of the casing bottom **(readonly)**
    pub bottom_z: f64,
}

impl CasingGeometry {
    /// Allocates a new instance from raw casing parameters
    pub fn new(param: &ParamCasing) -> Result<Self, StrError> {
        let inner_radius = (param.diameter - param.wall_thickness) / 2.0;
        let outer_radius = (param.diameter + param.wall_thickness) / 2.0;
        CasingGeometry::from_radii(inner_radius, outer_radius, 0.0, -param.length)
    }

    /// Allocates a new instance from the wall radii and the depth range
    pub fn from_radii(inner_radius: f64, outer_radius: f64, top_z: f64, bottom_z: f64) -> Result<Self, StrError> {
        if inner_radius <= 0.0 {
            return Err("casing inner radius must be > 0.0");
        }
        if outer_radius <= inner_radius {
            return Err("casing outer radius must be greater than the inner radius");
        }
        if top_z > 0.0 {
            return Err("casing top_z must be ≤ 0.0");
        }
        if bottom_z >= top_z {
            return Err("casing bottom_z must be smaller than top_z");
        }
        Ok(CasingGeometry {
            inner_radius,
            outer_radius,
            top_z,
            bottom_z,
        })
    }

    /// Returns the wall thickness
    pub fn wall_thickness(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }

    /// Returns true if the elevation falls in the casing depth range
    ///
    /// The depth range is closed: `bottom_z ≤ z ≤ top_z`.
    pub fn contains_depth(&self, z: f64) -> bool {
        z >= self.bottom_z && z <= self.top_z
    }

    /// Classifies a point into one of the four spatial regions
    ///
    /// The boundary convention is fixed and applied uniformly:
    ///
    /// * Air -- `z > 0`, regardless of radius
    /// * CasingWall -- `inner_radius ≤ r < outer_radius` and `bottom_z ≤ z ≤ top_z`
    /// * CasingInterior -- `r < inner_radius` and `bottom_z ≤ z ≤ top_z`
    /// * Background -- everything else
    ///
    /// Exactly one region applies to every point; repeated calls with the same
    /// point always return the same region.
    pub fn region_of(&self, point: &[f64]) -> Result<Region, StrError> {
        let r = point_radius(point)?;
        let z = point_elevation(point)?;
        if z > 0.0 {
            return Ok(Region::Air);
        }
        if self.contains_depth(z) {
            if r < self.inner_radius {
                return Ok(Region::CasingInterior);
            }
            if r < self.outer_radius {
                return Ok(Region::CasingWall);
            }
        }
        Ok(Region::Background)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
