use super::CasingGeometry;
use crate::base::{point_elevation, point_radius, ParamSource};
use crate::StrError;

/// Holds the sample indices of the source electrodes
///
/// The downhole electrode sits on the casing axis at `downhole_z`; the return
/// electrode sits at the ground surface at radius `return_radius`. Both are
/// resolved to the closest sample of the ordered point sequence, so the
/// indices are aligned with the conductivity field built over the same
/// sequence.
#[derive(Clone, Copy, Debug)]
pub struct SourceIndices {
    /// Index of the sample closest to the downhole electrode **(readonly)**
    pub downhole: usize,

    /// Index of the sample closest to the surface return electrode **(readonly)**
    pub surface_return: usize,
}

impl SourceIndices {
    /// Finds the electrode sample indices by nearest-point search
    pub fn find(points: &[Vec<f64>], geometry: &CasingGeometry, param: &ParamSource) -> Result<Self, StrError> {
        if points.is_empty() {
            return Err("at least one point is required to locate the source electrodes");
        }
        if !geometry.contains_depth(param.downhole_z) {
            return Err("downhole electrode must be within the casing depth range");
        }
        if param.return_radius <= 0.0 {
            return Err("return electrode radius must be > 0.0");
        }
        let downhole = nearest(points, 0.0, param.downhole_z)?;
        let surface_return = nearest(points, param.return_radius, 0.0)?;
        Ok(SourceIndices {
            downhole,
            surface_return,
        })
    }
}

/// Returns the index of the sample closest to (r, z) in the meridian plane
///
/// Ties resolve to the first (lowest-index) sample.
fn nearest(points: &[Vec<f64>], r_target: f64, z_target: f64) -> Result<usize, StrError> {
    let mut best = 0;
    let mut best_d2 = f64::MAX;
    for (i, point) in points.iter().enumerate() {
        let dr = point_radius(point)? - r_target;
        let dz = point_elevation(point)? - z_target;
        let d2 = dr * dr + dz * dz;
        if d2 < best_d2 {
            best = i;
            best_d2 = d2;
        }
    }
    Ok(best)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SourceIndices;
    use crate::base::{ParamSource, SampleGrids, SampleParams};
    use crate::model::CasingGeometry;
    use crate::StrError;

    #[test]
    fn handle_wrong_input() {
        let geometry = CasingGeometry::new(&SampleParams::param_casing()).unwrap();
        let param = SampleParams::param_source();
        assert_eq!(
            SourceIndices::find(&[], &geometry, &param).err(),
            Some("at least one point is required to locate the source electrodes")
        );
        let points = vec![vec![0.5, -0.5]];
        assert_eq!(
            SourceIndices::find(
                &points,
                &geometry,
                &ParamSource {
                    downhole_z: -2000.0, // << below the casing shoe
                    return_radius: 500.0,
                    current: 1.0,
                }
            )
            .err(),
            Some("downhole electrode must be within the casing depth range")
        );
        assert_eq!(
            SourceIndices::find(
                &points,
                &geometry,
                &ParamSource {
                    downhole_z: -950.0,
                    return_radius: 0.0, // << wrong
                    current: 1.0,
                }
            )
            .err(),
            Some("return electrode radius must be > 0.0")
        );
    }

    #[test]
    fn find_works() -> Result<(), StrError> {
        let geometry = CasingGeometry::new(&SampleParams::param_casing())?;
        // 10 x 10 grid over 0 ≤ r ≤ 1000 and -1000 ≤ z ≤ 0
        let points = SampleGrids::cell_centers_cylinder(10, 10, 1000.0, -1000.0);
        let param = ParamSource {
            downhole_z: -950.0,
            return_radius: 500.0,
            current: 1.0,
        };
        let source = SourceIndices::find(&points, &geometry, &param)?;
        // downhole: closest to (0, -950) is the first cell of the deepest row
        assert_eq!(source.downhole, 0);
        // return electrode: closest to (500, 0) is r-index 4 or 5 of the
        // shallowest row; the tie at r = 450/550 resolves to the first
        assert_eq!(source.surface_return, 90 + 4);
        Ok(())
    }
}
