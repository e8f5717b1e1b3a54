use super::{CasingGeometry, Gap};
use crate::base::{point_elevation, ParamConductivities, Region};
use crate::StrError;

/// Maps sample points to scalar conductivities for the cased-borehole model
///
/// The model is a pure, per-point classification-and-lookup function over an
/// immutable geometry and conductivity assignment: repeated evaluation with
/// unchanged configuration yields bit-identical results. Bulk evaluation
/// happens only at the [ConductivityModel::build_field] call boundary.
pub struct ConductivityModel<'a> {
    /// Derived casing geometry
    geometry: &'a CasingGeometry,

    /// Conductivities assigned to the four regions
    param: &'a ParamConductivities,
}

impl<'a> ConductivityModel<'a> {
    /// Allocates a new instance
    pub fn new(geometry: &'a CasingGeometry, param: &'a ParamConductivities) -> Result<Self, StrError> {
        param.validate()?;
        Ok(ConductivityModel { geometry, param })
    }

    /// Classifies a point into one of the four spatial regions
    ///
    /// See [CasingGeometry::region_of] for the boundary convention.
    pub fn region_of(&self, point: &[f64]) -> Result<Region, StrError> {
        self.geometry.region_of(point)
    }

    /// Returns the conductivity at a point
    pub fn conductivity(&self, point: &[f64]) -> Result<f64, StrError> {
        let sigma = match self.region_of(point)? {
            Region::Air => self.param.sigma_air,
            Region::CasingWall => self.param.sigma_casing,
            Region::CasingInterior => self.param.sigma_inside,
            Region::Background => self.param.sigma_background,
        };
        Ok(sigma)
    }

    /// Builds the intact baseline conductivity field
    ///
    /// Applies [ConductivityModel::conductivity] elementwise; the output has
    /// the same order and length as `points`. An empty `points` sequence
    /// yields an empty field (not an error).
    pub fn build_field(&self, points: &[Vec<f64>]) -> Result<Vec<f64>, StrError> {
        let mut field = Vec::with_capacity(points.len());
        for point in points {
            field.push(self.conductivity(point)?);
        }
        Ok(field)
    }

    /// Returns a new field with gap overrides applied
    ///
    /// For each point classified as [Region::CasingWall] whose elevation falls
    /// within a gap interval, the value is replaced by that gap's override
    /// conductivity. Gaps apply sequentially, so when intervals overlap the
    /// last gap in `gaps` wins. Samples in the other three regions are never
    /// modified, even when their elevation lies inside a gap interval.
    ///
    /// The base field is copied, not mutated, preserving the intact baseline
    /// for primary/secondary difference computations.
    pub fn apply_gaps(&self, base_field: &[f64], points: &[Vec<f64>], gaps: &[Gap]) -> Result<Vec<f64>, StrError> {
        if base_field.len() != points.len() {
            return Err("base field length must match the number of points");
        }
        let mut field = base_field.to_vec();
        for gap in gaps {
            for (i, point) in points.iter().enumerate() {
                if self.region_of(point)? == Region::CasingWall {
                    let z = point_elevation(point)?;
                    if gap.contains(z) {
                        field[i] = gap.sigma_gap;
                    }
                }
            }
        }
        Ok(field)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ConductivityModel;
    use crate::base::{ParamConductivities, ParamGap, Region, SampleParams};
    use crate::model::{CasingGeometry, Gap};
    use crate::StrError;
    use russell_lab::vec_approx_eq;

    fn sample_model_input() -> (CasingGeometry, ParamConductivities) {
        let geometry = CasingGeometry::from_radii(0.04, 0.05, 0.0, -1000.0).unwrap();
        let param = SampleParams::param_conductivities_resistive_casing();
        (geometry, param)
    }

    #[test]
    fn handle_wrong_input() {
        let (geometry, mut param) = sample_model_input();
        param.sigma_air = 0.0;
        assert_eq!(
            ConductivityModel::new(&geometry, &param).err(),
            Some("all conductivities must be > 0.0")
        );
        param.sigma_air = 1e-8;
        let model = ConductivityModel::new(&geometry, &param).unwrap();
        assert_eq!(
            model.conductivity(&[1.0]).err(),
            Some("point must have 2 or 3 coordinates")
        );
        assert_eq!(
            model
                .apply_gaps(&[1.0, 2.0], &[vec![0.045, -500.0]], &[])
                .err(),
            Some("base field length must match the number of points")
        );
    }

    #[test]
    fn conductivity_works() -> Result<(), StrError> {
        let (geometry, param) = sample_model_input();
        let model = ConductivityModel::new(&geometry, &param)?;
        // concrete scenario: a point in the middle of the wall
        assert_eq!(model.region_of(&[0.045, 0.0, -500.0])?, Region::CasingWall);
        assert_eq!(model.conductivity(&[0.045, 0.0, -500.0])?, 1e-10);
        // the other regions
        assert_eq!(model.conductivity(&[0.045, 1.0])?, 1e-8);
        assert_eq!(model.conductivity(&[0.01, -500.0])?, 1.0);
        assert_eq!(model.conductivity(&[10.0, -500.0])?, 1e-2);
        Ok(())
    }

    #[test]
    fn conductivity_is_idempotent() -> Result<(), StrError> {
        let (geometry, param) = sample_model_input();
        let model = ConductivityModel::new(&geometry, &param)?;
        let point = [0.045, 0.0, -500.0];
        let first = model.conductivity(&point)?;
        let second = model.conductivity(&point)?;
        assert_eq!(first.to_bits(), second.to_bits());
        Ok(())
    }

    #[test]
    fn build_field_works() -> Result<(), StrError> {
        let (geometry, param) = sample_model_input();
        let model = ConductivityModel::new(&geometry, &param)?;
        let points = vec![
            vec![0.045, 1.0],    // air
            vec![0.045, -500.0], // wall
            vec![0.01, -500.0],  // interior
            vec![10.0, -500.0],  // background
        ];
        let field = model.build_field(&points)?;
        assert_eq!(field.len(), points.len());
        vec_approx_eq(&field, &[1e-8, 1e-10, 1.0, 1e-2], 1e-15);
        // empty input yields an empty field
        let empty = model.build_field(&[])?;
        assert_eq!(empty.len(), 0);
        Ok(())
    }

    #[test]
    fn apply_gaps_works() -> Result<(), StrError> {
        let (geometry, param) = sample_model_input();
        let model = ConductivityModel::new(&geometry, &param)?;
        let points = vec![
            vec![0.045, -802.0], // wall, inside the gap interval
            vec![0.045, -500.0], // wall, outside the gap interval
            vec![0.01, -802.0],  // interior, inside the gap interval
            vec![10.0, -802.0],  // background, inside the gap interval
        ];
        let base = model.build_field(&points)?;
        let gap = Gap::new(&ParamGap {
            z_min: -805.0,
            z_max: -800.0,
            sigma_gap: 1.0,
        })?;
        let with_gaps = model.apply_gaps(&base, &points, &[gap])?;
        // only the wall sample inside the interval changes
        assert_eq!(with_gaps[0], 1.0);
        assert_eq!(with_gaps[1], 1e-10);
        assert_eq!(with_gaps[2], base[2]);
        assert_eq!(with_gaps[3], base[3]);
        // the region classification itself is unchanged
        assert_eq!(model.region_of(&points[0])?, Region::CasingWall);
        // the base field is untouched
        assert_eq!(base[0], 1e-10);
        Ok(())
    }

    #[test]
    fn apply_gaps_identity_with_no_gaps() -> Result<(), StrError> {
        let (geometry, param) = sample_model_input();
        let model = ConductivityModel::new(&geometry, &param)?;
        let points = vec![vec![0.045, -802.0], vec![0.01, -500.0]];
        let base = model.build_field(&points)?;
        let same = model.apply_gaps(&base, &points, &[])?;
        vec_approx_eq(&same, &base, 1e-300);
        // empty points with empty base field is fine
        let empty = model.apply_gaps(&[], &[], &[])?;
        assert_eq!(empty.len(), 0);
        Ok(())
    }

    #[test]
    fn apply_gaps_never_touches_air() -> Result<(), StrError> {
        let (geometry, param) = sample_model_input();
        let model = ConductivityModel::new(&geometry, &param)?;
        // a gap interval spanning the surface still only affects wall samples
        let points = vec![
            vec![0.045, 0.5],  // air, at wall radius, inside the interval
            vec![0.045, -0.5], // wall, inside the interval
        ];
        let base = model.build_field(&points)?;
        let gap = Gap::new(&ParamGap {
            z_min: -1.0,
            z_max: 1.0,
            sigma_gap: 2.0,
        })?;
        let field = model.apply_gaps(&base, &points, &[gap])?;
        assert_eq!(field[0], 1e-8); // air untouched
        assert_eq!(field[1], 2.0);
        Ok(())
    }

    #[test]
    fn overlapping_gaps_follow_last_write_wins() -> Result<(), StrError> {
        let (geometry, param) = sample_model_input();
        let model = ConductivityModel::new(&geometry, &param)?;
        let points = vec![
            vec![0.045, -802.0], // covered by both gaps
            vec![0.045, -808.0], // covered by the first gap only
            vec![0.045, -797.0], // covered by the first gap only
        ];
        let base = model.build_field(&points)?;
        let gaps = [
            Gap::new(&ParamGap {
                z_min: -810.0,
                z_max: -795.0,
                sigma_gap: 1.0,
            })?,
            Gap::new(&ParamGap {
                z_min: -805.0,
                z_max: -800.0,
                sigma_gap: 2.0,
            })?,
        ];
        let field = model.apply_gaps(&base, &points, &gaps)?;
        assert_eq!(field[0], 2.0); // last write wins
        assert_eq!(field[1], 1.0);
        assert_eq!(field[2], 1.0);
        Ok(())
    }
}
