use gemlab::mesh::{Cell, Mesh, Point};
use gemlab::shapes::GeoKind;

/// Holds samples of cell-center grids and meshes
pub struct SampleGrids {}

impl SampleGrids {
    /// Returns a regular grid of cell centers for the 2D axisymmetric idealization
    ///
    /// The grid covers `0 ≤ r ≤ r_max` and `z_min ≤ z ≤ 0` with `nr × nz`
    /// cells; the returned points are the cell centers `(r, z)`, ordered with
    /// the radial index varying fastest and depth increasing from `z_min`.
    ///
    /// # Panics
    ///
    /// This function panics if `nr` or `nz` are zero, or if `r_max ≤ 0`,
    /// or if `z_min ≥ 0`.
    pub fn cell_centers_cylinder(nr: usize, nz: usize, r_max: f64, z_min: f64) -> Vec<Vec<f64>> {
        assert!(nr > 0 && nz > 0);
        assert!(r_max > 0.0);
        assert!(z_min < 0.0);
        let dr = r_max / (nr as f64);
        let dz = -z_min / (nz as f64);
        let mut centers = Vec::with_capacity(nr * nz);
        for k in 0..nz {
            let z = z_min + ((k as f64) + 0.5) * dz;
            for i in 0..nr {
                let r = ((i as f64) + 0.5) * dr;
                centers.push(vec![r, z]);
            }
        }
        centers
    }

    #[rustfmt::skip]
    pub fn column_two_qua4() -> Mesh {
        //  0.0  5------4
        //       |      |    [#] indicates id
        //       | [1]  |    (#) indicates attribute
        //       | (1)  |
        // -1.0  3------2
        //       |      |
        //       | [0]  |
        //       | (1)  |
        // -2.0  0------1
        //      0.0    1.0
        Mesh {
            ndim: 2,
            points: vec![
                Point { id: 0, marker: 0, coords: vec![0.0, -2.0] },
                Point { id: 1, marker: 0, coords: vec![1.0, -2.0] },
                Point { id: 2, marker: 0, coords: vec![1.0, -1.0] },
                Point { id: 3, marker: 0, coords: vec![0.0, -1.0] },
                Point { id: 4, marker: 0, coords: vec![1.0,  0.0] },
                Point { id: 5, marker: 0, coords: vec![0.0,  0.0] },
            ],
            cells: vec![
                Cell { id: 0, attribute: 1, kind: GeoKind::Qua4, points: vec![0, 1, 2, 3] },
                Cell { id: 1, attribute: 1, kind: GeoKind::Qua4, points: vec![3, 2, 4, 5] },
            ],
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
