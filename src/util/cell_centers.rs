use crate::StrError;
use gemlab::mesh::Mesh;

/// Returns the cell-center coordinates of a mesh, in cell order
///
/// The center is the average of the corner coordinates of each cell. This is
/// the only mesh information the conductivity model needs; everything else
/// about the mesh (topology, shapes, attributes) stays with the mesh provider.
pub fn cell_centers(mesh: &Mesh) -> Result<Vec<Vec<f64>>, StrError> {
    let mut centers = Vec::with_capacity(mesh.cells.len());
    for cell in &mesh.cells {
        if cell.points.is_empty() {
            return Err("cell must have at least one point");
        }
        let mut center = vec![0.0; mesh.ndim];
        for p in &cell.points {
            let point = mesh.points.get(*p).ok_or("cell refers to a point that does not exist")?;
            for i in 0..mesh.ndim {
                center[i] += point.coords[i];
            }
        }
        for i in 0..mesh.ndim {
            center[i] /= cell.points.len() as f64;
        }
        centers.push(center);
    }
    Ok(centers)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
