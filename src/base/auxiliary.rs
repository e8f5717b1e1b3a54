use crate::base::MU_0;
use crate::StrError;
use russell_lab::math::PI;

/// Returns the radial coordinate of a point
///
/// A point is `(r, z)` in the 2D axisymmetric idealization or `(x, y, z)` in 3D
/// with `r = sqrt(x² + y²)`.
pub fn point_radius(point: &[f64]) -> Result<f64, StrError> {
    match point.len() {
        2 => Ok(f64::abs(point[0])),
        3 => Ok(f64::sqrt(point[0] * point[0] + point[1] * point[1])),
        _ => Err("point must have 2 or 3 coordinates"),
    }
}

/// Returns the elevation of a point (the second coordinate in 2D or z in 3D)
///
/// The elevation is negative below the ground surface.
pub fn point_elevation(point: &[f64]) -> Result<f64, StrError> {
    match point.len() {
        2 => Ok(point[1]),
        3 => Ok(point[2]),
        _ => Err("point must have 2 or 3 coordinates"),
    }
}

/// Returns the electromagnetic skin depth [m]
///
/// ```text
/// δ = 1 / sqrt(π f μ₀ σ)
/// ```
///
/// # Input
///
/// * `sigma` -- electrical conductivity σ [S/m]
/// * `frequency` -- frequency f [Hz]
pub fn skin_depth(sigma: f64, frequency: f64) -> Result<f64, StrError> {
    if sigma <= 0.0 {
        return Err("conductivity must be > 0.0 to calculate the skin depth");
    }
    if frequency <= 0.0 {
        return Err("frequency must be > 0.0 to calculate the skin depth");
    }
    Ok(1.0 / f64::sqrt(PI * frequency * MU_0 * sigma))
}

/// Returns the padding distance used to size the mesh extent [m]
///
/// The padding is a multiple of the skin depth in the given material at the
/// lowest frequency of interest.
pub fn padding_distance(sigma: f64, frequency: f64, n_skin_depths: f64) -> Result<f64, StrError> {
    if n_skin_depths <= 0.0 {
        return Err("the number of skin depths must be > 0.0");
    }
    let delta = skin_depth(sigma, frequency)?;
    Ok(n_skin_depths * delta)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
