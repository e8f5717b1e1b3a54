use crate::base::{point_elevation, point_radius};
use crate::StrError;
use plotpy::{Curve, Plot};

/// Defines the profile line along which a field is extracted
#[derive(Clone, Copy, Debug)]
pub enum ProfileLine {
    /// Radial profile at a fixed elevation: samples with `|z - z0| ≤ tol`
    Radial { z: f64, tol: f64 },

    /// Vertical profile at a fixed radius: samples with `|r - r0| ≤ tol`
    Vertical { r: f64, tol: f64 },
}

/// Holds the caller-owned view state for a profile plot
///
/// The render function is stateless; the caller owns this struct, mutates it
/// in response to its own events (sliders, dropdowns, whatever), and passes it
/// in per render. No view state lives in this crate.
#[derive(Clone, Debug)]
pub struct FieldViewState {
    /// Name of the model being viewed (e.g., "intact"); used as the curve label
    pub name: String,

    /// Selected profile line
    pub line: ProfileLine,

    /// Label of the value axis (e.g., "σ [S/m]")
    pub value_label: String,

    /// Plot log10 of the absolute value instead of the raw value
    pub log_abs: bool,
}

/// Extracts the samples of a field along a profile line
///
/// Returns the coordinate along the line (radius for a radial line, elevation
/// for a vertical line) and the field values, both in input order.
pub fn extract_profile(
    line: &ProfileLine,
    points: &[Vec<f64>],
    field: &[f64],
) -> Result<(Vec<f64>, Vec<f64>), StrError> {
    if field.len() != points.len() {
        return Err("field length must match the number of points");
    }
    let mut x = Vec::new();
    let mut y = Vec::new();
    for (point, value) in points.iter().zip(field.iter()) {
        let r = point_radius(point)?;
        let z = point_elevation(point)?;
        match line {
            ProfileLine::Radial { z: z0, tol } => {
                if f64::abs(z - *z0) <= *tol {
                    x.push(r);
                    y.push(*value);
                }
            }
            ProfileLine::Vertical { r: r0, tol } => {
                if f64::abs(r - *r0) <= *tol {
                    x.push(z);
                    y.push(*value);
                }
            }
        }
    }
    Ok((x, y))
}

/// Renders a field profile plot (stateless; does not save)
///
/// The returned [Plot] is ready for further decoration and saving by the
/// caller.
pub fn render_profile(state: &FieldViewState, points: &[Vec<f64>], field: &[f64]) -> Result<Plot, StrError> {
    let (x, mut y) = extract_profile(&state.line, points, field)?;
    if x.is_empty() {
        return Err("no samples fall on the requested profile line");
    }
    if state.log_abs {
        for v in &mut y {
            *v = f64::log10(f64::abs(*v));
        }
    }
    let value_label = if state.log_abs {
        format!("log10|{}|", state.value_label)
    } else {
        state.value_label.clone()
    };
    let mut curve = Curve::new();
    curve.set_label(&state.name).draw(&x, &y);
    let mut plot = Plot::new();
    plot.add(&curve);
    match state.line {
        ProfileLine::Radial { .. } => plot.grid_and_labels("r [m]", &value_label),
        ProfileLine::Vertical { .. } => plot.grid_and_labels("z [m]", &value_label),
    };
    plot.legend();
    Ok(plot)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
