use cbsim::prelude::*;
use cbsim::StrError;
use std::path::Path;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "cbsim_casing_fields",
    about = "Builds the intact and gap conductivity fields of the sample cased borehole"
)]
struct Options {
    /// Output directory
    #[structopt(default_value = "/tmp/cbsim/results")]
    out_dir: String,

    /// Save an SVG with the conductivity profile along the casing wall
    #[structopt(long)]
    plot: bool,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // parameters and geometry
    let param_casing = SampleParams::param_casing();
    let param_cond = SampleParams::param_conductivities_resistive_casing();
    let geometry = CasingGeometry::new(&param_casing)?;

    // sample grid of cell centers: fine near the axis, covering the casing
    let points = SampleGrids::cell_centers_cylinder(100, 220, 1.0, -1100.0);

    // intact and gap fields
    let model = ConductivityModel::new(&geometry, &param_cond)?;
    let intact = model.build_field(&points)?;
    let gap = Gap::new(&SampleParams::param_gap())?;
    let with_gaps = model.apply_gaps(&intact, &points, &[gap])?;

    // named results
    let mut registry = FieldRegistry::new();
    registry.set("intact", intact)?;
    registry.set("gaps", with_gaps)?;
    let path_json = Path::new(&options.out_dir).join("casing_fields.json");
    registry.write_json(&path_json)?;
    println!("fields written to {}", path_json.display());

    // source electrodes, located on a coarse grid covering the whole domain
    let domain = SampleGrids::cell_centers_cylinder(50, 55, 1000.0, -1100.0);
    let source = SourceIndices::find(&domain, &geometry, &SampleParams::param_source())?;
    println!(
        "downhole electrode sample = {}, return electrode sample = {}",
        source.downhole, source.surface_return
    );

    // mesh-padding hint for the consuming solver
    let delta = skin_depth(param_cond.sigma_background, 1.0)?;
    println!("skin depth in the background at 1 Hz = {:.1} m", delta);

    // profile along the casing wall
    if options.plot {
        let state = FieldViewState {
            name: String::from("gaps"),
            line: ProfileLine::Vertical { r: 0.045, tol: 1e-3 },
            value_label: String::from("σ [S/m]"),
            log_abs: true,
        };
        let plot = render_profile(&state, &points, registry.get("gaps")?)?;
        let path_svg = Path::new(&options.out_dir).join("casing_fields.svg");
        plot.save(&path_svg)?;
        println!("figure written to {}", path_svg.display());
    }
    Ok(())
}
