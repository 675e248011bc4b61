use anyhow::Result;
use hexsheet_io::{DEFAULT_TESSELLATION_TOLERANCE, export_obj};
use hexsheet_layout::{HexagonProfile, Point2};
use hexsheet_topology::SolidBuilder;

fn main() -> Result<()> {
    let profile = HexagonProfile::new(Point2::new(0.0, 0.0), 2.5);
    let solid = SolidBuilder::hexagon_prism(&profile, 0.0, 2.0)?;
    export_obj(&solid, "out/hexagon.obj", DEFAULT_TESSELLATION_TOLERANCE)?;
    Ok(())
}
