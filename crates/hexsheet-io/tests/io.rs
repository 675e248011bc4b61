use anyhow::Result;
use hexsheet_io::{DEFAULT_TESSELLATION_TOLERANCE, export_obj, export_step, triangulate_solid};
use hexsheet_layout::{HexagonProfile, Point2};
use hexsheet_topology::SolidBuilder;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(file_name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let stamp = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(duration) => duration.as_millis(),
        Err(_) => 0,
    };
    path.push(format!("hexsheet_{stamp}_{file_name}"));
    path
}

#[test]
fn export_step_creates_file() -> Result<()> {
    let solid = SolidBuilder::box_solid(100.0, 50.0, 2.0)?;
    let path = temp_path("plate.step");

    export_step(&solid, &path)?;

    let metadata = fs::metadata(&path)?;
    assert!(metadata.len() > 0);

    let _ = fs::remove_file(&path);
    Ok(())
}

#[test]
fn export_obj_creates_file() -> Result<()> {
    let profile = HexagonProfile::new(Point2::new(0.0, 0.0), 2.5);
    let solid = SolidBuilder::hexagon_prism(&profile, 0.0, 2.0)?;
    let path = temp_path("hexagon.obj");

    export_obj(&solid, &path, DEFAULT_TESSELLATION_TOLERANCE)?;

    let metadata = fs::metadata(&path)?;
    assert!(metadata.len() > 0);

    let _ = fs::remove_file(&path);
    Ok(())
}

#[test]
fn triangulation_produces_mesh() -> Result<()> {
    let solid = SolidBuilder::box_solid(100.0, 50.0, 2.0)?;
    let mesh = triangulate_solid(&solid, DEFAULT_TESSELLATION_TOLERANCE);
    assert!(!mesh.positions().is_empty());
    assert!(mesh.faces().len() > 0);
    Ok(())
}
