//! The generation pipeline: parameters in, exported perforated sheet out.

use crate::kernel::GeometryKernel;
use crate::{ParameterSet, ParameterValue, SheetElement};
use anyhow::{Context, Result};
use hexsheet_base::{Guid, LengthUnit, Units};
use hexsheet_layout::{GridLayout, HexagonProfile};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL_TITLE: &str = "Perforated sheet with hexagonal holes";

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SheetParams {
    pub plate_length: f64,
    pub plate_width: f64,
    pub plate_thickness: f64,
    pub hole_diameter: f64,
    pub pitch_x: f64,
    pub pitch_y: f64,
    pub units: Units,
}

impl Default for SheetParams {
    fn default() -> Self {
        Self {
            plate_length: 100.0,
            plate_width: 50.0,
            plate_thickness: 2.0,
            hole_diameter: 5.0,
            pitch_x: 10.0,
            pitch_y: 10.0,
            units: Units::metric_mm(),
        }
    }
}

impl SheetParams {
    pub fn layout(&self) -> hexsheet_layout::Result<GridLayout> {
        GridLayout::new(
            self.plate_length,
            self.plate_width,
            self.hole_diameter,
            self.pitch_x,
            self.pitch_y,
        )
    }
}

/// Maps a human-readable title to a file-system-safe stem: every character
/// outside ASCII alphanumerics becomes an underscore.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

pub fn build_sheet<K: GeometryKernel>(
    kernel: &K,
    params: &SheetParams,
    title: impl Into<String>,
) -> Result<SheetElement<K::Solid>> {
    let layout = params.layout().context("invalid sheet parameters")?;

    let base = kernel
        .box_solid(
            params.plate_length,
            params.plate_width,
            params.plate_thickness,
        )
        .context("failed to build base plate")?;

    // extend the cutters past both plate faces so the boolean never meets
    // the surfaces exactly
    let clearance = params.plate_thickness * 0.1;
    let mut tools = Vec::new();
    for hole in layout.centers() {
        let profile = HexagonProfile::new(hole.center, layout.hole_radius());
        let tool = kernel
            .hexagon_prism(&profile, -clearance, params.plate_thickness + 2.0 * clearance)
            .with_context(|| {
                format!("failed to build hole at row {} col {}", hole.row, hole.col)
            })?;
        tools.push(tool);
    }

    let geometry = kernel
        .cut_all(&base, &tools)
        .context("boolean subtraction failed")?;

    let mut parameters = ParameterSet::new();
    parameters.insert(
        "PlateLength".to_string(),
        ParameterValue::Number(params.plate_length),
    );
    parameters.insert(
        "PlateWidth".to_string(),
        ParameterValue::Number(params.plate_width),
    );
    parameters.insert(
        "PlateThickness".to_string(),
        ParameterValue::Number(params.plate_thickness),
    );
    parameters.insert(
        "HoleDiameter".to_string(),
        ParameterValue::Number(params.hole_diameter),
    );
    parameters.insert("PitchX".to_string(), ParameterValue::Number(params.pitch_x));
    parameters.insert("PitchY".to_string(), ParameterValue::Number(params.pitch_y));
    parameters.insert(
        "HoleCount".to_string(),
        ParameterValue::Integer(tools.len() as i64),
    );
    let units_label = match params.units.length {
        LengthUnit::Millimeter => "mm",
        LengthUnit::Meter => "m",
    };
    parameters.insert(
        "Units".to_string(),
        ParameterValue::Text(units_label.to_string()),
    );

    Ok(SheetElement::new(Guid::new(), title, parameters, geometry))
}

#[derive(Clone, Debug)]
pub struct SheetOutputs {
    pub step: PathBuf,
    pub obj: PathBuf,
}

/// Writes the element to `<out_dir>/<sanitized title>.step` and `.obj`.
pub fn export_sheet<K: GeometryKernel>(
    kernel: &K,
    element: &SheetElement<K::Solid>,
    out_dir: &Path,
) -> Result<SheetOutputs> {
    let stem = sanitize_title(&element.title);

    let step = out_dir.join(format!("{stem}.step"));
    kernel
        .write_step(element.geometry(), &step)
        .context("STEP export failed")?;

    let obj = out_dir.join(format!("{stem}.obj"));
    kernel
        .write_mesh(element.geometry(), &obj)
        .context("OBJ export failed")?;

    Ok(SheetOutputs { step, obj })
}
