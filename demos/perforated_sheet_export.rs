use anyhow::Result;
use hexsheet_model::{DEFAULT_MODEL_TITLE, SheetParams, TruckKernel, build_sheet, export_sheet};
use std::path::Path;

fn main() -> Result<()> {
    let kernel = TruckKernel::default();
    let element = build_sheet(&kernel, &SheetParams::default(), DEFAULT_MODEL_TITLE)?;
    let outputs = export_sheet(&kernel, &element, Path::new("cad_outputs_generated"))?;
    println!("Model exported to {}", outputs.step.display());
    println!("Model exported to {}", outputs.obj.display());
    Ok(())
}
