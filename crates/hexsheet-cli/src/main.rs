use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use hexsheet_model::{DEFAULT_MODEL_TITLE, SheetParams, TruckKernel, build_sheet, export_sheet};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "hexsheet")]
#[command(about = "Generates a hex-perforated sheet and exports it to STEP and OBJ")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the perforated sheet and export STEP and OBJ files.
    Generate(GenerateArgs),
    /// Print the hole grid layout without building any geometry.
    Layout(LayoutArgs),
}

#[derive(Args)]
struct SheetArgs {
    /// Plate X dimension, mm.
    #[arg(long, default_value_t = 100.0)]
    length: f64,
    /// Plate Y dimension, mm.
    #[arg(long, default_value_t = 50.0)]
    width: f64,
    /// Plate thickness, mm.
    #[arg(long, default_value_t = 2.0)]
    thickness: f64,
    /// Hexagon circumcircle diameter, mm.
    #[arg(long, default_value_t = 5.0)]
    hole: f64,
    /// Center-to-center spacing in X, mm.
    #[arg(long, default_value_t = 10.0)]
    pitch_x: f64,
    /// Center-to-center spacing in Y, mm.
    #[arg(long, default_value_t = 10.0)]
    pitch_y: f64,
}

impl SheetArgs {
    fn params(&self) -> SheetParams {
        SheetParams {
            plate_length: self.length,
            plate_width: self.width,
            plate_thickness: self.thickness,
            hole_diameter: self.hole,
            pitch_x: self.pitch_x,
            pitch_y: self.pitch_y,
            ..SheetParams::default()
        }
    }
}

#[derive(Args)]
struct GenerateArgs {
    #[command(flatten)]
    sheet: SheetArgs,
    #[arg(long, default_value = "cad_outputs_generated")]
    out_dir: PathBuf,
    #[arg(long)]
    name: Option<String>,
}

#[derive(Args)]
struct LayoutArgs {
    #[command(flatten)]
    sheet: SheetArgs,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => generate(args),
        Command::Layout(args) => layout(args),
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    let params = args.sheet.params();
    let kernel = TruckKernel::default();
    let title = args.name.unwrap_or_else(|| DEFAULT_MODEL_TITLE.to_string());

    let element =
        build_sheet(&kernel, &params, title).context("failed to build perforated sheet")?;
    info!(
        holes = params.layout()?.centers().count(),
        "perforated sheet built"
    );

    let outputs = export_sheet(&kernel, &element, &args.out_dir)?;
    info!(path = %outputs.step.display(), "STEP export complete");
    info!(path = %outputs.obj.display(), "OBJ export complete");
    Ok(())
}

fn layout(args: LayoutArgs) -> Result<()> {
    let layout = args.sheet.params().layout()?;

    println!(
        "grid: {} cols x {} rows, margins ({:.3}, {:.3})",
        layout.n_cols(),
        layout.n_rows(),
        layout.margin_x(),
        layout.margin_y()
    );
    for hole in layout.centers() {
        println!(
            "row {:>3} col {:>3}  center ({:.3}, {:.3})",
            hole.row, hole.col, hole.center.x, hole.center.y
        );
    }
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
