//! Capability interface over the geometry kernel.
//!
//! The sheet pipeline only ever talks to the kernel through this trait, so
//! the layout and orchestration logic can be tested with a recording fake
//! while `TruckKernel` provides the real implementation.

use anyhow::Result;
use hexsheet_layout::HexagonProfile;
use hexsheet_topology::SolidBuilder;
use std::path::Path;

pub trait GeometryKernel {
    type Solid: Clone;

    /// Axis-aligned box anchored at the origin.
    fn box_solid(&self, length: f64, width: f64, thickness: f64) -> Result<Self::Solid>;

    /// Hexagonal prism extruded from `z0` upward by `height`.
    fn hexagon_prism(
        &self,
        profile: &HexagonProfile,
        z0: f64,
        height: f64,
    ) -> Result<Self::Solid>;

    /// Subtracts every tool from the base; an empty tool set must return the
    /// base unmodified.
    fn cut_all(&self, base: &Self::Solid, tools: &[Self::Solid]) -> Result<Self::Solid>;

    fn write_step(&self, solid: &Self::Solid, path: &Path) -> Result<()>;

    fn write_mesh(&self, solid: &Self::Solid, path: &Path) -> Result<()>;
}

/// Kernel backed by the truck modeling and boolean crates.
pub struct TruckKernel {
    pub shapeops_tolerance: f64,
    pub tessellation_tolerance: f64,
}

impl Default for TruckKernel {
    fn default() -> Self {
        Self {
            shapeops_tolerance: hexsheet_shapeops::DEFAULT_SHAPEOPS_TOLERANCE,
            tessellation_tolerance: hexsheet_io::DEFAULT_TESSELLATION_TOLERANCE,
        }
    }
}

impl GeometryKernel for TruckKernel {
    type Solid = hexsheet_topology::Solid;

    fn box_solid(&self, length: f64, width: f64, thickness: f64) -> Result<Self::Solid> {
        Ok(SolidBuilder::box_solid(length, width, thickness)?)
    }

    fn hexagon_prism(
        &self,
        profile: &HexagonProfile,
        z0: f64,
        height: f64,
    ) -> Result<Self::Solid> {
        Ok(SolidBuilder::hexagon_prism(profile, z0, height)?)
    }

    fn cut_all(&self, base: &Self::Solid, tools: &[Self::Solid]) -> Result<Self::Solid> {
        Ok(hexsheet_shapeops::cut_all(base, tools, self.shapeops_tolerance)?)
    }

    fn write_step(&self, solid: &Self::Solid, path: &Path) -> Result<()> {
        hexsheet_io::export_step(solid, path)
    }

    fn write_mesh(&self, solid: &Self::Solid, path: &Path) -> Result<()> {
        hexsheet_io::export_obj(solid, path, self.tessellation_tolerance)
    }
}
