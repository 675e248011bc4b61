pub mod mesh;
pub mod step;

pub use mesh::{DEFAULT_TESSELLATION_TOLERANCE, export_obj, triangulate_solid};
pub use step::export_step;
