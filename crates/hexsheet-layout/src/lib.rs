pub use truck_geometry::base::{Point2, Vector2};

use thiserror::Error;

pub mod grid;
pub mod profiles;

pub use grid::{GridAxis, GridLayout, HoleCenter, axis_layout};
pub use profiles::HexagonProfile;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if value <= 0.0 {
        return Err(Error::InvalidParameter(format!("{name} must be > 0")));
    }
    Ok(())
}
