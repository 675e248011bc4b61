use hexsheet_topology::Solid;
use thiserror::Error;

pub const DEFAULT_SHAPEOPS_TOLERANCE: f64 = 0.05;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("boolean operation failed")]
    BooleanFailed,
    #[error("hole subtraction failed at tool index {0}")]
    CutFailed(usize),
    #[error(transparent)]
    Topology(#[from] hexsheet_topology::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn difference(base: &Solid, tool: &Solid, tol: f64) -> Result<Solid> {
    ensure_tolerance(tol)?;

    let mut inverted_tool = tool.clone();
    inverted_tool.not();

    truck_shapeops::and(base, &inverted_tool, tol).ok_or(Error::BooleanFailed)
}

pub fn union(base: &Solid, tool: &Solid, tol: f64) -> Result<Solid> {
    ensure_tolerance(tol)?;

    truck_shapeops::or(base, tool, tol).ok_or(Error::BooleanFailed)
}

/// Subtracts every tool from the base in sequence. An empty tool set leaves
/// the base unmodified.
pub fn cut_all(base: &Solid, tools: &[Solid], tol: f64) -> Result<Solid> {
    ensure_tolerance(tol)?;

    let mut result = base.clone();
    for (index, tool) in tools.iter().enumerate() {
        result = difference(&result, tool, tol).map_err(|err| match err {
            Error::BooleanFailed => Error::CutFailed(index),
            other => other,
        })?;
    }
    Ok(result)
}

fn ensure_tolerance(tol: f64) -> Result<()> {
    if tol <= 0.0 {
        return Err(Error::InvalidParameter("tolerance must be > 0".to_string()));
    }
    Ok(())
}
