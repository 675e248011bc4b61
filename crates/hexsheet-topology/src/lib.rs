use hexsheet_layout::HexagonProfile;
use thiserror::Error;
use truck_modeling::builder;

pub use truck_modeling::{Curve, Edge, Face, Point3, Shell, Solid, Surface, Vector3, Vertex, Wire};

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error(transparent)]
    Modeling(#[from] truck_modeling::errors::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub struct SolidBuilder;

impl SolidBuilder {
    pub fn box_solid(length: f64, width: f64, thickness: f64) -> Result<Solid> {
        ensure_positive("length", length)?;
        ensure_positive("width", width)?;
        ensure_positive("thickness", thickness)?;

        let v = builder::vertex(Point3::new(0.0, 0.0, 0.0));
        let e = builder::tsweep(&v, Vector3::unit_x() * length);
        let f = builder::tsweep(&e, Vector3::unit_y() * width);
        Ok(builder::tsweep(&f, Vector3::unit_z() * thickness))
    }

    /// Regular hexagonal prism: the profile extruded from `z0` upward by
    /// `height`.
    pub fn hexagon_prism(profile: &HexagonProfile, z0: f64, height: f64) -> Result<Solid> {
        ensure_positive("circumradius", profile.circumradius)?;
        ensure_positive("height", height)?;

        let face = hexagon_face(profile, z0)?;
        Ok(builder::tsweep(&face, Vector3::unit_z() * height))
    }
}

fn hexagon_face(profile: &HexagonProfile, z: f64) -> Result<Face> {
    let corners = profile.vertices();
    let vertices: Vec<Vertex> = corners
        .iter()
        .map(|p| builder::vertex(Point3::new(p.x, p.y, z)))
        .collect();

    let wire: Wire = (0..vertices.len())
        .map(|i| builder::line(&vertices[i], &vertices[(i + 1) % vertices.len()]))
        .collect::<Vec<Edge>>()
        .into();

    Ok(builder::try_attach_plane(&[wire])?)
}

fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if value <= 0.0 {
        return Err(Error::InvalidParameter(format!("{name} must be > 0")));
    }
    Ok(())
}
