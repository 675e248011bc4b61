//! Staggered hole-grid layout: row/column counts, centering margins, and the
//! enumeration of accepted hole centers.

use crate::{Result, ensure_positive};
use hexsheet_base::Tolerance;
use truck_geometry::base::Point2;

/// Hole count and centering margin along one plate axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridAxis {
    pub count: usize,
    pub margin: f64,
}

/// Computes how many holes of `hole_diameter` fit along `extent` at the given
/// pitch, and the margin that centers the resulting span.
///
/// When the hole does not fit at all the count is zero and the margin
/// degenerates to `extent / 2`.
pub fn axis_layout(extent: f64, hole_diameter: f64, pitch: f64) -> GridAxis {
    if extent < hole_diameter {
        return GridAxis {
            count: 0,
            margin: extent / 2.0,
        };
    }
    let count = ((extent - hole_diameter) / pitch).floor() as usize + 1;
    let span = (count - 1) as f64 * pitch + hole_diameter;
    GridAxis {
        count,
        margin: (extent - span) / 2.0,
    }
}

/// One accepted hole position, in row-major enumeration order.
#[derive(Clone, Copy, Debug)]
pub struct HoleCenter {
    pub row: usize,
    pub col: usize,
    pub center: Point2,
}

/// Staggered grid of hexagonal holes over a rectangular plate.
///
/// Odd rows are shifted by half the X pitch. A position is accepted only if
/// the hexagon's circumcircle stays inside the plate bounds, within the
/// linear tolerance.
#[derive(Clone, Copy, Debug)]
pub struct GridLayout {
    plate_length: f64,
    plate_width: f64,
    hole_radius: f64,
    pitch_x: f64,
    pitch_y: f64,
    cols: GridAxis,
    rows: GridAxis,
    tol: f64,
}

impl GridLayout {
    pub fn new(
        plate_length: f64,
        plate_width: f64,
        hole_diameter: f64,
        pitch_x: f64,
        pitch_y: f64,
    ) -> Result<Self> {
        Self::with_tolerance(
            plate_length,
            plate_width,
            hole_diameter,
            pitch_x,
            pitch_y,
            Tolerance::default(),
        )
    }

    pub fn with_tolerance(
        plate_length: f64,
        plate_width: f64,
        hole_diameter: f64,
        pitch_x: f64,
        pitch_y: f64,
        tol: Tolerance,
    ) -> Result<Self> {
        ensure_positive("plate_length", plate_length)?;
        ensure_positive("plate_width", plate_width)?;
        ensure_positive("hole_diameter", hole_diameter)?;
        ensure_positive("pitch_x", pitch_x)?;
        ensure_positive("pitch_y", pitch_y)?;

        Ok(Self {
            plate_length,
            plate_width,
            hole_radius: hole_diameter / 2.0,
            pitch_x,
            pitch_y,
            cols: axis_layout(plate_length, hole_diameter, pitch_x),
            rows: axis_layout(plate_width, hole_diameter, pitch_y),
            tol: tol.linear,
        })
    }

    pub fn n_cols(&self) -> usize {
        self.cols.count
    }

    pub fn n_rows(&self) -> usize {
        self.rows.count
    }

    pub fn margin_x(&self) -> f64 {
        self.cols.margin
    }

    pub fn margin_y(&self) -> f64 {
        self.rows.margin
    }

    pub fn hole_radius(&self) -> f64 {
        self.hole_radius
    }

    /// Accepted hole centers in row-major order (increasing row, then column).
    ///
    /// Pure function of the layout: re-invoking yields the same sequence.
    pub fn centers(&self) -> impl Iterator<Item = HoleCenter> {
        let layout = *self;
        (0..layout.rows.count).flat_map(move |row| {
            let cy = layout.rows.margin + layout.hole_radius + row as f64 * layout.pitch_y;
            // stagger odd rows by half the X pitch
            let x_offset = if row % 2 == 1 {
                layout.pitch_x / 2.0
            } else {
                0.0
            };
            (0..layout.cols.count).filter_map(move |col| {
                let cx =
                    layout.cols.margin + layout.hole_radius + col as f64 * layout.pitch_x + x_offset;
                layout
                    .circumcircle_inside(cx, cy)
                    .then_some(HoleCenter {
                        row,
                        col,
                        center: Point2::new(cx, cy),
                    })
            })
        })
    }

    fn circumcircle_inside(&self, cx: f64, cy: f64) -> bool {
        cx - self.hole_radius >= -self.tol
            && cx + self.hole_radius <= self.plate_length + self.tol
            && cy - self.hole_radius >= -self.tol
            && cy + self.hole_radius <= self.plate_width + self.tol
    }
}
