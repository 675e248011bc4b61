use truck_geometry::base::Point2;

/// Regular hexagon described by its center and circumcircle radius.
#[derive(Clone, Copy, Debug)]
pub struct HexagonProfile {
    pub center: Point2,
    pub circumradius: f64,
}

impl HexagonProfile {
    pub fn new(center: Point2, circumradius: f64) -> Self {
        Self {
            center,
            circumradius,
        }
    }

    /// Vertices at 60-degree increments, counterclockwise from the +X axis.
    pub fn vertices(&self) -> [Point2; 6] {
        std::array::from_fn(|i| {
            let angle = (i as f64) * std::f64::consts::FRAC_PI_3;
            Point2::new(
                self.center.x + self.circumradius * angle.cos(),
                self.center.y + self.circumradius * angle.sin(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_lie_on_circumcircle() {
        let profile = HexagonProfile::new(Point2::new(10.0, 5.0), 2.5);
        for v in profile.vertices() {
            let d = ((v.x - 10.0).powi(2) + (v.y - 5.0).powi(2)).sqrt();
            assert!((d - 2.5).abs() < 1.0e-12);
        }
    }

    #[test]
    fn first_vertex_on_positive_x_axis() {
        let profile = HexagonProfile::new(Point2::new(0.0, 0.0), 1.0);
        let v = profile.vertices()[0];
        assert!((v.x - 1.0).abs() < 1.0e-12);
        assert!(v.y.abs() < 1.0e-12);
    }
}
