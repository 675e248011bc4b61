use hexsheet_layout::{GridLayout, Result, axis_layout};

const TOL: f64 = 1.0e-6;

#[test]
fn default_sheet_grid_counts_and_margins() -> Result<()> {
    let layout = GridLayout::new(100.0, 50.0, 5.0, 10.0, 10.0)?;
    assert_eq!(layout.n_cols(), 10);
    assert_eq!(layout.n_rows(), 5);
    assert_eq!(layout.margin_x(), 2.5);
    assert_eq!(layout.margin_y(), 2.5);
    Ok(())
}

#[test]
fn default_sheet_drops_staggered_overflow_columns() -> Result<()> {
    let layout = GridLayout::new(100.0, 50.0, 5.0, 10.0, 10.0)?;
    let centers: Vec<_> = layout.centers().collect();

    // Even rows keep all ten columns; the half-pitch shift pushes the last
    // column of odd rows past the boundary, leaving nine.
    assert_eq!(centers.len(), 48);
    for row in 0..5 {
        let expected = if row % 2 == 1 { 9 } else { 10 };
        assert_eq!(centers.iter().filter(|c| c.row == row).count(), expected);
    }

    // Row 1 col 9 would sit at cx = 100.0, circumcircle overflowing to 102.5.
    assert!(!centers.iter().any(|c| c.row == 1 && c.col == 9));
    let last_odd = centers
        .iter()
        .find(|c| c.row == 1 && c.col == 8)
        .expect("row 1 col 8 accepted");
    assert!((last_odd.center.x - 90.0).abs() < TOL);
    assert!(last_odd.center.x + layout.hole_radius() <= 100.0 + TOL);
    Ok(())
}

#[test]
fn span_never_exceeds_extent() {
    for (extent, diameter, pitch) in [
        (100.0, 5.0, 10.0),
        (50.0, 5.0, 10.0),
        (37.3, 4.2, 6.1),
        (12.0, 11.9, 3.0),
        (5.0, 5.0, 7.5),
    ] {
        let axis = axis_layout(extent, diameter, pitch);
        assert!(axis.count >= 1, "hole fits, so count must be at least one");
        let span = (axis.count - 1) as f64 * pitch + diameter;
        assert!(span <= extent + TOL, "span {span} exceeds extent {extent}");
        assert!((axis.margin - (extent - span) / 2.0).abs() < TOL);
    }
}

#[test]
fn hole_larger_than_plate_yields_empty_grid() -> Result<()> {
    let layout = GridLayout::new(4.0, 50.0, 5.0, 10.0, 10.0)?;
    assert_eq!(layout.n_cols(), 0);
    assert_eq!(layout.margin_x(), 2.0);
    assert_eq!(layout.centers().count(), 0);
    Ok(())
}

#[test]
fn circumcircles_stay_inside_plate() -> Result<()> {
    let layout = GridLayout::new(37.3, 21.8, 4.2, 6.1, 5.3)?;
    let r = layout.hole_radius();
    for hole in layout.centers() {
        assert!(hole.center.x - r >= -TOL);
        assert!(hole.center.x + r <= 37.3 + TOL);
        assert!(hole.center.y - r >= -TOL);
        assert!(hole.center.y + r <= 21.8 + TOL);
    }
    Ok(())
}

#[test]
fn odd_rows_are_staggered_by_half_pitch() -> Result<()> {
    let layout = GridLayout::new(100.0, 50.0, 5.0, 10.0, 10.0)?;
    let centers: Vec<_> = layout.centers().collect();
    for a in &centers {
        for b in &centers {
            if b.row == a.row + 1 && b.col == a.col {
                let shift = if a.row % 2 == 0 { 5.0 } else { -5.0 };
                assert!((b.center.x - a.center.x - shift).abs() < TOL);
            }
        }
    }
    Ok(())
}

#[test]
fn enumeration_is_deterministic_and_row_major() -> Result<()> {
    let layout = GridLayout::new(100.0, 50.0, 5.0, 10.0, 10.0)?;
    let first: Vec<_> = layout.centers().map(|h| (h.row, h.col)).collect();
    let second: Vec<_> = layout.centers().map(|h| (h.row, h.col)).collect();
    assert_eq!(first, second);

    let mut sorted = first.clone();
    sorted.sort();
    assert_eq!(first, sorted, "centers must come out in row-major order");
    Ok(())
}
