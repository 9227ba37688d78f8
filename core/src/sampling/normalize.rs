use crate::prelude::{CurveError, CurveResult, DrawingArea, Point};

/// Rescales sampled points into area-local coordinates.
///
/// Horizontal placement is by index, not by the sampled x: point `i` of `n`
/// lands at `i·width/(n−1)`. Vertically the zero line sits at the area's
/// center and positive y moves up.
pub fn normalize(points: &[Point], area: &DrawingArea) -> CurveResult<Vec<Point>> {
    area.validate()?;
    if points.len() < 2 {
        return Err(CurveError::InsufficientPoints(points.len()));
    }

    let last = points.len() - 1;
    let divisor = last as f64;
    let half_height = area.center_y();

    let normalized = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = if i == last {
                area.width
            } else {
                i as f64 * area.width / divisor
            };
            let y = half_height - point.y * half_height;
            Point::new(x, y)
        })
        .collect();
    Ok(normalized)
}
