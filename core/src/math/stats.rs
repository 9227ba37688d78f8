use crate::prelude::Point;

pub struct StatsHelper;

impl StatsHelper {
    /// Root-mean-square of the y values.
    pub fn rms(points: &[Point]) -> f64 {
        if points.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = points.iter().map(|p| p.y * p.y).sum();
        (sum_sq / points.len() as f64).sqrt()
    }

    /// Largest absolute y value.
    pub fn peak(points: &[Point]) -> f64 {
        points.iter().map(|p| p.y.abs()).fold(0.0, f64::max)
    }

    /// Minimum and maximum y, or `None` for an empty slice.
    pub fn extent(points: &[Point]) -> Option<(f64, f64)> {
        if points.is_empty() {
            return None;
        }
        let min = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }
}
