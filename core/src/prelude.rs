use serde::{Deserialize, Serialize};

/// A sampled or normalized (x, y) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Closed interval of input x-values a curve is sampled over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainRange {
    pub lo: f64,
    pub hi: f64,
}

impl DomainRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Symmetric range `[-2π, 2π]` the waveform is drawn over.
    pub fn two_turns() -> Self {
        let bound = 2.0 * std::f64::consts::PI;
        Self::new(-bound, bound)
    }

    pub fn validate(&self) -> CurveResult<()> {
        if !self.lo.is_finite() || !self.hi.is_finite() {
            return Err(CurveError::InvalidSampleSpec(format!(
                "range bounds must be finite, got [{}, {}]",
                self.lo, self.hi
            )));
        }
        if self.lo >= self.hi {
            return Err(CurveError::InvalidSampleSpec(format!(
                "range lower bound {} must be below upper bound {}",
                self.lo, self.hi
            )));
        }
        Ok(())
    }
}

/// Target area in device-independent units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawingArea {
    pub width: f64,
    pub height: f64,
}

impl DrawingArea {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> CurveResult<()> {
        // Negated comparisons so NaN is rejected too.
        if !(self.width > 0.0 && self.width.is_finite())
            || !(self.height > 0.0 && self.height.is_finite())
        {
            return Err(CurveError::InvalidDrawingArea(format!(
                "area must have positive size, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    pub fn center_y(&self) -> f64 {
        self.height / 2.0
    }
}

/// Precondition violations raised by sampling and normalization.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("invalid sample spec: {0}")]
    InvalidSampleSpec(String),
    #[error("invalid drawing area: {0}")]
    InvalidDrawingArea(String),
    #[error("insufficient points: need at least 2, got {0}")]
    InsufficientPoints(usize),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type CurveResult<T> = Result<T, CurveError>;

/// A real-valued function of one variable.
pub trait Curve {
    fn value(&self, x: f64) -> f64;
}

impl<F> Curve for F
where
    F: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_curves() {
        let double = |x: f64| 2.0 * x;
        assert_eq!(double.value(3.5), 7.0);
    }

    #[test]
    fn degenerate_range_is_rejected() {
        assert!(DomainRange::new(1.0, 1.0).validate().is_err());
        assert!(DomainRange::new(2.0, 1.0).validate().is_err());
        assert!(DomainRange::new(f64::NAN, 1.0).validate().is_err());
        assert!(DomainRange::new(0.0, f64::INFINITY).validate().is_err());
        assert!(DomainRange::new(-1.0, 1.0).validate().is_ok());
    }

    #[test]
    fn area_requires_positive_size() {
        assert!(DrawingArea::new(0.0, 10.0).validate().is_err());
        assert!(DrawingArea::new(10.0, -1.0).validate().is_err());
        assert!(DrawingArea::new(f64::NAN, 10.0).validate().is_err());
        assert!(DrawingArea::new(10.0, 10.0).validate().is_ok());
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = CurveError::InsufficientPoints(1);
        assert_eq!(
            err.to_string(),
            "insufficient points: need at least 2, got 1"
        );
    }
}
