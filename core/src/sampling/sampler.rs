use crate::prelude::{Curve, CurveError, CurveResult, DomainRange, DrawingArea, Point};
use crate::sampling::normalize::normalize;
use crate::telemetry::log::LogManager;
use serde::{Deserialize, Serialize};

/// Step count plus domain; paired with a curve at sampling time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSpec {
    pub steps: usize,
    pub range: DomainRange,
}

impl SampleSpec {
    pub const DEFAULT_STEPS: usize = 300;

    pub fn new(steps: usize, range: DomainRange) -> Self {
        Self { steps, range }
    }

    pub fn validate(&self) -> CurveResult<()> {
        if self.steps < 2 {
            return Err(CurveError::InvalidSampleSpec(format!(
                "step count must be at least 2, got {}",
                self.steps
            )));
        }
        self.range.validate()
    }
}

impl Default for SampleSpec {
    /// 300 samples over `[-2π, 2π]`.
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEPS, DomainRange::two_turns())
    }
}

/// Samples `curve` at `steps` evenly spaced x values across `range`.
///
/// Each x is interpolated from the bounds rather than accumulated, so the
/// first and last samples land on `lo` and `hi` exactly and ranges whose
/// span overflows `f64` still sample cleanly.
pub fn sample<C>(curve: &C, steps: usize, range: DomainRange) -> CurveResult<Vec<Point>>
where
    C: Curve + ?Sized,
{
    let spec = SampleSpec::new(steps, range);
    spec.validate()?;

    let last = (steps - 1) as f64;
    let points = (0..steps)
        .map(|i| {
            let t = i as f64 / last;
            let x = range.lo * (1.0 - t) + range.hi * t;
            Point::new(x, curve.value(x))
        })
        .collect();
    Ok(points)
}

/// Samples and normalizes in one pass.
pub fn trace<C>(curve: &C, spec: &SampleSpec, area: &DrawingArea) -> CurveResult<Vec<Point>>
where
    C: Curve + ?Sized,
{
    let points = sample(curve, spec.steps, spec.range)?;
    normalize(&points, area)
}

/// A validated sample spec with logging, reused across redraws.
pub struct CurveSampler {
    spec: SampleSpec,
    logger: LogManager,
}

impl CurveSampler {
    pub fn new(spec: SampleSpec) -> CurveResult<Self> {
        let logger = LogManager::new("sampler");
        if let Err(err) = spec.validate() {
            logger.record(&format!("rejected spec: {err}"));
            return Err(err);
        }
        Ok(Self { spec, logger })
    }

    pub fn sample<C>(&self, curve: &C) -> CurveResult<Vec<Point>>
    where
        C: Curve + ?Sized,
    {
        let points = sample(curve, self.spec.steps, self.spec.range)?;
        self.logger.detail(&format!(
            "sampled {} points over [{:.4}, {:.4}]",
            points.len(),
            self.spec.range.lo,
            self.spec.range.hi
        ));
        Ok(points)
    }

    pub fn trace<C>(&self, curve: &C, area: &DrawingArea) -> CurveResult<Vec<Point>>
    where
        C: Curve + ?Sized,
    {
        let points = self.sample(curve)?;
        normalize(&points, area).inspect_err(|err| {
            self.logger.detail(&format!("normalization skipped: {err}"));
        })
    }
}

impl Default for CurveSampler {
    fn default() -> Self {
        Self {
            spec: SampleSpec::default(),
            logger: LogManager::new("sampler"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    const EPS: f64 = 1e-9;

    #[test]
    fn sample_returns_requested_count_with_exact_bounds() {
        let ranges = [
            DomainRange::new(0.0, 1.0),
            DomainRange::new(-2.0 * PI, 2.0 * PI),
            DomainRange::new(0.1, 0.7),
            DomainRange::new(-3.3, 1e6),
        ];
        for range in ranges {
            for steps in [2, 3, 7, 300, 1001] {
                let points = sample(&|x: f64| x, steps, range).unwrap();
                assert_eq!(points.len(), steps);
                assert_eq!(points[0].x, range.lo);
                assert_eq!(points[steps - 1].x, range.hi);
            }
        }
    }

    #[test]
    fn range_wider_than_f64_span_keeps_exact_bounds() {
        let range = DomainRange::new(-1e308, 1e308);
        let points = sample(&|x: f64| x, 5, range).unwrap();
        assert_eq!(points[0].x, range.lo);
        assert_eq!(points[4].x, range.hi);
        assert!(points.iter().all(|p| p.x.is_finite()));
        assert!(points.windows(2).all(|pair| pair[0].x < pair[1].x));
        assert!(points[2].x.abs() < 1e292);
    }

    #[test]
    fn constant_function_yields_constant_ys() {
        let points = sample(&|_: f64| 2.5, 17, DomainRange::new(-1.0, 4.0)).unwrap();
        assert!(points.iter().all(|p| p.y == 2.5));
    }

    #[test]
    fn x_values_are_strictly_increasing() {
        let points = sample(&f64::sin, 300, DomainRange::two_turns()).unwrap();
        assert!(points.windows(2).all(|pair| pair[0].x < pair[1].x));
    }

    #[test]
    fn sine_over_half_turn() {
        let points = sample(&f64::sin, 5, DomainRange::new(0.0, PI)).unwrap();
        let xs = [0.0, PI / 4.0, PI / 2.0, 3.0 * PI / 4.0, PI];
        let ys = [0.0, FRAC_1_SQRT_2, 1.0, FRAC_1_SQRT_2, 0.0];
        for (point, (x, y)) in points.iter().zip(xs.iter().zip(ys.iter())) {
            assert!((point.x - x).abs() < EPS);
            assert!((point.y - y).abs() < EPS);
        }
    }

    #[test]
    fn single_step_is_rejected() {
        let err = sample(&f64::sin, 1, DomainRange::new(0.0, 1.0)).unwrap_err();
        assert!(matches!(err, CurveError::InvalidSampleSpec(_)));
        let err = sample(&f64::sin, 0, DomainRange::new(0.0, 1.0)).unwrap_err();
        assert!(matches!(err, CurveError::InvalidSampleSpec(_)));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = sample(&f64::sin, 10, DomainRange::new(1.0, 0.0)).unwrap_err();
        assert!(matches!(err, CurveError::InvalidSampleSpec(_)));
    }

    #[test]
    fn default_spec_matches_demo_window() {
        let spec = SampleSpec::default();
        assert_eq!(spec.steps, 300);
        assert_eq!(spec.range, DomainRange::two_turns());
    }

    #[test]
    fn sampler_rejects_invalid_spec_up_front() {
        let spec = SampleSpec::new(1, DomainRange::new(0.0, 1.0));
        assert!(CurveSampler::new(spec).is_err());
    }

    #[test]
    fn sampler_trace_spans_the_area() {
        let sampler = CurveSampler::default();
        let area = DrawingArea::new(400.0, 200.0);
        let points = sampler.trace(&|_: f64| 0.0, &area).unwrap();
        assert_eq!(points.len(), 300);
        assert_eq!(points[0].x, 0.0);
        assert!((points[299].x - 400.0).abs() < EPS);
        assert!(points.iter().all(|p| p.y == 100.0));
    }

    #[test]
    fn trace_reports_bad_area() {
        let err = trace(&f64::sin, &SampleSpec::default(), &DrawingArea::new(0.0, 10.0))
            .unwrap_err();
        assert!(matches!(err, CurveError::InvalidDrawingArea(_)));
    }
}
