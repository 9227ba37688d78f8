//! The tapered sine curve and the parameter ranges its controls expose.

use crate::math::taper::Taper;
use crate::prelude::{Curve, CurveError, CurveResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Closed interval a parameter control may move through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
}

impl ParamRange {
    pub const AMPLITUDE: ParamRange = ParamRange { min: 0.0, max: 2.0 };
    pub const FREQUENCY: ParamRange = ParamRange { min: 1.0, max: 20.0 };
    pub const PHASE: ParamRange = ParamRange {
        min: 0.0,
        max: 40.0 * PI,
    };

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// `amplitude · sin(frequency · x − phase) · taper(x)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveParams {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
    #[serde(skip)]
    pub taper: Taper,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            frequency: 4.0,
            phase: 0.0,
            taper: Taper::default(),
        }
    }
}

impl WaveParams {
    pub fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
            ..Default::default()
        }
    }

    pub fn with_taper(mut self, taper: Taper) -> Self {
        self.taper = taper;
        self
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.amplitude * (self.frequency * x - self.phase).sin() * self.taper.at(x)
    }

    pub fn validate(&self) -> CurveResult<()> {
        for (name, value) in self.named() {
            if !value.is_finite() {
                return Err(CurveError::InvalidParameter(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Names of parameters outside their control range.
    pub fn out_of_range(&self) -> Vec<&'static str> {
        self.named()
            .into_iter()
            .zip([ParamRange::AMPLITUDE, ParamRange::FREQUENCY, ParamRange::PHASE])
            .filter(|((_, value), range)| !range.contains(*value))
            .map(|((name, _), _)| name)
            .collect()
    }

    pub fn clamped(&self) -> Self {
        Self {
            amplitude: ParamRange::AMPLITUDE.clamp(self.amplitude),
            frequency: ParamRange::FREQUENCY.clamp(self.frequency),
            phase: ParamRange::PHASE.clamp(self.phase),
            taper: self.taper,
        }
    }

    fn named(&self) -> [(&'static str, f64); 3] {
        [
            ("amplitude", self.amplitude),
            ("frequency", self.frequency),
            ("phase", self.phase),
        ]
    }
}

impl Curve for WaveParams {
    fn value(&self, x: f64) -> f64 {
        self.evaluate(x)
    }
}
