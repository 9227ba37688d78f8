use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use wavecore::{DomainRange, DrawingArea, SampleSpec, WaveParams};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
    /// Envelope constant K of `(K / (K + x⁴))^K`
    pub taper: f64,
    pub steps: usize,
    pub range_lo: f64,
    pub range_hi: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for TraceConfig {
    fn default() -> Self {
        let params = WaveParams::default();
        let spec = SampleSpec::default();
        Self {
            amplitude: params.amplitude,
            frequency: params.frequency,
            phase: params.phase,
            taper: 1.0,
            steps: spec.steps,
            range_lo: spec.range.lo,
            range_hi: spec.range.hi,
            width: 400.0,
            height: 200.0,
        }
    }
}

/// Values given explicitly on the command line; each one wins over the profile.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub amplitude: Option<f64>,
    pub frequency: Option<f64>,
    pub phase: Option<f64>,
    pub steps: Option<usize>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl TraceConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading trace profile {}", path_ref.display()))?;
        let config: TraceConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing trace profile {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn apply(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(amplitude) = overrides.amplitude {
            self.amplitude = amplitude;
        }
        if let Some(frequency) = overrides.frequency {
            self.frequency = frequency;
        }
        if let Some(phase) = overrides.phase {
            self.phase = phase;
        }
        if let Some(steps) = overrides.steps {
            self.steps = steps;
        }
        if let Some(width) = overrides.width {
            self.width = width;
        }
        if let Some(height) = overrides.height {
            self.height = height;
        }
        self
    }

    pub fn to_params(&self) -> WaveParams {
        WaveParams::new(self.amplitude, self.frequency, self.phase)
    }

    pub fn to_sample_spec(&self) -> SampleSpec {
        SampleSpec::new(self.steps, DomainRange::new(self.range_lo, self.range_hi))
    }

    pub fn to_area(&self) -> DrawingArea {
        DrawingArea::new(self.width, self.height)
    }
}
