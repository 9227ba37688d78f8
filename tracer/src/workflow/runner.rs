use crate::workflow::config::TraceConfig;
use anyhow::Context;
use log::warn;
use wavecore::math::StatsHelper;
use wavecore::{normalize, CurveSampler, DrawingArea, Point, Taper, WaveParams};

pub struct TraceResult {
    pub params: WaveParams,
    pub area: DrawingArea,
    pub samples: Vec<Point>,
    pub points: Vec<Point>,
    pub rms: f64,
    pub peak: f64,
    pub extent: Option<(f64, f64)>,
}

#[derive(Clone)]
pub struct Runner {
    config: TraceConfig,
}

impl Runner {
    pub fn new(config: TraceConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> anyhow::Result<TraceResult> {
        let taper = Taper::new(self.config.taper).context("building taper envelope")?;
        let params = self.config.to_params().with_taper(taper);
        params.validate().context("validating waveform parameters")?;
        for name in params.out_of_range() {
            warn!("{} is outside its control range, tracing anyway", name);
        }

        let area = self.config.to_area();
        let sampler =
            CurveSampler::new(self.config.to_sample_spec()).context("building sampler")?;
        let samples = sampler.sample(&params).context("sampling waveform")?;
        let points = normalize(&samples, &area).context("normalizing into drawing area")?;

        let rms = StatsHelper::rms(&samples);
        let peak = StatsHelper::peak(&samples);
        let extent = StatsHelper::extent(&samples);

        Ok(TraceResult {
            params,
            area,
            samples,
            points,
            rms,
            peak,
            extent,
        })
    }
}
