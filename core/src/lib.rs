//! Sampling and normalization core for the tapered waveform tools.
//!
//! The crate turns a real-valued curve into an ordered point sequence and
//! rescales that sequence into a drawing area, ready for a polyline stroke.
//! Everything here is pure and synchronous; redraw scheduling belongs to the
//! host UI.

pub mod math;
pub mod prelude;
pub mod sampling;
pub mod telemetry;
pub mod waveform;

pub use prelude::{Curve, CurveError, CurveResult, DomainRange, DrawingArea, Point};
pub use sampling::{normalize, sample, trace, CurveSampler, SampleSpec};
pub use math::Taper;
pub use waveform::{ParamRange, WaveParams};
