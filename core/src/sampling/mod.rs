pub mod normalize;
pub mod sampler;

pub use normalize::normalize;
pub use sampler::{sample, trace, CurveSampler, SampleSpec};
