pub mod stats;
pub mod taper;

pub use stats::StatsHelper;
pub use taper::Taper;
