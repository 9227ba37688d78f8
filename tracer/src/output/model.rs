use serde::{Deserialize, Serialize};
use wavecore::{DrawingArea, Point, WaveParams};

/// Serializable snapshot of one trace, shared by every export format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceModel {
    pub params: WaveParams,
    /// Area the points were normalized into; absent for raw samples.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<DrawingArea>,
    pub points: Vec<Point>,
}

impl TraceModel {
    pub fn normalized(params: WaveParams, area: DrawingArea, points: Vec<Point>) -> Self {
        Self {
            params,
            area: Some(area),
            points,
        }
    }

    pub fn raw(params: WaveParams, samples: Vec<Point>) -> Self {
        Self {
            params,
            area: None,
            points: samples,
        }
    }
}
