use crate::prelude::{Curve, CurveError, CurveResult};

/// Envelope `(k / (k + x⁴))^k` that fades a signal away from the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Taper {
    k: f64,
}

impl Taper {
    pub fn new(k: f64) -> CurveResult<Self> {
        if !(k > 0.0 && k.is_finite()) {
            return Err(CurveError::InvalidParameter(format!(
                "taper constant must be positive, got {k}"
            )));
        }
        Ok(Self { k })
    }

    pub fn at(&self, x: f64) -> f64 {
        (self.k / (self.k + x.powi(4))).powf(self.k)
    }
}

impl Default for Taper {
    /// `k = 1`, which reduces to `1 / (1 + x⁴)`.
    fn default() -> Self {
        Self { k: 1.0 }
    }
}

impl Curve for Taper {
    fn value(&self, x: f64) -> f64 {
        self.at(x)
    }
}
