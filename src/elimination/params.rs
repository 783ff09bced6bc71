use crate::Result;
use crate::errors::EliminationError;
use serde::{Deserialize, Serialize};

/// Tuning parameters for weighted sample elimination. The defaults are the values recommended
/// for the method and rarely need to be changed, but they can be loaded from JSON so that a
/// calling application can expose them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EliminationParams {
    /// Exponent of the influence falloff `(1 - d / d_max)^alpha`
    pub alpha: f64,

    /// Scale of the minimum distance limit, as a fraction of the maximum distance
    pub beta: f64,

    /// Exponent applied to the output/input ratio when computing the minimum distance limit
    pub gamma: f64,

    /// Clamp distances below the minimum distance so that very close pairs all receive the same
    /// influence. When disabled the minimum distance is zero.
    pub weight_limiting: bool,

    /// Mirror points near the faces of the bounding box so that points at the boundary see a
    /// full neighborhood.
    pub tiling: bool,

    /// Reorder the output so that every halving prefix is itself well distributed.
    pub progressive: bool,

    /// Factor the maximum distance grows by at each progressive level
    pub progressive_scale: f64,

    /// Compute the initial weights on the rayon thread pool
    pub parallel: bool,
}

impl Default for EliminationParams {
    fn default() -> Self {
        Self {
            alpha: 8.0,
            beta: 0.65,
            gamma: 1.5,
            weight_limiting: true,
            tiling: true,
            progressive: true,
            progressive_scale: std::f64::consts::SQRT_2,
            parallel: true,
        }
    }
}

impl EliminationParams {
    /// Parse parameters from a JSON object. Fields which are not present take their default
    /// values, and the result is validated before it is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use sample_elim::EliminationParams;
    /// let params = EliminationParams::from_json(r#"{ "alpha": 6.0, "tiling": false }"#).unwrap();
    /// assert_eq!(params.alpha, 6.0);
    /// assert!(!params.tiling);
    /// assert_eq!(params.beta, 0.65);
    /// ```
    pub fn from_json(text: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(text)?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check that the parameters describe a usable weight function.
    pub fn validate(&self) -> std::result::Result<(), EliminationError> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(EliminationError::InvalidParameter("alpha"));
        }
        if !(0.0..1.0).contains(&self.beta) {
            return Err(EliminationError::InvalidParameter("beta"));
        }
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(EliminationError::InvalidParameter("gamma"));
        }
        if !self.progressive_scale.is_finite() || self.progressive_scale <= 0.0 {
            return Err(EliminationError::InvalidParameter("progressive_scale"));
        }
        Ok(())
    }
}
