//! Aggregation weights.

use serde::{Deserialize, Serialize};
use valora_traits::{Result, ValoraError};

/// Weights applied to the six factor scores.
///
/// The four positive factors conceptually sum to one; the two penalty
/// weights are negative so a higher penalty lowers the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorWeights {
    /// Value weight (default: 0.5)
    pub value: f64,
    /// Quality weight (default: 0.3)
    pub quality: f64,
    /// Growth weight (default: 0.15)
    pub growth: f64,
    /// Dividend weight (default: 0.05)
    pub dividend: f64,
    /// Leverage penalty weight (default: -0.2)
    pub leverage_penalty: f64,
    /// Volatility penalty weight (default: -0.3)
    pub volatility_penalty: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            value: 0.5,
            quality: 0.3,
            growth: 0.15,
            dividend: 0.05,
            leverage_penalty: -0.2,
            volatility_penalty: -0.3,
        }
    }
}

impl FactorWeights {
    /// Weights for the current market regime.
    ///
    /// No regime model exists yet, so this is the default table. Callers that
    /// go through this constructor pick up regime-dependent weights without
    /// changes once one does.
    #[must_use]
    pub fn dynamic() -> Self {
        Self::default()
    }

    /// Sum of the four positive-factor weights.
    #[must_use]
    pub fn positive_sum(&self) -> f64 {
        self.value + self.quality + self.growth + self.dividend
    }

    /// Check that every weight is finite and has the expected sign.
    ///
    /// # Errors
    ///
    /// Returns [`ValoraError::InvalidConfig`] when a weight is NaN or
    /// infinite, a positive-factor weight is negative, or a penalty weight is
    /// positive.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("value", self.value),
            ("quality", self.quality),
            ("growth", self.growth),
            ("dividend", self.dividend),
            ("leverage_penalty", self.leverage_penalty),
            ("volatility_penalty", self.volatility_penalty),
        ];
        if let Some((name, weight)) = named.iter().find(|(_, w)| !w.is_finite()) {
            return Err(ValoraError::InvalidConfig(format!(
                "Weight '{name}' must be finite, got {weight}"
            )));
        }
        if let Some((name, weight)) = named[..4].iter().find(|(_, w)| *w < 0.0) {
            return Err(ValoraError::InvalidConfig(format!(
                "Weight '{name}' must not be negative, got {weight}"
            )));
        }
        if let Some((name, weight)) = named[4..].iter().find(|(_, w)| *w > 0.0) {
            return Err(ValoraError::InvalidConfig(format!(
                "Penalty weight '{name}' must not be positive, got {weight}"
            )));
        }
        Ok(())
    }
}
