//! Leverage penalty with sector-specific models.
//!
//! Each sector model produces a raw penalty on its own scale:
//! - Universal: `[-10, 40]`, from debt ratios above fixed thresholds with a
//!   bonus for a net cash position
//! - Bank: `[-10, 25]`, from an equity-to-assets proxy of the Tier 1 ratio
//! - Insurance: always `0`; no leverage model exists for insurers yet
//!
//! The raw penalty is then remapped linearly with `(raw + 10) * 2`, which
//! puts the universal range on `[0, 100]`.

use serde::{Deserialize, Serialize};
use valora_traits::{CompanyMetrics, Factor, FactorCategory, Metric, Sector};

use crate::normalize::{at_least, at_most, clamp, nan_to_zero, round};

/// Configuration for the universal leverage model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UniversalLeverageConfig {
    /// Net debt / equity tolerated before penalizing (default: 0.5)
    pub equity_threshold: f64,
    /// Net debt / EBITDA tolerated before penalizing (default: 1.5)
    pub ebitda_threshold: f64,
    /// Net debt / EBIT tolerated before penalizing (default: 2.0)
    pub ebit_threshold: f64,

    /// Exponent on the excess debt / equity (default: 1.5)
    pub equity_exponent: f64,
    /// Exponent on the excess debt / EBITDA (default: 1.3)
    pub ebitda_exponent: f64,
    /// Exponent on the excess debt / EBIT (default: 1.2)
    pub ebit_exponent: f64,

    /// Scale applied to the curved debt score (default: 10.0)
    pub scale: f64,
    /// Exponent applied to the debt score (default: 1.4)
    pub curve_exponent: f64,
    /// Maximum raw penalty (default: 40.0)
    pub cap: f64,
    /// Minimum raw penalty (default: -10.0)
    pub floor: f64,

    /// Bonus points per unit of net cash / equity (default: 20.0)
    pub cash_bonus_rate: f64,
    /// Largest malus the net cash term may add when equity is negative
    /// (default: 10.0). A positive bonus is not capped; `floor` bounds it.
    pub cash_bonus_cap: f64,
}

impl Default for UniversalLeverageConfig {
    fn default() -> Self {
        Self {
            equity_threshold: 0.5,
            ebitda_threshold: 1.5,
            ebit_threshold: 2.0,
            equity_exponent: 1.5,
            ebitda_exponent: 1.3,
            ebit_exponent: 1.2,
            scale: 10.0,
            curve_exponent: 1.4,
            cap: 40.0,
            floor: -10.0,
            cash_bonus_rate: 20.0,
            cash_bonus_cap: 10.0,
        }
    }
}

/// Configuration for the banking leverage model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BankLeverageConfig {
    /// Minimum equity-to-assets ratio, Basel III Tier 1 reference (default: 0.08)
    pub min_tier1: f64,
    /// Penalty points per unit of shortfall (default: 1000.0)
    pub sensitivity: f64,
    /// Maximum raw penalty (default: 25.0)
    pub cap: f64,
    /// Minimum raw penalty (default: -10.0)
    pub floor: f64,
}

impl Default for BankLeverageConfig {
    fn default() -> Self {
        Self {
            min_tier1: 0.08,
            sensitivity: 1000.0,
            cap: 25.0,
            floor: -10.0,
        }
    }
}

/// Configuration for the leverage penalty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeverageConfig {
    /// Non-financial companies.
    pub universal: UniversalLeverageConfig,
    /// Banks.
    pub bank: BankLeverageConfig,
    /// Offset added to the raw penalty before scaling (default: 10.0)
    pub offset: f64,
    /// Multiplier applied after the offset (default: 2.0)
    pub multiplier: f64,
}

impl Default for LeverageConfig {
    fn default() -> Self {
        Self {
            universal: UniversalLeverageConfig::default(),
            bank: BankLeverageConfig::default(),
            offset: 10.0,
            multiplier: 2.0,
        }
    }
}

/// Raw leverage penalty of a non-financial company, on `[-10, 40]`.
#[must_use]
pub fn universal_leverage_penalty(
    metrics: &CompanyMetrics,
    config: &UniversalLeverageConfig,
) -> f64 {
    let excess_equity =
        (metrics.value(Metric::NetDebtToEquity) - config.equity_threshold).max(0.0);
    let excess_ebitda =
        (metrics.value(Metric::NetDebtToEbitda) - config.ebitda_threshold).max(0.0);
    let excess_ebit = (metrics.value(Metric::NetDebtToEbit) - config.ebit_threshold).max(0.0);

    let debt_score = (excess_equity.powf(config.equity_exponent)
        + excess_ebitda.powf(config.ebitda_exponent)
        + excess_ebit.powf(config.ebit_exponent))
    .sqrt();

    let net_debt = metrics.value(Metric::NetDebt);
    let cash_bonus = if net_debt < 0.0 {
        at_least(
            net_debt / metrics.value(Metric::Equity) * -config.cash_bonus_rate,
            -config.cash_bonus_cap,
        )
    } else {
        0.0
    };

    let penalty = at_most(config.scale * debt_score.powf(config.curve_exponent), config.cap);
    round(at_least(penalty - cash_bonus, config.floor))
}

/// Raw leverage penalty of a bank, on `[-10, 25]`.
///
/// Equity over total assets stands in for the Tier 1 capital ratio. Each
/// point of shortfall against the minimum adds ten penalty points; surplus
/// capital lowers the penalty down to the floor.
#[must_use]
pub fn bank_leverage_penalty(metrics: &CompanyMetrics, config: &BankLeverageConfig) -> f64 {
    let tier1_proxy = metrics.value(Metric::Equity) / metrics.value(Metric::TotalAssets);
    let penalty = at_most((config.min_tier1 - tier1_proxy) * config.sensitivity, config.cap);
    round(at_least(penalty, config.floor))
}

/// Raw leverage penalty of a company under its sector model.
#[must_use]
pub fn raw_leverage_penalty(metrics: &CompanyMetrics, sector: Sector, config: &LeverageConfig) -> f64 {
    match sector {
        Sector::Universal => universal_leverage_penalty(metrics, &config.universal),
        Sector::Bank => bank_leverage_penalty(metrics, &config.bank),
        // TODO: model insurer leverage on solvency margin instead of a flat zero
        Sector::Insurance => 0.0,
    }
}

/// Compute the leverage penalty of a company on `[0, 100]`.
///
/// Higher is worse.
#[must_use]
pub fn leverage_penalty(metrics: &CompanyMetrics, sector: Sector, config: &LeverageConfig) -> f64 {
    let raw = raw_leverage_penalty(metrics, sector, config);
    nan_to_zero(clamp(
        round((raw + config.offset) * config.multiplier),
        0.0,
        100.0,
    ))
}

/// Leverage penalty factor.
#[derive(Debug, Clone, Default)]
pub struct LeverageFactor {
    config: LeverageConfig,
}

impl LeverageFactor {
    /// Metrics read by this factor.
    pub const REQUIRED_METRICS: &[Metric] = &[
        Metric::NetDebtToEquity,
        Metric::NetDebtToEbitda,
        Metric::NetDebtToEbit,
        Metric::NetDebt,
        Metric::Equity,
        Metric::TotalAssets,
    ];

    /// Create a new leverage factor with the given configuration.
    #[must_use]
    pub const fn new(config: LeverageConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &LeverageConfig {
        &self.config
    }
}

impl Factor for LeverageFactor {
    fn name(&self) -> &str {
        "leverage"
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Leverage
    }

    fn required_metrics(&self) -> &[Metric] {
        Self::REQUIRED_METRICS
    }

    fn is_penalty(&self) -> bool {
        true
    }

    fn is_sector_aware(&self) -> bool {
        true
    }

    fn score(&self, metrics: &CompanyMetrics, sector: Sector) -> f64 {
        leverage_penalty(metrics, sector, &self.config)
    }
}
