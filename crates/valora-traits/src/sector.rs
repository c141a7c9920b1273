//! Sector classification.
//!
//! Quality and leverage are scored with different formula sets for banks,
//! insurers and everything else. The variant is derived once from the
//! free-text segment label and passed explicitly to the calculators.

use serde::{Deserialize, Serialize};

/// Label fragments that route a company through the banking models.
const BANK_MARKERS: &[&str] = &["banco", "bank"];

/// Label fragments that route a company through the insurance models.
const INSURANCE_MARKERS: &[&str] = &["seguradoras", "insurance"];

/// Sector variant selecting the quality and leverage model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    /// Non-financial companies.
    #[default]
    Universal,
    /// Banks, scored on capital adequacy.
    Bank,
    /// Insurers, scored with a cash buffer and no leverage model.
    Insurance,
}

impl Sector {
    /// Classify a segment label.
    ///
    /// Matching is a case-insensitive substring search. Banking markers are
    /// checked before insurance markers; anything else, including a missing
    /// label, is [`Sector::Universal`].
    ///
    /// # Example
    ///
    /// ```
    /// use valora_traits::Sector;
    ///
    /// assert_eq!(Sector::classify(Some("Regional Banks")), Sector::Bank);
    /// assert_eq!(Sector::classify(Some("Seguradoras")), Sector::Insurance);
    /// assert_eq!(Sector::classify(None), Sector::Universal);
    /// ```
    #[must_use]
    pub fn classify(segment: Option<&str>) -> Self {
        let Some(segment) = segment else {
            return Self::Universal;
        };
        let segment = segment.to_lowercase();

        if BANK_MARKERS.iter().any(|m| segment.contains(m)) {
            Self::Bank
        } else if INSURANCE_MARKERS.iter().any(|m| segment.contains(m)) {
            Self::Insurance
        } else {
            Self::Universal
        }
    }

    /// All variants in declaration order.
    pub const ALL: [Self; 3] = [Self::Universal, Self::Bank, Self::Insurance];

    /// Short lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Universal => "universal",
            Self::Bank => "bank",
            Self::Insurance => "insurance",
        }
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
