//! Fixed rate tables.
//!
//! The two tier enums are closed: each variant maps to exactly one constant.
//! Nothing here is configurable at runtime.

use serde::Deserialize;

/// Contingency buffer applied to the adjusted subtotal.
pub const CONTINGENCY_RATE: f64 = 0.05;

// ============================================================================
// Construction quality tier
// ============================================================================

/// Construction quality tier. Ordered by cost: `Basic < Standard < Premium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstructionType {
    Basic,
    #[default]
    Standard,
    Premium,
}

impl ConstructionType {
    pub const ALL: [Self; 3] = [Self::Basic, Self::Standard, Self::Premium];

    /// Base rate in rupees per square foot.
    #[must_use]
    pub const fn base_rate(self) -> f64 {
        match self {
            Self::Basic => 1500.0,
            Self::Standard => 2000.0,
            Self::Premium => 2800.0,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Standard => "Standard",
            Self::Premium => "Premium",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::Premium => "premium",
        }
    }

    /// Next tier in selector order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Basic => Self::Standard,
            Self::Standard => Self::Premium,
            Self::Premium => Self::Basic,
        }
    }

    /// Previous tier in selector order, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Basic => Self::Premium,
            Self::Standard => Self::Basic,
            Self::Premium => Self::Standard,
        }
    }
}

// ============================================================================
// City tier
// ============================================================================

/// City tier location.
///
/// Variant order follows the selector (Tier 1 first); cost order is the
/// reverse, so do not derive `Ord` here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CityType {
    #[serde(alias = "tier_1")]
    Tier1,
    #[default]
    #[serde(alias = "tier_2")]
    Tier2,
    #[serde(alias = "tier_3")]
    Tier3,
}

impl CityType {
    pub const ALL: [Self; 3] = [Self::Tier1, Self::Tier2, Self::Tier3];

    /// Scalar applied to the base construction cost.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Tier1 => 1.2,
            Self::Tier2 => 1.0,
            Self::Tier3 => 0.85,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Tier1 => "Tier 1",
            Self::Tier2 => "Tier 2",
            Self::Tier3 => "Tier 3",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Tier1 => "Metro/Premium",
            Self::Tier2 => "Developing City",
            Self::Tier3 => "Town/Rural",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tier1 => "tier1",
            Self::Tier2 => "tier2",
            Self::Tier3 => "tier3",
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Tier1 => Self::Tier2,
            Self::Tier2 => Self::Tier3,
            Self::Tier3 => Self::Tier1,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Tier1 => Self::Tier3,
            Self::Tier2 => Self::Tier1,
            Self::Tier3 => Self::Tier2,
        }
    }
}
