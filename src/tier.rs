//! Material tiers, tiered stock, and promotion costs.
//!
//! Every material exists at three ascending tiers: raro, épico, lendário.
//! Lower tiers are promoted upward at a fixed 10:1 ratio, consuming the
//! three craft currencies (pó, DS, cobre) along the way. The promotion
//! table is global configuration, not per-account state.

use serde::{Deserialize, Serialize};

/// Number of lower-tier units consumed per promoted unit, at every step.
pub const PROMOTION_RATIO: u64 = 10;

/// A material tier, in ascending rarity order.
///
/// # Examples
///
/// ```rust
/// use mircraft::Tier;
///
/// assert!(Tier::Raro < Tier::Lendario);
/// assert_eq!(Tier::Epico.as_str(), "epico");
/// assert_eq!(Tier::Raro.promoted(), Some(Tier::Epico));
/// assert_eq!(Tier::Lendario.promoted(), None);
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Raro,
    Epico,
    Lendario,
}

impl Tier {
    /// Every tier, ascending.
    pub const ALL: [Tier; 3] = [Tier::Raro, Tier::Epico, Tier::Lendario];

    /// The snake_case wire key used by the account store.
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Raro => "raro",
            Tier::Epico => "epico",
            Tier::Lendario => "lendario",
        }
    }

    /// The next tier up, or `None` for lendário.
    pub fn promoted(self) -> Option<Tier> {
        match self {
            Tier::Raro => Some(Tier::Epico),
            Tier::Epico => Some(Tier::Lendario),
            Tier::Lendario => None,
        }
    }

    /// The cost of promoting one unit *into* this tier.
    ///
    /// Raro is the base tier and cannot be promoted into.
    pub fn promotion_cost(self) -> Option<&'static PromotionCost> {
        match self {
            Tier::Raro => None,
            Tier::Epico => Some(&PromotionCost::EPICO),
            Tier::Lendario => Some(&PromotionCost::LENDARIO),
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// On-hand counts of one material, one count per tier.
///
/// This is a total value type: every tier is always present, and absent
/// tiers on the wire default to zero, so downstream code never branches
/// on a missing field.
///
/// # Examples
///
/// ```rust
/// use mircraft::{Tier, TierStock};
///
/// let stock: TierStock = serde_json::from_str(r#"{"lendario": 42}"#).unwrap();
/// assert_eq!(stock.raro, 0);
/// assert_eq!(stock.get(Tier::Lendario), 42);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierStock {
    pub raro: u64,
    pub epico: u64,
    pub lendario: u64,
}

impl TierStock {
    /// A stock with all three tiers at zero.
    pub const ZERO: TierStock = TierStock {
        raro: 0,
        epico: 0,
        lendario: 0,
    };

    /// Create a stock from explicit per-tier counts.
    pub fn new(raro: u64, epico: u64, lendario: u64) -> Self {
        Self {
            raro,
            epico,
            lendario,
        }
    }

    /// The count at one tier.
    pub fn get(self, tier: Tier) -> u64 {
        match tier {
            Tier::Raro => self.raro,
            Tier::Epico => self.epico,
            Tier::Lendario => self.lendario,
        }
    }

    /// True when all three tiers are zero.
    pub fn is_empty(self) -> bool {
        self == Self::ZERO
    }
}

/// The cost of promoting one unit into a tier.
///
/// `materials` is the count of next-lower-tier units of the *same*
/// material consumed; `po`, `ds`, and `cobre` are the craft-currency
/// costs. Materials are never fungible across identities: promotion
/// only ever consumes the material being promoted.
///
/// # Examples
///
/// ```rust
/// use mircraft::PromotionCost;
///
/// // One lendário unit consumes ten épico units plus currencies.
/// assert_eq!(PromotionCost::LENDARIO.materials, 10);
/// assert_eq!(PromotionCost::LENDARIO.po, 125);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionCost {
    /// Next-lower-tier units of the same material per promoted unit.
    pub materials: u64,
    /// Pó cost per promoted unit.
    pub po: u64,
    /// DS cost per promoted unit.
    pub ds: u64,
    /// Cobre cost per promoted unit.
    pub cobre: u64,
}

impl PromotionCost {
    /// Promoting 1 unit to épico: 10 raro + 25 pó + 5.000 DS + 20.000 cobre.
    pub const EPICO: PromotionCost = PromotionCost {
        materials: PROMOTION_RATIO,
        po: 25,
        ds: 5_000,
        cobre: 20_000,
    };

    /// Promoting 1 unit to lendário: 10 épico + 125 pó + 25.000 DS + 100.000 cobre.
    pub const LENDARIO: PromotionCost = PromotionCost {
        materials: PROMOTION_RATIO,
        po: 125,
        ds: 25_000,
        cobre: 100_000,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(Tier::Raro < Tier::Epico);
        assert!(Tier::Epico < Tier::Lendario);
    }

    #[test]
    fn test_tier_promotion_chain() {
        assert_eq!(Tier::Raro.promoted(), Some(Tier::Epico));
        assert_eq!(Tier::Epico.promoted(), Some(Tier::Lendario));
        assert_eq!(Tier::Lendario.promoted(), None);
        assert!(Tier::Raro.promotion_cost().is_none());
    }

    #[test]
    fn test_stock_defaults_missing_tiers_to_zero() {
        let stock: TierStock = serde_json::from_str(r#"{"epico": 7}"#).unwrap();
        assert_eq!(stock, TierStock::new(0, 7, 0));

        let empty: TierStock = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_stock_get_per_tier() {
        let stock = TierStock::new(1, 2, 3);
        assert_eq!(stock.get(Tier::Raro), 1);
        assert_eq!(stock.get(Tier::Epico), 2);
        assert_eq!(stock.get(Tier::Lendario), 3);
    }

    #[test]
    fn test_promotion_cost_constants() {
        assert_eq!(Tier::Epico.promotion_cost(), Some(&PromotionCost::EPICO));
        assert_eq!(
            Tier::Lendario.promotion_cost(),
            Some(&PromotionCost::LENDARIO)
        );
        assert_eq!(PromotionCost::EPICO.ds, 5_000);
        assert_eq!(PromotionCost::LENDARIO.cobre, 100_000);
    }

    #[test]
    fn test_tier_serde_wire_keys() {
        assert_eq!(serde_json::to_string(&Tier::Lendario).unwrap(), "\"lendario\"");
        let tier: Tier = serde_json::from_str("\"raro\"").unwrap();
        assert_eq!(tier, Tier::Raro);
    }
}
