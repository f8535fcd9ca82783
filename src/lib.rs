//! # mircraft - Deterministic Crafting-Shortfall Engine for MIR4 Accounts
//!
//! The domain core of a MIR4 account-management dashboard:
//! - **Deterministic** shortfall computation (same input → same output)
//! - **Closed catalogs** (materials, final items, recipes, promotion costs
//!   are fixed configuration, not per-account state)
//! - **Total lookups** (missing materials, tiers, and currency fields read
//!   as zero; no branching on absence downstream)
//! - **Pure values** (reports hold no reference to their inputs and are
//!   recomputed on every input change, never persisted)
//!
//! ## Core Concepts
//!
//! ### Shortfall Pipeline
//!
//! Account snapshots flow through a simple pipeline:
//!
//! ```text
//! [MaterialsSnapshot + ResourcePool] → [compute_shortfall] → [ShortfallReport]
//! ```
//!
//! 1. The account store supplies **snapshots** (tiered material stocks and
//!    the pó/DS/cobre currency reserves)
//! 2. The **calculator** cascades each recipe requirement down the tier
//!    ladder (lendário ← épico ← raro at 10:1) and prices the outstanding
//!    promotions
//! 3. The **report** carries per-ingredient deltas, per-currency totals,
//!    and a single completeness flag for the UI
//!
//! ### Key Rules
//!
//! - **Tier surplus wins**: legendary stock covering a requirement fully
//!   satisfies it; lower tiers are then irrelevant
//! - **Promotion costs are additive**: a legendary unit charges its épico
//!   inputs' synthesis in addition to its own promotion
//! - **Raro is free**: raro deficits are informational and never charge
//!   currency
//! - **Materials are not fungible**: tiers promote within one material
//!   identity, never across
//!
//! ## Example
//!
//! ```rust
//! use mircraft::*;
//!
//! let mut materials = MaterialsSnapshot::empty();
//! materials.set(MaterialId::Aco, TierStock::new(0, 0, 120));
//!
//! let resources = ResourcePool::new(200_000, 40_000_000, 160_000_000);
//!
//! let report = compute_shortfall(ItemId::Garra, &materials, &resources).unwrap();
//! assert_eq!(report.ingredients[0].missing, 180); // 300 required - 120 on hand
//! assert_eq!(report.ingredients[0].epico_needed, 1_800);
//! assert!(!report.is_complete);
//! ```
//!
//! ## Modules
//!
//! - [`ids`] - Closed material and final-item identifier catalogs
//! - [`tier`] - Tiers, tiered stock, promotion costs
//! - [`recipe`] - The static recipe catalog
//! - [`snapshot`] - Account-owned input snapshots
//! - [`shortfall`] - The shortfall calculator and its report types
//! - [`account`] - The account record wire format
//! - [`valuation`] - Boss-counter and gold valuation
//! - [`error`] - Catalog-boundary error types

pub mod account;
pub mod error;
pub mod ids;
pub mod recipe;
pub mod shortfall;
pub mod snapshot;
pub mod tier;
pub mod valuation;

// Re-export main types for convenience
pub use account::{
    format_power, Account, AccountInfo, BossKills, SpecialBossKills, FLOOR_OPTIONS, RAID_BOSS_OPTIONS,
    RAID_OPTIONS,
};
pub use error::CraftError;
pub use ids::{ItemId, MaterialId};
pub use recipe::{materials_for_selection, recipe_of, Ingredient, Recipe};
pub use shortfall::{
    compute_selection, compute_shortfall, IngredientShortfall, PoolShortfall, ShortfallReport,
};
pub use snapshot::{MaterialsSnapshot, ResourcePool};
pub use tier::{PromotionCost, Tier, TierStock, PROMOTION_RATIO};
pub use valuation::{boss_value, compute_totals, PriceTable, Totals};
