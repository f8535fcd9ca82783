//! The crafting-shortfall calculator.
//!
//! A pure function of three inputs: a final item, a materials snapshot,
//! and a craft-currency snapshot. It produces the exact additional
//! tiered materials and currency the account needs to reach the item's
//! legendary-tier recipe requirements, or confirms the item is already
//! craftable. Stateless and idempotent: identical inputs always yield an
//! identical report, inputs are never mutated, and the report holds no
//! reference back to them. The dashboard recomputes it on every
//! keystroke-driven input change.
//!
//! Per ingredient, the deficit cascades down the tier ladder:
//!
//! ```text
//! missing lendário = required − on hand (floored at 0)
//! épico needed     = missing lendário × 10, less épico on hand
//! raro needed      = épico shortfall × 10, less raro on hand
//! ```
//!
//! A legendary stock that already covers the requirement fully satisfies
//! the ingredient: lower tiers are irrelevant once the legendary tier
//! covers the need, and the ingredient contributes nothing to the
//! currency totals. Both promotion steps charge currency (synthesizing a
//! legendary unit first synthesizes its épico inputs), while a raro
//! deficit is purely informational: raro drops are assumed obtainable
//! without pó/DS/cobre.

use crate::ids::{ItemId, MaterialId};
use crate::recipe::{recipe_of, Ingredient};
use crate::snapshot::{MaterialsSnapshot, ResourcePool};
use crate::tier::PromotionCost;
use serde::{Deserialize, Serialize};

/// Shortfall of one recipe ingredient.
///
/// `have` and `missing` are legendary-tier counts; the three `*_needed`
/// fields are the per-tier deltas required to synthesize the missing
/// legendary amount from current stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientShortfall {
    /// The material this row describes.
    pub material: MaterialId,
    /// Legendary-tier units the recipe requires.
    pub required: u64,
    /// Legendary-tier units on hand.
    pub have: u64,
    /// Legendary-tier units still missing.
    pub missing: u64,
    /// Raro units to acquire (informational; costs no currency).
    pub raro_needed: u64,
    /// Épico units to synthesize from raro.
    pub epico_needed: u64,
    /// Lendário units to synthesize from épico.
    pub lend_needed: u64,
}

impl IngredientShortfall {
    /// True when the legendary stock covers the requirement.
    pub fn is_satisfied(&self) -> bool {
        self.missing == 0
    }
}

/// Shortfall of one craft currency, aggregated over all ingredients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolShortfall {
    /// Currency the outstanding promotions will consume.
    pub needed: u64,
    /// Currency on hand.
    pub have: u64,
    /// Currency still missing.
    pub missing: u64,
}

impl PoolShortfall {
    fn new(needed: u64, have: u64) -> Self {
        Self {
            needed,
            have,
            missing: needed.saturating_sub(have),
        }
    }
}

/// The derived shortfall report for one final item.
///
/// Ephemeral and fully derived: recomputed on every input change, never
/// persisted, and structurally independent of the snapshots it was
/// computed from.
///
/// # Examples
///
/// ```rust
/// use mircraft::{compute_shortfall, ItemId, MaterialsSnapshot, ResourcePool};
///
/// let report = compute_shortfall(
///     ItemId::Garra,
///     &MaterialsSnapshot::empty(),
///     &ResourcePool::ZERO,
/// )
/// .unwrap();
///
/// assert!(!report.is_complete);
/// assert_eq!(report.ingredients.len(), 3);
/// assert_eq!(report.ingredients[0].missing, 300);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortfallReport {
    /// The final item the report is for.
    pub item: ItemId,
    /// One row per recipe ingredient, in recipe order.
    pub ingredients: Vec<IngredientShortfall>,
    /// Pó demand vs. reserve.
    pub po: PoolShortfall,
    /// DS demand vs. reserve.
    pub ds: PoolShortfall,
    /// Cobre demand vs. reserve.
    pub cobre: PoolShortfall,
    /// True when every ingredient is satisfied and every currency
    /// reserve covers its accumulated demand.
    pub is_complete: bool,
}

/// Currency demand accumulated across ingredients.
///
/// Internal fold aggregate; it never escapes [`compute_shortfall`].
#[derive(Debug, Clone, Copy, Default)]
struct PoolDemand {
    po: u64,
    ds: u64,
    cobre: u64,
}

impl PoolDemand {
    /// Demand contributed by one ingredient row.
    ///
    /// Each épico unit to synthesize charges the épico promotion, each
    /// lendário unit the lendário promotion; the two are additive. A
    /// satisfied row has zero deltas and contributes nothing. Raro
    /// deficits charge nothing.
    fn add(self, row: &IngredientShortfall) -> Self {
        let epico = &PromotionCost::EPICO;
        let lend = &PromotionCost::LENDARIO;
        Self {
            po: self.po + row.epico_needed * epico.po + row.lend_needed * lend.po,
            ds: self.ds + row.epico_needed * epico.ds + row.lend_needed * lend.ds,
            cobre: self.cobre + row.epico_needed * epico.cobre + row.lend_needed * lend.cobre,
        }
    }
}

/// Shortfall of one ingredient against the materials snapshot.
fn ingredient_shortfall(ing: &Ingredient, materials: &MaterialsSnapshot) -> IngredientShortfall {
    let stock = materials.stock_of(ing.material);
    let missing = ing.legendary_qty.saturating_sub(stock.lendario);

    if missing == 0 {
        // Tier surplus at the legendary tier fully satisfies the
        // requirement; lower-tier stock is not inspected.
        return IngredientShortfall {
            material: ing.material,
            required: ing.legendary_qty,
            have: stock.lendario,
            missing: 0,
            raro_needed: 0,
            epico_needed: 0,
            lend_needed: 0,
        };
    }

    let epico_needed_total = missing * PromotionCost::LENDARIO.materials;
    let epico_missing = epico_needed_total.saturating_sub(stock.epico);

    let raro_needed_total = epico_missing * PromotionCost::EPICO.materials;
    let raro_missing = raro_needed_total.saturating_sub(stock.raro);

    IngredientShortfall {
        material: ing.material,
        required: ing.legendary_qty,
        have: stock.lendario,
        missing,
        raro_needed: raro_missing,
        epico_needed: epico_missing,
        lend_needed: missing,
    }
}

/// Compute the shortfall report for one final item.
///
/// Returns `None` for items without a recipe (selection only); the
/// caller renders those as "no calculation available" and must not run
/// resource accumulation for them. Missing materials and currency fields
/// read as zero rather than erroring.
///
/// # Examples
///
/// ```rust
/// use mircraft::{
///     compute_shortfall, ItemId, MaterialId, MaterialsSnapshot, ResourcePool, TierStock,
/// };
///
/// let mut materials = MaterialsSnapshot::empty();
/// materials.set(MaterialId::Aco, TierStock::new(0, 0, 300));
/// materials.set(MaterialId::Esfera, TierStock::new(0, 0, 100));
/// materials.set(MaterialId::Lunar, TierStock::new(0, 0, 100));
///
/// let report =
///     compute_shortfall(ItemId::Garra, &materials, &ResourcePool::ZERO).unwrap();
/// assert!(report.is_complete);
///
/// // Selection-only items have no computable shortfall.
/// assert!(compute_shortfall(ItemId::EsferaItem, &materials, &ResourcePool::ZERO).is_none());
/// ```
pub fn compute_shortfall(
    item: ItemId,
    materials: &MaterialsSnapshot,
    resources: &ResourcePool,
) -> Option<ShortfallReport> {
    let recipe = recipe_of(item)?;

    let ingredients: Vec<IngredientShortfall> = recipe
        .ingredients
        .iter()
        .map(|ing| ingredient_shortfall(ing, materials))
        .collect();

    let demand = ingredients
        .iter()
        .fold(PoolDemand::default(), |acc, row| acc.add(row));

    let po = PoolShortfall::new(demand.po, resources.po);
    let ds = PoolShortfall::new(demand.ds, resources.ds);
    let cobre = PoolShortfall::new(demand.cobre, resources.cobre);

    let is_complete = ingredients.iter().all(IngredientShortfall::is_satisfied)
        && po.missing == 0
        && ds.missing == 0
        && cobre.missing == 0;

    Some(ShortfallReport {
        item,
        ingredients,
        po,
        ds,
        cobre,
        is_complete,
    })
}

/// Compute shortfall reports for an account's craft-item selection.
///
/// Preserves selection order; selection-only items map to `None`.
///
/// # Examples
///
/// ```rust
/// use mircraft::{compute_selection, ItemId, MaterialsSnapshot, ResourcePool};
///
/// let reports = compute_selection(
///     &[ItemId::Garra, ItemId::EsferaItem],
///     &MaterialsSnapshot::empty(),
///     &ResourcePool::ZERO,
/// );
///
/// assert_eq!(reports.len(), 2);
/// assert!(reports[0].1.is_some());
/// assert!(reports[1].1.is_none());
/// ```
pub fn compute_selection(
    selection: &[ItemId],
    materials: &MaterialsSnapshot,
    resources: &ResourcePool,
) -> Vec<(ItemId, Option<ShortfallReport>)> {
    selection
        .iter()
        .map(|&item| (item, compute_shortfall(item, materials, resources)))
        .collect()
}
