//! The static final-item recipe catalog.
//!
//! Recipes are configuration, not per-account state. A recipe is an
//! ordered list of ingredient requirements, each naming a material and
//! the legendary-tier quantity it must reach. Items without a recipe
//! (`esfera_item`) are selection-only: they can be tracked on an
//! account but have no computable shortfall.

use crate::ids::{ItemId, MaterialId};

/// Legendary-tier quantity required of a recipe's primary ingredient.
const PRIMARY_QTY: u64 = 300;

/// Legendary-tier quantity required of each secondary ingredient.
const SECONDARY_QTY: u64 = 100;

/// One material requirement inside a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ingredient {
    /// The material this requirement names.
    pub material: MaterialId,
    /// Legendary-tier units the stock must reach.
    pub legendary_qty: u64,
}

impl Ingredient {
    const fn new(material: MaterialId, legendary_qty: u64) -> Self {
        Self {
            material,
            legendary_qty,
        }
    }
}

/// A final item's material requirements, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    pub ingredients: &'static [Ingredient],
}

static GARRA: Recipe = Recipe {
    ingredients: &[
        Ingredient::new(MaterialId::Aco, PRIMARY_QTY),
        Ingredient::new(MaterialId::Esfera, SECONDARY_QTY),
        Ingredient::new(MaterialId::Lunar, SECONDARY_QTY),
    ],
};

static ESCAMA: Recipe = Recipe {
    ingredients: &[
        Ingredient::new(MaterialId::Aco, PRIMARY_QTY),
        Ingredient::new(MaterialId::Esfera, SECONDARY_QTY),
        Ingredient::new(MaterialId::Lunar, SECONDARY_QTY),
    ],
};

static COURO: Recipe = Recipe {
    ingredients: &[
        Ingredient::new(MaterialId::Aco, PRIMARY_QTY),
        Ingredient::new(MaterialId::Quintessencia, SECONDARY_QTY),
        Ingredient::new(MaterialId::Bugiganga, SECONDARY_QTY),
    ],
};

static CHIFRE: Recipe = Recipe {
    ingredients: &[
        Ingredient::new(MaterialId::Platina, PRIMARY_QTY),
        Ingredient::new(MaterialId::Iluminado, SECONDARY_QTY),
        Ingredient::new(MaterialId::Anima, SECONDARY_QTY),
    ],
};

static OLHO: Recipe = Recipe {
    ingredients: &[
        Ingredient::new(MaterialId::Platina, PRIMARY_QTY),
        Ingredient::new(MaterialId::Iluminado, SECONDARY_QTY),
        Ingredient::new(MaterialId::Anima, SECONDARY_QTY),
    ],
};

/// Look up the recipe for a final item.
///
/// Returns `None` for selection-only items; callers render those as
/// "no calculation available" and must not run shortfall math on them.
///
/// # Examples
///
/// ```rust
/// use mircraft::{recipe_of, ItemId, MaterialId};
///
/// let garra = recipe_of(ItemId::Garra).unwrap();
/// assert_eq!(garra.ingredients[0].material, MaterialId::Aco);
/// assert_eq!(garra.ingredients[0].legendary_qty, 300);
///
/// assert!(recipe_of(ItemId::EsferaItem).is_none());
/// ```
pub fn recipe_of(item: ItemId) -> Option<&'static Recipe> {
    match item {
        ItemId::Garra => Some(&GARRA),
        ItemId::Escama => Some(&ESCAMA),
        ItemId::Couro => Some(&COURO),
        ItemId::Chifre => Some(&CHIFRE),
        ItemId::Olho => Some(&OLHO),
        ItemId::EsferaItem => None,
    }
}

/// The materials relevant to a selection of final items.
///
/// Returns the union of the selected items' ingredient lists, in catalog
/// order. Selection-only items contribute nothing. The dashboard uses
/// this to filter the material table down to what the account's
/// selection actually needs.
///
/// # Examples
///
/// ```rust
/// use mircraft::{materials_for_selection, ItemId, MaterialId};
///
/// let mats = materials_for_selection(&[ItemId::Garra, ItemId::EsferaItem]);
/// assert_eq!(mats, vec![MaterialId::Lunar, MaterialId::Esfera, MaterialId::Aco]);
///
/// assert!(materials_for_selection(&[ItemId::EsferaItem]).is_empty());
/// ```
pub fn materials_for_selection(selection: &[ItemId]) -> Vec<MaterialId> {
    let needed: std::collections::HashSet<MaterialId> = selection
        .iter()
        .filter_map(|&item| recipe_of(item))
        .flat_map(|recipe| recipe.ingredients.iter().map(|ing| ing.material))
        .collect();

    MaterialId::ALL
        .into_iter()
        .filter(|m| needed.contains(m))
        .collect()
}
