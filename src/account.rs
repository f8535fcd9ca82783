//! The account record and its wire format.
//!
//! An account is the unit the dashboard manages: boss-kill counters,
//! gold, crafting materials, craft-currency reserves, the craft-item
//! selection, and display metadata. The record store owns accounts;
//! this crate only defines the wire types and derives pure views over
//! them. Every field defaults on the wire, so records written by older
//! dashboard versions (or freshly created ones) deserialize cleanly
//! with absent sections zeroed.

use crate::ids::ItemId;
use crate::shortfall::{compute_selection, ShortfallReport};
use crate::snapshot::{MaterialsSnapshot, ResourcePool};
use serde::{Deserialize, Serialize};

/// Dungeon floor options offered by the dashboard selects.
pub const FLOOR_OPTIONS: [&str; 7] = ["4F", "5F", "6F", "7F", "8F", "9F", "10F"];

/// Raid options offered by the dashboard selects.
pub const RAID_OPTIONS: [&str; 9] = [
    "Mina Demoníaca",
    "Covil do Tatu Sombrio",
    "Salão da Ganância",
    "Caserna do Pecador",
    "Cave do Viveiro",
    "Demônio da Alma do Submundo",
    "Mina Abandonada Ululante",
    "Ninho do Dragão de Fogo Escarlate",
    "Altar Oculto",
];

/// Raid-boss options offered by the dashboard selects.
pub const RAID_BOSS_OPTIONS: [&str; 12] = [
    "Rei do Touro",
    "Demônio Aracnídeo",
    "Grande Centopeia",
    "Espectro do Osso",
    "Rei Nefariox",
    "Rei Abandonado",
    "Demente Infernal",
    "Trasgo Diabólico",
    "General de Terracota",
    "Asura",
    "Suserano",
    "Sagitário",
];

/// Per-floor boss-kill counters (médio/grande pairs per floor).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BossKills {
    pub medio2: u64,
    pub grande2: u64,
    pub medio4: u64,
    pub grande4: u64,
    pub medio6: u64,
    pub grande6: u64,
    pub medio7: u64,
    pub grande7: u64,
    pub medio8: u64,
    pub grande8: u64,
}

/// Special boss and badge counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialBossKills {
    pub xama: u64,
    pub praca_4f: u64,
    pub cracha_epica: u64,
}

/// Display metadata for one account.
///
/// Floor and raid assignments are free-form select values; the option
/// catalogs above are advisory, not validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountInfo {
    pub level: u64,
    pub power: u64,
    pub praca: Option<String>,
    pub praca_atq: Option<String>,
    pub pico: Option<String>,
    pub raid: Option<String>,
    pub raid_boss: Option<String>,
}

/// One managed game account.
///
/// # Examples
///
/// ```rust
/// use mircraft::Account;
///
/// // A minimal record deserializes with every section zeroed.
/// let account: Account = serde_json::from_str(r#"{"name": "Conta 1"}"#).unwrap();
/// assert_eq!(account.gold, 0);
/// assert!(account.craft_items.is_empty());
/// assert!(!account.confirmed);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    #[serde(default)]
    pub bosses: BossKills,
    #[serde(default)]
    pub special_bosses: SpecialBossKills,
    #[serde(default)]
    pub sala_pico: Option<String>,
    #[serde(default)]
    pub gold: u64,
    #[serde(default)]
    pub materials: MaterialsSnapshot,
    #[serde(default)]
    pub craft_resources: ResourcePool,
    #[serde(default)]
    pub craft_items: Vec<ItemId>,
    #[serde(default)]
    pub account_info: AccountInfo,
    #[serde(default)]
    pub confirmed: bool,
}

impl Account {
    /// Shortfall reports for this account's craft-item selection.
    ///
    /// Convenience over [`compute_selection`] using the account's own
    /// snapshots. Selection-only items map to `None`.
    pub fn shortfalls(&self) -> Vec<(ItemId, Option<ShortfallReport>)> {
        compute_selection(&self.craft_items, &self.materials, &self.craft_resources)
    }
}

/// Format a power value the way the dashboard renders it.
///
/// Values below 1.000 print verbatim; beyond that the value compacts to
/// thousands or millions, with six-figure values rounded to whole
/// thousands.
///
/// # Examples
///
/// ```rust
/// use mircraft::format_power;
///
/// assert_eq!(format_power(0), "0");
/// assert_eq!(format_power(950), "950");
/// assert_eq!(format_power(1_500), "1.5k");
/// assert_eq!(format_power(208_000), "208k");
/// assert_eq!(format_power(2_340_000), "2.3M");
/// ```
pub fn format_power(value: u64) -> String {
    if value < 1_000 {
        return value.to_string();
    }
    if value >= 1_000_000 {
        return format!("{:.1}M", value as f64 / 1_000_000.0);
    }
    if value >= 100_000 {
        return format!("{}k", (value as f64 / 1_000.0).round() as u64);
    }
    format!("{:.1}k", value as f64 / 1_000.0)
}
