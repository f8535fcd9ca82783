//! Account-owned input snapshots.
//!
//! The account record store owns the materials-on-hand and the craft
//! currency reserves; the calculator only ever reads immutable snapshots
//! of them. Lookups are total: a material the snapshot has never heard
//! of reads as an all-zero stock, and absent currency fields default to
//! zero on the wire.

use crate::ids::MaterialId;
use crate::tier::TierStock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A snapshot of one account's tiered material stocks.
///
/// Serializes as the account store's `materials` object: a map from
/// material wire key to per-tier counts.
///
/// # Examples
///
/// ```rust
/// use mircraft::{MaterialId, MaterialsSnapshot, TierStock};
///
/// let mut snapshot = MaterialsSnapshot::empty();
/// snapshot.set(MaterialId::Aco, TierStock::new(5, 0, 120));
///
/// assert_eq!(snapshot.stock_of(MaterialId::Aco).lendario, 120);
/// // Missing materials read as all-zero stock.
/// assert!(snapshot.stock_of(MaterialId::Lunar).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialsSnapshot {
    stocks: HashMap<MaterialId, TierStock>,
}

impl MaterialsSnapshot {
    /// Create a snapshot from a map of stocks.
    pub fn new(stocks: HashMap<MaterialId, TierStock>) -> Self {
        Self { stocks }
    }

    /// Create an empty snapshot (every material at zero).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the stock for one material.
    pub fn set(&mut self, material: MaterialId, stock: TierStock) {
        self.stocks.insert(material, stock);
    }

    /// The stock for one material.
    ///
    /// Total accessor: always returns a fully-populated stock, with
    /// materials absent from the snapshot reading as all-zero.
    pub fn stock_of(&self, material: MaterialId) -> TierStock {
        self.stocks.get(&material).copied().unwrap_or(TierStock::ZERO)
    }
}

/// One account's fungible craft-currency reserves.
///
/// Three independent counters consumed when promoting material tiers.
/// Absent fields default to zero on the wire.
///
/// # Examples
///
/// ```rust
/// use mircraft::ResourcePool;
///
/// let pool: ResourcePool = serde_json::from_str(r#"{"po": 500}"#).unwrap();
/// assert_eq!(pool.po, 500);
/// assert_eq!(pool.ds, 0);
/// assert_eq!(pool.cobre, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcePool {
    pub po: u64,
    pub ds: u64,
    pub cobre: u64,
}

impl ResourcePool {
    /// A pool with all three currencies at zero.
    pub const ZERO: ResourcePool = ResourcePool {
        po: 0,
        ds: 0,
        cobre: 0,
    };

    /// Create a pool from explicit counters.
    pub fn new(po: u64, ds: u64, cobre: u64) -> Self {
        Self { po, ds, cobre }
    }
}
