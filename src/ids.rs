//! Material and final-item identifiers.
//!
//! Both catalogs are closed: every crafting material and every craftable
//! final item is known at compile time. Identifiers serialize as the
//! snake_case wire keys the account store uses, so a `HashMap` keyed by
//! `MaterialId` round-trips against the store's JSON unchanged. Unknown
//! keys are rejected at the parse boundary with a typed error instead of
//! being silently dropped.

use crate::error::CraftError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Identifier for a crafting material.
///
/// Materials carry a tiered stock (raro/épico/lendário) per account and
/// are consumed by final-item recipes at the legendary tier.
///
/// # Examples
///
/// ```rust
/// use mircraft::MaterialId;
///
/// let aco: MaterialId = "aco".parse().unwrap();
/// assert_eq!(aco, MaterialId::Aco);
/// assert_eq!(aco.as_str(), "aco");
/// assert_eq!(aco.name(), "Aço");
///
/// assert!("mithril".parse::<MaterialId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum MaterialId {
    Anima,
    Bugiganga,
    Lunar,
    Iluminado,
    Quintessencia,
    Esfera,
    Platina,
    Aco,
}

impl MaterialId {
    /// Every material in the catalog, in display order.
    pub const ALL: [MaterialId; 8] = [
        MaterialId::Anima,
        MaterialId::Bugiganga,
        MaterialId::Lunar,
        MaterialId::Iluminado,
        MaterialId::Quintessencia,
        MaterialId::Esfera,
        MaterialId::Platina,
        MaterialId::Aco,
    ];

    /// The snake_case wire key used by the account store.
    pub fn as_str(self) -> &'static str {
        match self {
            MaterialId::Anima => "anima",
            MaterialId::Bugiganga => "bugiganga",
            MaterialId::Lunar => "lunar",
            MaterialId::Iluminado => "iluminado",
            MaterialId::Quintessencia => "quintessencia",
            MaterialId::Esfera => "esfera",
            MaterialId::Platina => "platina",
            MaterialId::Aco => "aco",
        }
    }

    /// The display name shown in the dashboard.
    pub fn name(self) -> &'static str {
        match self {
            MaterialId::Anima => "Anima",
            MaterialId::Bugiganga => "Bugiganga",
            MaterialId::Lunar => "Lunar",
            MaterialId::Iluminado => "Iluminado",
            MaterialId::Quintessencia => "Quintessência",
            MaterialId::Esfera => "Esfera",
            MaterialId::Platina => "Platina",
            MaterialId::Aco => "Aço",
        }
    }
}

impl FromStr for MaterialId {
    type Err = CraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaterialId::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| CraftError::UnknownMaterial(s.to_string()))
    }
}

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for MaterialId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MaterialId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Identifier for a craftable final item.
///
/// Final items are what accounts select for crafting. Most have a recipe
/// of legendary-tier material requirements; `EsferaItem` is selection
/// only and has no recipe.
///
/// # Examples
///
/// ```rust
/// use mircraft::ItemId;
///
/// let garra: ItemId = "garra".parse().unwrap();
/// assert_eq!(garra, ItemId::Garra);
///
/// // The Esfera item shares its display name with the material but is
/// // a distinct identifier on the wire.
/// let esfera: ItemId = "esfera_item".parse().unwrap();
/// assert_eq!(esfera.name(), "Esfera");
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum ItemId {
    Garra,
    Escama,
    Couro,
    Chifre,
    Olho,
    EsferaItem,
}

impl ItemId {
    /// Every final item in the catalog, in display order.
    pub const ALL: [ItemId; 6] = [
        ItemId::Garra,
        ItemId::Escama,
        ItemId::Couro,
        ItemId::Chifre,
        ItemId::Olho,
        ItemId::EsferaItem,
    ];

    /// The snake_case wire key used by the account store.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemId::Garra => "garra",
            ItemId::Escama => "escama",
            ItemId::Couro => "couro",
            ItemId::Chifre => "chifre",
            ItemId::Olho => "olho",
            ItemId::EsferaItem => "esfera_item",
        }
    }

    /// The display name shown in the dashboard.
    pub fn name(self) -> &'static str {
        match self {
            ItemId::Garra => "Garra",
            ItemId::Escama => "Escama",
            ItemId::Couro => "Couro",
            ItemId::Chifre => "Chifre",
            ItemId::Olho => "Olho",
            ItemId::EsferaItem => "Esfera",
        }
    }
}

impl FromStr for ItemId {
    type Err = CraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemId::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| CraftError::UnknownItem(s.to_string()))
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ItemId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
