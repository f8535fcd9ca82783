//! Error types for the catalog boundary.
//!
//! The calculator itself never fails: missing materials, tiers, and
//! resource pools degrade to zero, and items without a recipe resolve
//! to `None`. Errors only arise where untrusted wire keys are parsed
//! into the closed identifier catalogs.

use thiserror::Error;

/// Errors produced when parsing wire keys into catalog identifiers.
///
/// # Examples
///
/// ```rust
/// use mircraft::{CraftError, MaterialId};
///
/// let err = "mithril".parse::<MaterialId>().unwrap_err();
/// assert_eq!(err, CraftError::UnknownMaterial("mithril".into()));
/// println!("{}", err); // "unknown material key: mithril"
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CraftError {
    /// A material key that is not part of the fixed material catalog.
    #[error("unknown material key: {0}")]
    UnknownMaterial(String),

    /// A final-item key that is not part of the fixed item catalog.
    #[error("unknown craft item key: {0}")]
    UnknownItem(String),
}
