//! Boss-counter and gold valuation.
//!
//! Converts per-account boss-kill counters to real-world currency value
//! via a configurable unit-price table, and aggregates across accounts.
//! Pure arithmetic: a fold over the accounts producing an immutable
//! totals value.

use crate::account::Account;
use serde::{Deserialize, Serialize};

/// Configurable unit prices, one per boss counter, plus the gold rate.
///
/// Owned by the price store; absent fields default to zero so a
/// partially configured table values the unconfigured counters at
/// nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceTable {
    pub medio2_price: f64,
    pub grande2_price: f64,
    pub medio4_price: f64,
    pub grande4_price: f64,
    pub medio6_price: f64,
    pub grande6_price: f64,
    pub medio7_price: f64,
    pub grande7_price: f64,
    pub medio8_price: f64,
    pub grande8_price: f64,
    pub xama_price: f64,
    pub praca_4f_price: f64,
    pub cracha_epica_price: f64,
    pub gold_price: f64,
}

/// Aggregated dashboard totals across all accounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Real-world value of every boss counter, across accounts.
    pub boss_value: f64,
    /// Real-world value of the combined gold at the configured rate.
    pub gold_value: f64,
    /// Combined in-game gold.
    pub total_gold: u64,
}

/// The real-world value of one account's boss counters.
///
/// # Examples
///
/// ```rust
/// use mircraft::{boss_value, Account, PriceTable};
///
/// let account: Account = serde_json::from_str(
///     r#"{"name": "Conta 1", "bosses": {"medio2": 3}, "special_bosses": {"xama": 2}}"#,
/// )
/// .unwrap();
///
/// let prices = PriceTable {
///     medio2_price: 0.5,
///     xama_price: 2.0,
///     ..PriceTable::default()
/// };
///
/// assert_eq!(boss_value(&account, &prices), 3.0 * 0.5 + 2.0 * 2.0);
/// ```
pub fn boss_value(account: &Account, prices: &PriceTable) -> f64 {
    let b = &account.bosses;
    let s = &account.special_bosses;

    b.medio2 as f64 * prices.medio2_price
        + b.grande2 as f64 * prices.grande2_price
        + b.medio4 as f64 * prices.medio4_price
        + b.grande4 as f64 * prices.grande4_price
        + b.medio6 as f64 * prices.medio6_price
        + b.grande6 as f64 * prices.grande6_price
        + b.medio7 as f64 * prices.medio7_price
        + b.grande7 as f64 * prices.grande7_price
        + b.medio8 as f64 * prices.medio8_price
        + b.grande8 as f64 * prices.grande8_price
        + s.xama as f64 * prices.xama_price
        + s.praca_4f as f64 * prices.praca_4f_price
        + s.cracha_epica as f64 * prices.cracha_epica_price
}

/// Dashboard totals over a set of accounts.
///
/// # Examples
///
/// ```rust
/// use mircraft::{compute_totals, Account, PriceTable};
///
/// let accounts: Vec<Account> = serde_json::from_str(
///     r#"[{"name": "A", "gold": 100}, {"name": "B", "gold": 250}]"#,
/// )
/// .unwrap();
///
/// let prices = PriceTable { gold_price: 0.01, ..PriceTable::default() };
/// let totals = compute_totals(&accounts, &prices);
///
/// assert_eq!(totals.total_gold, 350);
/// assert_eq!(totals.gold_value, 3.5);
/// ```
pub fn compute_totals(accounts: &[Account], prices: &PriceTable) -> Totals {
    let (boss_total, gold_total) = accounts.iter().fold((0.0, 0u64), |(value, gold), acc| {
        (value + boss_value(acc, prices), gold + acc.gold)
    });

    Totals {
        boss_value: boss_total,
        gold_value: gold_total as f64 * prices.gold_price,
        total_gold: gold_total,
    }
}
