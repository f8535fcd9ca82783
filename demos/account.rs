//! Account example: from store JSON to dashboard numbers
//!
//! This example demonstrates:
//! - Deserializing an account record as the store sends it
//! - Filtering the material table to the account's selection
//! - Computing shortfalls for every selected item
//! - Valuing boss counters and gold with a price table

use mircraft::*;

fn main() -> Result<(), serde_json::Error> {
    let record = r#"{
        "name": "Conta Principal",
        "bosses": {"medio2": 14, "grande2": 3, "medio8": 6},
        "special_bosses": {"xama": 2},
        "gold": 2400000,
        "materials": {
            "aco": {"raro": 120, "epico": 30, "lendario": 180},
            "esfera": {"lendario": 100},
            "lunar": {"epico": 250}
        },
        "craft_resources": {"po": 50000, "ds": 8000000, "cobre": 30000000},
        "craft_items": ["garra", "escama", "esfera_item"],
        "account_info": {"level": 130, "power": 214000, "pico": "10F"}
    }"#;

    let account: Account = serde_json::from_str(record)?;

    println!(
        "{} (level {}, power {})",
        account.name,
        account.account_info.level,
        format_power(account.account_info.power)
    );

    let relevant = materials_for_selection(&account.craft_items);
    println!("\nMaterials tracked for this selection:");
    for material in &relevant {
        let stock = account.materials.stock_of(*material);
        println!(
            "  {:<14} raro {:>5}  épico {:>5}  lendário {:>5}",
            material.name(),
            stock.raro,
            stock.epico,
            stock.lendario
        );
    }

    println!("\nShortfalls:");
    for (item, report) in account.shortfalls() {
        match report {
            Some(report) if report.is_complete => {
                println!("  {:<8} complete, ready to craft", item.name());
            }
            Some(report) => {
                let missing: u64 = report.ingredients.iter().map(|r| r.missing).sum();
                println!(
                    "  {:<8} missing {} lendário units, pó short {}, DS short {}, cobre short {}",
                    item.name(),
                    missing,
                    report.po.missing,
                    report.ds.missing,
                    report.cobre.missing
                );
            }
            None => println!("  {:<8} selection only, no calculation", item.name()),
        }
    }

    let prices = PriceTable {
        medio2_price: 0.35,
        grande2_price: 1.10,
        medio8_price: 0.80,
        xama_price: 2.50,
        gold_price: 0.0000012,
        ..PriceTable::default()
    };

    let totals = compute_totals(std::slice::from_ref(&account), &prices);
    println!("\n=== Valuation ===");
    println!("Boss value: ${:.2}", totals.boss_value);
    println!(
        "Gold: {} (${:.2})",
        totals.total_gold, totals.gold_value
    );

    Ok(())
}
