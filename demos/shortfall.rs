//! Basic example: computing a crafting shortfall for one final item
//!
//! This example demonstrates:
//! - Building a materials snapshot
//! - Computing the shortfall report for an item
//! - Reading the per-ingredient and per-currency breakdown

use mircraft::*;

fn main() {
    // Snapshot the account's materials on hand
    let mut materials = MaterialsSnapshot::empty();
    materials.set(MaterialId::Aco, TierStock::new(40, 12, 250));
    materials.set(MaterialId::Esfera, TierStock::new(0, 0, 100));
    materials.set(MaterialId::Lunar, TierStock::new(9, 0, 0));

    // Snapshot the craft-currency reserves
    let resources = ResourcePool::new(9_000, 1_500_000, 6_000_000);

    println!("Computing shortfall for {}...", ItemId::Garra.name());
    let report = compute_shortfall(ItemId::Garra, &materials, &resources)
        .expect("garra has a recipe");

    println!("\n=== Ingredients ===");
    for row in &report.ingredients {
        println!(
            "{:<14} have {:>4} / {:>4} lendário  (missing {}, épico needed {}, raro needed {})",
            row.material.name(),
            row.have,
            row.required,
            row.missing,
            row.epico_needed,
            row.raro_needed,
        );
    }

    println!("\n=== Craft Currencies ===");
    println!(
        "Pó:    need {:>10}  have {:>10}  missing {:>10}",
        report.po.needed, report.po.have, report.po.missing
    );
    println!(
        "DS:    need {:>10}  have {:>10}  missing {:>10}",
        report.ds.needed, report.ds.have, report.ds.missing
    );
    println!(
        "Cobre: need {:>10}  have {:>10}  missing {:>10}",
        report.cobre.needed, report.cobre.have, report.cobre.missing
    );

    println!(
        "\nCraftable right now: {}",
        if report.is_complete { "yes" } else { "no" }
    );

    // Selection-only items have no computable shortfall
    match compute_shortfall(ItemId::EsferaItem, &materials, &resources) {
        Some(_) => unreachable!(),
        None => println!("{}: selection only, no calculation", ItemId::EsferaItem.name()),
    }
}
