use mircraft::*;

/// Snapshot with every Garra material at its exact legendary requirement.
fn garra_complete_materials() -> MaterialsSnapshot {
    let mut materials = MaterialsSnapshot::empty();
    materials.set(MaterialId::Aco, TierStock::new(0, 0, 300));
    materials.set(MaterialId::Esfera, TierStock::new(0, 0, 100));
    materials.set(MaterialId::Lunar, TierStock::new(0, 0, 100));
    materials
}

/// Zero shortfall: legendary stock at or above every requirement makes
/// the item complete with all deltas zero and no currency demand.
#[test]
fn test_complete_when_legendary_stock_covers_requirements() {
    let materials = garra_complete_materials();

    // Pools at zero still complete: nothing needs promoting.
    let report =
        compute_shortfall(ItemId::Garra, &materials, &ResourcePool::ZERO).unwrap();

    assert!(report.is_complete);
    for row in &report.ingredients {
        assert_eq!(row.missing, 0);
        assert_eq!(row.raro_needed, 0);
        assert_eq!(row.epico_needed, 0);
        assert_eq!(row.lend_needed, 0);
    }
    assert_eq!(report.po.needed, 0);
    assert_eq!(report.ds.needed, 0);
    assert_eq!(report.cobre.needed, 0);
}

/// Surplus above the requirement behaves the same as an exact match.
#[test]
fn test_surplus_stock_still_complete() {
    let mut materials = garra_complete_materials();
    materials.set(MaterialId::Aco, TierStock::new(0, 0, 10_000));

    let report =
        compute_shortfall(ItemId::Garra, &materials, &ResourcePool::ZERO).unwrap();
    assert!(report.is_complete);
    assert_eq!(report.ingredients[0].have, 10_000);
    assert_eq!(report.ingredients[0].missing, 0);
}

/// Monotonicity: growing one material's legendary stock never increases
/// its deltas or any currency total.
#[test]
fn test_monotonic_in_legendary_stock() {
    let resources = ResourcePool::ZERO;
    let mut previous: Option<ShortfallReport> = None;

    for lendario in 0..=320 {
        let mut materials = MaterialsSnapshot::empty();
        materials.set(MaterialId::Aco, TierStock::new(7, 3, lendario));

        let report = compute_shortfall(ItemId::Garra, &materials, &resources).unwrap();
        if let Some(prev) = &previous {
            let (cur, old) = (&report.ingredients[0], &prev.ingredients[0]);
            assert!(cur.missing <= old.missing);
            assert!(cur.epico_needed <= old.epico_needed);
            assert!(cur.raro_needed <= old.raro_needed);
            assert!(report.po.needed <= prev.po.needed);
            assert!(report.ds.needed <= prev.ds.needed);
            assert!(report.cobre.needed <= prev.cobre.needed);
        }
        previous = Some(report);
    }
}

/// No-recipe passthrough: a selection-only item yields `None` no matter
/// how rich the snapshots are.
#[test]
fn test_no_recipe_item_returns_none() {
    let mut materials = MaterialsSnapshot::empty();
    for material in MaterialId::ALL {
        materials.set(material, TierStock::new(9_999, 9_999, 9_999));
    }
    let resources = ResourcePool::new(u64::MAX, u64::MAX, u64::MAX);

    assert!(compute_shortfall(ItemId::EsferaItem, &materials, &resources).is_none());
    assert!(compute_shortfall(ItemId::EsferaItem, &MaterialsSnapshot::empty(), &ResourcePool::ZERO)
        .is_none());
}

/// Promotion-ratio correctness, from completely empty aço stock:
/// 300 lendário → 3.000 épico → 30.000 raro, and both promotion tiers'
/// currency costs are charged additively.
#[test]
fn test_promotion_ratios_and_currency_from_empty_stock() {
    let mut materials = MaterialsSnapshot::empty();
    // Secondary ingredients satisfied so aço is the only contributor.
    materials.set(MaterialId::Esfera, TierStock::new(0, 0, 100));
    materials.set(MaterialId::Lunar, TierStock::new(0, 0, 100));

    let report =
        compute_shortfall(ItemId::Garra, &materials, &ResourcePool::ZERO).unwrap();

    let aco = &report.ingredients[0];
    assert_eq!(aco.material, MaterialId::Aco);
    assert_eq!(aco.have, 0);
    assert_eq!(aco.missing, 300);
    assert_eq!(aco.lend_needed, 300);
    assert_eq!(aco.epico_needed, 3_000);
    assert_eq!(aco.raro_needed, 30_000);

    // po: 300×125 + 3.000×25 = 37.500 + 75.000
    assert_eq!(report.po.needed, 112_500);
    // ds: 300×25.000 + 3.000×5.000 = 7.500.000 + 15.000.000
    assert_eq!(report.ds.needed, 22_500_000);
    // cobre: 300×100.000 + 3.000×20.000 = 30.000.000 + 60.000.000
    assert_eq!(report.cobre.needed, 90_000_000);

    assert!(!report.is_complete);
}

/// Sufficient reserves turn the empty-stock case into a pool-complete,
/// ingredient-incomplete report; exact reserves leave no pool missing.
#[test]
fn test_currency_missing_vs_reserves() {
    let mut materials = MaterialsSnapshot::empty();
    materials.set(MaterialId::Esfera, TierStock::new(0, 0, 100));
    materials.set(MaterialId::Lunar, TierStock::new(0, 0, 100));

    let resources = ResourcePool::new(112_500, 22_500_000, 90_000_000);
    let report = compute_shortfall(ItemId::Garra, &materials, &resources).unwrap();

    assert_eq!(report.po.missing, 0);
    assert_eq!(report.ds.missing, 0);
    assert_eq!(report.cobre.missing, 0);
    // Materials are still missing, so the item stays incomplete.
    assert!(!report.is_complete);

    let short = ResourcePool::new(112_499, 22_500_000, 90_000_000);
    let report = compute_shortfall(ItemId::Garra, &materials, &short).unwrap();
    assert_eq!(report.po.missing, 1);
}

/// Partial stock: an exact legendary match contributes nothing even when
/// the épico tier is empty, and lower tiers are never inspected.
#[test]
fn test_exact_legendary_match_skips_lower_tiers() {
    let mut materials = garra_complete_materials();
    // aço: exactly 300 lendário, zero épico, zero raro.
    materials.set(MaterialId::Aco, TierStock::new(0, 0, 300));

    let report =
        compute_shortfall(ItemId::Garra, &materials, &ResourcePool::ZERO).unwrap();

    let aco = &report.ingredients[0];
    assert_eq!(aco.missing, 0);
    assert_eq!(aco.epico_needed, 0);
    assert_eq!(aco.raro_needed, 0);
    assert_eq!(report.po.needed, 0);
    assert!(report.is_complete);
}

/// Aggregate completeness gate: two satisfied ingredients plus one
/// partially missing ingredient whose currency demand exceeds the
/// reserve must leave the report incomplete.
#[test]
fn test_pool_deficit_blocks_completion() {
    let mut materials = MaterialsSnapshot::empty();
    materials.set(MaterialId::Esfera, TierStock::new(0, 0, 100));
    materials.set(MaterialId::Lunar, TierStock::new(0, 0, 100));
    // One lendário short, épico fully stocked: demand is exactly one
    // lendário promotion (125 pó).
    materials.set(MaterialId::Aco, TierStock::new(0, 10, 299));

    let resources = ResourcePool::new(0, 25_000, 100_000);
    let report = compute_shortfall(ItemId::Garra, &materials, &resources).unwrap();

    assert!(report.ingredients[1].is_satisfied());
    assert!(report.ingredients[2].is_satisfied());
    assert_eq!(report.po.needed, 125);
    assert_eq!(report.po.missing, 125);
    assert!(!report.is_complete);
}

/// Determinism: identical inputs produce identical reports and the
/// inputs are left untouched.
#[test]
fn test_recomputation_is_deterministic_and_pure() {
    let mut materials = MaterialsSnapshot::empty();
    materials.set(MaterialId::Platina, TierStock::new(123, 45, 6));
    materials.set(MaterialId::Anima, TierStock::new(0, 7, 0));
    let resources = ResourcePool::new(1_000, 2_000, 3_000);

    let materials_before = materials.clone();
    let resources_before = resources;

    let first = compute_shortfall(ItemId::Olho, &materials, &resources).unwrap();
    let second = compute_shortfall(ItemId::Olho, &materials, &resources).unwrap();

    assert_eq!(first, second);
    assert_eq!(materials, materials_before);
    assert_eq!(resources, resources_before);
}

/// Batch computation preserves selection order and flags selection-only
/// items distinctly.
#[test]
fn test_selection_reports_keep_order() {
    let selection = [ItemId::Chifre, ItemId::EsferaItem, ItemId::Garra];
    let reports = compute_selection(
        &selection,
        &MaterialsSnapshot::empty(),
        &ResourcePool::ZERO,
    );

    let items: Vec<_> = reports.iter().map(|(item, _)| *item).collect();
    assert_eq!(items, selection);
    assert!(reports[0].1.is_some());
    assert!(reports[1].1.is_none());
    assert!(reports[2].1.is_some());
}

/// Every recipe item reports one row per ingredient; the report value
/// round-trips through JSON unchanged.
#[test]
fn test_report_round_trips_through_json() {
    for item in ItemId::ALL {
        let Some(report) =
            compute_shortfall(item, &MaterialsSnapshot::empty(), &ResourcePool::ZERO)
        else {
            continue;
        };

        assert_eq!(
            report.ingredients.len(),
            recipe_of(item).unwrap().ingredients.len()
        );

        let json = serde_json::to_string(&report).unwrap();
        let back: ShortfallReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
