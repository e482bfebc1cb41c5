//! 集成測試

use bowcost::*;
use rust_decimal::Decimal;
use std::collections::HashMap;

#[test]
fn test_single_layer_quote_end_to_end() {
    // 場景：4 圈 × 6 吋 + 2 尾帶 × 12 吋，每碼 2.99
    // 用料 = 4×6×2 + 2×12 = 72 吋 = 2 碼，材料成本 5.98
    let layers = vec![RibbonLayer::new("GROSGRAIN-RED".to_string(), Decimal::new(299, 2))
        .with_loop(4, Decimal::from(6))
        .with_tail(2, Decimal::from(12))];

    // 平台：手續費 7%、稅 8%、運費 5.95
    let vendor = VendorProfile::new(
        "TEST-MARKET".to_string(),
        Decimal::new(7, 2),
        Decimal::new(8, 2),
        Decimal::new(595, 2),
    );

    let calculator = QuoteCalculator::new(vendor, QuoteConfig::new());
    let result = calculator.calculate(&layers).unwrap();

    assert_eq!(result.material_cost, Decimal::new(598, 2));
    assert_eq!(result.layer_costs[0].yards_used, Decimal::from(2));

    // 落地成本：5.98 + 0.4186 + (6.3986 × 0.08) + 5.95
    assert_eq!(result.breakdown.vendor_fee, Decimal::new(4186, 4));
    assert_eq!(
        result.breakdown.total,
        result.breakdown.base_cost
            + result.breakdown.vendor_fee
            + result.breakdown.tax
            + result.breakdown.shipping_cost
    );

    // 預設固定倍率策略產生 3 個級距，利潤恆等式成立
    assert_eq!(result.tiers.len(), 3);
    for tier in &result.tiers {
        assert_eq!(tier.profit, tier.price - result.breakdown.total);
    }
}

#[test]
fn test_fee_breakdown_reference_values() {
    // base 10.00, fee 7%, tax 8%, shipping 5.95
    let vendor = VendorProfile::new(
        "REF".to_string(),
        Decimal::new(7, 2),
        Decimal::new(8, 2),
        Decimal::new(595, 2),
    );

    let breakdown = FeeCalculator::breakdown(Decimal::new(1000, 2), &vendor).unwrap();

    assert_eq!(breakdown.vendor_fee, Decimal::new(70, 2));
    // 稅基為成本 + 手續費：(10.00 + 0.70) × 0.08 = 0.856
    assert_eq!(breakdown.tax, Decimal::new(856, 3));
    assert_eq!(breakdown.total, Decimal::new(17506, 3));
}

#[test]
fn test_target_margin_half_doubles_landed_cost() {
    // m = 0.5：price = landed / 0.5 = landed × 2，毛利率恰為 50%
    let landed = Decimal::new(17506, 3);
    let policy = PricingPolicy::TargetMargin(vec![PricingRate::new("Standard", Decimal::new(5, 1))]);

    let tiers = PricingCalculator::tiers(landed, &policy, &MarginThresholds::default()).unwrap();

    assert_eq!(tiers[0].price, Decimal::new(35012, 3));
    assert_eq!(tiers[0].profit, landed);
    assert_eq!(tiers[0].profit_margin_pct, Decimal::from(50));
    assert_eq!(tiers[0].status, MarginStatus::Excellent);
}

#[test]
fn test_usage_reference_scenario() {
    // 用量 5 碼 / 整捲 25 碼：20%、剩 20 碼、每捲 5 個、效率不佳、建議加做 4 個
    let summary = UsageCalculator::summarize(Decimal::from(5), Decimal::from(25)).unwrap();

    assert_eq!(summary.percent_used, Decimal::from(20));
    assert_eq!(summary.waste_yards, Decimal::from(20));
    assert_eq!(summary.bows_per_roll, 5);
    assert_eq!(summary.efficiency, Efficiency::Poor);
    assert!(summary.recommendation.contains("4 個"));
}

#[test]
fn test_costing_and_usage_paths_share_inputs() {
    // 同一組層資料同時走報價管線與用料彙總管線（兩條獨立路徑）
    let layers = vec![
        RibbonLayer::new("RED".to_string(), Decimal::new(299, 2))
            .with_loop(4, Decimal::from(6))
            .with_tail(2, Decimal::from(12)),
        RibbonLayer::new("RED".to_string(), Decimal::new(299, 2)).with_loop(2, Decimal::from(9)), // 36 吋 = 1 碼
        RibbonLayer::new("GOLD".to_string(), Decimal::new(150, 2))
            .with_streamer(2, Decimal::from(18)), // 36 吋 = 1 碼
    ];

    let calculator = QuoteCalculator::new(VendorProfile::custom(), QuoteConfig::new());
    let quote = calculator.calculate(&layers).unwrap();

    // 材料成本：(2 + 1) × 2.99 + 1 × 1.50 = 10.47
    assert_eq!(quote.material_cost, Decimal::new(1047, 2));

    let report =
        UsageAggregator::aggregate_by_ribbon(&layers, &HashMap::new(), Decimal::from(25)).unwrap();

    // RED 兩層共 3 碼，共用同一捲預算
    assert_eq!(report.summaries.len(), 2);
    assert_eq!(report.summaries["RED"].percent_used, Decimal::from(12));
    assert_eq!(report.summaries["RED"].bows_per_roll, 8);
    assert_eq!(report.summaries["GOLD"].percent_used, Decimal::from(4));
}

#[test]
fn test_vendor_presets_flow_through_quote() {
    let etsy = VendorProfile::preset("Etsy").unwrap();
    let layers = vec![RibbonLayer::new("RED".to_string(), Decimal::from(3))
        .with_loop(6, Decimal::from(6))]; // 72 吋 = 2 碼 × 3.00 = 6.00

    let calculator = QuoteCalculator::new(etsy, QuoteConfig::new());
    let result = calculator.calculate(&layers).unwrap();

    assert_eq!(result.material_cost, Decimal::from(6));
    // Etsy 手續費 6.5%：0.39
    assert_eq!(result.breakdown.vendor_fee, Decimal::new(39, 2));
}

#[test]
fn test_variant_thresholds_are_configurable() {
    // 50/30/10 門檻變體：毛利率 8% 應分級為虧損而非低毛利
    let config = QuoteConfig::new().with_margin_thresholds(MarginThresholds::new(
        Decimal::from(50),
        Decimal::from(30),
        Decimal::from(10),
    ));

    let thresholds = &config.margin_thresholds;
    assert_eq!(
        PricingCalculator::classify(Decimal::from(8), thresholds),
        MarginStatus::Loss
    );
    assert_eq!(
        PricingCalculator::classify(Decimal::from(12), thresholds),
        MarginStatus::LowMargin
    );
}
