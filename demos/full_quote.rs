//! 完整報價與用料彙總示例（含日誌與 JSON 輸出）

use bowcost::{
    MarginThresholds, PricingPolicy, QuoteCalculator, QuoteConfig, RibbonLayer, UsageAggregator,
    VendorProfile,
};
use rust_decimal::Decimal;
use std::collections::HashMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    println!("=== 完整報價與用料彙總示例 ===\n");

    // 三層設計：RED 緞帶出現在兩層，共用同一捲預算
    let layers = vec![
        RibbonLayer::new("GROSGRAIN-RED".to_string(), Decimal::new(299, 2))
            .with_loop(4, Decimal::from(6))
            .with_tail(2, Decimal::from(12)),
        RibbonLayer::new("GROSGRAIN-RED".to_string(), Decimal::new(299, 2))
            .with_loop(2, Decimal::from(9)),
        RibbonLayer::new("SATIN-GOLD".to_string(), Decimal::new(150, 2))
            .with_streamer(2, Decimal::from(18)),
    ];

    // 目標毛利率策略 + 50/30/10 門檻變體
    let config = QuoteConfig::new()
        .with_pricing_policy(PricingPolicy::default_margins())
        .with_margin_thresholds(MarginThresholds::new(
            Decimal::from(50),
            Decimal::from(30),
            Decimal::from(10),
        ));

    let vendor = VendorProfile::new(
        "Etsy".to_string(),
        Decimal::new(65, 3),
        Decimal::new(8, 2),
        Decimal::new(595, 2),
    );

    // 報價管線
    let calculator = QuoteCalculator::new(vendor, config);
    let quote = calculator.calculate(&layers)?;

    println!("報價結果 (JSON):");
    println!("{}", serde_json::to_string_pretty(&quote)?);

    // 用料彙總管線（獨立於報價管線）
    let mut rolls = HashMap::new();
    rolls.insert("SATIN-GOLD".to_string(), Decimal::from(10));

    let report = UsageAggregator::aggregate_by_ribbon(&layers, &rolls, Decimal::from(25))?;

    println!("\n用料彙總 (JSON):");
    println!("{}", serde_json::to_string_pretty(&report)?);

    for message in &report.messages {
        println!("提示: {}", message);
    }

    Ok(())
}
