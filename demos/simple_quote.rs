//! 簡單報價計算示例

use bowcost::{QuoteCalculator, QuoteConfig, RibbonLayer, VendorProfile};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 簡單報價計算示例 ===\n");

    // 建立一個雙層蝴蝶結設計
    let layers = vec![
        RibbonLayer::new("GROSGRAIN-RED".to_string(), Decimal::new(299, 2))
            .with_loop(4, Decimal::from(6))
            .with_tail(2, Decimal::from(12)),
        RibbonLayer::new("SATIN-GOLD".to_string(), Decimal::new(150, 2))
            .with_streamer(2, Decimal::from(18)),
    ];

    println!("設計清單:");
    for layer in &layers {
        println!(
            "  - 緞帶: {}, 每碼成本: {}, 圈 {} 組 / 尾帶 {} 組 / 飄帶 {} 組",
            layer.ribbon_id,
            layer.cost_per_yard,
            layer.loops.len(),
            layer.tails.len(),
            layer.streamers.len()
        );
    }

    // 使用內建 Etsy 預設平台
    let vendor = VendorProfile::preset("Etsy").expect("內建預設存在");
    let calculator = QuoteCalculator::new(vendor, QuoteConfig::new());

    let result = calculator.calculate(&layers)?;

    println!("\n材料成本: {}", result.material_cost.round_dp(2));
    println!("落地成本: {}", result.breakdown.total.round_dp(2));
    println!("  手續費: {}", result.breakdown.vendor_fee.round_dp(2));
    println!("  稅金:   {}", result.breakdown.tax.round_dp(2));
    println!("  運費:   {}", result.breakdown.shipping_cost.round_dp(2));

    println!("\n定價建議:");
    for tier in &result.tiers {
        println!(
            "  [{}] 售價 {} / 利潤 {} / 毛利率 {}% ({:?})",
            tier.label,
            tier.price.round_dp(2),
            tier.profit.round_dp(2),
            tier.profit_margin_pct.round_dp(1),
            tier.status
        );
    }

    Ok(())
}
