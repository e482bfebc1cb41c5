//! 報價主計算器

use bowcost_core::{QuoteConfig, RibbonLayer, VendorProfile};
use rust_decimal::Decimal;

use crate::{
    LayerCost, LayerCostCalculator, MeasurementCalculator, PricingCalculator, QuoteResult,
    QuoteWarning,
};

/// 報價計算器
///
/// 串接用料統計 → 層成本 → 落地成本 → 定價級距的完整管線；
/// 每次呼叫都是無狀態的純計算
pub struct QuoteCalculator {
    /// 供應平台參數
    vendor: VendorProfile,

    /// 報價配置
    config: QuoteConfig,
}

impl QuoteCalculator {
    /// 創建新的報價計算器
    pub fn new(vendor: VendorProfile, config: QuoteConfig) -> Self {
        Self { vendor, config }
    }

    /// 主報價計算入口
    pub fn calculate(&self, layers: &[RibbonLayer]) -> bowcost_core::Result<QuoteResult> {
        tracing::info!("開始報價計算：共 {} 層，平台 {}", layers.len(), self.vendor.name);

        let start_time = std::time::Instant::now();

        self.vendor.validate()?;
        self.config.validate()?;

        let mut result = QuoteResult::empty();

        // Step 1: 逐層用料統計與成本
        tracing::debug!("Step 1: 逐層用料統計");
        let mut material_cost = Decimal::ZERO;

        for layer in layers {
            let measurement = MeasurementCalculator::aggregate(layer)?;
            let cost = LayerCostCalculator::layer_cost(measurement.yards_used, layer.cost_per_yard);

            tracing::debug!(
                "緞帶 {} 耗用 {} 碼，成本 {}",
                layer.ribbon_id,
                measurement.yards_used,
                cost
            );

            if measurement.yards_used == Decimal::ZERO {
                result.add_warning(QuoteWarning::info(
                    layer.ribbon_id.clone(),
                    "該層尚未填寫任何用料".to_string(),
                ));
            }

            result.layer_costs.push(LayerCost {
                ribbon_id: layer.ribbon_id.clone(),
                yards_used: measurement.yards_used,
                cost,
            });

            material_cost += cost;
        }

        // Step 2: 落地成本拆解
        tracing::debug!("Step 2: 落地成本拆解");
        let breakdown = crate::FeeCalculator::breakdown(material_cost, &self.vendor)?;

        // Step 3: 定價級距建議
        tracing::debug!("Step 3: 定價級距建議");
        let tiers = PricingCalculator::tiers(
            breakdown.total,
            &self.config.pricing_policy,
            &self.config.margin_thresholds,
        )?;

        result.material_cost = material_cost;
        result.breakdown = breakdown;
        result.tiers = tiers;
        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!("報價計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!("定價級距數量: {}", result.tiers.len());

        Ok(result)
    }

    /// 獲取供應平台引用
    pub fn vendor(&self) -> &VendorProfile {
        &self.vendor
    }

    /// 獲取配置引用
    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }
}
