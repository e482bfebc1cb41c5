//! 層成本模型

use bowcost_core::RibbonLayer;
use rust_decimal::Decimal;

use crate::measurement::MeasurementCalculator;

/// 層成本計算器
pub struct LayerCostCalculator;

impl LayerCostCalculator {
    /// 單層材料成本 = 耗用碼數 × 每碼成本
    ///
    /// 內部不做進位；進位屬呈現層的責任
    pub fn layer_cost(yards_used: Decimal, cost_per_yard: Decimal) -> Decimal {
        yards_used * cost_per_yard
    }

    /// 整個設計的材料總成本（逐層統計後加總）
    pub fn material_cost(layers: &[RibbonLayer]) -> bowcost_core::Result<Decimal> {
        let mut total = Decimal::ZERO;

        for layer in layers {
            let measurement = MeasurementCalculator::aggregate(layer)?;
            total += Self::layer_cost(measurement.yards_used, layer.cost_per_yard);
        }

        Ok(total)
    }
}
