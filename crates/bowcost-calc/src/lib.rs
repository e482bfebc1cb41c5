//! # Bowcost Calculation Engine
//!
//! 成本與定價計算引擎

pub mod cost;
pub mod fees;
pub mod measurement;
pub mod pricing;
pub mod quote;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Re-export 主要類型
pub use cost::LayerCostCalculator;
pub use fees::{CostBreakdown, FeeCalculator};
pub use measurement::{LayerMeasurement, MeasurementCalculator};
pub use pricing::{MarginStatus, PricingCalculator, PricingTier};
pub use quote::QuoteCalculator;

/// 報價計算結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResult {
    /// 各層材料成本
    pub layer_costs: Vec<LayerCost>,

    /// 材料總成本
    pub material_cost: Decimal,

    /// 落地成本拆解
    pub breakdown: CostBreakdown,

    /// 定價級距建議
    pub tiers: Vec<PricingTier>,

    /// 警告信息
    pub warnings: Vec<QuoteWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl QuoteResult {
    /// 創建空的計算結果
    pub fn empty() -> Self {
        Self {
            layer_costs: Vec::new(),
            material_cost: Decimal::ZERO,
            breakdown: CostBreakdown::zero(),
            tiers: Vec::new(),
            warnings: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: QuoteWarning) {
        self.warnings.push(warning);
    }
}

/// 單層材料成本
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerCost {
    /// 緞帶ID
    pub ribbon_id: String,

    /// 耗用碼數
    pub yards_used: Decimal,

    /// 材料成本
    pub cost: Decimal,
}

/// 報價警告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteWarning {
    pub ribbon_id: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl QuoteWarning {
    pub fn new(ribbon_id: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            ribbon_id,
            message,
            severity,
        }
    }

    pub fn info(ribbon_id: String, message: String) -> Self {
        Self::new(ribbon_id, message, WarningSeverity::Info)
    }

    pub fn warning(ribbon_id: String, message: String) -> Self {
        Self::new(ribbon_id, message, WarningSeverity::Warning)
    }

    pub fn error(ribbon_id: String, message: String) -> Self {
        Self::new(ribbon_id, message, WarningSeverity::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningSeverity {
    Info,
    Warning,
    Error,
}
