//! # Bowcost
//!
//! 手作蝴蝶結的成本與定價引擎：
//!
//! - `bowcost-core`：資料模型、配置與錯誤類型
//! - `bowcost-calc`：用料統計、層成本、落地成本與定價級距
//! - `bowcost-optimizer`：整捲用料優化與多層彙總
//!
//! 引擎為純計算庫：無持久化、無 I/O、無共享狀態，
//! 相同輸入永遠得到相同輸出

// Re-export 主要類型
pub use bowcost_core::{
    CostError, MarginThresholds, PricingPolicy, PricingRate, QuoteConfig, Result, RibbonLayer,
    SegmentSpec, VendorProfile,
};

pub use bowcost_calc::{
    CostBreakdown, FeeCalculator, LayerCost, LayerCostCalculator, LayerMeasurement, MarginStatus,
    MeasurementCalculator, PricingCalculator, PricingTier, QuoteCalculator, QuoteResult,
    QuoteWarning, WarningSeverity,
};

pub use bowcost_optimizer::{
    Efficiency, RibbonUsageSummary, UsageAggregator, UsageCalculator, UsageReport,
};
