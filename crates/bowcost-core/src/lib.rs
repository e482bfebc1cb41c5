//! # Bowcost Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod layer;
pub mod vendor;

// Re-export 主要類型
pub use config::{MarginThresholds, PricingPolicy, PricingRate, QuoteConfig};
pub use layer::{RibbonLayer, SegmentSpec};
pub use vendor::VendorProfile;

/// 成本引擎錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum CostError {
    #[error("無效的用料數據: {0}")]
    InvalidMeasurement(String),

    #[error("無效的配置: {0}")]
    InvalidConfiguration(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CostError>;
