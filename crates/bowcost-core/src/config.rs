//! 報價配置模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 定價費率：一個級距的標籤與費率
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingRate {
    /// 級距標籤
    pub label: String,

    /// 費率（倍率或目標毛利率，依策略而定）
    pub rate: Decimal,
}

impl PricingRate {
    /// 創建新的定價費率
    pub fn new(label: impl Into<String>, rate: Decimal) -> Self {
        Self {
            label: label.into(),
            rate,
        }
    }
}

/// 定價策略
///
/// 原始業務同時存在兩種定價方式，以策略物件統一呈現，由呼叫端選擇
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PricingPolicy {
    /// 固定倍率：price = landed_cost × k
    FixedMultiplier(Vec<PricingRate>),

    /// 目標毛利率：price = landed_cost / (1 - m)，m 必須落在 0..1
    TargetMargin(Vec<PricingRate>),
}

impl PricingPolicy {
    /// 預設固定倍率級距（2.0 / 2.5 / 3.0）
    pub fn default_multipliers() -> Self {
        PricingPolicy::FixedMultiplier(vec![
            PricingRate::new("Competitive", Decimal::new(20, 1)),
            PricingRate::new("Standard", Decimal::new(25, 1)),
            PricingRate::new("Premium", Decimal::new(30, 1)),
        ])
    }

    /// 預設目標毛利率級距（0.3 / 0.5 / 0.7）
    pub fn default_margins() -> Self {
        PricingPolicy::TargetMargin(vec![
            PricingRate::new("Value", Decimal::new(3, 1)),
            PricingRate::new("Standard", Decimal::new(5, 1)),
            PricingRate::new("Premium", Decimal::new(7, 1)),
        ])
    }

    /// 獲取策略內的級距列表
    pub fn rates(&self) -> &[PricingRate] {
        match self {
            PricingPolicy::FixedMultiplier(rates) => rates,
            PricingPolicy::TargetMargin(rates) => rates,
        }
    }

    /// 驗證策略參數
    pub fn validate(&self) -> crate::Result<()> {
        match self {
            PricingPolicy::FixedMultiplier(rates) => {
                for rate in rates {
                    if rate.rate < Decimal::ZERO {
                        return Err(crate::CostError::InvalidConfiguration(format!(
                            "定價級距 {} 的倍率為負值: {}",
                            rate.label, rate.rate
                        )));
                    }
                }
            }
            PricingPolicy::TargetMargin(rates) => {
                for rate in rates {
                    if rate.rate < Decimal::ZERO || rate.rate >= Decimal::ONE {
                        return Err(crate::CostError::InvalidConfiguration(format!(
                            "定價級距 {} 的目標毛利率超出範圍 0..1: {}",
                            rate.label, rate.rate
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::default_multipliers()
    }
}

/// 毛利率分級門檻（百分比）
///
/// 原始來源存在 50/30/0 與 50/30/10 兩套門檻；預設採 50/30/0，
/// 需要另一套時可明確構造
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginThresholds {
    /// 極佳門檻（>= 此值）
    pub excellent: Decimal,

    /// 良好門檻（>= 此值）
    pub good: Decimal,

    /// 低毛利門檻（> 此值；否則視為虧損）
    pub low: Decimal,
}

impl MarginThresholds {
    /// 創建新的門檻組
    pub fn new(excellent: Decimal, good: Decimal, low: Decimal) -> Self {
        Self {
            excellent,
            good,
            low,
        }
    }

    /// 驗證門檻遞減順序
    pub fn validate(&self) -> crate::Result<()> {
        if self.excellent < self.good || self.good < self.low {
            return Err(crate::CostError::InvalidConfiguration(format!(
                "毛利率門檻必須遞減: {} / {} / {}",
                self.excellent, self.good, self.low
            )));
        }

        Ok(())
    }
}

impl Default for MarginThresholds {
    fn default() -> Self {
        Self::new(Decimal::from(50), Decimal::from(30), Decimal::ZERO)
    }
}

/// 報價配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteConfig {
    /// 預設整捲長度（碼），緞帶未提供整捲長度時使用
    pub default_roll_yards: Decimal,

    /// 定價策略
    pub pricing_policy: PricingPolicy,

    /// 毛利率分級門檻
    pub margin_thresholds: MarginThresholds,
}

impl QuoteConfig {
    /// 創建預設配置（整捲 25 碼、固定倍率策略、50/30/0 門檻）
    pub fn new() -> Self {
        Self {
            default_roll_yards: Decimal::from(25),
            pricing_policy: PricingPolicy::default(),
            margin_thresholds: MarginThresholds::default(),
        }
    }

    /// 建構器模式：設置預設整捲長度
    pub fn with_default_roll_yards(mut self, yards: Decimal) -> Self {
        self.default_roll_yards = yards;
        self
    }

    /// 建構器模式：設置定價策略
    pub fn with_pricing_policy(mut self, policy: PricingPolicy) -> Self {
        self.pricing_policy = policy;
        self
    }

    /// 建構器模式：設置毛利率門檻
    pub fn with_margin_thresholds(mut self, thresholds: MarginThresholds) -> Self {
        self.margin_thresholds = thresholds;
        self
    }

    /// 驗證配置
    pub fn validate(&self) -> crate::Result<()> {
        if self.default_roll_yards <= Decimal::ZERO {
            return Err(crate::CostError::InvalidConfiguration(format!(
                "預設整捲長度必須為正值: {}",
                self.default_roll_yards
            )));
        }

        self.pricing_policy.validate()?;
        self.margin_thresholds.validate()?;

        Ok(())
    }
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self::new()
    }
}
