//! 定價建議引擎

use bowcost_core::{MarginThresholds, PricingPolicy};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 毛利率狀態分級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarginStatus {
    /// 極佳
    Excellent,
    /// 良好
    Good,
    /// 低毛利
    LowMargin,
    /// 虧損
    Loss,
}

/// 定價級距建議
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingTier {
    /// 級距標籤
    pub label: String,

    /// 費率（倍率或目標毛利率）
    pub rate: Decimal,

    /// 建議售價
    pub price: Decimal,

    /// 利潤（售價 - 落地成本）
    pub profit: Decimal,

    /// 毛利率（百分比；售價為 0 時定義為 0）
    pub profit_margin_pct: Decimal,

    /// 毛利率分級
    pub status: MarginStatus,
}

/// 定價計算器
pub struct PricingCalculator;

impl PricingCalculator {
    /// 依策略產生各級距定價建議
    pub fn tiers(
        landed_cost: Decimal,
        policy: &PricingPolicy,
        thresholds: &MarginThresholds,
    ) -> bowcost_core::Result<Vec<PricingTier>> {
        policy.validate()?;
        thresholds.validate()?;

        if landed_cost < Decimal::ZERO {
            return Err(bowcost_core::CostError::InvalidConfiguration(format!(
                "落地成本不可為負值: {}",
                landed_cost
            )));
        }

        let tiers = match policy {
            PricingPolicy::FixedMultiplier(rates) => rates
                .iter()
                .map(|r| {
                    let price = landed_cost * r.rate;
                    Self::tier(&r.label, r.rate, landed_cost, price, thresholds)
                })
                .collect(),
            PricingPolicy::TargetMargin(rates) => rates
                .iter()
                .map(|r| {
                    // validate 已保證 m < 1，除數不為零
                    let price = landed_cost / (Decimal::ONE - r.rate);
                    Self::tier(&r.label, r.rate, landed_cost, price, thresholds)
                })
                .collect(),
        };

        Ok(tiers)
    }

    /// 毛利率百分比（售價為 0 時回傳 0，不產生除零）
    pub fn margin_pct(profit: Decimal, price: Decimal) -> Decimal {
        if price == Decimal::ZERO {
            Decimal::ZERO
        } else {
            profit / price * Decimal::ONE_HUNDRED
        }
    }

    /// 毛利率分級
    pub fn classify(margin_pct: Decimal, thresholds: &MarginThresholds) -> MarginStatus {
        if margin_pct >= thresholds.excellent {
            MarginStatus::Excellent
        } else if margin_pct >= thresholds.good {
            MarginStatus::Good
        } else if margin_pct > thresholds.low {
            MarginStatus::LowMargin
        } else {
            MarginStatus::Loss
        }
    }

    /// 組裝單一級距
    fn tier(
        label: &str,
        rate: Decimal,
        landed_cost: Decimal,
        price: Decimal,
        thresholds: &MarginThresholds,
    ) -> PricingTier {
        let profit = price - landed_cost;
        let profit_margin_pct = Self::margin_pct(profit, price);
        let status = Self::classify(profit_margin_pct, thresholds);

        PricingTier {
            label: label.to_string(),
            rate,
            price,
            profit,
            profit_margin_pct,
            status,
        }
    }
}
