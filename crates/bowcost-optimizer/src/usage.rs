//! 整捲用料優化

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 用料效率分級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Efficiency {
    /// 極佳
    Excellent,
    /// 良好
    Good,
    /// 不佳
    Poor,
}

/// 單一緞帶的整捲用料摘要
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RibbonUsageSummary {
    /// 整捲使用率（百分比）
    pub percent_used: Decimal,

    /// 剩餘碼數（用量超過整捲時為負值）
    pub waste_yards: Decimal,

    /// 每捲可做的蝴蝶結數
    pub bows_per_roll: u32,

    /// 效率分級
    pub efficiency: Efficiency,

    /// 建議
    pub recommendation: String,
}

/// 用料優化計算器
pub struct UsageCalculator;

impl UsageCalculator {
    /// 計算單一緞帶的整捲用料摘要
    ///
    /// `yards_used <= 0` 屬表單填寫中的預期過渡狀態，回傳明確的
    /// 零結果而非錯誤；`roll_yards <= 0` 則是配置錯誤
    pub fn summarize(
        yards_used: Decimal,
        roll_yards: Decimal,
    ) -> bowcost_core::Result<RibbonUsageSummary> {
        if roll_yards <= Decimal::ZERO {
            return Err(bowcost_core::CostError::InvalidConfiguration(format!(
                "整捲長度必須為正值: {}",
                roll_yards
            )));
        }

        if yards_used <= Decimal::ZERO {
            return Ok(RibbonUsageSummary {
                percent_used: Decimal::ZERO,
                waste_yards: roll_yards,
                bows_per_roll: 0,
                efficiency: Efficiency::Good,
                recommendation: "尚未使用任何緞帶".to_string(),
            });
        }

        let percent_used = yards_used / roll_yards * Decimal::ONE_HUNDRED;
        let waste_yards = roll_yards - yards_used;

        // 用量超過整捲：一捲做不出一個，直接判為效率不佳
        if waste_yards < Decimal::ZERO {
            return Ok(RibbonUsageSummary {
                percent_used,
                waste_yards,
                bows_per_roll: 0,
                efficiency: Efficiency::Poor,
                recommendation: format!(
                    "單一設計耗用 {} 碼，超過整捲 {} 碼，需要更長的緞帶捲",
                    yards_used.round_dp(2),
                    roll_yards
                ),
            });
        }

        let bows_per_roll = (roll_yards / yards_used).floor().to_u32().unwrap_or(0);

        // 建議優先序：大量剩餘 → 少量剩餘 → 幾乎用盡 → 其他
        let (efficiency, recommendation) = if waste_yards > Decimal::from(2) {
            let extra_bows = (waste_yards / yards_used).floor().to_u64().unwrap_or(0);
            (
                Efficiency::Poor,
                format!(
                    "剩餘 {} 碼，建議加做 {} 個蝴蝶結以用盡整捲",
                    waste_yards.round_dp(2),
                    extra_bows
                ),
            )
        } else if waste_yards > Decimal::ONE {
            (
                Efficiency::Good,
                "剩餘 1 到 2 碼，可加做一個小蝴蝶結".to_string(),
            )
        } else if percent_used >= Decimal::from(95) {
            (
                Efficiency::Excellent,
                "用料效率極佳，無需調整".to_string(),
            )
        } else {
            (Efficiency::Good, "用料已優化".to_string())
        };

        Ok(RibbonUsageSummary {
            percent_used,
            waste_yards,
            bows_per_roll,
            efficiency,
            recommendation,
        })
    }
}
