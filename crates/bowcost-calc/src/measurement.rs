//! 用料統計

use bowcost_core::{RibbonLayer, SegmentSpec};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 單層用料統計結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerMeasurement {
    /// 總長度（吋）
    pub total_inches: Decimal,

    /// 耗用碼數
    pub yards_used: Decimal,
}

/// 用料統計計算器
pub struct MeasurementCalculator;

impl MeasurementCalculator {
    /// 統計單層的總用料
    ///
    /// 每圈耗用兩倍長度（緞帶對摺，前後各一段）；尾帶與飄帶各計一次。
    /// 空層回傳 0；負的長度回報 `InvalidMeasurement`
    pub fn aggregate(layer: &RibbonLayer) -> bowcost_core::Result<LayerMeasurement> {
        layer.validate()?;

        let loop_inches = Self::segment_inches(&layer.loops) * Decimal::from(2);
        let tail_inches = Self::segment_inches(&layer.tails);
        let streamer_inches = Self::segment_inches(&layer.streamers);

        let total_inches = loop_inches + tail_inches + streamer_inches;
        let yards_used = total_inches / Decimal::from(36);

        Ok(LayerMeasurement {
            total_inches,
            yards_used,
        })
    }

    /// 各段長度小計（數量 × 長度）
    fn segment_inches(segments: &[SegmentSpec]) -> Decimal {
        segments
            .iter()
            .map(|s| Decimal::from(s.quantity) * s.length_inches)
            .sum::<Decimal>()
    }
}
