//! 緞帶層模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 緞帶段規格（圈、尾帶或飄帶的一條輸入）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentSpec {
    /// 數量
    pub quantity: u32,

    /// 單段長度（吋）
    pub length_inches: Decimal,
}

impl SegmentSpec {
    /// 創建新的段規格
    pub fn new(quantity: u32, length_inches: Decimal) -> Self {
        Self {
            quantity,
            length_inches,
        }
    }
}

/// 緞帶層：一種緞帶在單一蝴蝶結設計中的全部用料
///
/// 由呼叫端（表單層）構建後以不可變快照傳入引擎；引擎只讀取、不修改
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RibbonLayer {
    /// 緞帶ID
    pub ribbon_id: String,

    /// 每碼成本
    pub cost_per_yard: Decimal,

    /// 圈（緞帶對摺，每圈耗用兩倍長度）
    pub loops: Vec<SegmentSpec>,

    /// 尾帶
    pub tails: Vec<SegmentSpec>,

    /// 飄帶
    pub streamers: Vec<SegmentSpec>,
}

impl RibbonLayer {
    /// 創建新的緞帶層
    pub fn new(ribbon_id: String, cost_per_yard: Decimal) -> Self {
        Self {
            ribbon_id,
            cost_per_yard,
            loops: Vec::new(),
            tails: Vec::new(),
            streamers: Vec::new(),
        }
    }

    /// 建構器模式：添加圈
    pub fn with_loop(mut self, quantity: u32, length_inches: Decimal) -> Self {
        self.loops.push(SegmentSpec::new(quantity, length_inches));
        self
    }

    /// 建構器模式：添加尾帶
    pub fn with_tail(mut self, quantity: u32, length_inches: Decimal) -> Self {
        self.tails.push(SegmentSpec::new(quantity, length_inches));
        self
    }

    /// 建構器模式：添加飄帶
    pub fn with_streamer(mut self, quantity: u32, length_inches: Decimal) -> Self {
        self.streamers.push(SegmentSpec::new(quantity, length_inches));
        self
    }

    /// 檢查是否為空層（沒有任何圈、尾帶、飄帶）
    pub fn is_empty(&self) -> bool {
        self.loops.is_empty() && self.tails.is_empty() && self.streamers.is_empty()
    }

    /// 驗證層資料
    ///
    /// 負的段長度視為呼叫端契約違反，回報 `InvalidMeasurement`；
    /// 負的每碼成本回報 `InvalidConfiguration`
    pub fn validate(&self) -> crate::Result<()> {
        if self.cost_per_yard < Decimal::ZERO {
            return Err(crate::CostError::InvalidConfiguration(format!(
                "緞帶 {} 的每碼成本為負值: {}",
                self.ribbon_id, self.cost_per_yard
            )));
        }

        for (kind, segments) in [
            ("圈", &self.loops),
            ("尾帶", &self.tails),
            ("飄帶", &self.streamers),
        ] {
            for segment in segments {
                if segment.length_inches < Decimal::ZERO {
                    return Err(crate::CostError::InvalidMeasurement(format!(
                        "緞帶 {} 的{}長度為負值: {}",
                        self.ribbon_id, kind, segment.length_inches
                    )));
                }
            }
        }

        Ok(())
    }
}
