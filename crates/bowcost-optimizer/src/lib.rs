//! # Bowcost Optimizer
//!
//! 用料優化模組（整捲利用率、損耗與加做建議）

pub mod aggregate;
pub mod usage;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Re-export 主要類型
pub use aggregate::UsageAggregator;
pub use usage::{Efficiency, RibbonUsageSummary, UsageCalculator};

/// 用料彙總報告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageReport {
    /// 各緞帶的用料摘要（每種緞帶一份，而非每層一份）
    pub summaries: HashMap<String, RibbonUsageSummary>,

    /// 優化信息
    pub messages: Vec<String>,
}

impl UsageReport {
    /// 創建空報告
    pub fn empty() -> Self {
        Self {
            summaries: HashMap::new(),
            messages: Vec::new(),
        }
    }

    /// 添加信息
    pub fn add_message(&mut self, message: String) {
        self.messages.push(message);
    }
}
