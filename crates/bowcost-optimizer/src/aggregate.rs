//! 多層用料彙總

use bowcost_calc::MeasurementCalculator;
use bowcost_core::RibbonLayer;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::{UsageCalculator, UsageReport};

/// 多層用料彙總器
///
/// 同一種緞帶出現在多個層時，視為共用同一捲的預算，而非各自獨立整捲
pub struct UsageAggregator;

impl UsageAggregator {
    /// 依緞帶分組彙總用料，產出每種緞帶一份摘要
    ///
    /// 整捲長度優先取 `roll_yards_by_ribbon` 的對應值，
    /// 查無時退回 `default_roll_yards`
    pub fn aggregate_by_ribbon(
        layers: &[RibbonLayer],
        roll_yards_by_ribbon: &HashMap<String, Decimal>,
        default_roll_yards: Decimal,
    ) -> bowcost_core::Result<UsageReport> {
        if default_roll_yards <= Decimal::ZERO {
            return Err(bowcost_core::CostError::InvalidConfiguration(format!(
                "預設整捲長度必須為正值: {}",
                default_roll_yards
            )));
        }

        tracing::debug!("用料彙總：共 {} 層", layers.len());

        // 依緞帶分組，加總耗用碼數
        let mut yards_by_ribbon: HashMap<String, Decimal> = HashMap::new();
        for layer in layers {
            let measurement = MeasurementCalculator::aggregate(layer)?;
            *yards_by_ribbon
                .entry(layer.ribbon_id.clone())
                .or_insert(Decimal::ZERO) += measurement.yards_used;
        }

        let mut report = UsageReport::empty();

        for (ribbon_id, yards_used) in yards_by_ribbon {
            let roll_yards = roll_yards_by_ribbon
                .get(&ribbon_id)
                .copied()
                .unwrap_or(default_roll_yards);

            let summary = UsageCalculator::summarize(yards_used, roll_yards)?;

            if summary.waste_yards < Decimal::ZERO {
                report.add_message(format!("緞帶 {} 的用量超過整捲長度", ribbon_id));
            }

            report.summaries.insert(ribbon_id, summary);
        }

        tracing::debug!("彙總完成：{} 種緞帶", report.summaries.len());

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Efficiency;

    fn layer(ribbon_id: &str, loops: u32, loop_len: i64) -> RibbonLayer {
        RibbonLayer::new(ribbon_id.to_string(), Decimal::from(2))
            .with_loop(loops, Decimal::from(loop_len))
    }

    #[test]
    fn test_shared_ribbon_uses_single_roll_budget() {
        // 兩層共用同一種緞帶：每層 2 碼，合計 4 碼
        let layers = vec![
            layer("GROSGRAIN-RED", 3, 12), // 3 × 12 × 2 = 72 吋 = 2 碼
            layer("GROSGRAIN-RED", 3, 12),
        ];

        let report =
            UsageAggregator::aggregate_by_ribbon(&layers, &HashMap::new(), Decimal::from(25))
                .unwrap();

        assert_eq!(report.summaries.len(), 1);

        let summary = &report.summaries["GROSGRAIN-RED"];
        // 4 / 25 = 16%，每捲 6 個（floor(25/4)）
        assert_eq!(summary.percent_used, Decimal::from(16));
        assert_eq!(summary.bows_per_roll, 6);
    }

    #[test]
    fn test_distinct_ribbons_get_separate_summaries() {
        let layers = vec![layer("RED", 3, 12), layer("GOLD", 1, 18)];

        let report =
            UsageAggregator::aggregate_by_ribbon(&layers, &HashMap::new(), Decimal::from(25))
                .unwrap();

        assert_eq!(report.summaries.len(), 2);
        assert!(report.summaries.contains_key("RED"));
        assert!(report.summaries.contains_key("GOLD"));
    }

    #[test]
    fn test_roll_override_takes_precedence_over_default() {
        let layers = vec![layer("RED", 3, 12)]; // 2 碼

        let mut rolls = HashMap::new();
        rolls.insert("RED".to_string(), Decimal::from(10));

        let report =
            UsageAggregator::aggregate_by_ribbon(&layers, &rolls, Decimal::from(25)).unwrap();

        // 2 / 10 = 20%（而非 2 / 25 = 8%）
        assert_eq!(report.summaries["RED"].percent_used, Decimal::from(20));
    }

    #[test]
    fn test_over_roll_usage_adds_message() {
        // 15 圈 × 36 吋 × 2 = 1080 吋 = 30 碼，超過預設 25 碼
        let layers = vec![layer("RED", 15, 36)];

        let report =
            UsageAggregator::aggregate_by_ribbon(&layers, &HashMap::new(), Decimal::from(25))
                .unwrap();

        assert_eq!(report.summaries["RED"].efficiency, Efficiency::Poor);
        assert_eq!(report.messages.len(), 1);
        assert!(report.messages[0].contains("RED"));
    }

    #[test]
    fn test_empty_design_yields_empty_report() {
        let report =
            UsageAggregator::aggregate_by_ribbon(&[], &HashMap::new(), Decimal::from(25)).unwrap();

        assert!(report.summaries.is_empty());
        assert!(report.messages.is_empty());
    }

    #[test]
    fn test_invalid_default_roll_is_rejected() {
        let result =
            UsageAggregator::aggregate_by_ribbon(&[], &HashMap::new(), Decimal::ZERO);

        assert!(result.is_err());
    }
}
