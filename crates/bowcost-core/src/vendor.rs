//! 供應平台費用模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 供應平台（市集）費用參數
///
/// `fee_pct` 與 `tax_pct` 以小數表示（0.065 = 6.5%）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorProfile {
    /// 平台名稱
    pub name: String,

    /// 平台手續費率（0 ≤ x ≤ 1）
    pub fee_pct: Decimal,

    /// 稅率（0 ≤ x ≤ 1）
    pub tax_pct: Decimal,

    /// 平均運費
    pub shipping_cost: Decimal,
}

impl VendorProfile {
    /// 創建新的平台參數
    pub fn new(name: String, fee_pct: Decimal, tax_pct: Decimal, shipping_cost: Decimal) -> Self {
        Self {
            name,
            fee_pct,
            tax_pct,
            shipping_cost,
        }
    }

    /// 零費率的自訂平台（手續費、稅、運費皆為 0）
    pub fn custom() -> Self {
        Self::new(
            "Custom".to_string(),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        )
    }

    /// 內建平台預設表
    pub fn presets() -> Vec<VendorProfile> {
        vec![
            Self::new(
                "Etsy".to_string(),
                Decimal::new(65, 3),
                Decimal::ZERO,
                Decimal::new(595, 2),
            ),
            Self::new(
                "Amazon Handmade".to_string(),
                Decimal::new(15, 2),
                Decimal::ZERO,
                Decimal::new(699, 2),
            ),
            Self::new(
                "Craft Fair".to_string(),
                Decimal::ZERO,
                Decimal::ZERO,
                Decimal::ZERO,
            ),
            Self::custom(),
        ]
    }

    /// 依名稱查找預設平台（不分大小寫）
    pub fn preset(name: &str) -> Option<VendorProfile> {
        Self::presets()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// 驗證費率參數
    pub fn validate(&self) -> crate::Result<()> {
        if self.fee_pct < Decimal::ZERO || self.fee_pct > Decimal::ONE {
            return Err(crate::CostError::InvalidConfiguration(format!(
                "平台 {} 的手續費率超出範圍 0..=1: {}",
                self.name, self.fee_pct
            )));
        }

        if self.tax_pct < Decimal::ZERO || self.tax_pct > Decimal::ONE {
            return Err(crate::CostError::InvalidConfiguration(format!(
                "平台 {} 的稅率超出範圍 0..=1: {}",
                self.name, self.tax_pct
            )));
        }

        if self.shipping_cost < Decimal::ZERO {
            return Err(crate::CostError::InvalidConfiguration(format!(
                "平台 {} 的運費為負值: {}",
                self.name, self.shipping_cost
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        let presets = VendorProfile::presets();
        assert!(!presets.is_empty());

        for preset in &presets {
            assert!(preset.validate().is_ok());
        }
    }

    #[test]
    fn test_custom_is_zero_fee() {
        let custom = VendorProfile::custom();
        assert_eq!(custom.fee_pct, Decimal::ZERO);
        assert_eq!(custom.tax_pct, Decimal::ZERO);
        assert_eq!(custom.shipping_cost, Decimal::ZERO);
    }

    #[test]
    fn test_preset_lookup() {
        let etsy = VendorProfile::preset("etsy").unwrap();
        assert_eq!(etsy.fee_pct, Decimal::new(65, 3));

        assert!(VendorProfile::preset("unknown-market").is_none());
    }

    #[test]
    fn test_validate_out_of_range_fee() {
        let vendor = VendorProfile::new(
            "BAD".to_string(),
            Decimal::new(15, 1), // 1.5 超出範圍
            Decimal::ZERO,
            Decimal::ZERO,
        );

        assert!(matches!(
            vendor.validate(),
            Err(crate::CostError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_negative_shipping() {
        let vendor = VendorProfile::new(
            "BAD".to_string(),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::from(-1),
        );

        assert!(vendor.validate().is_err());
    }
}
