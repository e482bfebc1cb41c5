//! 落地成本計算

use bowcost_core::VendorProfile;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 落地成本拆解
///
/// 不變量：`total == base_cost + vendor_fee + tax + shipping_cost`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// 材料成本
    pub base_cost: Decimal,

    /// 平台手續費
    pub vendor_fee: Decimal,

    /// 稅金
    pub tax: Decimal,

    /// 運費
    pub shipping_cost: Decimal,

    /// 落地總成本
    pub total: Decimal,
}

impl CostBreakdown {
    /// 全零拆解
    pub fn zero() -> Self {
        Self {
            base_cost: Decimal::ZERO,
            vendor_fee: Decimal::ZERO,
            tax: Decimal::ZERO,
            shipping_cost: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

/// 費用計算器
pub struct FeeCalculator;

impl FeeCalculator {
    /// 計算落地成本
    ///
    /// 稅基為「成本 + 手續費」而非成本本身，對應市集常見的費用疊加順序，
    /// 此順序為業務規則，不可更動
    pub fn breakdown(
        base_cost: Decimal,
        vendor: &VendorProfile,
    ) -> bowcost_core::Result<CostBreakdown> {
        vendor.validate()?;

        if base_cost < Decimal::ZERO {
            return Err(bowcost_core::CostError::InvalidConfiguration(format!(
                "材料成本不可為負值: {}",
                base_cost
            )));
        }

        let vendor_fee = base_cost * vendor.fee_pct;
        let tax = (base_cost + vendor_fee) * vendor.tax_pct;
        let total = base_cost + vendor_fee + tax + vendor.shipping_cost;

        Ok(CostBreakdown {
            base_cost,
            vendor_fee,
            tax,
            shipping_cost: vendor.shipping_cost,
            total,
        })
    }
}
