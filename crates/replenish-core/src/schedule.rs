//! 訂單排程模型

use serde::{Deserialize, Serialize};

/// 缺貨警告（投影庫存出現 0）
pub const NOTE_STOCKOUT: &str = "WARNING: Inventory will reach zero in some periods.";

/// 超量警告（投影庫存連續 2 期以上超過目標的 3 倍）
pub const NOTE_EXCESS: &str = "WARNING: Inventory exceeds 3x target for 2+ consecutive weeks.";

/// 訂單排程（每個物料一筆的計算結果）
///
/// `in_rec` 保留場景原有的收貨計劃；`rec` 則是投影後的總收貨
/// （依提前期平移的訂單），兩者意義不同。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderSchedule {
    /// 製造商料號
    #[serde(rename = "MPN")]
    pub mpn: String,

    /// 目標庫存水位
    pub inv_tgt: i64,

    /// 安全庫存
    pub s_stok: i64,

    /// 提前期（期數）
    pub ld_tm: usize,

    /// 最小訂購量
    #[serde(rename = "MOQ")]
    pub moq: i64,

    /// 包裝量
    pub pk_qty: i64,

    /// 需求預測序列（自場景複製）
    pub rqt: Vec<i64>,

    /// 原始收貨計劃（場景的 rec 複本）
    pub in_rec: Vec<i64>,

    /// 建議訂購量（決策變數，由政策填入）
    pub ord: Vec<i64>,

    /// 投影後的總收貨
    pub rec: Vec<i64>,

    /// 投影後的庫存
    pub inv: Vec<i64>,

    /// 警告備註（無警告時為空字串）
    pub notes: String,
}

impl OrderSchedule {
    /// 序列長度（期間數 + 1）
    pub fn horizon_len(&self) -> usize {
        self.rqt.len()
    }

    /// 將原始訂購量調整為符合 MOQ / 包裝量限制
    ///
    /// 非正數維持 0（零訂單不套用 MOQ 下限）；正數先提升至 MOQ，
    /// 再向上湊整到包裝量的倍數。
    pub fn normalize_order_qty(&self, quantity: i64) -> i64 {
        if quantity <= 0 {
            return 0;
        }

        let mut quantity = quantity.max(self.moq);

        let remainder = quantity % self.pk_qty;
        if remainder != 0 {
            quantity = quantity - remainder + self.pk_qty;
        }

        quantity
    }

    /// 投影庫存是否在某期歸零
    pub fn has_stockout(&self) -> bool {
        self.inv.iter().any(|&v| v == 0)
    }
}
