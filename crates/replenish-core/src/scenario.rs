//! 生產場景模型

use serde::{Deserialize, Serialize};

use crate::{ReplenishError, Result};

/// 提前期上限（期數），與計劃期間上限一致
pub const MAX_LEAD_TIME: usize = crate::config::MAX_PERIODS;

/// 庫存序列的「不適用」哨兵值
///
/// 索引 0 之後的庫存在投影計算前沒有意義，以 -1 表示。
pub const INV_NA: i64 = -1;

/// 生產場景（每個物料一筆的計算輸入）
///
/// 三個期間序列等長，長度 = 期間數 + 1（索引 0 為當前期）。
/// 數量一律為整數單位。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductionScenario {
    /// 是否選取（批次計算只處理選取的場景）
    pub sel: bool,

    /// 製造商料號（陣列內唯一）
    #[serde(rename = "MPN")]
    pub mpn: String,

    /// 庫存序列：索引 0 為期初庫存，其餘為 INV_NA
    pub inv: Vec<i64>,

    /// 目標庫存水位
    pub inv_tgt: i64,

    /// 安全庫存
    pub s_stok: i64,

    /// 提前期（期數）
    pub ld_tm: usize,

    /// 最小訂購量
    #[serde(rename = "MOQ")]
    pub moq: i64,

    /// 包裝量（訂單必須為其整數倍）
    pub pk_qty: i64,

    /// 需求預測序列
    pub rqt: Vec<i64>,

    /// 既定收貨序列
    pub rec: Vec<i64>,
}

impl ProductionScenario {
    /// 創建新的場景：序列皆為 horizon_len 長，需求/收貨為零，
    /// 庫存只有期初值，其餘為哨兵
    pub fn new(mpn: impl Into<String>, starting_inv: i64, horizon_len: usize) -> Self {
        let mut inv = vec![INV_NA; horizon_len];
        if let Some(first) = inv.first_mut() {
            *first = starting_inv;
        }

        Self {
            sel: true,
            mpn: mpn.into(),
            inv,
            inv_tgt: 0,
            s_stok: 0,
            ld_tm: 1,
            moq: 0,
            pk_qty: 1,
            rqt: vec![0; horizon_len],
            rec: vec![0; horizon_len],
        }
    }

    /// 建構器模式：設置政策參數
    pub fn with_policy(mut self, inv_tgt: i64, s_stok: i64, ld_tm: usize, moq: i64, pk_qty: i64) -> Self {
        self.inv_tgt = inv_tgt;
        self.s_stok = s_stok;
        self.ld_tm = ld_tm;
        self.moq = moq;
        self.pk_qty = pk_qty;
        self
    }

    /// 建構器模式：設置需求序列
    pub fn with_rqt(mut self, rqt: Vec<i64>) -> Self {
        self.rqt = rqt;
        self
    }

    /// 建構器模式：設置既定收貨序列
    pub fn with_rec(mut self, rec: Vec<i64>) -> Self {
        self.rec = rec;
        self
    }

    /// 建構器模式：設置選取旗標
    pub fn with_sel(mut self, sel: bool) -> Self {
        self.sel = sel;
        self
    }

    /// 序列長度（期間數 + 1）
    pub fn horizon_len(&self) -> usize {
        self.rqt.len()
    }

    /// 驗證場景形狀與政策參數
    ///
    /// 政策計算前必須通過：序列等長且非空、提前期在 1..=20、
    /// 包裝量 >= 1。LookAheadLdTm 以提前期為步長跳躍，ld_tm 為 0 時
    /// 迴圈不會前進；上限則擋下反序列化進來的荒謬值，
    /// 避免索引運算溢位。
    pub fn validate(&self) -> Result<()> {
        let expected = self.rqt.len();
        if expected == 0 {
            return Err(ReplenishError::EmptyHorizon {
                mpn: self.mpn.clone(),
            });
        }

        for (field, len) in [("Rec", self.rec.len()), ("Inv", self.inv.len())] {
            if len != expected {
                return Err(ReplenishError::SequenceLengthMismatch {
                    mpn: self.mpn.clone(),
                    field,
                    expected,
                    actual: len,
                });
            }
        }

        if self.ld_tm < 1 || self.ld_tm > MAX_LEAD_TIME {
            return Err(ReplenishError::InvalidLeadTime {
                mpn: self.mpn.clone(),
                ld_tm: self.ld_tm,
            });
        }

        if self.pk_qty < 1 {
            return Err(ReplenishError::InvalidPackQty {
                mpn: self.mpn.clone(),
                pk_qty: self.pk_qty,
            });
        }

        Ok(())
    }
}
