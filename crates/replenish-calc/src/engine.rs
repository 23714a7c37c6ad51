//! 排程主計算器

use rayon::prelude::*;
use replenish_core::{OrderSchedule, ProductionScenario, INV_NA};

use crate::policy::{PolicyCalculator, PolicyKind};
use crate::projection::ImpactCalculator;

/// 排程計算器
///
/// 把單一場景轉成單一排程：驗證 → 準備 → 政策 → 影響投影，
/// 順序固定。政策只看得到需求與收貨輸入，看不到庫存投影。
pub struct ScheduleCalculator {
    policy: PolicyKind,
}

impl ScheduleCalculator {
    /// 創建使用指定政策的計算器
    pub fn new(policy: PolicyKind) -> Self {
        Self { policy }
    }

    /// 目前使用的政策
    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    /// 由場景準備排程骨架
    ///
    /// 複製識別與政策參數；rqt 照抄；場景的 rec 複製到 in_rec
    /// 保留原始收貨計劃；ord 與 rec 歸零；inv 照抄並把索引 0 之後
    /// 缺少具體值的位置補上哨兵。不修改輸入場景。
    pub fn prepare_order_schedule(&self, scenario: &ProductionScenario) -> OrderSchedule {
        let len = scenario.horizon_len();

        let mut inv = scenario.inv.clone();
        inv.resize(len, INV_NA);
        for slot in inv.iter_mut().skip(1) {
            if *slot < 0 {
                *slot = INV_NA;
            }
        }

        OrderSchedule {
            mpn: scenario.mpn.clone(),
            inv_tgt: scenario.inv_tgt,
            s_stok: scenario.s_stok,
            ld_tm: scenario.ld_tm,
            moq: scenario.moq,
            pk_qty: scenario.pk_qty,
            rqt: scenario.rqt.clone(),
            in_rec: scenario.rec.clone(),
            ord: vec![0; len],
            rec: vec![0; len],
            inv,
            notes: String::new(),
        }
    }

    /// 主計算入口：單一場景 → 排程
    pub fn calculate(&self, scenario: &ProductionScenario) -> replenish_core::Result<OrderSchedule> {
        tracing::debug!(mpn = %scenario.mpn, policy = self.policy.name(), "計算訂單排程");

        // Step 0: 驗證（政策執行前必須擋下無效的提前期/包裝量）
        scenario.validate()?;

        // Step 1: 準備排程骨架
        let mut schedule = self.prepare_order_schedule(scenario);

        // Step 2: 套用政策決定訂購量
        schedule.ord = PolicyCalculator::apply(self.policy, &schedule);

        // Step 3: 投影收貨與庫存影響
        let result = ImpactCalculator::project(&schedule);

        Ok(result)
    }

    /// 批次計算：只處理選取的場景（保持原有相對順序）
    ///
    /// 場景之間沒有共享狀態，以 rayon 平行計算。
    pub fn calculate_array(
        &self,
        scenarios: &[ProductionScenario],
    ) -> replenish_core::Result<Vec<OrderSchedule>> {
        let selected: Vec<&ProductionScenario> =
            scenarios.iter().filter(|s| s.sel).collect();

        tracing::info!(
            policy = self.policy.name(),
            total = scenarios.len(),
            selected = selected.len(),
            "開始批次排程計算"
        );

        let results = selected
            .into_par_iter()
            .map(|scenario| self.calculate(scenario))
            .collect::<replenish_core::Result<Vec<_>>>()?;

        tracing::info!(schedules = results.len(), "批次排程計算完成");

        Ok(results)
    }
}
