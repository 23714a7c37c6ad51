//! 訂購政策實現

use replenish_core::OrderSchedule;
use serde::{Deserialize, Serialize};

/// 訂購政策
///
/// 封閉的政策集合：每個變體決定「每期訂購多少」。
/// 政策只讀取需求、原始收貨計劃與政策參數，從不讀取投影庫存。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyKind {
    /// 每期固定訂購 20，忽略其他欄位
    Flat20,

    /// 只覆蓋當期需求
    NaiveReplenish,

    /// 覆蓋當期需求，另考慮目標庫存與安全庫存
    SmartReplenish,

    /// 以提前期為窗口前瞻，整窗需求集中於窗口首期下單
    LookAheadLdTm,

    /// 以本地庫存模擬前瞻提前期的啟發式政策
    AiDesigned,
}

impl PolicyKind {
    /// 政策名稱（註冊表查找用，區分大小寫）
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Flat20 => "Flat20",
            PolicyKind::NaiveReplenish => "NaiveReplenish",
            PolicyKind::SmartReplenish => "SmartReplenish",
            PolicyKind::LookAheadLdTm => "LookAheadLdTm",
            PolicyKind::AiDesigned => "AIDesigned",
        }
    }

    /// 政策描述
    pub fn description(&self) -> &'static str {
        match self {
            PolicyKind::Flat20 => "Orders 20 units, regardless of Rqt or Inv",
            PolicyKind::NaiveReplenish => {
                "Reorders this weeks consumption, regardless of Rqt or Inv"
            }
            PolicyKind::SmartReplenish => {
                "Reorders this weeks consumption but also considers InvTgt and SStok"
            }
            PolicyKind::LookAheadLdTm => "Looks ahead LdTm weeks and orders, then skips LdTm weeks",
            PolicyKind::AiDesigned => {
                "Replenishment algorithm designed by AI after teaching it inventory concepts in English"
            }
        }
    }
}

/// 政策計算器
///
/// 由已準備好的排程（需求、原始收貨、政策參數）計算完整的訂購序列。
/// 呼叫前排程必須通過場景驗證（提前期在 1..=20、包裝量 >= 1）。
pub struct PolicyCalculator;

impl PolicyCalculator {
    /// 套用政策，回傳每期訂購量序列
    pub fn apply(policy: PolicyKind, schedule: &OrderSchedule) -> Vec<i64> {
        match policy {
            PolicyKind::Flat20 => Self::flat20(schedule),
            PolicyKind::NaiveReplenish => Self::naive_replenish(schedule),
            PolicyKind::SmartReplenish => Self::smart_replenish(schedule),
            PolicyKind::LookAheadLdTm => Self::look_ahead_ld_tm(schedule),
            PolicyKind::AiDesigned => Self::ai_designed(schedule),
        }
    }

    /// 每期固定 20
    fn flat20(schedule: &OrderSchedule) -> Vec<i64> {
        vec![20; schedule.horizon_len()]
    }

    /// 只覆蓋當期需求，套用 MOQ / 包裝量限制
    fn naive_replenish(schedule: &OrderSchedule) -> Vec<i64> {
        schedule
            .rqt
            .iter()
            .map(|&requirement| schedule.normalize_order_qty(requirement.max(schedule.moq)))
            .collect()
    }

    /// 同 NaiveReplenish，但結果低於目標 + 安全庫存時提升到該水位
    /// （提升後不再重新湊整）
    fn smart_replenish(schedule: &OrderSchedule) -> Vec<i64> {
        let target_qty = schedule.inv_tgt + schedule.s_stok;

        schedule
            .rqt
            .iter()
            .map(|&requirement| {
                let normalized = schedule.normalize_order_qty(requirement.max(schedule.moq));
                normalized.max(target_qty)
            })
            .collect()
    }

    /// 以提前期為步長跳躍：彙總窗口內的需求與原始收貨，
    /// 淨需求下限為 0，湊整後整筆下在窗口首期
    fn look_ahead_ld_tm(schedule: &OrderSchedule) -> Vec<i64> {
        let len = schedule.horizon_len();
        let mut ord = vec![0i64; len];

        let mut week = 0;
        while week < len {
            let window_end = (week + schedule.ld_tm).min(len);
            let total_rqt: i64 = schedule.rqt[week..window_end].iter().sum();
            let total_in_rec: i64 = schedule.in_rec[week..window_end].iter().sum();

            let net = (total_rqt - total_in_rec).max(0);
            if net > 0 {
                ord[week] = schedule.normalize_order_qty(net);
            }

            week += schedule.ld_tm;
        }

        ord
    }

    /// AI 設計的啟發式政策，優先序：
    /// 1. 不讓庫存低於需求
    /// 2. 避免庫存連續超過目標的 3 倍
    /// 3. 讓庫存貼近目標 + 安全庫存
    fn ai_designed(schedule: &OrderSchedule) -> Vec<i64> {
        let len = schedule.horizon_len();
        let mut ord = vec![0i64; len];

        // 政策自帶的滾動庫存，不讀取排程的 inv 欄位
        let mut current_inventory = schedule.inv.first().copied().unwrap_or(0);

        for week in 0..len {
            // 在提前期窗口內模擬未來庫存（不計尚未決定的訂單），
            // 窗口碰到期末時提前結束
            let mut projected = vec![0i64; schedule.ld_tm + 1];
            projected[0] = current_inventory;
            let mut steps = 0;

            for i in 0..schedule.ld_tm {
                if week + i >= len {
                    break;
                }
                projected[i + 1] = projected[i] + schedule.in_rec[week + i] - schedule.rqt[week + i];
                steps = i + 1;
            }

            // 只有模擬滿整個提前期才讀模擬值；窗口被截斷時
            // 讀到的是緩衝區的 0 填充，期末幾期因此會補到滿目標
            let projected_future = if steps == schedule.ld_tm {
                projected[schedule.ld_tm]
            } else {
                0
            };
            let lead_time_index = (week + schedule.ld_tm).min(len - 1);

            // 優先序 1：到貨當期的需求必須被覆蓋
            let min_needed = (schedule.rqt[lead_time_index] - projected_future).max(0);

            // 優先序 3：補到目標 + 安全庫存
            let target = schedule.inv_tgt + schedule.s_stok - projected_future;

            let mut optimal = min_needed.max(target);

            // 優先序 2：下單後若超過目標的 3 倍則縮減，但不犧牲需求覆蓋
            if projected_future + optimal > 3 * schedule.inv_tgt {
                optimal = min_needed.max(schedule.inv_tgt - projected_future);
            }

            if optimal > 0 {
                optimal = schedule.normalize_order_qty(optimal);
            }

            ord[week] = optimal;

            // 推進滾動庫存；訂單只有在提前期內到貨才計入
            current_inventory += schedule.in_rec[week] - schedule.rqt[week];
            if week + schedule.ld_tm < len {
                current_inventory += optimal;
            }
            current_inventory = current_inventory.max(0);
        }

        ord
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn prepared_schedule() -> OrderSchedule {
        // spec 範例場景：InvTgt=100, SStok=5, LdTm=2, MOQ=50, PkQty=10
        let len = 3;
        OrderSchedule {
            mpn: "MPN_AAA".to_string(),
            inv_tgt: 100,
            s_stok: 5,
            ld_tm: 2,
            moq: 50,
            pk_qty: 10,
            rqt: vec![50, 70, 90],
            in_rec: vec![0, 0, 50],
            ord: vec![0; len],
            rec: vec![0; len],
            inv: vec![120, -1, -1],
            notes: String::new(),
        }
    }

    #[test]
    fn test_flat20() {
        let schedule = prepared_schedule();
        let ord = PolicyCalculator::apply(PolicyKind::Flat20, &schedule);

        assert_eq!(ord, vec![20, 20, 20]);
    }

    #[test]
    fn test_naive_replenish() {
        let schedule = prepared_schedule();
        let ord = PolicyCalculator::apply(PolicyKind::NaiveReplenish, &schedule);

        // max(50, MOQ 50) = 50，已是 10 的倍數
        assert_eq!(ord[0], 50);
        // max(70, 50) = 70
        assert_eq!(ord[1], 70);
        // max(90, 50) = 90
        assert_eq!(ord[2], 90);
    }

    #[test]
    fn test_naive_respects_moq_and_pack() {
        let mut schedule = prepared_schedule();
        schedule.rqt = vec![5, 53, 0];

        let ord = PolicyCalculator::apply(PolicyKind::NaiveReplenish, &schedule);

        // 5 提升至 MOQ 50
        assert_eq!(ord[0], 50);
        // 53 提升後湊整到 60
        assert_eq!(ord[1], 60);
        // Naive 對 0 需求仍下 MOQ（原始行為：max(0, MOQ)）
        assert_eq!(ord[2], 50);
    }

    #[test]
    fn test_smart_replenish_spec_example() {
        let schedule = prepared_schedule();
        let ord = PolicyCalculator::apply(PolicyKind::SmartReplenish, &schedule);

        // Naive 湊整得 50，低於 InvTgt + SStok = 105，提升至 105；
        // 提升發生在湊整之後，105 不再套包裝量
        assert_eq!(ord[0], 105);
    }

    #[test]
    fn test_smart_keeps_normalized_when_above_target() {
        let mut schedule = prepared_schedule();
        schedule.rqt = vec![200, 0, 0];

        let ord = PolicyCalculator::apply(PolicyKind::SmartReplenish, &schedule);

        // 200 已超過 105，維持湊整後的 200
        assert_eq!(ord[0], 200);
    }

    #[test]
    fn test_look_ahead_window_placement() {
        let schedule = prepared_schedule();
        let ord = PolicyCalculator::apply(PolicyKind::LookAheadLdTm, &schedule);

        // 窗口 [0,2)：需求 120 − 收貨 0 = 120，下在第 0 期
        assert_eq!(ord[0], 120);
        // 非窗口首期必為 0
        assert_eq!(ord[1], 0);
        // 窗口 [2,3)：需求 90 − 收貨 50 = 40，提升至 MOQ 50
        assert_eq!(ord[2], 50);
    }

    #[test]
    fn test_look_ahead_covered_window_orders_nothing() {
        let mut schedule = prepared_schedule();
        schedule.in_rec = vec![100, 100, 100];

        let ord = PolicyCalculator::apply(PolicyKind::LookAheadLdTm, &schedule);

        // 每個窗口的收貨都超過需求，淨需求為 0
        assert_eq!(ord, vec![0, 0, 0]);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(5)]
    fn test_look_ahead_off_boundary_zero(#[case] ld_tm: usize) {
        let mut schedule = prepared_schedule();
        schedule.ld_tm = ld_tm;
        schedule.rqt = vec![80; 9];
        schedule.in_rec = vec![0; 9];
        schedule.ord = vec![0; 9];
        schedule.rec = vec![0; 9];
        schedule.inv = vec![100, -1, -1, -1, -1, -1, -1, -1, -1];

        let ord = PolicyCalculator::apply(PolicyKind::LookAheadLdTm, &schedule);

        for (week, &qty) in ord.iter().enumerate() {
            if week % ld_tm == 0 {
                assert!(qty > 0, "窗口首期 {week} 應該下單");
            } else {
                assert_eq!(qty, 0, "非窗口首期 {week} 應為 0");
            }
        }
    }

    #[test]
    fn test_ai_designed_covers_requirements() {
        let schedule = prepared_schedule();
        let ord = PolicyCalculator::apply(PolicyKind::AiDesigned, &schedule);

        assert_eq!(ord.len(), 3);
        // 正訂單必須符合 MOQ / 包裝量限制
        for &qty in &ord {
            if qty > 0 {
                assert!(qty >= schedule.moq);
                assert_eq!(qty % schedule.pk_qty, 0);
            }
        }
    }

    #[test]
    fn test_ai_designed_worked_example_exact() {
        let schedule = prepared_schedule();
        let ord = PolicyCalculator::apply(PolicyKind::AiDesigned, &schedule);

        // 第 0 期：完整窗口模擬到 0，補到 105 → 湊整 110
        // 第 1 期：模擬到 70，min=20、target=35 → 提升至 MOQ 50
        // 第 2 期：窗口被截斷讀到 0 填充，補到 105 → 湊整 110
        assert_eq!(ord, vec![110, 50, 110]);
    }

    #[test]
    fn test_ai_designed_caps_excess() {
        // 期初庫存已經很高：政策應縮減訂單而不是衝過 3 倍目標
        let mut schedule = prepared_schedule();
        schedule.inv[0] = 290;
        schedule.rqt = vec![0, 0, 0];
        schedule.in_rec = vec![0, 0, 0];

        let ord = PolicyCalculator::apply(PolicyKind::AiDesigned, &schedule);

        // 前兩期完整窗口模擬到 290，目標差額為負 → 訂 0；
        // 最後一期窗口被截斷讀到 0 填充，補到 105 → 湊整 110
        assert_eq!(ord, vec![0, 0, 110]);
    }

    #[test]
    fn test_ai_designed_lead_time_beyond_horizon() {
        // 提前期長於整個期間：每期的窗口都被截斷，
        // 投影值一律為 0 填充，且訂單到貨都落在期末之外
        let mut schedule = prepared_schedule();
        schedule.ld_tm = 5;

        let ord = PolicyCalculator::apply(PolicyKind::AiDesigned, &schedule);

        // 每期 min=90、target=105 → 105 → 湊整 110
        assert_eq!(ord, vec![110, 110, 110]);
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(PolicyKind::Flat20.name(), "Flat20");
        assert_eq!(PolicyKind::AiDesigned.name(), "AIDesigned");
        assert!(!PolicyKind::LookAheadLdTm.description().is_empty());
    }
}
