//! 訂單影響投影

use replenish_core::{OrderSchedule, NOTE_EXCESS, NOTE_STOCKOUT};

/// 連續高庫存的警告門檻（期數）
const EXCESS_CONSECUTIVE_WEEKS: usize = 2;

/// 影響投影計算器
pub struct ImpactCalculator;

impl ImpactCalculator {
    /// 計算訂單對收貨與庫存的影響
    ///
    /// 純函數：深複製輸入，呼叫方的排程不會被修改。結果只由
    /// rqt、ord、ld_tm 與期初庫存決定——投影前 rec 重新歸零，
    /// 因此對同一排程重複投影會得到相同結果。
    pub fn project(schedule: &OrderSchedule) -> OrderSchedule {
        let mut result = schedule.clone();
        let len = result.horizon_len();

        // a. 依提前期平移訂單得到投影收貨；
        //    超出期末的到貨歸入最後一期而不是被丟棄
        result.rec = vec![0; len];
        for (week, &qty) in result.ord.iter().enumerate() {
            if qty == 0 {
                continue;
            }
            // checked_add：重投影入口不經過場景驗證，
            // 荒謬的提前期一樣歸入最後一期而不是溢位
            match week.checked_add(result.ld_tm) {
                Some(arrival) if arrival < len => result.rec[arrival] += qty,
                _ => result.rec[len - 1] += qty,
            }
        }

        // b. 投影庫存：期初值照抄，其後逐期扣掉未被收貨覆蓋的需求，
        //    下限為 0（缺貨停在 0，不會變成負數）
        for i in 1..len {
            let consumed = result.rqt[i] - result.rec[i];
            result.inv[i] = (result.inv[i - 1] - consumed).max(0);
        }

        // c. 產生警告備註
        result.notes = Self::build_notes(&result);

        result
    }

    /// 掃描投影庫存，組出警告字串（以單一空格串接，無警告為空字串）
    fn build_notes(schedule: &OrderSchedule) -> String {
        let mut notes: Vec<&str> = Vec::new();

        if schedule.has_stockout() {
            notes.push(NOTE_STOCKOUT);
        }

        // 連續 2 期以上超過目標的 3 倍只警告一次，找到即停
        let mut consecutive = 0;
        for &inv in &schedule.inv {
            if inv > 3 * schedule.inv_tgt {
                consecutive += 1;
                if consecutive >= EXCESS_CONSECUTIVE_WEEKS {
                    notes.push(NOTE_EXCESS);
                    break;
                }
            } else {
                consecutive = 0;
            }
        }

        notes.join(" ")
    }
}
