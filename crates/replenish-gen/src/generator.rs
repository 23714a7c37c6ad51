//! 隨機場景生成

use rand::Rng;
use replenish_core::{PlanningConfig, ProductionScenario};

/// 場景生成器
///
/// 產生形狀合理的測試場景；分布常數屬測試夾具行為，
/// 引擎不依賴任何一條規則。不保證可重現性，
/// 需要確定性時用 `generate_with_rng` 傳入固定種子。
pub struct ScenarioGenerator;

impl ScenarioGenerator {
    /// 以執行緒本地亂數源生成場景陣列
    pub fn generate(config: &PlanningConfig) -> Vec<ProductionScenario> {
        Self::generate_with_rng(config, &mut rand::thread_rng())
    }

    /// 以指定亂數源生成場景陣列（數量與期間皆已被配置夾到邊界）
    pub fn generate_with_rng<R: Rng>(
        config: &PlanningConfig,
        rng: &mut R,
    ) -> Vec<ProductionScenario> {
        (0..config.samples)
            .map(|index| Self::generate_scenario(index, config.horizon_len(), rng))
            .collect()
    }

    /// 生成單一隨機場景
    ///
    /// 範圍規則：InvTgt 為 10 的倍數（10..=200）；SStok 不超過
    /// InvTgt 的 5%（至少 1）；LdTm 1..=5；MOQ 為 10 的倍數
    /// （10..=100）；PkQty 為 5 的倍數且不超過 MOQ；需求/收貨
    /// 每期 0..=400；期初庫存落在 InvTgt ± SStok。
    fn generate_scenario<R: Rng>(
        index: usize,
        horizon_len: usize,
        rng: &mut R,
    ) -> ProductionScenario {
        let inv_tgt = rng.gen_range(1..=20) * 10;
        let s_stok = rng.gen_range(1..=(inv_tgt / 20).max(1));
        let ld_tm = rng.gen_range(1..=5);
        let moq = rng.gen_range(1..=10) * 10;
        let pk_qty = rng.gen_range(1..=moq / 5) * 5;

        let rqt: Vec<i64> = (0..horizon_len).map(|_| rng.gen_range(0..=400)).collect();
        let rec: Vec<i64> = (0..horizon_len).map(|_| rng.gen_range(0..=400)).collect();

        let starting_inv = rng.gen_range(inv_tgt - s_stok..=inv_tgt + s_stok);

        ProductionScenario::new(Self::generate_mpn(index), starting_inv, horizon_len)
            .with_policy(inv_tgt, s_stok, ld_tm as usize, moq, pk_qty)
            .with_rqt(rqt)
            .with_rec(rec)
    }

    /// 生成 MPN_XXX 格式的料號
    fn generate_mpn(index: usize) -> String {
        const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

        let mut mpn = String::from("MPN_");
        if index < 26 {
            let c = LETTERS[index % 26] as char;
            mpn.push(c);
            mpn.push(c);
            mpn.push(c);
        } else {
            // 第三碼錯開，避免與三同字母形式重複
            mpn.push(LETTERS[index / 26 - 1] as char);
            mpn.push(LETTERS[index % 26] as char);
            mpn.push(LETTERS[(index + 13) % 26] as char);
        }
        mpn
    }
}
