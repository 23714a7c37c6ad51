//! 固定場景資料來源

use replenish_core::{PlanningConfig, ProductionScenario};
use serde::{Deserialize, Serialize};

use crate::generator::ScenarioGenerator;

/// 具名的場景資料來源
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSource {
    /// 來源名稱
    pub name: String,

    /// 來源描述
    pub desc: String,

    /// 場景陣列
    pub scenarios: Vec<ProductionScenario>,
}

impl DataSource {
    /// 依名稱取得資料來源
    ///
    /// 未知名稱與 "Random" 一樣回傳新的隨機來源（沿用來源系統的
    /// 後備行為），因此查找不會失敗。
    pub fn by_name(name: &str, config: &PlanningConfig) -> DataSource {
        match name {
            "StaticRandom" => Self::static_random(),
            "Customer" => Self::customer(),
            "Scenario3" => Self::scenario3(),
            _ => Self::random(config),
        }
    }

    /// 每次呼叫重新生成的隨機來源
    pub fn random(config: &PlanningConfig) -> DataSource {
        DataSource {
            name: "Random".to_string(),
            desc: "Random".to_string(),
            scenarios: ScenarioGenerator::generate(config),
        }
    }

    /// 固定場景組 1（13 期）
    pub fn static_random() -> DataSource {
        DataSource {
            name: "StaticRandom".to_string(),
            desc: "Scenario1".to_string(),
            scenarios: vec![
                ProductionScenario::new("MPN_AAA", 120, 13)
                    .with_policy(100, 5, 2, 50, 10)
                    .with_rqt(vec![50, 70, 90, 40, 60, 80, 100, 50, 70, 90, 40, 60, 80])
                    .with_rec(vec![0, 0, 50, 100, 50, 0, 50, 100, 0, 0, 50, 100, 0]),
                ProductionScenario::new("MPN_BBB", 80, 13)
                    .with_policy(150, 7, 3, 70, 5)
                    .with_rqt(vec![30, 40, 50, 60, 70, 80, 90, 100, 90, 80, 70, 60, 50])
                    .with_rec(vec![50, 0, 0, 70, 0, 0, 70, 0, 0, 70, 0, 0, 70]),
                ProductionScenario::new("MPN_CCC", 200, 13)
                    .with_policy(160, 8, 4, 40, 10)
                    .with_rqt(vec![100, 80, 60, 40, 100, 80, 60, 40, 100, 80, 60, 40, 100])
                    .with_rec(vec![0, 40, 0, 40, 0, 40, 0, 40, 0, 40, 0, 40, 0]),
            ],
        }
    }

    /// 固定場景組 2（13 期）
    pub fn customer() -> DataSource {
        DataSource {
            name: "Customer".to_string(),
            desc: "Scenario2".to_string(),
            scenarios: vec![
                ProductionScenario::new("MPN_DEF", 90, 13)
                    .with_policy(80, 4, 1, 20, 5)
                    .with_rqt(vec![20, 25, 30, 35, 40, 45, 50, 55, 60, 65, 70, 75, 80])
                    .with_rec(vec![20, 20, 20, 20, 40, 40, 40, 60, 60, 60, 80, 80, 80]),
                ProductionScenario::new("MPN_GHI", 150, 13)
                    .with_policy(120, 6, 2, 30, 5)
                    .with_rqt(vec![40, 40, 40, 60, 60, 60, 80, 80, 80, 100, 100, 100, 80])
                    .with_rec(vec![0, 30, 30, 30, 60, 60, 60, 90, 90, 90, 120, 120, 90]),
            ],
        }
    }

    /// 固定場景組 3（13 期）
    pub fn scenario3() -> DataSource {
        DataSource {
            name: "Scenario3".to_string(),
            desc: "Scenario3".to_string(),
            scenarios: vec![
                ProductionScenario::new("MPN_JKL", 50, 13)
                    .with_policy(60, 3, 3, 40, 10)
                    .with_rqt(vec![10, 15, 20, 25, 30, 35, 40, 45, 50, 55, 60, 65, 70])
                    .with_rec(vec![40, 0, 0, 40, 0, 0, 40, 0, 0, 40, 0, 0, 40]),
                ProductionScenario::new("MPN_MNO", 120, 13)
                    .with_policy(100, 5, 4, 60, 15)
                    .with_rqt(vec![30, 30, 30, 30, 50, 50, 50, 50, 70, 70, 70, 70, 60])
                    .with_rec(vec![0, 0, 0, 60, 0, 0, 0, 60, 0, 0, 0, 60, 0]),
                ProductionScenario::new("MPN_PQR", 200, 13)
                    .with_policy(180, 9, 5, 90, 15)
                    .with_rqt(vec![50, 60, 70, 80, 90, 100, 90, 80, 70, 60, 50, 40, 30])
                    .with_rec(vec![90, 0, 0, 0, 0, 90, 0, 0, 0, 0, 90, 0, 0]),
            ],
        }
    }
}
