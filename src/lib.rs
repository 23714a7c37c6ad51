//! # Replenish
//!
//! 週期性補貨排程引擎：把每個物料的需求/庫存場景，依可替換的
//! 訂購政策轉成多期的訂單、收貨與庫存投影。
//!
//! 此 crate 是對外的單一門面，協作層（HTTP、UI 等）只需要這裡的
//! 入口；核心實現在 `replenish-core` / `replenish-calc` /
//! `replenish-gen`。

pub use replenish_calc::{
    AlgorithmInfo, AlgorithmRegistry, ImpactCalculator, PolicyKind, ScheduleCalculator,
};
pub use replenish_core::{
    OrderSchedule, PlanningConfig, ProductionScenario, ReplenishError, Result, INV_NA,
    NOTE_EXCESS, NOTE_STOCKOUT,
};
pub use replenish_gen::{DataSource, ScenarioGenerator};

/// 列出全部政策的名稱與描述（穩定順序）
pub fn list_algorithms() -> Vec<AlgorithmInfo> {
    AlgorithmRegistry::new()
        .list()
        .iter()
        .copied()
        .map(AlgorithmInfo::from)
        .collect()
}

/// 依名稱查找政策（區分大小寫；未知名稱回傳 UnknownAlgorithm）
pub fn algorithm_by_name(name: &str) -> Result<PolicyKind> {
    AlgorithmRegistry::new().get(name)
}

/// 以指定政策計算單一場景的訂單排程
pub fn calculate_order_schedule(
    scenario: &ProductionScenario,
    policy: PolicyKind,
) -> Result<OrderSchedule> {
    ScheduleCalculator::new(policy).calculate(scenario)
}

/// 以指定政策批次計算（只處理選取的場景，保持相對順序）
pub fn calculate_order_schedule_array(
    scenarios: &[ProductionScenario],
    policy: PolicyKind,
) -> Result<Vec<OrderSchedule>> {
    ScheduleCalculator::new(policy).calculate_array(scenarios)
}

/// 重新投影排程的收貨/庫存/警告（手動編輯 Ord 之後呼叫）
pub fn calculate_order_schedule_impacts(schedule: &OrderSchedule) -> OrderSchedule {
    ImpactCalculator::project(schedule)
}

/// 生成隨機場景陣列（數量與期間由配置決定）
pub fn generate_scenarios(config: &PlanningConfig) -> Vec<ProductionScenario> {
    ScenarioGenerator::generate(config)
}

/// 名稱查找 + 批次計算的便利入口
pub fn calculate_orders(
    scenarios: &[ProductionScenario],
    algorithm_name: &str,
) -> Result<Vec<OrderSchedule>> {
    let policy = algorithm_by_name(algorithm_name)?;
    calculate_order_schedule_array(scenarios, policy)
}

/// 依名稱取得場景資料來源（未知名稱回傳新的隨機來源）
pub fn scenarios_from_source(name: &str, config: &PlanningConfig) -> Vec<ProductionScenario> {
    DataSource::by_name(name, config).scenarios
}
