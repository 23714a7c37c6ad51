//! # Replenish Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod scenario;
pub mod schedule;

// Re-export 主要類型
pub use config::PlanningConfig;
pub use scenario::{ProductionScenario, INV_NA, MAX_LEAD_TIME};
pub use schedule::{OrderSchedule, NOTE_EXCESS, NOTE_STOCKOUT};

/// 補貨引擎錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ReplenishError {
    #[error("找不到演算法: {0}")]
    UnknownAlgorithm(String),

    #[error("配置超出範圍: {field} = {value}（允許 {min}..={max}）")]
    ConfigOutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("物料 {mpn} 的期間序列長度不一致: {field} 為 {actual}，預期 {expected}")]
    SequenceLengthMismatch {
        mpn: String,
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("物料 {mpn} 沒有任何期間資料")]
    EmptyHorizon { mpn: String },

    #[error("物料 {mpn} 的提前期無效: {ld_tm}（允許 1..=20）")]
    InvalidLeadTime { mpn: String, ld_tm: usize },

    #[error("物料 {mpn} 的包裝量無效: {pk_qty}（必須 >= 1）")]
    InvalidPackQty { mpn: String, pk_qty: i64 },
}

pub type Result<T> = std::result::Result<T, ReplenishError>;
