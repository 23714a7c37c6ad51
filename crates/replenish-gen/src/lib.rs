//! # Replenish Gen
//!
//! 場景生成與固定測試資料來源

pub mod data_source;
pub mod generator;

// Re-export 主要類型
pub use data_source::DataSource;
pub use generator::ScenarioGenerator;
