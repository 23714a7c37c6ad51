//! # Replenish Calculation Engine
//!
//! 核心補貨計算引擎

pub mod engine;
pub mod policy;
pub mod projection;
pub mod registry;

// Re-export 主要類型
pub use engine::ScheduleCalculator;
pub use policy::{PolicyCalculator, PolicyKind};
pub use projection::ImpactCalculator;
pub use registry::AlgorithmRegistry;

/// 政策的名稱與描述（對外列舉用）
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AlgorithmInfo {
    /// 政策名稱
    pub name: String,

    /// 政策描述
    pub description: String,
}

impl From<PolicyKind> for AlgorithmInfo {
    fn from(policy: PolicyKind) -> Self {
        Self {
            name: policy.name().to_string(),
            description: policy.description().to_string(),
        }
    }
}
