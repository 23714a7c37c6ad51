//! 政策註冊表

use replenish_core::{ReplenishError, Result};

use crate::policy::PolicyKind;

/// 政策註冊表
///
/// 以登錄順序列出全部政策，並提供名稱查找（區分大小寫）。
/// 建立後不再變動。
pub struct AlgorithmRegistry {
    policies: Vec<PolicyKind>,
}

impl AlgorithmRegistry {
    /// 創建含全部內建政策的註冊表（來源系統的登錄順序）
    pub fn new() -> Self {
        Self {
            policies: vec![
                PolicyKind::Flat20,
                PolicyKind::NaiveReplenish,
                PolicyKind::SmartReplenish,
                PolicyKind::AiDesigned,
                PolicyKind::LookAheadLdTm,
            ],
        }
    }

    /// 全部政策（穩定順序）
    pub fn list(&self) -> &[PolicyKind] {
        &self.policies
    }

    /// 依名稱查找政策
    pub fn get(&self, name: &str) -> Result<PolicyKind> {
        self.policies
            .iter()
            .copied()
            .find(|p| p.name() == name)
            .ok_or_else(|| ReplenishError::UnknownAlgorithm(name.to_string()))
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_all_policies_in_order() {
        let registry = AlgorithmRegistry::new();
        let names: Vec<&str> = registry.list().iter().map(|p| p.name()).collect();

        assert_eq!(
            names,
            vec![
                "Flat20",
                "NaiveReplenish",
                "SmartReplenish",
                "AIDesigned",
                "LookAheadLdTm"
            ]
        );
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = AlgorithmRegistry::new();

        assert_eq!(
            registry.get("SmartReplenish").unwrap(),
            PolicyKind::SmartReplenish
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = AlgorithmRegistry::new();

        assert!(registry.get("smartreplenish").is_err());
    }

    #[test]
    fn test_unknown_name_fails() {
        let registry = AlgorithmRegistry::new();

        let err = registry.get("DoesNotExist").unwrap_err();
        assert!(matches!(err, ReplenishError::UnknownAlgorithm(name) if name == "DoesNotExist"));
    }
}
