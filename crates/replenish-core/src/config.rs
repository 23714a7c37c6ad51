//! 計劃配置模型

use serde::{Deserialize, Serialize};

use crate::{ReplenishError, Result};

/// 預設計劃期間數（當前期之外的未來期數）
pub const DEFAULT_PERIODS: usize = 12;
/// 預設場景樣本數
pub const DEFAULT_SAMPLES: usize = 10;

pub const MIN_PERIODS: usize = 1;
pub const MAX_PERIODS: usize = 20;
pub const MIN_SAMPLES: usize = 1;
pub const MAX_SAMPLES: usize = 30;

/// 計劃配置
///
/// 取代來源系統的全域 PERIODS / SAMPLES 變數：不可變，
/// 由呼叫方顯式傳入生成器與引擎，不讀取任何環境狀態。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// 計劃期間數（序列長度 = periods + 1，索引 0 為當前期）
    pub periods: usize,

    /// 場景樣本數（生成器使用）
    pub samples: usize,
}

impl PlanningConfig {
    /// 創建新的計劃配置，超出範圍的值夾到邊界
    pub fn new(periods: usize, samples: usize) -> Self {
        Self {
            periods: periods.clamp(MIN_PERIODS, MAX_PERIODS),
            samples: samples.clamp(MIN_SAMPLES, MAX_SAMPLES),
        }
    }

    /// 創建新的計劃配置，超出範圍的值回報錯誤而不是夾到邊界
    ///
    /// 接收外部輸入（API、配置檔）時用這個版本。
    pub fn try_new(periods: usize, samples: usize) -> Result<Self> {
        if !(MIN_PERIODS..=MAX_PERIODS).contains(&periods) {
            return Err(ReplenishError::ConfigOutOfRange {
                field: "periods",
                value: periods as i64,
                min: MIN_PERIODS as i64,
                max: MAX_PERIODS as i64,
            });
        }
        if !(MIN_SAMPLES..=MAX_SAMPLES).contains(&samples) {
            return Err(ReplenishError::ConfigOutOfRange {
                field: "samples",
                value: samples as i64,
                min: MIN_SAMPLES as i64,
                max: MAX_SAMPLES as i64,
            });
        }
        Ok(Self { periods, samples })
    }

    /// 建構器模式：設置期間數（夾到邊界）
    pub fn with_periods(mut self, periods: usize) -> Self {
        self.periods = periods.clamp(MIN_PERIODS, MAX_PERIODS);
        self
    }

    /// 建構器模式：設置樣本數（夾到邊界）
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples.clamp(MIN_SAMPLES, MAX_SAMPLES);
        self
    }

    /// 序列長度（期間數 + 當前期）
    pub fn horizon_len(&self) -> usize {
        self.periods + 1
    }
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            periods: DEFAULT_PERIODS,
            samples: DEFAULT_SAMPLES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlanningConfig::default();

        assert_eq!(config.periods, 12);
        assert_eq!(config.samples, 10);
        assert_eq!(config.horizon_len(), 13);
    }

    #[test]
    fn test_clamping() {
        // 低於下限
        let config = PlanningConfig::new(0, 0);
        assert_eq!(config.periods, MIN_PERIODS);
        assert_eq!(config.samples, MIN_SAMPLES);

        // 高於上限
        let config = PlanningConfig::new(100, 100);
        assert_eq!(config.periods, MAX_PERIODS);
        assert_eq!(config.samples, MAX_SAMPLES);

        // 範圍內不變
        let config = PlanningConfig::new(5, 3);
        assert_eq!(config.periods, 5);
        assert_eq!(config.samples, 3);
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert!(PlanningConfig::try_new(12, 10).is_ok());

        let err = PlanningConfig::try_new(21, 10).unwrap_err();
        assert!(matches!(
            err,
            crate::ReplenishError::ConfigOutOfRange { field: "periods", value: 21, .. }
        ));

        let err = PlanningConfig::try_new(12, 0).unwrap_err();
        assert!(matches!(
            err,
            crate::ReplenishError::ConfigOutOfRange { field: "samples", value: 0, .. }
        ));
    }

    #[test]
    fn test_config_builder() {
        let config = PlanningConfig::default()
            .with_periods(8)
            .with_samples(50);

        assert_eq!(config.periods, 8);
        assert_eq!(config.samples, MAX_SAMPLES); // 50 夾到 30
    }
}
