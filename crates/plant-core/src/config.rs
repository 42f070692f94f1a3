//! 排程配置模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::PlanningWindow;
use crate::{Result, SchedError};

/// 預設目標年份
pub const DEFAULT_TARGET_YEAR: i32 = 2026;

/// 預設換廠成本
pub const DEFAULT_SWITCH_PENALTY: i64 = 5;

/// 排程參數配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// 目標年份（彙總與排程只看這一年的記錄）
    pub target_year: i32,

    /// 換廠成本：前一天選擇的廠區與當天不同時加上
    pub switch_penalty: Decimal,

    /// 第一週缺少某天資料時的處理方式
    pub missing_day_policy: MissingDayPolicy,
}

impl PlannerConfig {
    /// 創建新的排程配置
    pub fn new(target_year: i32) -> Self {
        Self {
            target_year,
            switch_penalty: Decimal::from(DEFAULT_SWITCH_PENALTY),
            missing_day_policy: MissingDayPolicy::TreatAsZero, // 預設：缺少的天數視為零耗電
        }
    }

    /// 建構器模式：設置換廠成本
    pub fn with_switch_penalty(mut self, penalty: Decimal) -> Self {
        self.switch_penalty = penalty;
        self
    }

    /// 建構器模式：設置缺漏天數處理方式
    ///
    /// # 範例
    /// ```
    /// # use plant_core::{MissingDayPolicy, PlannerConfig};
    /// let config = PlannerConfig::new(2026)
    ///     .with_missing_day_policy(MissingDayPolicy::Reject); // 資料不完整時直接報錯
    /// ```
    pub fn with_missing_day_policy(mut self, policy: MissingDayPolicy) -> Self {
        self.missing_day_policy = policy;
        self
    }

    /// 檢查配置是否合法
    ///
    /// 換廠成本為負時剪枝不再成立，因此拒絕
    pub fn validate(&self) -> Result<()> {
        if self.switch_penalty < Decimal::ZERO {
            return Err(SchedError::InvalidConfig(format!(
                "換廠成本不可為負: {}",
                self.switch_penalty
            )));
        }
        Ok(())
    }

    /// 以目標年份建立某月份的計劃時窗
    pub fn window(&self, month: u32) -> Result<PlanningWindow> {
        PlanningWindow::new(self.target_year, month)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_YEAR)
    }
}

/// 第一週缺漏天數處理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MissingDayPolicy {
    /// 缺少的天數視為零耗電
    #[default]
    TreatAsZero,

    /// 缺少資料的那一天不考慮該廠區
    ExcludePlant,

    /// 任一廠區資料不完整即回報錯誤
    Reject,
}
