//! # Plant Core
//!
//! 核心資料模型與類型定義

pub mod calendar;
pub mod config;
pub mod consumption;
pub mod plan;
pub mod plant;

// Re-export 主要類型
pub use calendar::{PlanningWindow, HORIZON_DAYS};
pub use config::{MissingDayPolicy, PlannerConfig};
pub use consumption::Consumption;
pub use plan::{DayAssignment, InterventionPlan};
pub use plant::{Plant, PlantId};

/// 排程錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum SchedError {
    #[error("無效的月份: {0}（必須介於 1 到 12）")]
    InvalidMonth(u32),

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("廠區 {plant_id} 第一週資料不完整，缺少日期: {missing_days:?}")]
    MisalignedWeeklyData {
        plant_id: PlantId,
        missing_days: Vec<u32>,
    },

    #[error("第 {day} 天沒有任何可選廠區")]
    NoFeasibleSequence { day: u32 },

    #[error("資料載入失敗: {0}")]
    LoadFailed(String),
}

pub type Result<T> = std::result::Result<T, SchedError>;
