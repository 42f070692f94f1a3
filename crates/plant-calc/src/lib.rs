//! # Plant Consumption Aggregation
//!
//! 耗電彙總：月平均耗電與第一週耗電表（排程器的輸入）

pub mod averaging;
pub mod weekly;

// Re-export 主要類型
pub use averaging::{AverageCalculator, MonthlyAverage};
pub use weekly::{PlantWeek, WeeklyConsumptionTable, WeeklyTableBuilder};

use plant_core::PlantId;

/// 彙總警告（資料品質問題，不中斷計算）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcWarning {
    pub plant_id: PlantId,
    pub message: String,
    pub severity: WarningSeverity,
}

impl CalcWarning {
    pub fn new(plant_id: PlantId, message: String, severity: WarningSeverity) -> Self {
        Self {
            plant_id,
            message,
            severity,
        }
    }

    pub fn info(plant_id: PlantId, message: String) -> Self {
        Self::new(plant_id, message, WarningSeverity::Info)
    }

    pub fn warning(plant_id: PlantId, message: String) -> Self {
        Self::new(plant_id, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Info,
    Warning,
}
