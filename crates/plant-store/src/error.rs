//! 資料載入錯誤類型

use chrono::NaiveDate;
use plant_core::{PlantId, SchedError};
use rust_decimal::Decimal;
use thiserror::Error;

/// 資料載入錯誤
#[derive(Error, Debug)]
pub enum StoreError {
    // ===== 檔案與格式 =====
    #[error("檔案讀取失敗: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 解析失敗: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON 解析失敗: {0}")]
    Json(#[from] serde_json::Error),

    #[error("欄位格式錯誤 (行 {row}, 欄位 {field}): {value}")]
    InvalidField {
        row: usize,
        field: String,
        value: String,
    },

    // ===== 資料品質 =====
    #[error("廠區ID重複: {0}")]
    DuplicatePlant(PlantId),

    #[error("耗電記錄引用不存在的廠區 (行 {row}): {plant_id}")]
    UnknownPlant { row: usize, plant_id: PlantId },

    #[error("耗電量不可為負 (廠區 {plant_id}, 日期 {date}): {kwh}")]
    NegativeEnergy {
        plant_id: PlantId,
        date: NaiveDate,
        kwh: Decimal,
    },
}

impl From<StoreError> for SchedError {
    fn from(err: StoreError) -> Self {
        SchedError::LoadFailed(err.to_string())
    }
}

/// Result 類型別名
pub type StoreResult<T> = Result<T, StoreError>;
