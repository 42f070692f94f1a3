//! CSV 資料來源
//!
//! 兩個檔案，對應兩張資料表：
//! - `plants.csv`：`id,name`
//! - `consumptions.csv`：`plant_id,date,kwh`（日期格式 `YYYY-MM-DD`）

use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use plant_core::{Consumption, Plant, PlantId};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{validate_plants, PlantStore, StoreError, StoreResult};

/// `plants.csv` 的一列
#[derive(Debug, Deserialize)]
struct PlantRow {
    id: PlantId,
    name: String,
}

/// `consumptions.csv` 的一列
#[derive(Debug, Deserialize)]
struct ConsumptionRow {
    plant_id: PlantId,
    date: NaiveDate,
    kwh: String,
}

/// CSV 資料來源
#[derive(Debug, Clone)]
pub struct CsvStore {
    plants_path: PathBuf,
    consumptions_path: PathBuf,
}

impl CsvStore {
    /// 創建新的 CSV 資料來源
    pub fn new(plants_path: impl Into<PathBuf>, consumptions_path: impl Into<PathBuf>) -> Self {
        Self {
            plants_path: plants_path.into(),
            consumptions_path: consumptions_path.into(),
        }
    }

    /// 使用目錄下的 `plants.csv` 與 `consumptions.csv`
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join("plants.csv"), dir.join("consumptions.csv"))
    }

    /// 從任意讀取來源解析（含表頭）
    pub fn read_from<P: Read, C: Read>(plants: P, consumptions: C) -> StoreResult<Vec<Plant>> {
        let mut plant_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(plants);

        let mut result = Vec::new();
        let mut index_by_id: HashMap<PlantId, usize> = HashMap::new();

        for row in plant_reader.deserialize::<PlantRow>() {
            let row = row?;
            if index_by_id.insert(row.id, result.len()).is_some() {
                return Err(StoreError::DuplicatePlant(row.id));
            }
            result.push(Plant::new(row.id, row.name));
        }

        let mut consumption_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(consumptions);

        for (row_idx, row) in consumption_reader.deserialize::<ConsumptionRow>().enumerate() {
            let row = row?;
            let row_number = row_idx + 2; // +2：行號從 1 開始且跳過表頭

            let energy_kwh: Decimal = row.kwh.parse().map_err(|_| StoreError::InvalidField {
                row: row_number,
                field: "kwh".to_string(),
                value: row.kwh.clone(),
            })?;

            let index = *index_by_id.get(&row.plant_id).ok_or(StoreError::UnknownPlant {
                row: row_number,
                plant_id: row.plant_id,
            })?;

            result[index].add_consumption(Consumption::new(row.date, energy_kwh));
        }

        validate_plants(&result)?;
        Ok(result)
    }
}

impl PlantStore for CsvStore {
    fn load_plants(&self) -> StoreResult<Vec<Plant>> {
        tracing::debug!(
            "從 CSV 載入廠區: {}，耗電記錄: {}",
            self.plants_path.display(),
            self.consumptions_path.display()
        );

        let plants = std::fs::File::open(&self.plants_path)?;
        let consumptions = std::fs::File::open(&self.consumptions_path)?;
        let result = Self::read_from(plants, consumptions)?;

        tracing::info!(
            "CSV 載入完成：廠區 {} 個，耗電記錄 {} 筆",
            result.len(),
            result.iter().map(|p| p.consumptions.len()).sum::<usize>()
        );

        Ok(result)
    }
}
