//! JSON 資料來源
//!
//! 單一文件：廠區陣列，每個廠區內含 `consumptions` 陣列。
//!
//! ```json
//! [
//!   { "id": 1, "name": "Impianto A",
//!     "consumptions": [ { "date": "2026-01-01", "kwh": "12.5" } ] }
//! ]
//! ```

use std::path::PathBuf;

use plant_core::Plant;

use crate::{validate_plants, PlantStore, StoreResult};

/// JSON 資料來源
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// 創建新的 JSON 資料來源
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 從字串解析
    pub fn parse_str(content: &str) -> StoreResult<Vec<Plant>> {
        let plants: Vec<Plant> = serde_json::from_str(content)?;
        validate_plants(&plants)?;
        Ok(plants)
    }
}

impl PlantStore for JsonStore {
    fn load_plants(&self) -> StoreResult<Vec<Plant>> {
        tracing::debug!("從 JSON 載入廠區: {}", self.path.display());
        let content = std::fs::read_to_string(&self.path)?;
        Self::parse_str(&content)
    }
}
