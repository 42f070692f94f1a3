//! # Plant Store
//!
//! 廠區與耗電記錄的資料來源（排程核心只讀取載入後的資料）

pub mod csv_store;
pub mod error;
pub mod json_store;
pub mod memory;

// Re-export 主要類型
pub use csv_store::CsvStore;
pub use error::{StoreError, StoreResult};
pub use json_store::JsonStore;
pub use memory::MemoryStore;

use std::collections::HashSet;

use plant_core::Plant;

/// 廠區資料來源
pub trait PlantStore {
    /// 載入所有廠區（含耗電記錄），保持來源中的順序
    fn load_plants(&self) -> StoreResult<Vec<Plant>>;
}

impl<S: PlantStore + ?Sized> PlantStore for &S {
    fn load_plants(&self) -> StoreResult<Vec<Plant>> {
        (**self).load_plants()
    }
}

/// 檢查載入結果：廠區ID唯一、耗電量非負
pub fn validate_plants(plants: &[Plant]) -> StoreResult<()> {
    let mut seen = HashSet::with_capacity(plants.len());

    for plant in plants {
        if !seen.insert(plant.id) {
            return Err(StoreError::DuplicatePlant(plant.id));
        }

        if let Some(bad) = plant.consumptions.iter().find(|c| !c.is_valid()) {
            return Err(StoreError::NegativeEnergy {
                plant_id: plant.id,
                date: bad.date,
                kwh: bad.energy_kwh,
            });
        }
    }

    Ok(())
}
