//! 記憶體資料來源

use plant_core::Plant;

use crate::{validate_plants, PlantStore, StoreResult};

/// 記憶體資料來源（嵌入使用或測試）
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    plants: Vec<Plant>,
}

impl MemoryStore {
    /// 創建新的記憶體資料來源
    pub fn new(plants: Vec<Plant>) -> Self {
        Self { plants }
    }

    /// 添加廠區
    pub fn add_plant(&mut self, plant: Plant) {
        self.plants.push(plant);
    }
}

impl PlantStore for MemoryStore {
    fn load_plants(&self) -> StoreResult<Vec<Plant>> {
        validate_plants(&self.plants)?;
        Ok(self.plants.clone())
    }
}
