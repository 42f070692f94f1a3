//! 廠區模型

use serde::{Deserialize, Serialize};

use crate::calendar::PlanningWindow;
use crate::consumption::Consumption;

/// 廠區ID（來自資料來源，於單次載入內唯一且穩定）
pub type PlantId = u32;

/// 廠區
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    /// 廠區ID
    pub id: PlantId,

    /// 顯示名稱
    pub name: String,

    /// 每日耗電記錄
    #[serde(default)]
    pub consumptions: Vec<Consumption>,
}

impl Plant {
    /// 創建新的廠區（尚無耗電記錄）
    pub fn new(id: PlantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            consumptions: Vec::new(),
        }
    }

    /// 建構器模式：設置耗電記錄
    pub fn with_consumptions(mut self, consumptions: Vec<Consumption>) -> Self {
        self.consumptions = consumptions;
        self
    }

    /// 添加耗電記錄
    pub fn add_consumption(&mut self, consumption: Consumption) {
        self.consumptions.push(consumption);
    }

    /// 取得落在指定月份內的記錄（保持原始順序）
    pub fn consumptions_in<'a>(
        &'a self,
        window: &'a PlanningWindow,
    ) -> impl Iterator<Item = &'a Consumption> + 'a {
        self.consumptions
            .iter()
            .filter(move |c| window.contains(c.date))
    }

    /// 檢查是否有任何記錄
    pub fn has_records(&self) -> bool {
        !self.consumptions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn test_create_plant() {
        let plant = Plant::new(1, "Impianto A");

        assert_eq!(plant.id, 1);
        assert_eq!(plant.name, "Impianto A");
        assert!(!plant.has_records());
    }

    #[test]
    fn test_consumptions_in_window() {
        let plant = Plant::new(2, "Impianto B").with_consumptions(vec![
            Consumption::new(
                NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
                Decimal::from(12),
            ),
            Consumption::new(
                NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
                Decimal::from(30),
            ),
            Consumption::new(
                NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
                Decimal::from(7),
            ),
        ]);

        let window = PlanningWindow::new(2026, 3).unwrap();
        let in_march: Vec<_> = plant.consumptions_in(&window).collect();

        // 只有 2026 年 3 月的記錄
        assert_eq!(in_march.len(), 1);
        assert_eq!(in_march[0].energy_kwh, Decimal::from(12));
    }
}
