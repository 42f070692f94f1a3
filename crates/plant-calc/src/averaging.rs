//! 月平均耗電計算

use plant_core::{Plant, PlannerConfig, PlantId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 單一廠區的月平均耗電
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAverage {
    /// 廠區ID
    pub plant_id: PlantId,
    /// 廠區名稱
    pub plant_name: String,
    /// 平均每日耗電（kWh），無記錄時為 0
    pub average_kwh: Decimal,
    /// 參與平均的記錄數
    pub sample_count: usize,
}

impl MonthlyAverage {
    /// 檢查是否有任何記錄
    pub fn has_data(&self) -> bool {
        self.sample_count > 0
    }
}

/// 月平均耗電計算器
pub struct AverageCalculator;

impl AverageCalculator {
    /// 計算每個廠區在目標年份某月的平均每日耗電
    ///
    /// 輸出順序與廠區載入順序相同；沒有記錄的廠區回報 0，不會被省略。
    pub fn calculate(
        plants: &[Plant],
        month: u32,
        config: &PlannerConfig,
    ) -> plant_core::Result<Vec<MonthlyAverage>> {
        let window = config.window(month)?;

        tracing::info!(
            "開始計算月平均耗電：{}-{:02}，廠區 {} 個",
            window.year,
            window.month,
            plants.len()
        );

        let mut results = Vec::with_capacity(plants.len());

        for plant in plants {
            let (total, count) = plant
                .consumptions_in(&window)
                .fold((Decimal::ZERO, 0usize), |(sum, n), c| {
                    (sum + c.energy_kwh, n + 1)
                });

            let average_kwh = if count > 0 {
                total / Decimal::from(count)
            } else {
                tracing::debug!("廠區 {} 在 {}-{:02} 無記錄", plant.id, window.year, window.month);
                Decimal::ZERO
            };

            results.push(MonthlyAverage {
                plant_id: plant.id,
                plant_name: plant.name.clone(),
                average_kwh,
                sample_count: count,
            });
        }

        Ok(results)
    }
}
