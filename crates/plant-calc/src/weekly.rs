//! 第一週耗電表

use std::collections::BTreeMap;

use plant_core::{Plant, PlannerConfig, PlanningWindow, PlantId, HORIZON_DAYS};
use rust_decimal::Decimal;

use crate::CalcWarning;

/// 單一廠區在計劃時界內的每日耗電（稀疏：缺少的天數不存在於 map 中）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantWeek {
    /// 廠區ID
    pub plant_id: PlantId,
    /// 日數（1-7）→ 耗電量
    pub days: BTreeMap<u32, Decimal>,
}

impl PlantWeek {
    /// 創建空的週耗電
    pub fn new(plant_id: PlantId) -> Self {
        Self {
            plant_id,
            days: BTreeMap::new(),
        }
    }

    /// 依序以第 1 天起的數值建立（最多取 7 筆）
    pub fn from_values(plant_id: PlantId, values: &[Decimal]) -> Self {
        let days = (1..=HORIZON_DAYS).zip(values.iter().copied()).collect();
        Self { plant_id, days }
    }

    /// 某天的耗電量，無資料時為 `None`
    pub fn energy_on(&self, day: u32) -> Option<Decimal> {
        self.days.get(&day).copied()
    }

    /// 依日期排序的耗電量序列（缺少的天數直接略過）
    pub fn values(&self) -> Vec<Decimal> {
        self.days.values().copied().collect()
    }

    /// 缺少資料的天數
    pub fn missing_days(&self) -> Vec<u32> {
        (1..=HORIZON_DAYS)
            .filter(|day| !self.days.contains_key(day))
            .collect()
    }

    /// 七天資料是否齊全
    pub fn is_complete(&self) -> bool {
        self.days.len() == HORIZON_DAYS as usize
    }
}

/// 第一週耗電表（排程器輸入，每次排程重新建立）
#[derive(Debug, Clone)]
pub struct WeeklyConsumptionTable {
    /// 計劃時窗
    pub window: PlanningWindow,
    /// 每個廠區一筆，依載入順序排列
    pub entries: Vec<PlantWeek>,
    /// 資料品質警告
    pub warnings: Vec<CalcWarning>,
}

impl WeeklyConsumptionTable {
    /// 以現成的週耗電建立耗電表
    pub fn new(window: PlanningWindow, entries: Vec<PlantWeek>) -> Self {
        Self {
            window,
            entries,
            warnings: Vec::new(),
        }
    }

    /// 廠區數量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 依廠區ID查詢
    pub fn get(&self, plant_id: PlantId) -> Option<&PlantWeek> {
        self.entries.iter().find(|e| e.plant_id == plant_id)
    }

    /// 檢查所有廠區資料是否齊全
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(PlantWeek::is_complete)
    }

    /// 資料不完整的廠區及其缺少的天數
    pub fn incomplete_plants(&self) -> Vec<(PlantId, Vec<u32>)> {
        self.entries
            .iter()
            .filter(|e| !e.is_complete())
            .map(|e| (e.plant_id, e.missing_days()))
            .collect()
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: CalcWarning) {
        self.warnings.push(warning);
    }
}

/// 第一週耗電表建構器
pub struct WeeklyTableBuilder;

impl WeeklyTableBuilder {
    /// 建立目標年份某月前 7 天的耗電表
    ///
    /// 每個載入的廠區都有一筆（沒有記錄時為空）。同一天有多筆記錄時相加。
    pub fn build(
        plants: &[Plant],
        month: u32,
        config: &PlannerConfig,
    ) -> plant_core::Result<WeeklyConsumptionTable> {
        let window = config.window(month)?;
        let mut table = WeeklyConsumptionTable::new(window, Vec::with_capacity(plants.len()));

        for plant in plants {
            let mut records: Vec<_> = plant
                .consumptions
                .iter()
                .filter_map(|c| window.first_week_day(c.date).map(|day| (day, c)))
                .collect();

            // 依日期排序
            records.sort_by_key(|(_, c)| c.date);

            let mut week = PlantWeek::new(plant.id);
            let mut duplicate_days = Vec::new();

            for (day, record) in records {
                if week.days.contains_key(&day) {
                    duplicate_days.push(day);
                }
                *week.days.entry(day).or_insert(Decimal::ZERO) += record.energy_kwh;
            }

            if !duplicate_days.is_empty() {
                duplicate_days.dedup();
                table.add_warning(CalcWarning::info(
                    plant.id,
                    format!("同一天有多筆記錄，已合計: {:?}", duplicate_days),
                ));
            }

            let missing = week.missing_days();
            if !missing.is_empty() {
                tracing::warn!(
                    "廠區 {} 在 {}-{:02} 第一週缺少資料: {:?}",
                    plant.id,
                    window.year,
                    window.month,
                    missing
                );
                table.add_warning(CalcWarning::warning(
                    plant.id,
                    format!("第一週缺少資料: {:?}", missing),
                ));
            }

            table.entries.push(week);
        }

        tracing::debug!(
            "第一週耗電表：廠區 {} 個，資料完整 {}",
            table.len(),
            table.is_complete()
        );

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WarningSeverity;
    use chrono::NaiveDate;
    use plant_core::Consumption;

    fn record(month: u32, day: u32, kwh: i64) -> Consumption {
        Consumption::new(
            NaiveDate::from_ymd_opt(2026, month, day).unwrap(),
            Decimal::from(kwh),
        )
    }

    #[test]
    fn test_build_sorted_first_week() {
        // 記錄故意亂序，且包含第 8 天以後與其他月份
        let plants = vec![Plant::new(1, "Impianto A").with_consumptions(vec![
            record(1, 3, 30),
            record(1, 1, 10),
            record(1, 7, 70),
            record(1, 2, 20),
            record(1, 8, 80),
            record(1, 5, 50),
            record(1, 4, 40),
            record(1, 6, 60),
            record(2, 1, 999),
        ])];

        let table = WeeklyTableBuilder::build(&plants, 1, &PlannerConfig::default()).unwrap();

        assert_eq!(table.len(), 1);
        let week = &table.entries[0];
        assert!(week.is_complete());
        assert_eq!(
            week.values(),
            [10, 20, 30, 40, 50, 60, 70].map(Decimal::from).to_vec()
        );
        assert!(table.warnings.is_empty());
    }

    #[test]
    fn test_missing_days_are_reported() {
        let plants = vec![Plant::new(4, "Impianto D").with_consumptions(vec![
            record(3, 1, 5),
            record(3, 2, 5),
            record(3, 5, 5),
        ])];

        let table = WeeklyTableBuilder::build(&plants, 3, &PlannerConfig::default()).unwrap();
        let week = table.get(4).unwrap();

        assert_eq!(week.missing_days(), vec![3, 4, 6, 7]);
        assert_eq!(week.energy_on(3), None);
        assert_eq!(week.energy_on(5), Some(Decimal::from(5)));
        assert_eq!(table.incomplete_plants(), vec![(4, vec![3, 4, 6, 7])]);
        assert_eq!(table.warnings.len(), 1);
        assert_eq!(table.warnings[0].severity, WarningSeverity::Warning);
    }

    #[test]
    fn test_plant_without_records_has_empty_entry() {
        let plants = vec![
            Plant::new(1, "Impianto A"),
            Plant::new(2, "Impianto B").with_consumptions(vec![record(1, 1, 3)]),
        ];

        let table = WeeklyTableBuilder::build(&plants, 1, &PlannerConfig::default()).unwrap();

        // 每個載入的廠區都有一筆，順序不變
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries[0].plant_id, 1);
        assert!(table.entries[0].days.is_empty());
        assert_eq!(table.entries[1].plant_id, 2);
    }

    #[test]
    fn test_duplicate_day_is_summed() {
        let plants = vec![Plant::new(1, "Impianto A").with_consumptions(vec![
            record(2, 2, 4),
            record(2, 2, 6),
        ])];

        let table = WeeklyTableBuilder::build(&plants, 2, &PlannerConfig::default()).unwrap();

        assert_eq!(table.entries[0].energy_on(2), Some(Decimal::from(10)));
        assert!(table
            .warnings
            .iter()
            .any(|w| w.severity == WarningSeverity::Info));
    }

    #[test]
    fn test_from_values() {
        let week = PlantWeek::from_values(7, &[Decimal::ONE, Decimal::TWO]);

        assert_eq!(week.energy_on(1), Some(Decimal::ONE));
        assert_eq!(week.energy_on(2), Some(Decimal::TWO));
        assert_eq!(week.missing_days(), vec![3, 4, 5, 6, 7]);
    }
}
