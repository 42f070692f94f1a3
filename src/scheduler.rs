//! 廠區介入排程器（對外操作入口）

use plant_calc::{AverageCalculator, MonthlyAverage, WeeklyConsumptionTable, WeeklyTableBuilder};
use plant_core::{InterventionPlan, Plant, PlannerConfig, Result};
use plant_optimizer::SequenceOptimizer;
use plant_store::{validate_plants, PlantStore};
use rayon::prelude::*;
use rust_decimal::Decimal;

/// 廠區介入排程器
///
/// 建立時從資料來源載入所有廠區，之後的彙總與排程都只讀取這份資料。
/// 每次排程各自建立搜尋狀態，因此 `&self` 可同時被多個執行緒使用。
#[derive(Debug, Clone)]
pub struct PlantScheduler {
    plants: Vec<Plant>,
    config: PlannerConfig,
}

impl PlantScheduler {
    /// 從資料來源載入並創建排程器
    pub fn load<S: PlantStore + ?Sized>(store: &S, config: PlannerConfig) -> Result<Self> {
        config.validate()?;
        let plants = store.load_plants()?;
        validate_plants(&plants)?;
        tracing::info!("載入廠區 {} 個", plants.len());
        Ok(Self { plants, config })
    }

    /// 以現成的廠區資料創建排程器
    pub fn from_plants(plants: Vec<Plant>, config: PlannerConfig) -> Result<Self> {
        config.validate()?;
        validate_plants(&plants)?;
        Ok(Self { plants, config })
    }

    /// 重新從資料來源載入廠區（失敗時保留原資料）
    pub fn reload<S: PlantStore + ?Sized>(&mut self, store: &S) -> Result<()> {
        let plants = store.load_plants()?;
        validate_plants(&plants)?;
        tracing::info!("重新載入廠區：{} → {} 個", self.plants.len(), plants.len());
        self.plants = plants;
        Ok(())
    }

    /// 已載入的廠區（載入順序）
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    /// 排程配置
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// 每個廠區在某月的平均每日耗電（完整資訊）
    pub fn average_consumption(&self, month: u32) -> Result<Vec<MonthlyAverage>> {
        AverageCalculator::calculate(&self.plants, month, &self.config)
    }

    /// 每個廠區在某月的平均每日耗電：(廠區名稱, 平均 kWh)，依載入順序
    pub fn get_average_consumption(&self, month: u32) -> Result<Vec<(String, Decimal)>> {
        Ok(self
            .average_consumption(month)?
            .into_iter()
            .map(|avg| (avg.plant_name, avg.average_kwh))
            .collect())
    }

    /// 某月前 7 天的耗電表
    pub fn weekly_table(&self, month: u32) -> Result<WeeklyConsumptionTable> {
        WeeklyTableBuilder::build(&self.plants, month, &self.config)
    }

    /// 某月前 7 天的最佳介入計劃
    pub fn optimal_plan(&self, month: u32) -> Result<InterventionPlan> {
        let table = self.weekly_table(month)?;
        self.plan_for_table(&table)
    }

    /// 以已建好的耗電表排程（需要同時取用表中警告時使用）
    pub fn plan_for_table(&self, table: &WeeklyConsumptionTable) -> Result<InterventionPlan> {
        let result = SequenceOptimizer::new(table, &self.config)?.optimize()?;
        Ok(result.into_plan(table.window, &self.plants))
    }

    /// 某月前 7 天的最佳介入序列：(`Day N: <廠區名稱>` 標籤, 總成本)
    pub fn get_optimal_sequence(&self, month: u32) -> Result<(Vec<String>, Decimal)> {
        let plan = self.optimal_plan(month)?;
        Ok((plan.labels(), plan.total_cost))
    }

    /// 多個月份各自獨立排程（並行執行，結果順序與輸入相同）
    pub fn optimal_plans_for_months(&self, months: &[u32]) -> Vec<Result<InterventionPlan>> {
        months
            .par_iter()
            .map(|&month| self.optimal_plan(month))
            .collect()
    }
}
