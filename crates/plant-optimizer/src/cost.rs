//! 成本模型：每日耗電 + 換廠成本

use plant_calc::WeeklyConsumptionTable;
use plant_core::{MissingDayPolicy, PlannerConfig, PlantId, SchedError, HORIZON_DAYS};
use rust_decimal::Decimal;

/// 成本模型
///
/// 候選廠區以在耗電表中的位置（載入順序）識別。
#[derive(Debug, Clone, Copy)]
pub struct CostModel<'a> {
    table: &'a WeeklyConsumptionTable,
    switch_penalty: Decimal,
    policy: MissingDayPolicy,
}

impl<'a> CostModel<'a> {
    /// 創建新的成本模型
    pub fn new(table: &'a WeeklyConsumptionTable, config: &PlannerConfig) -> Self {
        Self {
            table,
            switch_penalty: config.switch_penalty,
            policy: config.missing_day_policy,
        }
    }

    /// 候選廠區數量
    pub fn plant_count(&self) -> usize {
        self.table.len()
    }

    /// 候選位置對應的廠區ID
    pub fn plant_id(&self, candidate: usize) -> PlantId {
        self.table.entries[candidate].plant_id
    }

    /// 廠區ID對應的候選位置
    pub fn candidate_of(&self, plant_id: PlantId) -> Option<usize> {
        self.table.entries.iter().position(|e| e.plant_id == plant_id)
    }

    /// 當天選擇該廠區的耗電成本
    ///
    /// `None` 表示該廠區當天不可選（僅 `ExcludePlant` 會出現）。
    pub fn day_cost(&self, candidate: usize, day: u32) -> Option<Decimal> {
        let energy = self.table.entries[candidate].energy_on(day);
        match self.policy {
            MissingDayPolicy::TreatAsZero => Some(energy.unwrap_or(Decimal::ZERO)),
            MissingDayPolicy::ExcludePlant | MissingDayPolicy::Reject => energy,
        }
    }

    /// 換廠成本
    pub fn switch_cost(&self, last: Option<usize>, candidate: usize) -> Decimal {
        match last {
            Some(previous) if previous != candidate => self.switch_penalty,
            _ => Decimal::ZERO,
        }
    }

    /// 依缺漏處理方式檢查耗電表是否可排程
    pub fn validate(&self) -> plant_core::Result<()> {
        match self.policy {
            MissingDayPolicy::TreatAsZero => Ok(()),
            MissingDayPolicy::Reject => match self.table.incomplete_plants().into_iter().next() {
                Some((plant_id, missing_days)) => Err(SchedError::MisalignedWeeklyData {
                    plant_id,
                    missing_days,
                }),
                None => Ok(()),
            },
            MissingDayPolicy::ExcludePlant => {
                if self.table.is_empty() {
                    return Ok(());
                }
                for day in 1..=HORIZON_DAYS {
                    let covered = (0..self.plant_count()).any(|c| self.day_cost(c, day).is_some());
                    if !covered {
                        return Err(SchedError::NoFeasibleSequence { day });
                    }
                }
                Ok(())
            }
        }
    }

    /// 計算任一完整序列的總成本
    ///
    /// 長度不是 7、含未知廠區，或某天該廠區不可選時回傳 `None`。
    pub fn sequence_cost(&self, plant_ids: &[PlantId]) -> Option<Decimal> {
        if plant_ids.len() != HORIZON_DAYS as usize {
            return None;
        }

        let mut total = Decimal::ZERO;
        let mut last = None;
        for (&plant_id, day) in plant_ids.iter().zip(1..=HORIZON_DAYS) {
            let candidate = self.candidate_of(plant_id)?;
            total += self.day_cost(candidate, day)? + self.switch_cost(last, candidate);
            last = Some(candidate);
        }
        Some(total)
    }
}

/// 計算任一完整序列在指定配置下的總成本
pub fn sequence_cost(
    table: &WeeklyConsumptionTable,
    plant_ids: &[PlantId],
    config: &PlannerConfig,
) -> Option<Decimal> {
    CostModel::new(table, config).sequence_cost(plant_ids)
}
