//! 介入計劃模型（排程結果）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::PlanningWindow;
use crate::plant::PlantId;

/// 單日介入安排
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAssignment {
    /// 第幾天（1-7）
    pub day: u32,

    /// 廠區ID
    pub plant_id: PlantId,

    /// 廠區名稱
    pub plant_name: String,
}

impl DayAssignment {
    /// 創建新的單日安排
    pub fn new(day: u32, plant_id: PlantId, plant_name: impl Into<String>) -> Self {
        Self {
            day,
            plant_id,
            plant_name: plant_name.into(),
        }
    }

    /// 顯示標籤，例如 `Day 3: Impianto B`
    pub fn label(&self) -> String {
        format!("Day {}: {}", self.day, self.plant_name)
    }
}

/// 介入計劃（最佳化結果，回傳後不可變）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterventionPlan {
    /// 計劃ID
    pub id: Uuid,

    /// 計劃時窗
    pub window: PlanningWindow,

    /// 每日安排（依日期排序）
    pub assignments: Vec<DayAssignment>,

    /// 總成本（耗電 + 換廠成本）
    pub total_cost: Decimal,
}

impl InterventionPlan {
    /// 創建新的介入計劃
    pub fn new(
        window: PlanningWindow,
        assignments: Vec<DayAssignment>,
        total_cost: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            window,
            assignments,
            total_cost,
        }
    }

    /// 沒有任何廠區時的空計劃（成本 0）
    pub fn empty(window: PlanningWindow) -> Self {
        Self::new(window, Vec::new(), Decimal::ZERO)
    }

    /// 所有顯示標籤
    pub fn labels(&self) -> Vec<String> {
        self.assignments.iter().map(DayAssignment::label).collect()
    }

    /// 依日期排序的廠區ID序列
    pub fn plant_ids(&self) -> Vec<PlantId> {
        self.assignments.iter().map(|a| a.plant_id).collect()
    }

    /// 換廠次數（相鄰兩天廠區不同的次數）
    pub fn switch_count(&self) -> usize {
        self.assignments
            .windows(2)
            .filter(|pair| pair[0].plant_id != pair[1].plant_id)
            .count()
    }

    /// 檢查是否為空計劃
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> InterventionPlan {
        let window = PlanningWindow::new(2026, 1).unwrap();
        let assignments = vec![
            DayAssignment::new(1, 1, "Impianto A"),
            DayAssignment::new(2, 1, "Impianto A"),
            DayAssignment::new(3, 2, "Impianto B"),
            DayAssignment::new(4, 1, "Impianto A"),
        ];
        InterventionPlan::new(window, assignments, Decimal::from(40))
    }

    #[test]
    fn test_labels() {
        let plan = sample_plan();

        assert_eq!(
            plan.labels(),
            vec![
                "Day 1: Impianto A",
                "Day 2: Impianto A",
                "Day 3: Impianto B",
                "Day 4: Impianto A",
            ]
        );
    }

    #[test]
    fn test_switch_count() {
        let plan = sample_plan();

        // A→B、B→A 共兩次換廠
        assert_eq!(plan.switch_count(), 2);
        assert_eq!(plan.plant_ids(), vec![1, 1, 2, 1]);
    }

    #[test]
    fn test_empty_plan() {
        let plan = InterventionPlan::empty(PlanningWindow::new(2026, 7).unwrap());

        assert!(plan.is_empty());
        assert!(plan.labels().is_empty());
        assert_eq!(plan.total_cost, Decimal::ZERO);
        assert_eq!(plan.switch_count(), 0);
    }
}
