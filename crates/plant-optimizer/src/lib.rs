//! # Plant Sequence Optimizer
//!
//! 最佳化算法模組（七日介入序列的分支定界搜尋）

pub mod branch_bound;
pub mod cost;

// Re-export 主要類型
pub use branch_bound::{optimal_sequence, SearchStats, SequenceOptimizer};
pub use cost::{sequence_cost, CostModel};

use std::collections::HashMap;

use plant_core::{DayAssignment, InterventionPlan, Plant, PlanningWindow, PlantId};
use rust_decimal::Decimal;

/// 優化結果
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// 最佳序列（依日期排序的廠區ID；沒有廠區時為空）
    pub sequence: Vec<PlantId>,

    /// 最佳序列的總成本
    pub total_cost: Decimal,

    /// 搜尋統計
    pub stats: SearchStats,
}

impl OptimizationResult {
    /// 沒有任何廠區時的結果：空序列、成本 0
    pub fn empty(stats: SearchStats) -> Self {
        Self {
            sequence: Vec::new(),
            total_cost: Decimal::ZERO,
            stats,
        }
    }

    /// 轉換為介入計劃（附上廠區名稱）
    pub fn into_plan(self, window: PlanningWindow, plants: &[Plant]) -> InterventionPlan {
        let names: HashMap<PlantId, &str> =
            plants.iter().map(|p| (p.id, p.name.as_str())).collect();

        let assignments = self
            .sequence
            .iter()
            .zip(1u32..)
            .map(|(&plant_id, day)| {
                let name = names
                    .get(&plant_id)
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| format!("#{plant_id}"));
                DayAssignment::new(day, plant_id, name)
            })
            .collect();

        InterventionPlan::new(window, assignments, self.total_cost)
    }
}
