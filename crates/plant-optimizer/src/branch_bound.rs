//! 分支定界搜尋
//!
//! 深度優先展開第 1 到第 7 天，每天嘗試所有候選廠區（依載入順序）。
//! 因為耗電與換廠成本皆非負，部分序列的累計成本只會遞增；
//! 一旦累計成本不低於目前最佳解即可剪枝。

use plant_calc::WeeklyConsumptionTable;
use plant_core::{PlannerConfig, SchedError, HORIZON_DAYS};
use rust_decimal::Decimal;

use crate::cost::CostModel;
use crate::OptimizationResult;

/// 搜尋統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// 展開的非終端節點數
    pub nodes_expanded: u64,
    /// 被剪枝的節點數
    pub pruned: u64,
    /// 抵達的完整序列數
    pub leaves: u64,
    /// 最佳解被更新的次數
    pub improvements: u64,
}

/// 單次搜尋的狀態（每次呼叫獨立建立，不跨呼叫共用）
#[derive(Debug, Default)]
struct SearchContext {
    /// 目前的部分序列（候選位置的堆疊）
    stack: Vec<usize>,
    /// 目前最佳解：(成本, 序列)
    best: Option<(Decimal, Vec<usize>)>,
    stats: SearchStats,
}

impl SearchContext {
    fn new() -> Self {
        Self {
            stack: Vec::with_capacity(HORIZON_DAYS as usize),
            ..Default::default()
        }
    }

    fn best_cost(&self) -> Option<Decimal> {
        self.best.as_ref().map(|(cost, _)| *cost)
    }
}

/// 七日介入序列最佳化器
pub struct SequenceOptimizer<'a> {
    model: CostModel<'a>,
}

impl<'a> SequenceOptimizer<'a> {
    /// 創建最佳化器，並依配置檢查耗電表
    pub fn new(table: &'a WeeklyConsumptionTable, config: &PlannerConfig) -> plant_core::Result<Self> {
        config.validate()?;
        let model = CostModel::new(table, config);
        model.validate()?;
        Ok(Self { model })
    }

    /// 執行搜尋
    ///
    /// 成本相同的序列保留最先找到者（候選順序即廠區載入順序）。
    pub fn optimize(&self) -> plant_core::Result<OptimizationResult> {
        let plant_count = self.model.plant_count();
        tracing::info!("開始序列最佳化：候選廠區 {} 個", plant_count);

        if plant_count == 0 {
            tracing::info!("沒有任何廠區，回傳空序列");
            return Ok(OptimizationResult::empty(SearchStats::default()));
        }

        let start_time = std::time::Instant::now();
        let mut ctx = SearchContext::new();
        self.search(&mut ctx, 1, None, Decimal::ZERO);

        tracing::debug!(
            "搜尋統計: 展開 {}，剪枝 {}，完整序列 {}，更新最佳解 {}",
            ctx.stats.nodes_expanded,
            ctx.stats.pruned,
            ctx.stats.leaves,
            ctx.stats.improvements
        );

        let (total_cost, best) = ctx
            .best
            .ok_or(SchedError::NoFeasibleSequence { day: 1 })?;
        let sequence = best.into_iter().map(|c| self.model.plant_id(c)).collect();

        tracing::info!(
            "序列最佳化完成，總成本 {}，耗時 {:?}",
            total_cost,
            start_time.elapsed()
        );

        Ok(OptimizationResult {
            sequence,
            total_cost,
            stats: ctx.stats,
        })
    }

    fn search(&self, ctx: &mut SearchContext, day: u32, last: Option<usize>, running_cost: Decimal) {
        // 終端：七天都已安排
        if day > HORIZON_DAYS {
            ctx.stats.leaves += 1;
            let improved = match ctx.best_cost() {
                Some(best) => running_cost < best,
                None => true,
            };
            if improved {
                ctx.stats.improvements += 1;
                ctx.best = Some((running_cost, ctx.stack.clone()));
            }
            return;
        }

        // 剪枝：之後的成本皆非負，不可能再改善
        if let Some(best) = ctx.best_cost() {
            if running_cost >= best {
                ctx.stats.pruned += 1;
                return;
            }
        }

        ctx.stats.nodes_expanded += 1;

        for candidate in 0..self.model.plant_count() {
            let Some(day_cost) = self.model.day_cost(candidate, day) else {
                continue;
            };
            let new_cost = running_cost + day_cost + self.model.switch_cost(last, candidate);

            ctx.stack.push(candidate);
            self.search(ctx, day + 1, Some(candidate), new_cost);
            ctx.stack.pop();
        }
    }
}

/// 以耗電表與配置求最佳七日序列
pub fn optimal_sequence(
    table: &WeeklyConsumptionTable,
    config: &PlannerConfig,
) -> plant_core::Result<OptimizationResult> {
    SequenceOptimizer::new(table, config)?.optimize()
}
