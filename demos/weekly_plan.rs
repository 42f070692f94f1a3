//! # 廠區介入排程範例
//!
//! 從 `demos/data` 的 CSV 載入廠區與耗電記錄，輸出某月的平均耗電
//! 與前 7 天的最佳介入序列。
//!
//! ```text
//! cargo run --example weekly_plan -- 1
//! RUST_LOG=debug cargo run --example weekly_plan -- 2
//! ```

use anyhow::Context;
use plant_sched::{logging, CsvStore, PlannerConfig, PlantScheduler};

fn main() -> anyhow::Result<()> {
    logging::init();

    let month: u32 = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()
        .context("月份必須是 1 到 12 的整數")?
        .unwrap_or(1);

    let data_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/data");
    let store = CsvStore::from_dir(&data_dir);
    let scheduler = PlantScheduler::load(&store, PlannerConfig::default())
        .with_context(|| format!("無法載入 {}", data_dir.display()))?;

    println!("=== {} 年 {} 月 平均每日耗電 ===", scheduler.config().target_year, month);
    for (name, average) in scheduler.get_average_consumption(month)? {
        println!("  {:<20} {:>10.2} kWh", name, average);
    }

    let table = scheduler.weekly_table(month)?;
    let plan = scheduler.plan_for_table(&table)?;
    for warning in &table.warnings {
        println!("  ⚠ 廠區 {}: {}", warning.plant_id, warning.message);
    }

    println!();
    println!("=== 前 7 天最佳介入序列 ===");
    for label in plan.labels() {
        println!("  {}", label);
    }
    println!("  換廠次數: {}", plan.switch_count());
    println!("  總成本:   {}", plan.total_cost);

    Ok(())
}
