//! # Plant Intervention Scheduler
//!
//! 依各廠區每月前 7 天的耗電記錄，為每天安排一個廠區進行介入，
//! 使「每日耗電 + 換廠成本」的總和最小。
//!
//! ```
//! use chrono::NaiveDate;
//! use plant_sched::{Consumption, Plant, PlannerConfig, PlantScheduler};
//! use rust_decimal::Decimal;
//!
//! let week = |kwh: i64| -> Vec<Consumption> {
//!     (1..=7)
//!         .map(|day| Consumption::new(NaiveDate::from_ymd_opt(2026, 1, day).unwrap(), Decimal::from(kwh)))
//!         .collect()
//! };
//! let plants = vec![
//!     Plant::new(1, "Impianto A").with_consumptions(week(10)),
//!     Plant::new(2, "Impianto B").with_consumptions(week(1)),
//! ];
//!
//! let scheduler = PlantScheduler::from_plants(plants, PlannerConfig::default()).unwrap();
//! let (labels, cost) = scheduler.get_optimal_sequence(1).unwrap();
//! assert_eq!(labels[0], "Day 1: Impianto B");
//! assert_eq!(cost, Decimal::from(7));
//! ```

pub mod logging;
pub mod scheduler;

// Re-export 主要類型
pub use plant_calc::{MonthlyAverage, WeeklyConsumptionTable};
pub use plant_core::{
    Consumption, InterventionPlan, MissingDayPolicy, Plant, PlannerConfig, PlantId, Result,
    SchedError,
};
pub use plant_store::{CsvStore, JsonStore, MemoryStore, PlantStore};
pub use scheduler::PlantScheduler;
