//! 耗電記錄模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 單日耗電記錄（不可變）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumption {
    /// 日期
    pub date: NaiveDate,

    /// 耗電量（kWh，非負）
    #[serde(alias = "kwh")]
    pub energy_kwh: Decimal,
}

impl Consumption {
    /// 創建新的耗電記錄
    pub fn new(date: NaiveDate, energy_kwh: Decimal) -> Self {
        Self { date, energy_kwh }
    }

    /// 檢查數值是否合法（耗電量不可為負）
    pub fn is_valid(&self) -> bool {
        self.energy_kwh >= Decimal::ZERO
    }
}
