//! 計劃時窗（目標年份的某一個月）

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{Result, SchedError};

/// 計劃時界（天）：每月前 7 天，每天一次介入
pub const HORIZON_DAYS: u32 = 7;

/// 計劃時窗
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningWindow {
    /// 目標年份
    pub year: i32,

    /// 月份（1-12）
    pub month: u32,
}

impl PlanningWindow {
    /// 創建新的計劃時窗，月份超出 1..=12 時回傳 `InvalidMonth`
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(SchedError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// 檢查日期是否落在此月份
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// 若日期落在此月份的前 7 天，回傳其日數（1-7）
    pub fn first_week_day(&self, date: NaiveDate) -> Option<u32> {
        if self.contains(date) && date.day() <= HORIZON_DAYS {
            Some(date.day())
        } else {
            None
        }
    }

    /// 計劃時界內的日數（1..=7）
    pub fn days(&self) -> impl Iterator<Item = u32> {
        1..=HORIZON_DAYS
    }

    /// 計劃時界內的實際日期
    pub fn first_week_dates(&self) -> Vec<NaiveDate> {
        self.days()
            .filter_map(|day| NaiveDate::from_ymd_opt(self.year, self.month, day))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(13)]
    #[case(99)]
    fn test_invalid_month(#[case] month: u32) {
        let err = PlanningWindow::new(2026, month).unwrap_err();
        assert!(matches!(err, SchedError::InvalidMonth(m) if m == month));
    }

    #[test]
    fn test_contains() {
        let window = PlanningWindow::new(2026, 5).unwrap();

        assert!(window.contains(NaiveDate::from_ymd_opt(2026, 5, 31).unwrap()));
        assert!(!window.contains(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()));
        // 同月份但不同年份
        assert!(!window.contains(NaiveDate::from_ymd_opt(2025, 5, 3).unwrap()));
    }

    #[test]
    fn test_first_week_day() {
        let window = PlanningWindow::new(2026, 1).unwrap();

        assert_eq!(
            window.first_week_day(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()),
            Some(1)
        );
        assert_eq!(
            window.first_week_day(NaiveDate::from_ymd_opt(2026, 1, 7).unwrap()),
            Some(7)
        );
        assert_eq!(
            window.first_week_day(NaiveDate::from_ymd_opt(2026, 1, 8).unwrap()),
            None
        );
    }

    #[test]
    fn test_first_week_dates() {
        let window = PlanningWindow::new(2026, 2).unwrap();
        let dates = window.first_week_dates();

        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert_eq!(dates[6], NaiveDate::from_ymd_opt(2026, 2, 7).unwrap());
    }
}
