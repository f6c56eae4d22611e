//! Property-based tests for the transfer scheduler.

use std::rc::Rc;

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::ScheduleError;
use super::scheduler::TransferScheduler;
use crate::clock::FixedClock;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn scheduler() -> TransferScheduler {
    TransferScheduler::new(Rc::new(FixedClock::on(today())))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Dates before today always fail; today or later always succeed.
    #[test]
    fn prop_schedule_date_boundary(offset in -3650i64..3650i64) {
        let date = if offset < 0 {
            today().checked_sub_days(Days::new(offset.unsigned_abs())).unwrap()
        } else {
            today().checked_add_days(Days::new(offset.unsigned_abs())).unwrap()
        };

        let mut scheduler = scheduler();
        let result = scheduler.schedule_transfer("A", "B", Decimal::ONE, date);
        if offset < 0 {
            let is_past = matches!(result, Err(ScheduleError::DateInPast { .. }));
            prop_assert!(is_past);
            prop_assert!(scheduler.is_empty());
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(scheduler.len(), 1);
        }
    }

    /// The sweep removes exactly the transfers dated today, in any order.
    #[test]
    fn prop_execute_removes_exactly_due(offsets in prop::collection::vec(0u64..5, 0..30)) {
        let mut scheduler = scheduler();
        for (i, offset) in offsets.iter().enumerate() {
            let date = today().checked_add_days(Days::new(*offset)).unwrap();
            scheduler
                .schedule_transfer(format!("S{i}"), format!("T{i}"), Decimal::from(i), date)
                .unwrap();
        }

        let before = scheduler.scheduled_transfers();
        let executed = scheduler.execute_due_transfers();
        let after = scheduler.scheduled_transfers();

        let expected_due: Vec<_> = before.iter().filter(|t| t.date == today()).cloned().collect();
        let expected_pending: Vec<_> =
            before.iter().filter(|t| t.date != today()).cloned().collect();

        prop_assert_eq!(executed, expected_due);
        prop_assert_eq!(after, expected_pending);
    }
}
