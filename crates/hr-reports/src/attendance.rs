//! Monthly attendance summary
//!
//! Per-employee presence counts and average clock times over a (year, month)
//! window. Absent days are an estimate against the configured
//! expected-working-days policy figure minus externally supplied leave; the
//! estimate is clamped at zero.

use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveTime, Timelike};
use hr_core::config::AttendancePolicy;
use hr_core::types::Id;
use hr_store::Store;
use serde::{Deserialize, Serialize};

/// One employee's month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyAttendanceSummary {
    pub employee_id: Id,
    pub employee_name: String,
    pub present_days: u32,
    /// Days on approved leave, passed in by the caller; leave is not derived
    /// from attendance data
    pub leave_days: u32,
    /// Expected working days minus present minus leave, never negative
    pub absent_days: u32,
    /// Mean clock-in over the month's records, rounded to the minute
    pub average_clock_in: Option<NaiveTime>,
    /// Mean clock-out over records that have one, rounded to the minute
    pub average_clock_out: Option<NaiveTime>,
}

/// Render a time as HH:MM for display
pub fn format_hhmm(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

fn mean_time(times: &[NaiveTime]) -> Option<NaiveTime> {
    if times.is_empty() {
        return None;
    }
    let total_seconds: u64 = times
        .iter()
        .map(|t| t.num_seconds_from_midnight() as u64)
        .sum();
    let mean_seconds = total_seconds as f64 / times.len() as f64;
    // Round to the nearest minute, clamped below midnight.
    let minutes = ((mean_seconds / 60.0).round() as u32).min(23 * 60 + 59);
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}

/// Summarize a month for every employee with at least one record in it, plus
/// every employee named in the leave input.
pub fn monthly_attendance_summary(
    store: &Store,
    year: i32,
    month: u32,
    leave_days: &HashMap<Id, u32>,
    policy: &AttendancePolicy,
) -> Vec<MonthlyAttendanceSummary> {
    let mut clock_ins: BTreeMap<Id, Vec<NaiveTime>> = BTreeMap::new();
    let mut clock_outs: BTreeMap<Id, Vec<NaiveTime>> = BTreeMap::new();
    let mut names: BTreeMap<Id, String> = BTreeMap::new();

    for record in store.attendance_in_month(year, month) {
        names
            .entry(record.employee_id.clone())
            .or_insert_with(|| record.employee_name.clone());
        clock_ins
            .entry(record.employee_id.clone())
            .or_default()
            .push(record.clock_in);
        if let Some(out) = record.clock_out {
            clock_outs
                .entry(record.employee_id.clone())
                .or_default()
                .push(out);
        }
    }

    // Employees on leave the whole month still appear in the summary.
    for id in leave_days.keys() {
        names.entry(id.clone()).or_insert_with(|| {
            store
                .user(id)
                .map(|u| u.name.clone())
                .unwrap_or_else(|_| id.clone())
        });
    }

    names
        .into_iter()
        .map(|(employee_id, employee_name)| {
            let ins = clock_ins.remove(&employee_id).unwrap_or_default();
            let outs = clock_outs.remove(&employee_id).unwrap_or_default();
            let present_days = ins.len() as u32;
            let leave = leave_days.get(&employee_id).copied().unwrap_or(0);
            let absent_days = policy
                .expected_working_days
                .saturating_sub(present_days)
                .saturating_sub(leave);

            MonthlyAttendanceSummary {
                employee_id,
                employee_name,
                present_days,
                leave_days: leave,
                absent_days,
                average_clock_in: mean_time(&ins),
                average_clock_out: mean_time(&outs),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use hr_models::AttendanceRecord;

    fn policy(expected: u32) -> AttendancePolicy {
        AttendancePolicy {
            expected_working_days: expected,
        }
    }

    fn record(id: &str, day: u32, clock_in: (u32, u32), clock_out: Option<(u32, u32)>) -> AttendanceRecord {
        AttendanceRecord {
            id: format!("a-{id}-{day}"),
            employee_id: id.into(),
            employee_name: format!("User {id}"),
            date: NaiveDate::from_ymd_opt(2026, 2, day).unwrap(),
            clock_in: NaiveTime::from_hms_opt(clock_in.0, clock_in.1, 0).unwrap(),
            clock_out: clock_out.and_then(|(h, m)| NaiveTime::from_hms_opt(h, m, 0)),
        }
    }

    #[test]
    fn test_absent_days_from_policy_constant() {
        let mut store = Store::new();
        for day in [2, 3, 4] {
            store.insert_attendance_record(record("E001", day, (9, 0), Some((17, 0))));
        }

        let summary =
            monthly_attendance_summary(&store, 2026, 2, &HashMap::new(), &policy(22));
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].present_days, 3);
        assert_eq!(summary[0].absent_days, 19);
    }

    #[test]
    fn test_absent_clamped_at_zero() {
        let mut store = Store::new();
        for day in 1..=4 {
            store.insert_attendance_record(record("E001", day, (9, 0), None));
        }
        let leave = HashMap::from([("E001".to_string(), 3)]);

        let summary = monthly_attendance_summary(&store, 2026, 2, &leave, &policy(5));
        assert_eq!(summary[0].present_days, 4);
        assert_eq!(summary[0].leave_days, 3);
        assert_eq!(summary[0].absent_days, 0);
    }

    #[test]
    fn test_average_clock_times_rounded_to_minute() {
        let mut store = Store::new();
        store.insert_attendance_record(record("E001", 2, (8, 50), Some((17, 0))));
        store.insert_attendance_record(record("E001", 3, (9, 10), Some((17, 31))));
        // Open record: contributes to clock-in average only.
        store.insert_attendance_record(record("E001", 4, (9, 0), None));

        let summary =
            monthly_attendance_summary(&store, 2026, 2, &HashMap::new(), &policy(22));
        let average_in = summary[0].average_clock_in.unwrap();
        assert_eq!(format_hhmm(average_in), "09:00");
        // Mean of 17:00 and 17:31 is 17:15:30, rounding up to 17:16.
        let average_out = summary[0].average_clock_out.unwrap();
        assert_eq!(format_hhmm(average_out), "17:16");
    }

    #[test]
    fn test_no_records_no_averages() {
        let store = Store::new();
        let leave = HashMap::from([("E009".to_string(), 2)]);
        let summary = monthly_attendance_summary(&store, 2026, 2, &leave, &policy(22));

        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].present_days, 0);
        assert_eq!(summary[0].absent_days, 20);
        assert_eq!(summary[0].average_clock_in, None);
        assert_eq!(summary[0].average_clock_out, None);
    }

    #[test]
    fn test_records_outside_window_ignored() {
        let mut store = Store::new();
        store.insert_attendance_record(record("E001", 2, (9, 0), None));
        store.insert_attendance_record(AttendanceRecord {
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            ..record("E001", 5, (9, 0), None)
        });

        let summary =
            monthly_attendance_summary(&store, 2026, 2, &HashMap::new(), &policy(22));
        assert_eq!(summary[0].present_days, 1);
    }
}
