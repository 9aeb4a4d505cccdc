//! Read-only query surface over the store
//!
//! List-by-filter helpers consumed by the UI layer and the reports crate.
//! Results are sorted by id so callers see a stable order regardless of hash
//! iteration.

use chrono::{Datelike, NaiveDate};
use hr_core::traits::Identifiable;
use hr_models::{
    AttendanceRecord, OnboardingRequest, OnboardingStatus, PerformanceEvaluation, TrainingSession,
    TrainingTopic,
};

use crate::store::Store;

fn sorted_by_id<'a, T: Identifiable>(mut items: Vec<&'a T>) -> Vec<&'a T> {
    items.sort_by_key(|item| item.id().clone());
    items
}

impl Store {
    /// Requests awaiting first-line review by the given manager
    pub fn requests_pending_manager(&self, manager_id: &str) -> Vec<&OnboardingRequest> {
        sorted_by_id(
            self.onboarding_requests()
                .filter(|r| {
                    r.status == OnboardingStatus::PendingManagerApproval
                        && r.manager_id == manager_id
                })
                .collect(),
        )
    }

    /// Requests awaiting HR approval
    pub fn requests_pending_hr(&self) -> Vec<&OnboardingRequest> {
        sorted_by_id(
            self.onboarding_requests()
                .filter(|r| r.status == OnboardingStatus::PendingHrApproval)
                .collect(),
        )
    }

    /// Evaluations of the given employee
    pub fn evaluations_for_employee(&self, employee_id: &str) -> Vec<&PerformanceEvaluation> {
        sorted_by_id(
            self.evaluations()
                .filter(|e| e.employee_id == employee_id)
                .collect(),
        )
    }

    /// Evaluations managed by the given manager
    pub fn evaluations_for_manager(&self, manager_id: &str) -> Vec<&PerformanceEvaluation> {
        sorted_by_id(
            self.evaluations()
                .filter(|e| e.manager_id == manager_id)
                .collect(),
        )
    }

    /// Topics that may be scheduled
    pub fn approved_topics(&self) -> Vec<&TrainingTopic> {
        sorted_by_id(
            self.topics()
                .filter(|t| t.status.is_schedulable())
                .collect(),
        )
    }

    /// Sessions whose roster contains the given employee
    pub fn sessions_with_attendee(&self, employee_id: &str) -> Vec<&TrainingSession> {
        sorted_by_id(
            self.sessions()
                .filter(|s| s.includes(employee_id))
                .collect(),
        )
    }

    /// The employee's attendance record on a date, if any
    pub fn attendance_on(&self, employee_id: &str, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.attendance_records()
            .find(|r| r.employee_id == employee_id && r.date == date)
    }

    /// All attendance records in a (year, month) window
    pub fn attendance_in_month(&self, year: i32, month: u32) -> Vec<&AttendanceRecord> {
        sorted_by_id(
            self.attendance_records()
                .filter(|r| r.date.year() == year && r.date.month() == month)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use hr_models::{Attendee, FormData, SessionStatus};

    fn request(id: &str, manager_id: &str, status: OnboardingStatus) -> OnboardingRequest {
        let mut r = OnboardingRequest::new(id, FormData::new(), manager_id);
        r.status = status;
        r
    }

    #[test]
    fn test_requests_pending_manager_filters_stage_and_assignee() {
        let mut store = Store::new();
        store.insert_onboarding_request(request(
            "E010",
            "M001",
            OnboardingStatus::PendingManagerApproval,
        ));
        store.insert_onboarding_request(request(
            "E011",
            "M002",
            OnboardingStatus::PendingManagerApproval,
        ));
        store.insert_onboarding_request(request("E012", "M001", OnboardingStatus::PendingHrApproval));

        let pending = store.requests_pending_manager("M001");
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, "E010");

        assert_eq!(store.requests_pending_hr().len(), 1);
    }

    #[test]
    fn test_sessions_with_attendee() {
        let mut store = Store::new();
        store.insert_session(TrainingSession {
            id: "s-1".into(),
            topic_id: "t-1".into(),
            topic_title: "First Aid".into(),
            department: "Operations".into(),
            date: NaiveDate::from_ymd_opt(2026, 5, 4).unwrap(),
            trainer: "Red Crescent".into(),
            attendees: vec![Attendee::new("E001")],
            status: SessionStatus::Scheduled,
        });

        assert_eq!(store.sessions_with_attendee("E001").len(), 1);
        assert!(store.sessions_with_attendee("E002").is_empty());
    }

    #[test]
    fn test_attendance_month_window() {
        let mut store = Store::new();
        for (id, date) in [
            ("a-1", NaiveDate::from_ymd_opt(2026, 2, 2).unwrap()),
            ("a-2", NaiveDate::from_ymd_opt(2026, 2, 3).unwrap()),
            ("a-3", NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()),
        ] {
            store.insert_attendance_record(AttendanceRecord {
                id: id.into(),
                employee_id: "E001".into(),
                employee_name: "Amina".into(),
                date,
                clock_in: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                clock_out: None,
            });
        }

        assert_eq!(store.attendance_in_month(2026, 2).len(), 2);
        assert!(store
            .attendance_on("E001", NaiveDate::from_ymd_opt(2026, 2, 3).unwrap())
            .is_some());
        assert!(store
            .attendance_on("E001", NaiveDate::from_ymd_opt(2026, 2, 4).unwrap())
            .is_none());
    }
}
