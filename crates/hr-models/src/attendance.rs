//! Attendance record model
//!
//! One record per employee per calendar date, created by a geofence-gated
//! clock-in. Clock-out fills in later; authorized manual correction may
//! adjust either time. Records are never auto-deleted.

use chrono::{NaiveDate, NaiveTime};
use hr_core::traits::{Entity, Identifiable};
use hr_core::types::Id;
use serde::{Deserialize, Serialize};

/// Attendance record entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: Id,

    pub employee_id: Id,
    /// Denormalized for display
    pub employee_name: String,

    pub date: NaiveDate,

    pub clock_in: NaiveTime,

    pub clock_out: Option<NaiveTime>,
}

impl Identifiable for AttendanceRecord {
    fn id(&self) -> &Id {
        &self.id
    }
}

impl Entity for AttendanceRecord {
    const TYPE_NAME: &'static str = "AttendanceRecord";
}

impl AttendanceRecord {
    /// Whether the employee is still clocked in
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }
}
