//! Attendance workflow
//!
//! Clock-in is gated by the office geofence; clock-out closes the day's
//! record. HR or management may correct either time manually. One record per
//! employee per date.

use chrono::{NaiveDate, NaiveTime};
use hr_auth::{authorize, Action};
use hr_core::config::PolicyConfig;
use hr_core::error::HrError;
use hr_core::result::HrResult;
use hr_core::types::Actor;
use hr_geofence::{check, GeoPoint};
use hr_models::AttendanceRecord;
use hr_store::Store;
use uuid::Uuid;

/// Workflow service for clock actions and corrections
pub struct AttendanceWorkflow<'a> {
    store: &'a mut Store,
    config: &'a PolicyConfig,
}

impl<'a> AttendanceWorkflow<'a> {
    pub fn new(store: &'a mut Store, config: &'a PolicyConfig) -> Self {
        Self { store, config }
    }

    /// Clock in at a reported position. Out-of-range positions are rejected
    /// with the computed distance; a second clock-in on the same date fails.
    pub fn clock_in(
        &mut self,
        actor: &Actor,
        date: NaiveDate,
        time: NaiveTime,
        position: GeoPoint,
    ) -> HrResult<AttendanceRecord> {
        let employee_name = self.store.user(&actor.id)?.name.clone();
        // Clocking is always against the actor's own record.
        authorize(actor.role, Action::AttendanceClockIn, true)?;

        let office = GeoPoint::from(&self.config.geofence);
        let result = check(position, office, self.config.geofence.radius_m);
        if !result.is_in_range() {
            tracing::debug!(
                employee_id = %actor.id,
                distance_m = result.distance_m(),
                "clock-in denied outside geofence"
            );
            return Err(HrError::invalid_field(
                "position",
                format!(
                    "outside the office geofence ({:.0} m from reference)",
                    result.distance_m()
                ),
            ));
        }

        if let Some(existing) = self.store.attendance_on(&actor.id, date) {
            return Err(HrError::InvalidTransition {
                entity: "AttendanceRecord",
                id: existing.id.clone(),
                status: "clocked_in".to_string(),
                operation: "clock_in",
            });
        }

        let record = AttendanceRecord {
            id: Uuid::new_v4().to_string(),
            employee_id: actor.id.clone(),
            employee_name,
            date,
            clock_in: time,
            clock_out: None,
        };
        self.store.insert_attendance_record(record.clone());
        Ok(record)
    }

    /// Close the day's open record
    pub fn clock_out(&mut self, actor: &Actor, date: NaiveDate, time: NaiveTime) -> HrResult<()> {
        authorize(actor.role, Action::AttendanceClockOut, true)?;

        let record = self
            .store
            .attendance_on(&actor.id, date)
            .ok_or_else(|| HrError::not_found("AttendanceRecord", format!("{}@{date}", actor.id)))?;

        if !record.is_open() {
            return Err(HrError::InvalidTransition {
                entity: "AttendanceRecord",
                id: record.id.clone(),
                status: "clocked_out".to_string(),
                operation: "clock_out",
            });
        }
        if time < record.clock_in {
            return Err(HrError::invalid_field(
                "clock_out",
                "can't be earlier than clock-in",
            ));
        }

        let id = record.id.clone();
        self.store.attendance_record_mut(&id)?.clock_out = Some(time);
        Ok(())
    }

    /// Authorized manual correction of either time
    pub fn correct(
        &mut self,
        actor: &Actor,
        record_id: &str,
        clock_in: NaiveTime,
        clock_out: Option<NaiveTime>,
    ) -> HrResult<()> {
        self.store.attendance_record(record_id)?;
        authorize(actor.role, Action::AttendanceCorrect, false)?;

        if let Some(out) = clock_out {
            if out < clock_in {
                return Err(HrError::invalid_field(
                    "clock_out",
                    "can't be earlier than clock-in",
                ));
            }
        }

        let record = self.store.attendance_record_mut(record_id)?;
        record.clock_in = clock_in;
        record.clock_out = clock_out;
        tracing::info!(record_id = %record_id, corrected_by = %actor.id, "attendance corrected");
        Ok(())
    }
}
