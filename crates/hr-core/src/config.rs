//! Policy configuration
//!
//! Site policy the engine must not hard-code: the expected-working-days
//! figure used by the attendance summary and the office geofence parameters.

use serde::{Deserialize, Serialize};

/// Engine policy configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PolicyConfig {
    /// Attendance policy
    pub attendance: AttendancePolicy,

    /// Office geofence parameters
    pub geofence: GeofencePolicy,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AttendancePolicy {
    /// Expected working days in a month. A policy constant, not derived from
    /// the calendar; absent-day estimates subtract from this figure.
    pub expected_working_days: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeofencePolicy {
    /// Office reference latitude in decimal degrees
    pub office_latitude: f64,
    /// Office reference longitude in decimal degrees
    pub office_longitude: f64,
    /// Allowed radius around the office in meters
    pub radius_m: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            attendance: AttendancePolicy {
                expected_working_days: 22,
            },
            geofence: GeofencePolicy {
                office_latitude: 0.0,
                office_longitude: 0.0,
                radius_m: 200.0,
            },
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl PolicyConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(days) = std::env::var("HR_EXPECTED_WORKING_DAYS") {
            config.attendance.expected_working_days =
                days.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "HR_EXPECTED_WORKING_DAYS".to_string(),
                    message: format!("not a whole number: {days}"),
                })?;
        }

        if let Ok(lat) = std::env::var("HR_OFFICE_LATITUDE") {
            config.geofence.office_latitude =
                lat.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "HR_OFFICE_LATITUDE".to_string(),
                    message: format!("not a number: {lat}"),
                })?;
        }
        if let Ok(lng) = std::env::var("HR_OFFICE_LONGITUDE") {
            config.geofence.office_longitude =
                lng.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "HR_OFFICE_LONGITUDE".to_string(),
                    message: format!("not a number: {lng}"),
                })?;
        }
        if let Ok(radius) = std::env::var("HR_GEOFENCE_RADIUS_M") {
            config.geofence.radius_m =
                radius.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "HR_GEOFENCE_RADIUS_M".to_string(),
                    message: format!("not a number: {radius}"),
                })?;
        }

        Ok(config)
    }
}
