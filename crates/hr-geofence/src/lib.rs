//! # hr-geofence
//!
//! Geofence validation for HR Portal RS.
//!
//! Classifies a reported position against a circular boundary around a
//! reference coordinate. Pure functions, no state; the upstream position fix
//! is the caller's problem.

use hr_core::config::GeofencePolicy;
use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS84 coordinate pair in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<&GeofencePolicy> for GeoPoint {
    fn from(policy: &GeofencePolicy) -> Self {
        Self::new(policy.office_latitude, policy.office_longitude)
    }
}

/// Outcome of a geofence check, carrying the computed distance for display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum GeofenceCheck {
    InRange { distance_m: f64 },
    OutOfRange { distance_m: f64 },
}

impl GeofenceCheck {
    pub fn is_in_range(&self) -> bool {
        matches!(self, Self::InRange { .. })
    }

    pub fn distance_m(&self) -> f64 {
        match self {
            Self::InRange { distance_m } | Self::OutOfRange { distance_m } => *distance_m,
        }
    }
}

/// Great-circle distance in meters via the haversine formula.
///
/// Uses the atan2 formulation, which stays numerically stable for antipodal
/// and near-pole inputs where the asin form can blow up on rounding.
pub fn haversine_distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Classify a reported position against the reference point and radius
pub fn check(reported: GeoPoint, reference: GeoPoint, radius_m: f64) -> GeofenceCheck {
    let distance_m = haversine_distance_m(reported, reference);
    if distance_m <= radius_m {
        GeofenceCheck::InRange { distance_m }
    } else {
        GeofenceCheck::OutOfRange { distance_m }
    }
}
