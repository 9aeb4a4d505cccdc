//! Derived statistics over the entity store
//!
//! Aggregations are recomputed from raw records on every call and are never
//! persisted. Score averages skip unrated inputs rather than counting them
//! as zero, and empty inputs yield `None` rather than a fabricated average.

pub mod attendance;
pub mod matrix;
pub mod scores;

pub use attendance::{format_hhmm, monthly_attendance_summary, MonthlyAttendanceSummary};
pub use matrix::{training_matrix, MatrixCell, MatrixCellStatus, MatrixRow};
pub use scores::{evaluation_score_average, training_score_average, ScoreScope};
