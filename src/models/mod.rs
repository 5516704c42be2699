pub mod enums;
pub mod profile;

pub use enums::{AssessmentSeverity, Gender, HealthStatus, Severity};
pub use profile::{HealthData, UserProfile};
