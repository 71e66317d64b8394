//! Data models shared with the presentation layer.
//!
//! - `User`, `Role`: the signed-in identity derived from the session record
//! - `Reference<T>`: fields delivered either as an identifier or an expanded object
//! - `MedicalAssessment`, `AssessmentView`: read-only assessment detail display

pub mod assessment;
pub mod reference;
pub mod user;

pub use assessment::{AssessmentView, CowSummary, Field, HealthBadge, MedicalAssessment, NamedOption};
pub use reference::{Labelled, Reference};
pub use user::{Role, User, GUEST_USERNAME};
