//! Data contract shared by the survey site and its backend.
//!
//! Everything that both sides must agree on lives here:
//! - the versioned question schema (`schema`)
//! - the field naming convention and value coercion (`fields`)
//! - the Likert scale anchors (`scale`)
//! - wire types for every endpoint (`model`) and the endpoint paths (`endpoints`)
//!
//! The crate performs no IO.

pub mod endpoints;
pub mod fields;
pub mod model;
pub mod scale;
pub mod schema;

pub use fields::{field_name, FieldKind};
pub use model::{
    AdminData, Aggregates, ErrorBody, FieldValue, SubmissionRecord, SubmissionSummary, SubmitAck,
    SurveyResponse,
};
pub use scale::{Rating, RATING_LABELS};
pub use schema::{Category, PriceField, QuestionSchema};
