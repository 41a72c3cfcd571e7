//! Endpoint paths served by the backend.

pub const SUBMIT_SURVEY: &str = "/api/submit_survey";
pub const ADMIN_DATA: &str = "/api/admin/data";
pub const ADMIN_EXPORT: &str = "/api/admin/export";
/// Router pattern for a single stored response.
pub const ADMIN_RESPONSE: &str = "/api/admin/response/{id}";

pub const EXPORT_FILENAME: &str = "survey_export.csv";

pub fn admin_response(id: i64) -> String {
    format!("/api/admin/response/{id}")
}
