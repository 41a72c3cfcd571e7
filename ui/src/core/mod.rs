//! Platform glue and helpers shared by the survey form and the admin dashboard.

pub mod client;
pub mod format;
pub mod platform;
