//! CLI command implementations

pub mod batch;
pub mod generate;
pub mod json_output;
pub mod profiles;
pub mod validate;

/// Exit status for a successful run.
pub const EXIT_OK: u8 = 0;

/// Exit status for an unreadable or invalid request.
pub const EXIT_REQUEST_ERROR: u8 = 1;

/// Exit status for a synthesis failure.
pub const EXIT_GENERATION_ERROR: u8 = 2;
