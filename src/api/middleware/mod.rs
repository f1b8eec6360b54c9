//! API middleware components

pub mod guardian_auth;
pub mod logging;

pub use guardian_auth::RequireGuardian;
pub use logging::logging_middleware;
