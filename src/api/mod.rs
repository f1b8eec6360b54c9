//! API layer - HTTP endpoints, controllers and middleware

pub mod account;
pub mod controllers;
pub mod decorators;
pub mod health;
pub mod middleware;
pub mod router;
pub mod state;
pub mod types;

pub use router::create_router;
pub use state::AppState;
