//! Server error log persistence

mod in_memory;
mod postgres;

pub use in_memory::InMemoryErrorLogRepository;
pub use postgres::PostgresErrorLogRepository;
