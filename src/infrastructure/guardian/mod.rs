//! Guardian persistence implementations

mod in_memory_repository;
mod postgres_repository;

pub use in_memory_repository::InMemoryGuardianRepository;
pub use postgres_repository::PostgresGuardianRepository;
