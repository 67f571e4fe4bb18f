// Declare modules within the adapters directory
pub mod in_memory_repository;
pub mod in_memory_session_store;

// Re-export adapter types for easier access from crate root
pub use in_memory_repository::InMemoryUserRepository;
pub use in_memory_session_store::InMemorySessionStore;
