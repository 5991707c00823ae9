// Application Layer - Use Cases

pub mod put;

// Re-exports
pub use put::PutService;
