// Port Layer - Interfaces for external dependencies

pub mod service_bus;

// Re-exports
pub use service_bus::ServiceBusCaller;
