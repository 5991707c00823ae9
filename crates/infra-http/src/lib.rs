// Content Service Infrastructure - HTTP Adapter
// Implements: ServiceBusCaller

pub mod config;
pub mod http_caller;

pub use config::ServiceBusConfig;
pub use http_caller::HttpServiceBusCaller;
