//! Configuration: endpoint, field identifiers and logging.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, EndpointConfig, FieldIdentifiers, LoggingConfig};
