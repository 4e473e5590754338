mod models;
mod defaults;
mod loader;
mod migration;
mod policy;
mod errors;

pub use models::*;
pub use policy::OutputPolicy;
pub use errors::ConfigError;
pub use defaults::DEFAULT_CONFIG_TEMPLATE;
