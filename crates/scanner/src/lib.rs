mod models;
mod classifier;
mod mapper;
mod walker;
mod server;
mod errors;

#[cfg(test)]
mod test_fixtures;

pub use models::*;
pub use classifier::classify;
pub use mapper::{map_output_path, pointer_path};
pub use walker::walk;
pub use errors::ScanError;
