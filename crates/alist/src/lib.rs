mod backend;
mod client;
mod models;
mod errors;

pub use backend::RemoteFileSystem;
pub use client::AlistFileSystem;
pub use models::RemoteListing;
pub use errors::*;
