mod models;
mod materializer;
mod orchestrator;
mod errors;

pub use models::{Materializer, Orchestrator, Outcome, RunSummary, ServerStats, SkipReason};
pub use errors::SyncError;
