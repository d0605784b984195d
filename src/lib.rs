pub mod config;
pub mod error;
pub mod orchestrator;
pub mod patcher;
pub mod report;
pub mod supabase;
pub mod twilio;

pub use error::{PatchError, SetupError};
pub use patcher::{FilePatcher, PatchOutcome};
pub use report::RunSummary;
