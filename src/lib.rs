pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod types;

// HTTP access to the wiki
pub mod infra;

pub use error::{Result, TimelineError};
pub use types::PatchRow;
