//! CLI command handlers.

mod batch;
mod format_name;
mod get;

pub use batch::run_batch;
pub use format_name::run_format_name;
pub use get::run_get;
