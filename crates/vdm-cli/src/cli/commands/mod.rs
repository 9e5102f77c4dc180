//! CLI command handlers. Each command is in its own file.

mod download;
mod list;
mod serve;

pub use download::run_download;
pub use list::run_list;
pub use serve::run_serve;
