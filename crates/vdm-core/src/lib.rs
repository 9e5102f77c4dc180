pub mod config;
pub mod error;
pub mod library;
pub mod logging;
pub mod orchestrator;
pub mod tool;
pub mod url_model;
