pub mod cli;
pub mod config;
pub mod context;
pub mod errors;
pub mod extensions;
pub mod language;
pub mod launcher;
pub mod logging;
pub mod plugin;
