pub mod commands;
pub mod config;
pub mod render;
mod main_lib;

pub use commands::{run, Cli, Command};
pub use main_lib::{build_service, init_tracing, load_seed};
