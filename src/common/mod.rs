//! Items that are relevant throughout the command line interface.

mod args;
mod config;
mod context;
pub mod output;

pub use args::*;
pub use config::*;
pub use context::*;

pub const CONFIG_FILENAME: &str = "emojify.toml";
