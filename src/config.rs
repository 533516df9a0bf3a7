//! Configuration loading
//!
//! Reads `~/.config/wellchat/config.toml` (or an explicit path). A missing
//! default file is not an error; built-in defaults apply.

mod config_loader;
mod types;

pub use config_loader::{config_path, load_config, load_config_from_path, parse_config};
pub use types::{Config, ExampleEntryConfig, ExamplesConfig};
