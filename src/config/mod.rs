//! Graph definitions: TOML files and the built-in campus demo.

pub mod campus;
pub mod loader;

pub use loader::{load_config, parse_config, resolve_config_path, EdgeConfig, GraphConfig};
