//! Service and app profile storage

pub mod loader;
pub mod path;
mod render;
mod schema;

pub use loader::{load_config_from_path, parse_config, save_config_to_path, ConfigFile};
pub use path::{default_config_path, ensure_parent_dir, resolve_config_path, CONFIG_ENV_VAR};
pub use render::render;
pub use schema::*;
