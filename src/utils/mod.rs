pub mod environment;
pub mod paths;

pub use environment::{AppConfig, ConfigOverrides, resolve_config};
pub use paths::{default_history_path, format_path_with_tilde};
