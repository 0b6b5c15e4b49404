mod config;
mod self_play_config;

pub use config::{Config, get_config_manager, get_config_path};
pub use self_play_config::SelfPlayConfig;
