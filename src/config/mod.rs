mod core;
mod loader;
mod parallel;
mod rules;

pub use core::{default_ignore_dirs, DiscoveryConfig, HintcheckConfig, OutputConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};
pub use parallel::ParallelConfig;
pub use rules::{default_generic_containers, default_receiver_names, RulesConfig};
