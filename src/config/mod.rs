pub mod config;

pub use config::{
    config_path, load_config, load_config_from, resolve_connection, resolve_connection_with,
    save_config, save_config_to, Config, Connection,
};
