pub mod config;
pub mod station;

use dotenvy::dotenv;
use std::env;

const CONFIG_FILE: &str = "CONFIG_FILE";
const DEFAULT_CONFIG_FILE: &str = "config.json";

pub fn get_config_path() -> String {
    dotenv().ok();
    env::var(CONFIG_FILE).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string())
}
