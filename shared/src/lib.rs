pub mod config;
pub mod types;

pub use crate::config::{gateway_vars, load_config, load_config_from, GatewayConfig};
pub use crate::types::*;
