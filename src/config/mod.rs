//! Configuration module for Bot Block Checker
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so running without a file is valid.
//!
//! # Example
//!
//! ```no_run
//! use bot_block_checker::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Listening on {}", config.server.bind_address);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{BotsConfig, Config, FetcherConfig, ServerConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
