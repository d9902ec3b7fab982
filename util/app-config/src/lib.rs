//! ckb-txkit config options.
//!
//! The whole config is a single TOML document with three optional sections:
//!
//! ```toml
//! [indexer]
//! url = "http://127.0.0.1:8114"
//! timeout_secs = 30
//!
//! [collector]
//! limit = 100
//! order = "asc"
//! empty_data = true
//!
//! [system_scripts]
//! network = "testnet"
//! ```
mod app_config;
mod configs;

pub use app_config::TxKitAppConfig;
pub use configs::*;
