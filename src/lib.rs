//! Building, signing and funding CKB transactions.
//!
//! - [`transaction`] assembles transactions, estimates fees and signs
//!   witness groups with single, multisig or segmented schemes.
//! - [`collector`] gathers live cells from an indexer to fund them.
//! - [`app_config`] loads the TOML config shared by both.
pub use ckb_txkit_app_config as app_config;
pub use ckb_txkit_collector as collector;
pub use ckb_txkit_error as error;
pub use ckb_txkit_transaction as transaction;

pub use ckb_txkit_error::{Error, ErrorKind};
