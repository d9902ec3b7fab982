mod collector;
mod indexer;
mod system_scripts;

pub use collector::Config as CollectorConfig;
pub use indexer::Config as IndexerConfig;
pub use system_scripts::{Config as SystemScriptsConfig, NetworkType};
