use crate::{CollectorConfig, IndexerConfig, SystemScriptsConfig};
use ckb_txkit_error::Error;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The ckb-txkit config file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TxKitAppConfig {
    #[serde(default)]
    pub indexer: IndexerConfig,
    #[serde(default)]
    pub collector: CollectorConfig,
    #[serde(default)]
    pub system_scripts: SystemScriptsConfig,
}

impl TxKitAppConfig {
    pub fn load_from_slice(slice: &[u8]) -> Result<Self, Error> {
        toml::from_slice(slice).map_err(|err| Error::Config(err.to_string()))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let content = std::fs::read(path)
            .map_err(|err| Error::Config(format!("read {}: {}", path.display(), err)))?;
        Self::load_from_slice(&content)
    }
}
