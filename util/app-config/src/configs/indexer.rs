use serde::{Deserialize, Serialize};

const DEFAULT_URL: &str = "http://127.0.0.1:8114";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Remote cell index endpoint options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// JSON-RPC endpoint serving `get_cells`, e.g. a ckb node with the Indexer module enabled.
    #[serde(default = "default_url")]
    pub url: String,
    /// Per request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_url() -> String {
    DEFAULT_URL.to_owned()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
