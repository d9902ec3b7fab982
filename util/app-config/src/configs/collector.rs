use ckb_jsonrpc_types::{IndexerOrder, Script};
use ckb_txkit_error::Error;
use serde::{Deserialize, Serialize};

const DEFAULT_LIMIT: u32 = 100;

/// Live cell collector defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Page size of every `get_cells` request.
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// `"asc"` or `"desc"`.
    #[serde(default = "default_order")]
    pub order: String,
    /// Only collect cells whose output data is empty.
    #[serde(default)]
    pub empty_data: bool,
    /// Only collect cells with exactly this type script. Cells without a type
    /// script are collected when it is absent.
    #[serde(default)]
    pub type_script: Option<Script>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            limit: default_limit(),
            order: default_order(),
            empty_data: false,
            type_script: None,
        }
    }
}

impl Config {
    /// Parses the configured order.
    pub fn search_order(&self) -> Result<IndexerOrder, Error> {
        match self.order.as_str() {
            "asc" => Ok(IndexerOrder::Asc),
            "desc" => Ok(IndexerOrder::Desc),
            other => Err(Error::InvalidSearchOrder(format!(
                "expect \"asc\" or \"desc\", got {other:?}"
            ))),
        }
    }
}

const fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

fn default_order() -> String {
    "asc".to_owned()
}
