use ckb_jsonrpc_types::{JsonBytes, Uint32};
use ckb_logger::trace;
use ckb_txkit_app_config::IndexerConfig;
use ckb_txkit_error::{AnyError, Error};
use jsonrpc_core::response::Output;
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::{CellIndexer, LiveCell, Pagination, SearchKey, SearchOrder};

/// Blocking JSON-RPC client of the indexer module.
pub struct IndexerRpcClient {
    client: reqwest::blocking::Client,
    url: reqwest::Url,
    id: AtomicU64,
}

impl IndexerRpcClient {
    pub fn new(uri: &str, timeout: Duration) -> Result<Self, Error> {
        let url = reqwest::Url::parse(uri)
            .map_err(|err| Error::Config(format!("invalid indexer url {uri:?}: {err}")))?;
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| Error::Config(format!("build http client: {err}")))?;
        Ok(IndexerRpcClient {
            client,
            url,
            id: AtomicU64::new(0),
        })
    }

    pub fn from_config(config: &IndexerConfig) -> Result<Self, Error> {
        Self::new(&config.url, Duration::from_secs(config.timeout_secs))
    }

    pub fn url(&self) -> &reqwest::Url {
        &self.url
    }

    fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T, AnyError> {
        let id = self.id.fetch_add(1, Ordering::Relaxed);
        let request = build_request(id, method, params);
        trace!("rpc request {} to {}", request, self.url);
        let output = self
            .client
            .post(self.url.clone())
            .json(&request)
            .send()?
            .error_for_status()?
            .json::<Output>()?;
        parse_output(output)
    }
}

impl CellIndexer for IndexerRpcClient {
    fn get_cells(
        &self,
        search_key: &SearchKey,
        order: SearchOrder,
        limit: Uint32,
        after_cursor: Option<JsonBytes>,
    ) -> Result<Pagination<LiveCell>, Error> {
        serde_json::to_value((search_key, order, limit, after_cursor))
            .map_err(AnyError::from)
            .and_then(|params| self.call("get_cells", params))
            .map_err(Error::RemoteQueryFailed)
    }
}

pub(crate) fn build_request(id: u64, method: &str, params: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "jsonrpc": "2.0",
        "method": method,
        "params": params,
    })
}

pub(crate) fn parse_output<T: DeserializeOwned>(output: Output) -> Result<T, AnyError> {
    match output {
        Output::Success(success) => serde_json::from_value(success.result).map_err(Into::into),
        Output::Failure(failure) => Err(failure.error.into()),
    }
}
