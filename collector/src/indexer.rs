use ckb_jsonrpc_types::{
    BlockNumber, CellOutput, IndexerOrder, JsonBytes, OutPoint, Script, Uint32, Uint64,
};
use ckb_txkit_error::Error;
use serde::{Deserialize, Serialize};

/// Which script of a cell the search key matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptType {
    Lock,
    Type,
}

/// How the search key script is compared with the cell scripts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptSearchMode {
    /// The script args start with the search key args.
    #[default]
    Prefix,
    /// The script args equal the search key args.
    Exact,
    /// The script args contain the search key args.
    Partial,
}

/// Extra conditions applied by the index, ranges are `[start, end)`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchKeyFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<Script>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_len_range: Option<[Uint64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_data_len_range: Option<[Uint64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_capacity_range: Option<[Uint64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_range: Option<[BlockNumber; 2]>,
}

/// The `search_key` parameter of `get_cells`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchKey {
    pub script: Script,
    pub script_type: ScriptType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_search_mode: Option<ScriptSearchMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<SearchKeyFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_data: Option<bool>,
}

impl SearchKey {
    /// Cells locked by `lock`, prefix matched, output data included.
    pub fn by_lock(lock: Script) -> Self {
        SearchKey {
            script: lock,
            script_type: ScriptType::Lock,
            script_search_mode: None,
            filter: None,
            with_data: None,
        }
    }
}

/// Order of the cells in the result set, by block number then index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOrder {
    Asc,
    Desc,
}

impl From<IndexerOrder> for SearchOrder {
    fn from(order: IndexerOrder) -> Self {
        match order {
            IndexerOrder::Asc => SearchOrder::Asc,
            IndexerOrder::Desc => SearchOrder::Desc,
        }
    }
}

/// A live cell returned by `get_cells`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveCell {
    pub output: CellOutput,
    /// Absent when the search key asks for no data.
    #[serde(default)]
    pub output_data: Option<JsonBytes>,
    pub out_point: OutPoint,
    pub block_number: BlockNumber,
    pub tx_index: Uint32,
}

/// One page of a `get_cells` result set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination<T> {
    pub objects: Vec<T>,
    /// Cursor of the last object, passed back to fetch the next page.
    pub last_cursor: JsonBytes,
}

impl<T> Pagination<T> {
    pub fn new(objects: Vec<T>, last_cursor: JsonBytes) -> Self {
        Pagination {
            objects,
            last_cursor,
        }
    }
}

/// A remote cell index.
///
/// An empty `last_cursor`, or a page shorter than `limit`, marks the end of
/// the results.
pub trait CellIndexer {
    /// Returns at most `limit` cells after `after_cursor`.
    ///
    /// Failures are reported as [`Error::RemoteQueryFailed`].
    fn get_cells(
        &self,
        search_key: &SearchKey,
        order: SearchOrder,
        limit: Uint32,
        after_cursor: Option<JsonBytes>,
    ) -> Result<Pagination<LiveCell>, Error>;
}

impl<T: CellIndexer + ?Sized> CellIndexer for &T {
    fn get_cells(
        &self,
        search_key: &SearchKey,
        order: SearchOrder,
        limit: Uint32,
        after_cursor: Option<JsonBytes>,
    ) -> Result<Pagination<LiveCell>, Error> {
        (**self).get_cells(search_key, order, limit, after_cursor)
    }
}
