//! Live cell collecting over the indexer `get_cells` RPC.
//!
//! [`LiveCellCollector`] pages through the cells matching a search key,
//! drops the cells rejected by its filters and hands the others to a
//! [`LiveCellProcessor`], which accumulates them and decides when to stop.
mod collector;
mod indexer;
mod processor;
mod rpc;

pub use collector::LiveCellCollector;
pub use indexer::{
    CellIndexer, LiveCell, Pagination, ScriptSearchMode, ScriptType, SearchKey, SearchKeyFilter,
    SearchOrder,
};
pub use processor::{
    COUNT_OPTION, CapacityLiveCellProcessor, CountLiveCellProcessor, LiveCellCollectResult,
    LiveCellProcessor,
};
pub use rpc::IndexerRpcClient;

#[cfg(test)]
mod tests;
