use ckb_jsonrpc_types::{JsonBytes, Script};
use ckb_logger::debug;
use ckb_txkit_app_config::CollectorConfig;
use ckb_txkit_error::Error;

use crate::{
    CellIndexer, LiveCell, LiveCellCollectResult, LiveCellProcessor, SearchKey, SearchOrder,
};

/// Pages through the live cells of a search key.
///
/// Every page is requested after the previous one is fully processed. The
/// collection ends when the processor asks to stop, when a page is shorter
/// than `limit` or when the returned cursor is empty.
pub struct LiveCellCollector<C, P> {
    client: C,
    search_key: Option<SearchKey>,
    order: Option<SearchOrder>,
    limit: u32,
    after_cursor: Option<JsonBytes>,
    processor: P,
    empty_data: bool,
    type_script: Option<Script>,
}

impl<C: CellIndexer, P: LiveCellProcessor> LiveCellCollector<C, P> {
    pub fn new(
        client: C,
        search_key: Option<SearchKey>,
        order: Option<SearchOrder>,
        limit: u32,
        after_cursor: Option<JsonBytes>,
        processor: P,
    ) -> Self {
        LiveCellCollector {
            client,
            search_key,
            order,
            limit,
            after_cursor,
            processor,
            empty_data: false,
            type_script: None,
        }
    }

    /// Creates a collector starting from the first page with the configured
    /// limit, order and filters.
    pub fn from_config(
        client: C,
        search_key: SearchKey,
        config: &CollectorConfig,
        processor: P,
    ) -> Result<Self, Error> {
        let order = SearchOrder::from(config.search_order()?);
        Ok(
            Self::new(client, Some(search_key), Some(order), config.limit, None, processor)
                .empty_data(config.empty_data)
                .type_script(config.type_script.clone()),
        )
    }

    /// Only accept cells whose output data is empty.
    pub fn empty_data(mut self, empty_data: bool) -> Self {
        self.empty_data = empty_data;
        self
    }

    /// Only accept cells with exactly this type script, or without type
    /// script when `None`.
    pub fn type_script(mut self, type_script: Option<Script>) -> Self {
        self.type_script = type_script;
        self
    }

    pub fn processor(&self) -> &P {
        &self.processor
    }

    fn accept(&self, cell: &LiveCell) -> bool {
        let type_matched = match self.type_script.as_ref() {
            Some(type_script) => cell.output.type_.as_ref() == Some(type_script),
            None => cell.output.type_.is_none(),
        };
        let data_matched = !self.empty_data
            || cell
                .output_data
                .as_ref()
                .map(|data| data.is_empty())
                .unwrap_or(true);
        type_matched && data_matched
    }

    /// Runs the collection.
    ///
    /// A failed page request aborts the whole collection, the cells already
    /// processed are dropped.
    pub fn collect(&mut self) -> Result<LiveCellCollectResult, Error> {
        let search_key = self.search_key.as_ref().ok_or(Error::MissingSearchKey)?;
        let order = self.order.ok_or_else(|| {
            Error::InvalidSearchOrder("expect asc or desc, got none".to_owned())
        })?;
        if self.limit == 0 {
            return Err(Error::InvalidPageLimit);
        }

        let mut result = LiveCellCollectResult::default();
        let mut cursor = self.after_cursor.clone();
        let mut pages = 0usize;
        loop {
            let page = self
                .client
                .get_cells(search_key, order, self.limit.into(), cursor.take())?;
            pages += 1;
            let fetched = page.objects.len();

            let mut stop = false;
            for cell in page.objects {
                if !self.accept(&cell) {
                    continue;
                }
                if self.processor.process(cell, &mut result)? {
                    stop = true;
                    break;
                }
            }
            debug!(
                "live cell page {}: fetched {}, collected {} cells, capacity {}",
                pages,
                fetched,
                result.live_cells.len(),
                result.capacity
            );

            if stop || fetched < self.limit as usize || page.last_cursor.is_empty() {
                break;
            }
            cursor = Some(page.last_cursor);
        }
        Ok(result)
    }
}
