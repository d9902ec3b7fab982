
use crate::{CellIndexer, LiveCell, Pagination, SearchKey, SearchOrder};
use ckb_jsonrpc_types::{CellOutput, JsonBytes, OutPoint, Script, ScriptHashType, Uint32};
use ckb_txkit_error::Error;
use ckb_types::H256;
use std::cell::RefCell;

pub(crate) fn script(seed: u8) -> Script {
    Script {
        code_hash: H256([seed; 32]),
        hash_type: ScriptHashType::Type,
        args: JsonBytes::from_vec(vec![seed; 20]),
    }
}

pub(crate) fn search_key() -> SearchKey {
    SearchKey::by_lock(script(0))
}

pub(crate) struct CellSpec {
    pub capacity: u64,
    pub type_script: Option<Script>,
    pub data: Vec<u8>,
}

impl CellSpec {
    pub fn plain(capacity: u64) -> Self {
        CellSpec {
            capacity,
            type_script: None,
            data: Vec::new(),
        }
    }

    pub fn typed(capacity: u64, type_script: Script) -> Self {
        CellSpec {
            capacity,
            type_script: Some(type_script),
            data: Vec::new(),
        }
    }

    pub fn with_data(capacity: u64, data: Vec<u8>) -> Self {
        CellSpec {
            capacity,
            type_script: None,
            data,
        }
    }

    fn to_cell(&self, page: usize, index: usize) -> LiveCell {
        LiveCell {
            output: CellOutput {
                capacity: self.capacity.into(),
                lock: script(0),
                type_: self.type_script.clone(),
            },
            output_data: Some(JsonBytes::from_vec(self.data.clone())),
            out_point: OutPoint {
                tx_hash: H256([page as u8; 32]),
                index: (index as u32).into(),
            },
            block_number: (page as u64).into(),
            tx_index: 0u32.into(),
        }
    }
}

/// Serves fixed pages, one per request, and records the requests.
pub(crate) struct MockIndexer {
    pages: Vec<Vec<CellSpec>>,
    empty_cursor_at: Option<usize>,
    fail_at: Option<usize>,
    pub requests: RefCell<Vec<(u32, Option<JsonBytes>)>>,
    pub orders: RefCell<Vec<SearchOrder>>,
}

impl MockIndexer {
    pub fn new(pages: Vec<Vec<CellSpec>>) -> Self {
        MockIndexer {
            pages,
            empty_cursor_at: None,
            fail_at: None,
            requests: RefCell::new(Vec::new()),
            orders: RefCell::new(Vec::new()),
        }
    }

    pub fn empty_cursor_at(mut self, page: usize) -> Self {
        self.empty_cursor_at = Some(page);
        self
    }

    pub fn fail_at(mut self, page: usize) -> Self {
        self.fail_at = Some(page);
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn cursor_of_page(page: usize) -> JsonBytes {
        JsonBytes::from_vec(vec![page as u8 + 1])
    }
}

impl CellIndexer for MockIndexer {
    fn get_cells(
        &self,
        _search_key: &SearchKey,
        order: SearchOrder,
        limit: Uint32,
        after_cursor: Option<JsonBytes>,
    ) -> Result<Pagination<LiveCell>, Error> {
        let page = self.request_count();
        self.requests.borrow_mut().push((limit.value(), after_cursor));
        self.orders.borrow_mut().push(order);
        if self.fail_at == Some(page) {
            return Err(Error::RemoteQueryFailed(anyhow::anyhow!(
                "connection refused"
            )));
        }
        let cells = self
            .pages
            .get(page)
            .map(|specs| {
                specs
                    .iter()
                    .take(limit.value() as usize)
                    .enumerate()
                    .map(|(index, spec)| spec.to_cell(page, index))
                    .collect()
            })
            .unwrap_or_default();
        let last_cursor = if self.empty_cursor_at == Some(page) {
            JsonBytes::from_vec(Vec::new())
        } else {
            Self::cursor_of_page(page)
        };
        Ok(Pagination::new(cells, last_cursor))
    }
}
