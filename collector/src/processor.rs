use ckb_txkit_error::Error;
use std::collections::HashMap;

use crate::LiveCell;

/// Key of the cell count kept by [`CountLiveCellProcessor`] in
/// [`LiveCellCollectResult::options`].
pub const COUNT_OPTION: &str = "count";

/// Cells accepted by a processor during one collection.
#[derive(Debug, Default)]
pub struct LiveCellCollectResult {
    pub live_cells: Vec<LiveCell>,
    /// Total capacity of `live_cells`, in shannons.
    pub capacity: u64,
    /// Free-form state of the processor.
    pub options: HashMap<String, serde_json::Value>,
}

/// Decides what a collection keeps and when it stops.
pub trait LiveCellProcessor {
    /// Folds `cell` into `result`, returns `true` to stop the collection.
    fn process(
        &mut self,
        cell: LiveCell,
        result: &mut LiveCellCollectResult,
    ) -> Result<bool, Error>;
}

impl<F> LiveCellProcessor for F
where
    F: FnMut(LiveCell, &mut LiveCellCollectResult) -> Result<bool, Error>,
{
    fn process(
        &mut self,
        cell: LiveCell,
        result: &mut LiveCellCollectResult,
    ) -> Result<bool, Error> {
        self(cell, result)
    }
}

fn keep(cell: LiveCell, result: &mut LiveCellCollectResult) {
    result.capacity = result.capacity.saturating_add(cell.output.capacity.value());
    result.live_cells.push(cell);
}

/// Keeps every cell until the collected capacity reaches `max`.
///
/// A `max` of 0 never stops, the whole result set is collected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CapacityLiveCellProcessor {
    pub max: u64,
}

impl CapacityLiveCellProcessor {
    pub fn new(max: u64) -> Self {
        CapacityLiveCellProcessor { max }
    }
}

impl LiveCellProcessor for CapacityLiveCellProcessor {
    fn process(
        &mut self,
        cell: LiveCell,
        result: &mut LiveCellCollectResult,
    ) -> Result<bool, Error> {
        keep(cell, result);
        Ok(self.max > 0 && result.capacity >= self.max)
    }
}

/// Keeps every cell until `max` cells are collected, 0 never stops.
///
/// The count is also exposed as `options["count"]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountLiveCellProcessor {
    pub max: usize,
}

impl CountLiveCellProcessor {
    pub fn new(max: usize) -> Self {
        CountLiveCellProcessor { max }
    }
}

impl LiveCellProcessor for CountLiveCellProcessor {
    fn process(
        &mut self,
        cell: LiveCell,
        result: &mut LiveCellCollectResult,
    ) -> Result<bool, Error> {
        keep(cell, result);
        let count = result.live_cells.len();
        result
            .options
            .insert(COUNT_OPTION.to_owned(), serde_json::Value::from(count));
        Ok(self.max > 0 && count >= self.max)
    }
}
