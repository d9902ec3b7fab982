use ckb_types::{core::TransactionView, prelude::*};

/// A transaction inside a block is preceded by its u32 offset in the
/// transactions vector.
pub const TRANSACTION_OFFSET_SIZE: u64 = 4;

/// Size the transaction occupies in a block.
///
/// `tx.data()` is the molecule table of the raw transaction and the witnesses
/// vector, each witness serialized as a length-prefixed byte buffer.
pub fn transaction_size(tx: &TransactionView) -> u64 {
    tx.data().as_slice().len() as u64 + TRANSACTION_OFFSET_SIZE
}

/// The smallest fee not less than `size * fee_rate / 1000`, in shannons.
///
/// `fee_rate` is in shannons per kilobyte. Saturates at `u64::MAX`.
pub fn fee_for_size(size: u64, fee_rate: u64) -> u64 {
    let product = u128::from(size) * u128::from(fee_rate);
    let fee = product.div_ceil(1000);
    u64::try_from(fee).unwrap_or(u64::MAX)
}

/// Minimal fee for `tx` at `fee_rate` shannons per kilobyte of serialized size.
///
/// Estimate before signing: the placeholders written by [`add_inputs`]
/// reserve the room of the signatures.
///
/// [`add_inputs`]: crate::add_inputs
pub fn estimate_fee(tx: &TransactionView, fee_rate: u64) -> u64 {
    fee_for_size(transaction_size(tx), fee_rate)
}
