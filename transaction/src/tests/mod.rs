mod assembler;

use crate::{SignatureScheme, SystemScripts, new_transaction_for_scheme};
use ckb_crypto::secp::Privkey;
use ckb_types::{H256, core::TransactionView, packed, prelude::*};

pub(crate) fn privkey(seed: u8) -> Privkey {
    Privkey::from(H256([seed; 32]))
}

pub(crate) fn cell_input(tx_hash_seed: u8, index: u32) -> packed::CellInput {
    packed::CellInput::new(
        packed::OutPoint::new(H256([tx_hash_seed; 32]).pack(), index),
        0,
    )
}

pub(crate) fn cell_inputs(tx_hash_seed: u8, count: u32) -> Vec<packed::CellInput> {
    (0..count)
        .map(|index| cell_input(tx_hash_seed, index))
        .collect()
}

pub(crate) fn hybrid_tx() -> TransactionView {
    new_transaction_for_scheme(SignatureScheme::Hybrid, &SystemScripts::testnet())
}
