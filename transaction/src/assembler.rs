use ckb_txkit_error::Error;
use ckb_types::{
    bytes::Bytes,
    core::{TransactionBuilder, TransactionView},
    packed,
    prelude::*,
};

use crate::{SystemScripts, WitnessGroup};

/// Reserves room for one secp256k1 signature.
pub const SIGNATURE_PLACEHOLDER: [u8; 65] = [0u8; 65];

/// Written into the primary witness of newly added inputs so that the unsigned
/// transaction is not smaller than the signed one.
pub const EMPTY_WITNESS_ARGS_PLACEHOLDER: [u8; 89] = [0u8; 89];

/// Which lock scripts the transaction unlocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignatureScheme {
    /// secp256k1_blake160_sighash_all
    Single,
    /// secp256k1_blake160_multisig_all
    Multi,
    /// Both of the above.
    Hybrid,
}

/// `WitnessArgs` whose lock is a zeroed signature, without type payloads.
pub fn empty_witness_args() -> packed::WitnessArgs {
    packed::WitnessArgs::new_builder()
        .lock(Some(Bytes::from_static(&SIGNATURE_PLACEHOLDER)).pack())
        .build()
}

/// Creates a version 0 transaction whose cell deps are the dep groups of `scheme`.
pub fn new_transaction_for_scheme(
    scheme: SignatureScheme,
    scripts: &SystemScripts,
) -> TransactionView {
    TransactionBuilder::default()
        .version(0u32.pack())
        .cell_deps(scripts.cell_deps(scheme))
        .build()
}

/// Appends `inputs` and one witness slot per input.
///
/// Returns the indices of the new witness slots and the template
/// `WitnessArgs` the group is signed with. The first new slot holds
/// [`EMPTY_WITNESS_ARGS_PLACEHOLDER`], the others are empty.
pub fn add_inputs(
    tx: &mut TransactionView,
    inputs: Vec<packed::CellInput>,
) -> Result<(WitnessGroup, packed::WitnessArgs), Error> {
    if inputs.is_empty() {
        return Err(Error::EmptyInput);
    }
    let start = tx.witnesses().len();
    let count = inputs.len();

    let mut witnesses: Vec<packed::Bytes> = tx.witnesses().into_iter().collect();
    witnesses.push(Bytes::from_static(&EMPTY_WITNESS_ARGS_PLACEHOLDER).pack());
    witnesses.extend((1..count).map(|_| packed::Bytes::default()));

    *tx = tx
        .as_advanced_builder()
        .inputs(inputs)
        .set_witnesses(witnesses)
        .build();

    let group = WitnessGroup::new((start..start + count).collect())?;
    Ok((group, empty_witness_args()))
}
