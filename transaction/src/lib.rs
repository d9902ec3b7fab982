//! Transaction assembling and signing for the secp256k1 lock scripts.
//!
//! The usual flow is:
//!
//! 1. [`new_transaction_for_scheme`] creates a transaction carrying the dep
//!    groups of the chosen [`SignatureScheme`].
//! 2. [`add_inputs`] appends the inputs unlocked by one key (or one multisig
//!    lock) and returns their [`WitnessGroup`] with a template `WitnessArgs`.
//! 3. Outputs are added, [`estimate_fee`] is used to size the change.
//! 4. [`single_sign`], [`multi_sign`] or [`segment_sign`] fills the primary
//!    witness of each group.
mod assembler;
mod fee;
mod group;
mod key;
mod multisig;
mod signer;
mod system_scripts;

pub use assembler::{
    EMPTY_WITNESS_ARGS_PLACEHOLDER, SIGNATURE_PLACEHOLDER, SignatureScheme, add_inputs,
    empty_witness_args, new_transaction_for_scheme,
};
pub use fee::{TRANSACTION_OFFSET_SIZE, estimate_fee, fee_for_size, transaction_size};
pub use group::WitnessGroup;
pub use key::Signer;
pub use multisig::MultisigConfig;
pub use signer::{
    group_message, multi_sign, segment_message, segment_sign, single_sign, witness_args_at,
};
pub use system_scripts::SystemScripts;

#[cfg(test)]
mod tests;
