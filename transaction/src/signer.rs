use ckb_hash::new_blake2b;
use ckb_logger::trace;
use ckb_txkit_error::Error;
use ckb_types::{H256, bytes::Bytes, core::TransactionView, packed, prelude::*};

use crate::{SIGNATURE_PLACEHOLDER, Signer, WitnessGroup};

/// Hashes `tx_hash ‖ len(primary) ‖ primary` followed by `len ‖ content` of
/// every other witness, lengths as little-endian u64.
fn witnesses_digest<I>(tx: &TransactionView, primary: &packed::WitnessArgs, others: I) -> H256
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut blake2b = new_blake2b();
    blake2b.update(tx.hash().as_slice());
    let primary = primary.as_slice();
    blake2b.update(&(primary.len() as u64).to_le_bytes());
    blake2b.update(primary);
    for content in others {
        let content = content.as_ref();
        blake2b.update(&(content.len() as u64).to_le_bytes());
        blake2b.update(content);
    }
    let mut digest = [0u8; 32];
    blake2b.finalize(&mut digest);
    H256(digest)
}

/// The digest signed for a witness group by the sighash and multisig locks.
///
/// Members after the primary one always count as empty witnesses, whatever
/// the transaction stores in them: only the size of the group is committed.
pub fn group_message(
    tx: &TransactionView,
    group: &WitnessGroup,
    primary: &packed::WitnessArgs,
) -> Result<H256, Error> {
    group.check_bounds(tx.witnesses().len())?;
    let empty: &[u8] = &[];
    let others = std::iter::repeat_n(empty, group.len() - 1);
    Ok(witnesses_digest(tx, primary, others))
}

/// The digest signed for the witness range `[start, end)`.
///
/// Unlike [`group_message`], the stored content of the slots between `start`
/// and `end` is committed, so every party signing a slot of the range binds
/// the witnesses already placed by the others.
pub fn segment_message(
    tx: &TransactionView,
    start: usize,
    end: usize,
    template: &packed::WitnessArgs,
) -> Result<H256, Error> {
    let witnesses = tx.witnesses();
    if start >= end || end > witnesses.len() {
        return Err(Error::InvalidWitnessGroup(format!(
            "invalid witness range [{start}, {end}), witnesses len: {}",
            witnesses.len()
        )));
    }
    let others = (start + 1..end)
        .filter_map(|index| witnesses.get(index))
        .map(|witness| witness.raw_data());
    Ok(witnesses_digest(tx, template, others))
}

/// Signs the group with one sighash key and writes the primary witness.
pub fn single_sign(
    tx: &mut TransactionView,
    group: &WitnessGroup,
    template: &packed::WitnessArgs,
    key: &dyn Signer,
) -> Result<(), Error> {
    let message = group_message(tx, group, template)?;
    trace!(
        "single sign witness group {:?} message {:#x}",
        group.indices(),
        message
    );
    let signature = key.sign(&message).map_err(Error::SigningFailed)?;
    set_witness(tx, group.primary(), signed_witness(template, signature));
    Ok(())
}

/// Signs the group with every key of a multisig lock and writes the primary witness.
///
/// `multisig_script` is the serialized multisig config. While the digest is
/// computed the lock holds the script followed by one [`SIGNATURE_PLACEHOLDER`]
/// per key, afterwards the placeholders are replaced by the signatures in key order.
pub fn multi_sign(
    tx: &mut TransactionView,
    group: &WitnessGroup,
    template: &packed::WitnessArgs,
    multisig_script: &[u8],
    keys: &[&dyn Signer],
) -> Result<(), Error> {
    let mut placeholder_lock =
        Vec::with_capacity(multisig_script.len() + SIGNATURE_PLACEHOLDER.len() * keys.len());
    placeholder_lock.extend_from_slice(multisig_script);
    for _ in keys {
        placeholder_lock.extend_from_slice(&SIGNATURE_PLACEHOLDER);
    }
    let primary = template
        .clone()
        .as_builder()
        .lock(Some(Bytes::from(placeholder_lock)).pack())
        .build();

    let message = group_message(tx, group, &primary)?;
    trace!(
        "multi sign witness group {:?} with {} keys, message {:#x}",
        group.indices(),
        keys.len(),
        message
    );

    let mut lock = multisig_script.to_vec();
    for key in keys {
        let signature = key.sign(&message).map_err(Error::SigningFailed)?;
        lock.extend_from_slice(&signature);
    }
    set_witness(tx, group.primary(), signed_witness(&primary, Bytes::from(lock)));
    Ok(())
}

/// Signs the witness range `[start, end)` and writes the witness at `start`.
pub fn segment_sign(
    tx: &mut TransactionView,
    start: usize,
    end: usize,
    template: &packed::WitnessArgs,
    key: &dyn Signer,
) -> Result<(), Error> {
    let message = segment_message(tx, start, end, template)?;
    trace!("segment sign witnesses [{start}, {end}) message {:#x}", message);
    let signature = key.sign(&message).map_err(Error::SigningFailed)?;
    set_witness(tx, start, signed_witness(template, signature));
    Ok(())
}

/// Parses the witness at `index`, `None` when it is empty.
pub fn witness_args_at(
    tx: &TransactionView,
    index: usize,
) -> Result<Option<packed::WitnessArgs>, Error> {
    let witness = tx.witnesses().get(index).ok_or_else(|| {
        Error::InvalidWitnessGroup(format!(
            "witness index {index} out of bound, witnesses len: {}",
            tx.witnesses().len()
        ))
    })?;
    let data = witness.raw_data();
    if data.is_empty() {
        return Ok(None);
    }
    packed::WitnessArgs::from_slice(&data)
        .map(Some)
        .map_err(|err| Error::SerializationFailed(format!("witness {index}: {err}")))
}

fn signed_witness(template: &packed::WitnessArgs, lock: Bytes) -> packed::Bytes {
    template
        .clone()
        .as_builder()
        .lock(Some(lock).pack())
        .build()
        .as_bytes()
        .pack()
}

fn set_witness(tx: &mut TransactionView, index: usize, witness: packed::Bytes) {
    let mut witnesses: Vec<packed::Bytes> = tx.witnesses().into_iter().collect();
    witnesses[index] = witness;
    *tx = tx.as_advanced_builder().set_witnesses(witnesses).build();
}
