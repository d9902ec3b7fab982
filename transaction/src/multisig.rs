use ckb_hash::blake2b_256;
use ckb_txkit_error::Error;
use ckb_types::{H160, bytes::Bytes};
use std::collections::HashSet;

const MULTISIG_RESERVED: u8 = 0;

/// Parameters of a secp256k1_blake160_multisig_all lock.
///
/// Serialized as `S | R | M | N | blake160(pubkey_1) | ... | blake160(pubkey_N)`,
/// where `S` is reserved (0), `R` the number of leading keys that must sign,
/// `M` the threshold and `N` the number of keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultisigConfig {
    sighash_addresses: Vec<H160>,
    require_first_n: u8,
    threshold: u8,
}

impl MultisigConfig {
    pub fn new(
        sighash_addresses: Vec<H160>,
        require_first_n: u8,
        threshold: u8,
    ) -> Result<Self, Error> {
        if sighash_addresses.is_empty() || sighash_addresses.len() > u8::MAX as usize {
            return Err(Error::InvalidMultisigConfig(format!(
                "expect 1 to {} keys, got {}",
                u8::MAX,
                sighash_addresses.len()
            )));
        }
        let unique: HashSet<&H160> = sighash_addresses.iter().collect();
        if unique.len() != sighash_addresses.len() {
            return Err(Error::InvalidMultisigConfig(
                "duplicated sighash address".to_owned(),
            ));
        }
        if threshold == 0 || threshold as usize > sighash_addresses.len() {
            return Err(Error::InvalidMultisigConfig(format!(
                "threshold {} out of range 1..={}",
                threshold,
                sighash_addresses.len()
            )));
        }
        if require_first_n > threshold {
            return Err(Error::InvalidMultisigConfig(format!(
                "require_first_n {require_first_n} greater than threshold {threshold}"
            )));
        }
        Ok(MultisigConfig {
            sighash_addresses,
            require_first_n,
            threshold,
        })
    }

    pub fn sighash_addresses(&self) -> &[H160] {
        &self.sighash_addresses
    }

    pub fn require_first_n(&self) -> u8 {
        self.require_first_n
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// The serialized script passed to [`multi_sign`].
    ///
    /// [`multi_sign`]: crate::multi_sign
    pub fn to_witness_data(&self) -> Bytes {
        let mut data = Vec::with_capacity(4 + 20 * self.sighash_addresses.len());
        data.extend_from_slice(&[
            MULTISIG_RESERVED,
            self.require_first_n,
            self.threshold,
            self.sighash_addresses.len() as u8,
        ]);
        for address in &self.sighash_addresses {
            data.extend_from_slice(address.as_bytes());
        }
        Bytes::from(data)
    }

    /// The multisig lock args, `blake160` of the serialized script.
    pub fn hash160(&self) -> H160 {
        let hash = blake2b_256(self.to_witness_data());
        let mut args = [0u8; 20];
        args.copy_from_slice(&hash[..20]);
        H160(args)
    }
}
