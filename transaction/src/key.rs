use ckb_crypto::secp::Privkey;
use ckb_txkit_error::AnyError;
use ckb_types::{H256, bytes::Bytes};

/// A key able to sign a 32-byte witness digest.
///
/// The returned bytes are placed into the lock field as is, so their format
/// must be the one the lock script verifies. For the secp256k1 locks that is
/// a 65-byte recoverable signature.
pub trait Signer {
    fn sign(&self, message: &H256) -> Result<Bytes, AnyError>;
}

impl Signer for Privkey {
    fn sign(&self, message: &H256) -> Result<Bytes, AnyError> {
        let signature = self.sign_recoverable(message)?;
        Ok(Bytes::from(signature.serialize()))
    }
}

impl<S: Signer + ?Sized> Signer for &S {
    fn sign(&self, message: &H256) -> Result<Bytes, AnyError> {
        (**self).sign(message)
    }
}
