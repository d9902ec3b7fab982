//! Underlying error types used over ckb-txkit crates.

use derive_more::Display;
use thiserror::Error;

pub mod util;

/// A dynamic error raised by a collaborator outside this workspace, e.g. a
/// key implementation or an HTTP transport.
pub type AnyError = anyhow::Error;

/// A list specifying categories of ckb-txkit error.
///
/// It is used with [`Error`], callers branch on it to decide whether an
/// operation is worth repeating.
///
/// [`Error`]: ./enum.Error.html
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display)]
pub enum ErrorKind {
    /// No inputs were supplied to append.
    EmptyInput,
    /// The witness group is empty or points outside the witness list.
    InvalidWitnessGroup,
    /// The multisig script parameters are inconsistent.
    InvalidMultisigConfig,
    /// The collector was started without a search key.
    MissingSearchKey,
    /// The collector was started without a valid search order.
    InvalidSearchOrder,
    /// The collector page limit is zero.
    InvalidPageLimit,
    /// The binary encoder rejected a structure.
    SerializationFailed,
    /// The key abstraction declined or failed to sign a digest.
    SigningFailed,
    /// The remote cell index call failed.
    RemoteQueryFailed,
    /// A live cell processor failed.
    Processor,
    /// The configuration could not be loaded.
    Config,
}

impl ErrorKind {
    /// Whether the failed operation may succeed when issued again unchanged.
    ///
    /// Nothing in ckb-txkit retries by itself, this only advises callers.
    pub fn is_retryable(self) -> bool {
        matches!(self, ErrorKind::RemoteQueryFailed)
    }
}

/// Top-level ckb-txkit error type.
#[derive(Error, Debug)]
pub enum Error {
    /// See [`ErrorKind::EmptyInput`].
    #[error("input cells empty")]
    EmptyInput,
    /// See [`ErrorKind::InvalidWitnessGroup`].
    #[error("invalid witness group: {0}")]
    InvalidWitnessGroup(String),
    /// See [`ErrorKind::InvalidMultisigConfig`].
    #[error("invalid multisig config: {0}")]
    InvalidMultisigConfig(String),
    /// See [`ErrorKind::MissingSearchKey`].
    #[error("missing search key")]
    MissingSearchKey,
    /// See [`ErrorKind::InvalidSearchOrder`].
    #[error("invalid search order: {0}")]
    InvalidSearchOrder(String),
    /// See [`ErrorKind::InvalidPageLimit`].
    #[error("limit should be greater than 0")]
    InvalidPageLimit,
    /// See [`ErrorKind::SerializationFailed`].
    #[error("serialization failed: {0}")]
    SerializationFailed(String),
    /// See [`ErrorKind::SigningFailed`].
    #[error("signing failed: {0}")]
    SigningFailed(#[source] AnyError),
    /// See [`ErrorKind::RemoteQueryFailed`].
    #[error("remote query failed: {0}")]
    RemoteQueryFailed(#[source] AnyError),
    /// See [`ErrorKind::Processor`].
    #[error("live cell processor failed: {0}")]
    Processor(#[source] AnyError),
    /// See [`ErrorKind::Config`].
    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyInput => ErrorKind::EmptyInput,
            Error::InvalidWitnessGroup(_) => ErrorKind::InvalidWitnessGroup,
            Error::InvalidMultisigConfig(_) => ErrorKind::InvalidMultisigConfig,
            Error::MissingSearchKey => ErrorKind::MissingSearchKey,
            Error::InvalidSearchOrder(_) => ErrorKind::InvalidSearchOrder,
            Error::InvalidPageLimit => ErrorKind::InvalidPageLimit,
            Error::SerializationFailed(_) => ErrorKind::SerializationFailed,
            Error::SigningFailed(_) => ErrorKind::SigningFailed,
            Error::RemoteQueryFailed(_) => ErrorKind::RemoteQueryFailed,
            Error::Processor(_) => ErrorKind::Processor,
            Error::Config(_) => ErrorKind::Config,
        }
    }
}
