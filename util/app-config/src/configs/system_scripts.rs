use ckb_jsonrpc_types::OutPoint;
use serde::{Deserialize, Serialize};

/// The chain whose genesis dep groups are used when no out point is given.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    /// Mirana
    #[default]
    Mainnet,
    /// Pudge
    Testnet,
    /// A dev chain, both out points must be configured.
    Dev,
}

/// Dep cells of the secp256k1 lock scripts.
///
/// Explicit out points take precedence over the network defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkType,
    /// Dep group of `secp256k1_blake160_sighash_all`.
    #[serde(default)]
    pub secp256k1_blake160_sighash_all: Option<OutPoint>,
    /// Dep group of `secp256k1_blake160_multisig_all`.
    #[serde(default)]
    pub secp256k1_blake160_multisig_all: Option<OutPoint>,
}
