use ckb_txkit_app_config::{NetworkType, SystemScriptsConfig};
use ckb_txkit_error::Error;
use ckb_types::{H256, core::DepType, h256, packed, prelude::*};

use crate::SignatureScheme;

// Both dep groups are created by the second transaction of the genesis block.
const MAINNET_DEP_GROUP_TX_HASH: H256 =
    h256!("0x71a7ba8fc96349fea0ed3a5c47992e3b4084b031a42264a018e0072e8172e46c");
const TESTNET_DEP_GROUP_TX_HASH: H256 =
    h256!("0xf8de3bb47d055cdf460d93a2a6e1b05f7432f9777c8c474abf4eec1d4aee5d37");
const SIGHASH_DEP_GROUP_INDEX: u32 = 0;
const MULTISIG_DEP_GROUP_INDEX: u32 = 1;

/// Dep groups of the secp256k1 lock scripts.
#[derive(Clone, Debug)]
pub struct SystemScripts {
    pub secp256k1_blake160_sighash_all: packed::OutPoint,
    pub secp256k1_blake160_multisig_all: packed::OutPoint,
}

impl SystemScripts {
    fn from_genesis(tx_hash: &H256) -> Self {
        SystemScripts {
            secp256k1_blake160_sighash_all: packed::OutPoint::new(
                tx_hash.pack(),
                SIGHASH_DEP_GROUP_INDEX,
            ),
            secp256k1_blake160_multisig_all: packed::OutPoint::new(
                tx_hash.pack(),
                MULTISIG_DEP_GROUP_INDEX,
            ),
        }
    }

    pub fn mainnet() -> Self {
        Self::from_genesis(&MAINNET_DEP_GROUP_TX_HASH)
    }

    pub fn testnet() -> Self {
        Self::from_genesis(&TESTNET_DEP_GROUP_TX_HASH)
    }

    /// Resolves the configured out points, falling back to the network defaults.
    pub fn from_config(config: &SystemScriptsConfig) -> Result<Self, Error> {
        let defaults = match config.network {
            NetworkType::Mainnet => Some(Self::mainnet()),
            NetworkType::Testnet => Some(Self::testnet()),
            NetworkType::Dev => None,
        };
        let resolve = |configured: &Option<ckb_jsonrpc_types::OutPoint>,
                       fallback: Option<packed::OutPoint>,
                       name: &str| {
            configured
                .clone()
                .map(Into::into)
                .or(fallback)
                .ok_or_else(|| {
                    Error::Config(format!(
                        "system_scripts.{name} is required on {:?}",
                        config.network
                    ))
                })
        };
        Ok(SystemScripts {
            secp256k1_blake160_sighash_all: resolve(
                &config.secp256k1_blake160_sighash_all,
                defaults
                    .as_ref()
                    .map(|scripts| scripts.secp256k1_blake160_sighash_all.clone()),
                "secp256k1_blake160_sighash_all",
            )?,
            secp256k1_blake160_multisig_all: resolve(
                &config.secp256k1_blake160_multisig_all,
                defaults.map(|scripts| scripts.secp256k1_blake160_multisig_all),
                "secp256k1_blake160_multisig_all",
            )?,
        })
    }

    /// Cell deps required by the scheme, sighash before multisig.
    pub fn cell_deps(&self, scheme: SignatureScheme) -> Vec<packed::CellDep> {
        let out_points = match scheme {
            SignatureScheme::Single => vec![&self.secp256k1_blake160_sighash_all],
            SignatureScheme::Multi => vec![&self.secp256k1_blake160_multisig_all],
            SignatureScheme::Hybrid => vec![
                &self.secp256k1_blake160_sighash_all,
                &self.secp256k1_blake160_multisig_all,
            ],
        };
        out_points
            .into_iter()
            .map(|out_point| {
                packed::CellDep::new_builder()
                    .out_point(out_point.clone())
                    .dep_type(DepType::DepGroup.into())
                    .build()
            })
            .collect()
    }
}
