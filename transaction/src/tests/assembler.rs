use crate::{
    EMPTY_WITNESS_ARGS_PLACEHOLDER, SignatureScheme, SystemScripts, add_inputs,
    empty_witness_args, new_transaction_for_scheme,
};
use ckb_txkit_app_config::{NetworkType, SystemScriptsConfig};
use ckb_txkit_error::ErrorKind;
use ckb_types::{core::DepType, packed, prelude::*};

use super::{cell_inputs, hybrid_tx};

#[test]
fn test_cell_deps_of_each_scheme() {
    let scripts = SystemScripts::mainnet();
    let sighash = scripts.secp256k1_blake160_sighash_all.clone();
    let multisig = scripts.secp256k1_blake160_multisig_all.clone();

    let cases = [
        (SignatureScheme::Single, vec![sighash.clone()]),
        (SignatureScheme::Multi, vec![multisig.clone()]),
        (SignatureScheme::Hybrid, vec![sighash, multisig]),
    ];
    for (scheme, expected) in cases {
        let tx = new_transaction_for_scheme(scheme, &scripts);
        assert_eq!(tx.version(), 0);
        assert!(tx.header_deps().is_empty());
        assert!(tx.inputs().is_empty());
        assert!(tx.outputs().is_empty());
        assert!(tx.witnesses().is_empty());
        let cell_deps: Vec<packed::CellDep> = tx.cell_deps().into_iter().collect();
        assert_eq!(cell_deps.len(), expected.len(), "{scheme:?}");
        for (cell_dep, out_point) in cell_deps.iter().zip(expected.iter()) {
            assert_eq!(cell_dep.out_point().as_slice(), out_point.as_slice());
            let dep_type: DepType = cell_dep.dep_type().try_into().expect("dep type");
            assert_eq!(dep_type, DepType::DepGroup);
        }
    }
}

#[test]
fn test_genesis_dep_groups() {
    let mainnet = SystemScripts::mainnet();
    let testnet = SystemScripts::testnet();
    let index: u32 = mainnet.secp256k1_blake160_sighash_all.index().unpack();
    assert_eq!(index, 0);
    let index: u32 = mainnet.secp256k1_blake160_multisig_all.index().unpack();
    assert_eq!(index, 1);
    assert_eq!(
        mainnet.secp256k1_blake160_sighash_all.tx_hash(),
        mainnet.secp256k1_blake160_multisig_all.tx_hash()
    );
    assert_ne!(
        mainnet.secp256k1_blake160_sighash_all.tx_hash(),
        testnet.secp256k1_blake160_sighash_all.tx_hash()
    );
}

#[test]
fn test_system_scripts_from_config() {
    let config = SystemScriptsConfig {
        network: NetworkType::Testnet,
        ..Default::default()
    };
    let scripts = SystemScripts::from_config(&config).expect("testnet defaults");
    assert_eq!(
        scripts.secp256k1_blake160_sighash_all.as_slice(),
        SystemScripts::testnet()
            .secp256k1_blake160_sighash_all
            .as_slice()
    );

    let custom: ckb_jsonrpc_types::OutPoint =
        SystemScripts::mainnet().secp256k1_blake160_sighash_all.into();
    let config = SystemScriptsConfig {
        network: NetworkType::Dev,
        secp256k1_blake160_sighash_all: Some(custom.clone()),
        secp256k1_blake160_multisig_all: None,
    };
    let err = SystemScripts::from_config(&config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);

    let config = SystemScriptsConfig {
        network: NetworkType::Dev,
        secp256k1_blake160_sighash_all: Some(custom.clone()),
        secp256k1_blake160_multisig_all: Some(custom),
    };
    let scripts = SystemScripts::from_config(&config).expect("explicit out points");
    assert_eq!(
        scripts.secp256k1_blake160_multisig_all.as_slice(),
        SystemScripts::mainnet()
            .secp256k1_blake160_sighash_all
            .as_slice()
    );
}

#[test]
fn test_add_empty_inputs() {
    let mut tx = hybrid_tx();
    let err = add_inputs(&mut tx, vec![]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyInput);
    assert!(tx.inputs().is_empty());
    assert!(tx.witnesses().is_empty());
}

#[test]
fn test_add_inputs_reserves_witnesses() {
    let mut tx = hybrid_tx();
    let inputs = cell_inputs(1, 3);
    let (group, template) = add_inputs(&mut tx, inputs.clone()).expect("add inputs");

    assert_eq!(group.indices(), &[0, 1, 2]);
    assert_eq!(group.primary(), 0);
    assert_eq!(tx.inputs().len(), 3);
    assert_eq!(tx.witnesses().len(), tx.inputs().len());
    for (added, expected) in tx.inputs().into_iter().zip(inputs.iter()) {
        assert_eq!(added.as_slice(), expected.as_slice());
    }
    let witnesses = tx.witnesses();
    assert_eq!(
        witnesses.get(0).expect("witness 0").raw_data().as_ref(),
        &EMPTY_WITNESS_ARGS_PLACEHOLDER[..]
    );
    assert!(witnesses.get(1).expect("witness 1").raw_data().is_empty());
    assert!(witnesses.get(2).expect("witness 2").raw_data().is_empty());

    assert_eq!(template.as_slice(), empty_witness_args().as_slice());
    let lock = template.lock().to_opt().expect("lock");
    assert_eq!(lock.raw_data().as_ref(), &[0u8; 65][..]);
    assert!(template.input_type().to_opt().is_none());
    assert!(template.output_type().to_opt().is_none());
}

#[test]
fn test_add_inputs_twice() {
    let mut tx = hybrid_tx();
    let tx_hash_before = tx.hash();
    let (first, _) = add_inputs(&mut tx, cell_inputs(1, 2)).expect("add first group");
    let (second, _) = add_inputs(&mut tx, cell_inputs(2, 1)).expect("add second group");

    assert_eq!(first.indices(), &[0, 1]);
    assert_eq!(second.indices(), &[2]);
    assert_eq!(tx.witnesses().len(), 3);
    assert_eq!(tx.inputs().len(), 3);
    assert_ne!(tx.hash(), tx_hash_before);
    let witnesses = tx.witnesses();
    assert_eq!(witnesses.get(2).expect("witness 2").raw_data().len(), 89);
    assert!(witnesses.get(1).expect("witness 1").raw_data().is_empty());
}
