//! Derivation of the three networks: genesis self-checks, override
//! completeness and the literal values each network exposes.

use qc_00_chain_params::adapters::{FixedRandomSource, FixedTimeSource};
use qc_00_chain_params::domain::{
    assemble_genesis, build_all, overrides_for, REGTEST_OVERRIDES, TESTNET_OVERRIDES,
};
use qc_00_chain_params::{Base58Type, ChainParams, ConsensusPhase, Network, ParamField};

const NOW: u64 = 1_700_000_000;

fn all() -> [ChainParams; 3] {
    build_all(&FixedTimeSource(NOW), &FixedRandomSource::new(0)).expect("compiled-in params")
}

#[test]
fn genesis_hash_matches_literal_for_every_network() {
    let expected = [
        "000037e474c5894fe9504b2ddf85a2115c745cd2cff1c289ec6842cd00195184",
        "00001329ead5be7a8af1aea75410f8c4175487092106cdf5bd490777ea127c2e",
        "541501b99bbd480aa4ddb9c95316917e0271febe4ae4d64702b448be93cdbc23",
    ];
    for (params, literal) in all().iter().zip(expected) {
        let rebuilt = assemble_genesis(params.genesis_spec());
        assert_eq!(rebuilt.block_hash().to_string(), literal, "{}", params.network());
        assert_eq!(params.genesis_hash().to_string(), literal);
        assert_eq!(rebuilt.header, params.genesis_block().header);
    }
}

#[test]
fn testnet_differs_from_main_only_in_documented_fields() {
    let [main, testnet, _] = all();
    for field in main.field_diff(&testnet) {
        assert!(
            TESTNET_OVERRIDES.contains(&field),
            "{field} changed without being listed"
        );
    }
}

#[test]
fn regtest_differs_from_testnet_only_in_documented_fields() {
    let [_, testnet, regtest] = all();
    for field in testnet.field_diff(&regtest) {
        assert!(
            REGTEST_OVERRIDES.contains(&field),
            "{field} changed without being listed"
        );
    }
}

#[test]
fn unlisted_fields_are_inherited() {
    let [main, testnet, regtest] = all();
    let pairs = [(&main, &testnet), (&testnet, &regtest)];
    for (parent, child) in pairs {
        let diff = parent.field_diff(child);
        let listed = overrides_for(child.network());
        for field in ParamField::ALL {
            if !listed.contains(&field) {
                assert!(!diff.contains(&field), "{field} not inherited by {}", child.network());
            }
        }
    }
}

#[test]
fn overrides_that_must_take_effect() {
    let [main, testnet, regtest] = all();

    let testnet_diff = main.field_diff(&testnet);
    for field in [
        ParamField::MessageStart,
        ParamField::AlertPubkey,
        ParamField::PowLimit,
        ParamField::PosLimit,
        ParamField::DefaultPort,
        ParamField::RpcPort,
        ParamField::DataDir,
        ParamField::GenesisHash,
        ParamField::Base58Prefixes,
        ParamField::TargetSpacing,
        ParamField::LastPowBlock,
        ParamField::StartPosBlock,
    ] {
        assert!(testnet_diff.contains(&field), "testnet kept main's {field}");
    }

    let regtest_diff = testnet.field_diff(&regtest);
    for field in [
        ParamField::MessageStart,
        ParamField::PowLimit,
        ParamField::Genesis,
        ParamField::GenesisHash,
        ParamField::DefaultPort,
        ParamField::DataDir,
        ParamField::RequireRpcPassword,
    ] {
        assert!(regtest_diff.contains(&field), "regtest kept testnet's {field}");
    }
}

#[test]
fn message_starts_are_pairwise_distinct() {
    let sets = all();
    for (i, a) in sets.iter().enumerate() {
        for b in &sets[i + 1..] {
            assert_ne!(a.message_start(), b.message_start());
        }
    }
}

#[test]
fn network_literals() {
    let [main, testnet, regtest] = all();

    assert_eq!(main.message_start(), [0x12, 0x9e, 0x0a, 0x11]);
    assert_eq!((main.default_port(), main.rpc_port()), (9889, 9887));
    assert_eq!(main.base58_prefix(Base58Type::ScriptAddress), &[100]);
    assert_eq!(main.base58_prefix(Base58Type::SecretKey), &[101]);
    assert_eq!(
        main.base58_prefix(Base58Type::ExtPublicKey),
        &[0x04, 0x88, 0xb2, 0x1e]
    );
    assert_eq!((main.last_pow_block(), main.start_pos_block()), (100_000, 100));

    assert_eq!(testnet.message_start(), [0x0a, 0x0b, 0x0a, 0x0b]);
    assert_eq!((testnet.default_port(), testnet.rpc_port()), (3978, 3977));
    assert_eq!(testnet.data_dir(), "testnet");
    assert_eq!(testnet.base58_prefix(Base58Type::PubkeyAddress), &[46]);
    assert_eq!(testnet.target_spacing(), 200);
    assert_eq!(testnet.last_pow_block(), 0x7fff_ffff);
    assert_eq!(testnet.start_pos_block(), 4500);

    assert_eq!(regtest.message_start(), [0x21, 0xbb, 0xab, 0xba]);
    assert_eq!(regtest.default_port(), 5444);
    assert_eq!(regtest.data_dir(), "regtest");
    assert_eq!(regtest.genesis_block().header.time, 1_498_282_220);
    assert_eq!(regtest.genesis_block().header.nonce, 7);
}

#[test]
fn difficulty_ceilings_loosen_down_the_chain() {
    let [main, testnet, regtest] = all();
    assert!(main.pow_limit() < testnet.pow_limit());
    assert!(testnet.pow_limit() < regtest.pow_limit());
    assert_eq!(main.pos_limit(), main.pow_limit());
    assert_eq!(regtest.pos_limit(), testnet.pos_limit());
}

#[test]
fn phase_thresholds() {
    let [main, testnet, _] = all();
    assert_eq!(main.phase_at(100), ConsensusPhase::ProofOfWork);
    assert_eq!(main.phase_at(101), ConsensusPhase::Hybrid);
    assert_eq!(main.phase_at(100_001), ConsensusPhase::ProofOfStake);
    assert_eq!(testnet.phase_at(u32::MAX), ConsensusPhase::ProofOfStake);
    assert_eq!(testnet.phase_at(1_000_000), ConsensusPhase::Hybrid);
}

#[test]
fn derivation_is_deterministic() {
    assert_eq!(all(), all());
    assert_eq!(all()[2].network(), Network::Regtest);
}
