//! # Network Definitions
//!
//! The production set is built from literals. The public test network is a
//! clone of it with [`TESTNET_OVERRIDES`](super::params::TESTNET_OVERRIDES)
//! applied, and the regression-test network is a clone of the test network
//! with [`REGTEST_OVERRIDES`](super::params::REGTEST_OVERRIDES) applied.
//!
//! | field | main | test | regtest |
//! |---|---|---|---|
//! | magic | `129e0a11` | `0a0b0a0b` | `21bbabba` |
//! | p2p / rpc port | 9889 / 9887 | 3978 / 3977 | 5444 / 3977 |
//! | pow limit | `~0 >> 18` | `~0 >> 16` | `~0 >> 1` |
//! | pos limit | `~0 >> 18` | `~0 >> 16` | `~0 >> 16` |
//! | spacing / timespan | 300 / 1500 | 200 / 1500 | 200 / 1500 |
//! | last PoW / start PoS | 100000 / 100 | 2^31-1 / 4500 | 2^31-1 / 4500 |

use shared_types::{limit_from_shift, to_compact};
use tracing::{debug, info};

use super::error::{ChainParamsError, Result};
use super::genesis::{build_genesis, GenesisSpec, GENESIS_VERSION};
use super::network::{Base58Prefixes, Network};
use super::params::ChainParams;
use super::seeds::{convert_seeds, MAIN_SEEDS, TESTNET_SEEDS};
use crate::ports::{RandomSource, TimeSource};

/// Headline embedded in every genesis coinbase.
pub const GENESIS_MESSAGE: &[u8] = b"German Manufacturer Will Focus Research and Development on Creating Consumer Robots | JP Buntinx  June 23, 2017 | News, Technology";

/// Merkle root shared by all genesis blocks.
pub const GENESIS_MERKLE_ROOT: &str =
    "76ba3ff1ee15a64f601c6a845f2d963ea66fe30d27211e1a160a88508cda54f9";

/// Sat, 24 Jun 2017 05:30:00 GMT.
pub const GENESIS_TIME: u32 = 1_498_282_200;

pub const MAIN_GENESIS_HASH: &str =
    "000037e474c5894fe9504b2ddf85a2115c745cd2cff1c289ec6842cd00195184";
pub const TESTNET_GENESIS_HASH: &str =
    "00001329ead5be7a8af1aea75410f8c4175487092106cdf5bd490777ea127c2e";
pub const REGTEST_GENESIS_HASH: &str =
    "541501b99bbd480aa4ddb9c95316917e0271febe4ae4d64702b448be93cdbc23";

const MAIN_ALERT_KEY: &str = "09a36564b96a4756bc6b111a04b94baafeac5d5257fe028e80695c62f7c2f81f85d111a216df3be197653f454852a2d11c6314aad5ca3cbe5616262ca3e7a6feef";
const TESTNET_ALERT_KEY: &str = "09b47584b96e9056bc6b132a04b94baafeac5d5257fe028e80695c62f7c2f81f85d251a216df3af197653f454852a2d08c6314aad5ca3cbe5616262ca3e7a6faac";

const EXT_PUBLIC_KEY_PREFIX: [u8; 4] = [0x04, 0x88, 0xb2, 0x1e];
const EXT_SECRET_KEY_PREFIX: [u8; 4] = [0x04, 0x88, 0xad, 0xe4];

/// Target spacing of the production network.
///
/// Fixed at construction. Phase-dependent spacing is a consensus concern
/// read through [`ChainParams::phase_at`].
const MAIN_TARGET_SPACING: u64 = 300;

/// Build the production network parameters.
pub fn main_params(clock: &dyn TimeSource, rng: &dyn RandomSource) -> Result<ChainParams> {
    let network = Network::Main;
    let pow_limit = limit_from_shift(18);

    let genesis_spec = GenesisSpec {
        version: GENESIS_VERSION,
        time: GENESIS_TIME,
        bits: to_compact(pow_limit),
        nonce: 19_740,
        coinbase_time: GENESIS_TIME,
        coinbase_message: GENESIS_MESSAGE,
        expected_hash: MAIN_GENESIS_HASH,
        expected_merkle_root: GENESIS_MERKLE_ROOT,
    };
    let genesis = build_genesis(network, &genesis_spec)?;

    let params = ChainParams {
        network,
        message_start: [0x12, 0x9e, 0x0a, 0x11],
        alert_pubkey: decode_key(network, MAIN_ALERT_KEY)?,
        default_port: 9889,
        rpc_port: 9887,
        pow_limit,
        pos_limit: limit_from_shift(18),
        genesis_spec,
        genesis: genesis.block,
        genesis_hash: genesis.hash,
        base58_prefixes: prefixes(45, 100, 101),
        fixed_seeds: convert_seeds(MAIN_SEEDS, clock, rng),
        dns_seeds: Vec::new(),
        data_dir: String::new(),
        target_spacing: MAIN_TARGET_SPACING,
        target_timespan: 5 * MAIN_TARGET_SPACING,
        last_pow_block: 100_000,
        start_pos_block: 100,
        require_rpc_password: true,
    };
    finish(params)
}

/// Derive the public test network from the production set.
pub fn testnet_params(
    main: &ChainParams,
    clock: &dyn TimeSource,
    rng: &dyn RandomSource,
) -> Result<ChainParams> {
    let network = Network::Testnet;
    let pow_limit = limit_from_shift(16);

    let genesis_spec = GenesisSpec {
        bits: to_compact(pow_limit),
        nonce: 14_642,
        expected_hash: TESTNET_GENESIS_HASH,
        ..main.genesis_spec.clone()
    };
    let genesis = build_genesis(network, &genesis_spec)?;

    let params = ChainParams {
        network,
        message_start: [0x0a, 0x0b, 0x0a, 0x0b],
        alert_pubkey: decode_key(network, TESTNET_ALERT_KEY)?,
        pow_limit,
        pos_limit: limit_from_shift(16),
        default_port: 3978,
        rpc_port: 3977,
        data_dir: "testnet".to_string(),
        genesis_spec,
        genesis: genesis.block,
        genesis_hash: genesis.hash,
        base58_prefixes: prefixes(46, 102, 103),
        fixed_seeds: convert_seeds(TESTNET_SEEDS, clock, rng),
        dns_seeds: Vec::new(),
        target_spacing: 200,
        last_pow_block: 0x7fff_ffff,
        start_pos_block: 4500,
        ..main.clone()
    };
    finish(params)
}

/// Derive the regression-test network from the public test network.
pub fn regtest_params(testnet: &ChainParams) -> Result<ChainParams> {
    let network = Network::Regtest;
    let pow_limit = limit_from_shift(1);

    let genesis_spec = GenesisSpec {
        time: 1_498_282_220,
        bits: to_compact(pow_limit),
        nonce: 7,
        expected_hash: REGTEST_GENESIS_HASH,
        ..testnet.genesis_spec.clone()
    };
    let genesis = build_genesis(network, &genesis_spec)?;

    let params = ChainParams {
        network,
        message_start: [0x21, 0xbb, 0xab, 0xba],
        pow_limit,
        genesis_spec,
        genesis: genesis.block,
        genesis_hash: genesis.hash,
        default_port: 5444,
        data_dir: "regtest".to_string(),
        require_rpc_password: false,
        fixed_seeds: Vec::new(),
        dns_seeds: Vec::new(),
        ..testnet.clone()
    };
    finish(params)
}

/// Build all three networks in derivation order.
pub fn build_all(
    clock: &dyn TimeSource,
    rng: &dyn RandomSource,
) -> Result<[ChainParams; 3]> {
    let main = main_params(clock, rng)?;
    let testnet = testnet_params(&main, clock, rng)?;
    let regtest = regtest_params(&testnet)?;
    Ok([main, testnet, regtest])
}

fn finish(params: ChainParams) -> Result<ChainParams> {
    params.validate()?;
    info!(
        network = %params.network,
        genesis = %params.genesis_hash,
        port = params.default_port,
        seeds = params.fixed_seeds.len(),
        "Chain parameters built"
    );
    debug!(network = %params.network, magic = %hex::encode(params.message_start), "Message start");
    Ok(params)
}

fn decode_key(network: Network, literal: &str) -> Result<Vec<u8>> {
    hex::decode(literal).map_err(|e| ChainParamsError::MalformedConstant {
        network,
        what: "alert key",
        reason: e.to_string(),
    })
}

fn prefixes(pubkey: u8, script: u8, secret: u8) -> Base58Prefixes {
    Base58Prefixes {
        pubkey_address: vec![pubkey],
        script_address: vec![script],
        secret_key: vec![secret],
        ext_public_key: EXT_PUBLIC_KEY_PREFIX.to_vec(),
        ext_secret_key: EXT_SECRET_KEY_PREFIX.to_vec(),
    }
}
