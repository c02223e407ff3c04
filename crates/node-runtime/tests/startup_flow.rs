//! End-to-end startup against the process-wide registry.
//!
//! Kept to a single test: the registry can only be installed once per process.

use node_runtime::{run, Cli, StartupOutcome};
use qc_00_chain_params::{active_params, Network};

#[test]
fn startup_sequence() {
    let conflicting = Cli {
        testnet: true,
        regtest: true,
        ..Cli::default()
    };
    let err = run(&conflicting, |_| None).unwrap_err();
    assert!(format!("{err:#}").contains("Invalid combination of -regtest and -testnet"));
    assert!(active_params().is_err(), "conflict must not install parameters");

    let dump = Cli {
        regtest: true,
        dump_params: true,
        ..Cli::default()
    };
    match run(&dump, |_| None).unwrap() {
        StartupOutcome::Dumped(json) => {
            let value: serde_json::Value = serde_json::from_str(&json).unwrap();
            assert_eq!(value["network"], "regtest");
            assert_eq!(value["default_port"], 5444);
            assert_eq!(value["require_rpc_password"], false);
        }
        other => panic!("expected a dump, got {other:?}"),
    }
    assert_eq!(active_params().unwrap().network(), Network::Regtest);

    let again = Cli::default();
    let err = run(&again, |_| None).unwrap_err();
    assert!(format!("{err:#}").contains("already initialized"));
}
