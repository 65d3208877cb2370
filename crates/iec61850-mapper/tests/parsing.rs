// crates/iec61850-mapper/tests/parsing.rs

use iec61850_mapper::{
    BindingRole, Mapper, Resolution, Role, load_bindings_from_str, map_document,
};
use std::fs;
use std::path::PathBuf;

/// Helper function to load a test file from the `tests/data/` directory.
fn load_test_file(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(name);

    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read test file {:?}: {}", path, e))
}

/// Runs a whole mapping over fixture files and renders the result.
fn run(role: Role, st: &str, scl: &[&str]) -> String {
    env_logger::try_init().ok(); // Ignore error if already initialized
    let bindings = load_bindings_from_str(&load_test_file(st)).expect("Failed to load bindings");
    let mut mapper = Mapper::new(role, bindings);
    for name in scl {
        mapper
            .process_document(&load_test_file(name))
            .unwrap_or_else(|e| panic!("Failed to map {}: {}", name, e));
    }
    mapper.finish().to_string()
}

/// The smallest useful document: one LN, one DO, one annotated DA.
#[test]
fn test_minimal_server_mapping() {
    let output = run(Role::Server, "minimal.st", &["minimal.scl"]);
    assert_eq!(output, "MONITOR D1/P1.Pos %IX0.0\n");
}

/// Only the first LDevice is mapped; an LNodeType no LN uses keeps an empty label.
#[test]
fn test_server_mapping_matches_fixture() {
    let output = run(Role::Server, "substation.st", &["protection.scl"]);
    assert_eq!(output, load_test_file("protection_server.map"));
}

/// Two IEDs: endpoint, reports and control variables per IED, then the
/// combined binding dump.
#[test]
fn test_client_mapping_matches_fixture() {
    let output = run(Role::Client, "substation.st", &["bay1.scl", "bay2.scl"]);
    assert_eq!(output, load_test_file("bays_client.map"));
}

/// Endpoint groups follow the order the documents were given in.
#[test]
fn test_client_groups_follow_input_order() {
    let output = run(Role::Client, "substation.st", &["bay2.scl", "bay1.scl"]);
    let lines: Vec<&str> = output.lines().collect();

    let bay2 = lines.iter().position(|l| *l == "192.168.10.12").unwrap();
    let bay1 = lines.iter().position(|l| *l == "192.168.10.11").unwrap();
    assert!(bay2 < bay1);

    // BAY2 contributes no control variables; its group ends with its reports.
    assert_eq!(lines[bay2 + 1], "BAY2CTRL/LLN0.RP.brcbVolt01 BAY2CTRL/LLN0$Voltages");
    assert_eq!(lines[bay2 + 2], "BAY2CTRL/LLN0.RP.urcbLegacy01 X");
    assert_eq!(bay1, bay2 + 3);
}

/// Identical inputs give byte-identical output.
#[test]
fn test_mapping_is_deterministic() {
    let first = run(Role::Client, "substation.st", &["bay1.scl", "bay2.scl"]);
    let second = run(Role::Client, "substation.st", &["bay1.scl", "bay2.scl"]);
    assert_eq!(first, second);
}

/// The structured results carry the same information as the rendered output.
#[test]
fn test_document_mapping_structure() {
    let bindings = load_bindings_from_str(&load_test_file("substation.st")).unwrap();
    let mapping = map_document(&load_test_file("bay1.scl"), &bindings, Role::Client)
        .expect("Failed to map bay1.scl");

    assert_eq!(mapping.device_name, "BAY1");
    assert_eq!(mapping.bindings.len(), 3);
    assert_eq!(mapping.bindings[1].role, BindingRole::Control);

    let client = mapping.client.expect("client details");
    assert_eq!(client.endpoint, Resolution::Found("192.168.10.11".into()));
    assert_eq!(client.reports.len(), 3);
    assert_eq!(client.control_variables.len(), 1);
    assert_eq!(client.control_variables[0].path, "BAY1LD0/XCBR1.Pos.Oper.ctlVal");
}

/// Every name the loader accepts resolves back to its (last) address.
#[test]
fn test_bindings_round_trip_through_lookup() {
    let table = load_bindings_from_str(&load_test_file("substation.st")).unwrap();
    assert_eq!(table.len(), 6);
    assert_eq!(table.get("feeder_power"), Some("%IW102"));
    for (name, address) in table.iter() {
        assert_eq!(table.resolve(name), Resolution::Found(address.to_string()));
    }
}
