//! SysEx tests through the umbrella crate (requires the "sysex" feature)
//!
//! Run with:
//! ```bash
//! cargo test -p jdtools --test sysex_integration --features sysex
//! ```

#![cfg(feature = "sysex")]

use jdtools::sysex::{extract_from_file, extract_from_sysex};
use jdtools::{Error, Jx8pPatch, Result};

fn bank(count: u8) -> Vec<u8> {
    let mut bytes = Vec::new();
    for n in 0..count {
        bytes.extend([0xF0, 0x41, 0x39, 0x00, 0x21, 0x20]);
        bytes.extend([n; 32]);
        bytes.push(0xF7);
    }
    bytes
}

fn load_bank(path: &str) -> Result<Vec<Jx8pPatch>> {
    Ok(extract_from_file(path)?)
}

#[test]
fn test_bank_extraction() {
    let patches = extract_from_sysex(&bank(4));
    assert_eq!(patches.len(), 4);
    assert_eq!(patches[3], Jx8pPatch::new([3; 32]));
}

#[test]
fn test_sysex_errors_convert() {
    let result = load_bank("/nonexistent/jdtools/jx8p.syx");
    match result {
        Err(Error::Sysex(jdtools::sysex::Error::Io(_))) => {}
        other => panic!("Expected SysEx IO error, got {other:?}"),
    }
}
