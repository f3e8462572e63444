//! JX-8P patch dumps.
//!
//! A JX-8P tone arrives as a Roland SysEx message: `F0 41`, four more header
//! bytes, 32 parameter bytes and a closing `F7`. The payload is kept opaque.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Parameter bytes per JX-8P patch.
pub const PATCH_SIZE: usize = 32;

/// Bytes before the payload: `F0 41` and four header bytes.
pub const HEADER_SIZE: usize = 6;

/// Roland manufacturer ID.
pub const ROLAND_ID: u8 = 0x41;

const SYSEX_START: u8 = 0xF0;

/// One JX-8P patch as raw parameter bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Jx8pPatch {
    pub data: [u8; PATCH_SIZE],
}

impl Jx8pPatch {
    pub fn new(data: [u8; PATCH_SIZE]) -> Self {
        Self { data }
    }
}

impl Default for Jx8pPatch {
    fn default() -> Self {
        Self {
            data: [0; PATCH_SIZE],
        }
    }
}

impl fmt::Display for Jx8pPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "JX8P Patch Data:")?;
        for byte in &self.data {
            write!(f, "{byte:02x} ")?;
        }
        Ok(())
    }
}

/// True when a Roland SysEx message starts at `offset` with room for a full patch.
pub fn is_valid_sysex(bytes: &[u8], offset: usize) -> bool {
    let Some(end) = offset.checked_add(HEADER_SIZE + PATCH_SIZE) else {
        return false;
    };
    matches!(bytes.get(offset..end), Some([SYSEX_START, ROLAND_ID, ..]))
}

/// Scans a byte stream for JX-8P patch messages.
///
/// Bytes outside a message are skipped one at a time. After a match the scan
/// resumes past the header, the payload and the trailing `F7`.
pub fn extract_from_sysex(bytes: &[u8]) -> Vec<Jx8pPatch> {
    let mut patches = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        if !is_valid_sysex(bytes, pos) {
            pos += 1;
            continue;
        }

        let start = pos + HEADER_SIZE;
        let mut patch = Jx8pPatch::default();
        patch
            .data
            .copy_from_slice(&bytes[start..start + PATCH_SIZE]);
        patches.push(patch);
        pos = start + PATCH_SIZE + 1;
    }

    debug!(
        "Found {} JX-8P patches in {} bytes",
        patches.len(),
        bytes.len()
    );
    patches
}

/// Reads a raw `.syx` file from disk and extracts its patches.
pub fn extract_from_file(path: impl AsRef<Path>) -> Result<Vec<Jx8pPatch>> {
    let data = std::fs::read(path.as_ref())?;
    Ok(extract_from_sysex(&data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(fill: u8) -> Vec<u8> {
        let mut bytes = vec![0xF0, 0x41, 0x39, 0x00, 0x21, 0x20];
        bytes.extend(std::iter::repeat(fill).take(PATCH_SIZE));
        bytes.push(0xF7);
        bytes
    }

    #[test]
    fn test_valid_sysex() {
        let bytes = message(0x10);
        assert!(is_valid_sysex(&bytes, 0));
        assert!(!is_valid_sysex(&bytes, 1));
        assert!(!is_valid_sysex(&bytes, usize::MAX));
    }

    #[test]
    fn test_other_manufacturer_is_rejected() {
        let mut bytes = message(0);
        bytes[1] = 0x43;
        assert!(!is_valid_sysex(&bytes, 0));
        assert!(extract_from_sysex(&bytes).is_empty());
    }

    #[test]
    fn test_truncated_payload_is_rejected() {
        let bytes = message(0);
        // Header plus 31 payload bytes
        assert!(!is_valid_sysex(&bytes[..HEADER_SIZE + PATCH_SIZE - 1], 0));
        // The trailing F7 is not required
        assert!(is_valid_sysex(&bytes[..HEADER_SIZE + PATCH_SIZE], 0));
    }

    #[test]
    fn test_extract_single() {
        let mut bytes = message(0);
        for (i, byte) in bytes[HEADER_SIZE..HEADER_SIZE + PATCH_SIZE]
            .iter_mut()
            .enumerate()
        {
            *byte = i as u8;
        }

        let patches = extract_from_sysex(&bytes);
        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].data[0], 0);
        assert_eq!(patches[0].data[31], 31);
    }

    #[test]
    fn test_extract_skips_garbage() {
        let mut bytes = vec![0x00, 0x7F, 0xF7];
        bytes.extend(message(1));
        bytes.extend([0xF0, 0x7E, 0x00]);
        bytes.extend(message(2));

        let patches = extract_from_sysex(&bytes);
        assert_eq!(
            patches,
            vec![Jx8pPatch::new([1; PATCH_SIZE]), Jx8pPatch::new([2; PATCH_SIZE])]
        );
    }

    #[test]
    fn test_display() {
        let mut data = [0; PATCH_SIZE];
        data[0] = 0x0A;
        data[1] = 0x7F;
        let dump = Jx8pPatch::new(data).to_string();

        assert!(dump.starts_with("JX8P Patch Data:\n0a 7f 00 "));
        assert!(dump.ends_with("00 "));
        assert_eq!(dump.len(), "JX8P Patch Data:\n".len() + PATCH_SIZE * 3);
    }
}
