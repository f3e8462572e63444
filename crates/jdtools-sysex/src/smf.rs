//! SysEx messages stored in Standard MIDI Files.
//!
//! Patch librarians often save dumps as `.mid` files with one SysEx event
//! per message. SMF strips the leading `F0` from these events, so it is put
//! back to give the same bytes as a raw `.syx` dump.

use crate::error::Result;
use crate::jx8p::{extract_from_sysex, Jx8pPatch};
use midly::{Smf, TrackEventKind};
use std::path::Path;
use tracing::debug;

/// Collects every SysEx event of an SMF, in track order, each starting with `F0`.
///
/// Continuation packets (`F7` escapes) are not joined and are skipped.
pub fn sysex_messages(data: &[u8]) -> Result<Vec<Vec<u8>>> {
    let smf = Smf::parse(data)?;

    let mut messages = Vec::new();
    for track in smf.tracks.iter() {
        for event in track.iter() {
            if let TrackEventKind::SysEx(payload) = event.kind {
                let mut message = Vec::with_capacity(payload.len() + 1);
                message.push(0xF0);
                message.extend_from_slice(payload);
                messages.push(message);
            }
        }
    }

    debug!(
        "Read {} SysEx messages from {} tracks",
        messages.len(),
        smf.tracks.len()
    );
    Ok(messages)
}

/// Reads an SMF from disk and returns its SysEx messages.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Vec<u8>>> {
    let data = std::fs::read(path.as_ref())?;
    sysex_messages(&data)
}

/// Extracts the JX-8P patches carried by the SysEx events of an SMF.
pub fn extract_from_smf(data: &[u8]) -> Result<Vec<Jx8pPatch>> {
    let stream = sysex_messages(data)?.concat();
    Ok(extract_from_sysex(&stream))
}
