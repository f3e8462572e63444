//! Roland SysEx helpers.
//!
//! - [`jx8p`]: JX-8P patch extraction from raw SysEx streams
//! - [`smf`]: SysEx events stored in Standard MIDI Files (via `midly`)

pub mod error;
pub mod jx8p;
pub mod smf;

pub use error::{Error, Result};
pub use jx8p::{extract_from_file, extract_from_sysex, is_valid_sysex, Jx8pPatch};
pub use smf::{extract_from_smf, sysex_messages};
