//! # jdtools - Roland JD-990 to JD-800 Patch Tools
//!
//! Converts JD-990 patches and special setups into the JD-800's format.
//!
//! ## Architecture
//!
//! jdtools is an umbrella crate that re-exports:
//! - **jdtools-patch** - Typed parameter records for both synthesizers
//! - **jdtools-convert** - Conversion engine (modulation matrix, waveforms, structures, diagnostics)
//! - **jdtools-sysex** - JX-8P patch extraction and Standard MIDI File SysEx reader
//!
//! ## Quick Start
//!
//! ```ignore
//! use jdtools::prelude::*;
//!
//! let converter = Converter::builder().log_diagnostics(true).build();
//! let converted = converter.convert_patch(&patch990);
//!
//! for diagnostic in &converted.diagnostics {
//!     println!("{diagnostic}");
//! }
//! let patch800 = converted.output;
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - Everything enabled
//! - `full` - Everything enabled
//! - `convert` - JD-990 to JD-800 conversion
//! - `sysex` - SysEx and SMF helpers

mod error;
pub use error::{Error, Result};

/// Re-export of jdtools-patch for direct access
pub use jdtools_patch as patch;

// Parameter records
pub use jdtools_patch::{
    name_from_str, name_to_string, ControlRoute, Patch800, Patch990, Setup800, Setup990,
    SetupKey800, SetupKey990, Tone800, Tone990, ToneId,
};

// Conversion
#[cfg(feature = "convert")]
pub use jdtools_convert as convert;

#[cfg(feature = "convert")]
pub use jdtools_convert::{
    convert_patch, convert_setup, ConvertConfig, Converted, Converter, ConverterBuilder,
    Diagnostic, DiagnosticKind, Issue, Scope,
};

// SysEx
#[cfg(feature = "sysex")]
pub use jdtools_sysex as sysex;

#[cfg(feature = "sysex")]
pub use jdtools_sysex::Jx8pPatch;

/// Convenience prelude for common imports
pub mod prelude {
    // Records
    pub use crate::patch::{Patch800, Patch990, Setup800, Setup990, ToneId};

    // Conversion
    #[cfg(feature = "convert")]
    pub use crate::convert::{Converted, Converter, Diagnostic, DiagnosticKind};

    // SysEx
    #[cfg(feature = "sysex")]
    pub use crate::sysex::Jx8pPatch;
}
