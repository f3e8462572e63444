//! JD-990 to JD-800 patch conversion.
//!
//! Maps every parameter of a JD-990 patch or special setup onto the JD-800's
//! smaller parameter set. Whatever cannot be represented exactly is replaced
//! with the closest achievable value and reported as a [`Diagnostic`].
//!
//! Conversion is a pure function: no state is kept between calls and the
//! same input always gives the same output and diagnostics.
//!
//! # Example
//!
//! ```ignore
//! use jdtools_convert::convert_patch;
//!
//! let converted = convert_patch(&patch990);
//! send_to_jd800(&converted.output);
//! for diagnostic in &converted.diagnostics {
//!     eprintln!("{diagnostic}");
//! }
//! ```

pub mod control;
pub mod diagnostic;
pub mod structure;
pub mod waveform;

mod converter;
pub use converter::{convert_patch, convert_setup, ConvertConfig, Converted, Converter, ConverterBuilder};

pub(crate) mod patch;
pub(crate) mod setup;
pub(crate) mod tone;

pub use control::{resolve, ControlDestination, ControlSource, Resolution, SensitivityUpdate};
pub use diagnostic::{Diagnostic, DiagnosticKind, Issue, Scope};
pub use setup::rescale_pan;
pub use structure::Structure;
