//! Centralized error type for the jdtools umbrella crate.
//!
//! Wraps all subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[cfg(feature = "sysex")]
    #[error("SysEx: {0}")]
    Sysex(#[from] jdtools_sysex::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
