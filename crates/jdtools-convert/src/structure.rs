//! Tone pair structure fix-up.
//!
//! The JD-990 can combine the tones of a pair (AB, CD) through a shared
//! filter or a ring modulator. The JD-800 plays every tone independently, so
//! the converted pair is cleaned up to sound as close as possible.

use jdtools_patch::{Tone800, CENTER};

/// JD-990 structure type of a tone pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structure {
    /// Both tones have their own filter and amplifier.
    Independent,
    /// Both tones feed one amplifier, the second tone's.
    SharedFilter,
    /// Any of the ring modulator structures.
    RingModulation(u8),
}

impl From<u8> for Structure {
    fn from(value: u8) -> Self {
        match value {
            0 => Structure::Independent,
            1 => Structure::SharedFilter,
            other => Structure::RingModulation(other),
        }
    }
}

/// Normalizes a converted tone pair for its structure type.
pub fn fix_up(structure: Structure, first: &mut Tone800, second: &mut Tone800) {
    match structure {
        Structure::Independent => {}
        Structure::SharedFilter => {
            first.tva = second.tva;
            first.tva_env = second.tva_env;
        }
        Structure::RingModulation(_) => {
            // A pitch envelope feeding the ring modulator would only produce odd pitches
            second.pitch_env.level0 = CENTER;
            second.pitch_env.level1 = CENTER;
            second.pitch_env.level2 = CENTER;
        }
    }
}
