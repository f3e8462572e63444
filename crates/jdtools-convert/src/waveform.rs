//! Waveform lookup tables.

use jdtools_patch::jd800::INTERNAL_WAVEFORMS;

/// Set on LFO table entries that only approximate the JD-990 waveform.
const APPROXIMATE: u8 = 0x80;

/// JD-990 LFO waveform (TRI, SIN, SAW, SQU, TRP, S&H, RND, CHS) to
/// JD-800 LFO waveform (TRI, SAW, SQU, S&H, RND).
static LFO_WAVEFORMS: [u8; 8] = [
    0,
    APPROXIMATE,
    1,
    2,
    2 | APPROXIMATE,
    3,
    4,
    4 | APPROXIMATE,
];

/// First JD-990 internal waveform without a JD-800 counterpart.
const FIRST_SUBSTITUTED: u16 = INTERNAL_WAVEFORMS as u16;

/// Closest JD-800 waveform for JD-990 internal waveforms 108..=194.
///
/// Entries are 1-based waveform numbers as printed in the JD-800 manual.
/// The "+DC" variations translate well since the JD-800 has no ring
/// modulator; most of the others are rough matches at best.
static WAVEFORM_SUBSTITUTES: [u8; 87] = [
    71, 72, 72, 72, 72, 19, 40, 40, 40, 58, 58, 58, 58, 38, 38, 38, //
    39, 36, 36, 70, 70, 36, 36, 36, 36, 92, 96, 96, 96, 96, 96, 94, //
    97, 20, 42, 43, 44, 45, 66, 66, 47, 47, 45, 1, 1, 107, 61, 104, //
    91, 91, 91, 84, 84, 84, 84, 84, 86, 86, 86, 86, 98, 98, 98, 86, //
    86, 86, 86, 86, 86, 86, 86, 86, 86, 86, 1, 4, 5, 6, 7, 8, //
    9, 11, 12, 107, 107, 107, 107,
];

/// Result of a waveform lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveformMatch {
    Exact(u8),
    /// No equivalent exists; the value is the closest available waveform.
    Substitute(u8),
}

impl WaveformMatch {
    #[inline]
    pub fn value(self) -> u8 {
        match self {
            WaveformMatch::Exact(value) | WaveformMatch::Substitute(value) => value,
        }
    }
}

/// Maps a JD-990 LFO waveform onto the JD-800's set.
///
/// Numbers outside the JD-990 range fall back to the triangle.
pub fn map_lfo_waveform(waveform: u8) -> WaveformMatch {
    match LFO_WAVEFORMS.get(usize::from(waveform)) {
        Some(&entry) if entry & APPROXIMATE != 0 => WaveformMatch::Substitute(entry & !APPROXIMATE),
        Some(&entry) => WaveformMatch::Exact(entry),
        None => WaveformMatch::Substitute(0),
    }
}

/// Maps a JD-990 internal waveform number onto the JD-800's 108 waveforms.
///
/// Numbers past the substitution table fall back to waveform 0.
pub fn map_internal_waveform(waveform: u16) -> WaveformMatch {
    if waveform < FIRST_SUBSTITUTED {
        return WaveformMatch::Exact(waveform as u8);
    }
    let substitute = usize::from(waveform - FIRST_SUBSTITUTED);
    match WAVEFORM_SUBSTITUTES.get(substitute) {
        Some(&number) => WaveformMatch::Substitute(number - 1),
        None => WaveformMatch::Substitute(0),
    }
}
