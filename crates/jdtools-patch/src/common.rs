//! Parameter blocks that are laid out identically on the JD-990 and the JD-800.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Neutral value of a centered parameter (0-100, 50 = no effect).
pub const CENTER: u8 = 50;

/// Length of a patch name in characters.
pub const PATCH_NAME_LEN: usize = 16;

/// Length of a special setup key name in characters.
pub const KEY_NAME_LEN: usize = 10;

/// Number of keys in a special setup (C2 to C7).
pub const SETUP_KEY_COUNT: usize = 61;

/// Number of tones in a patch.
pub const TONE_COUNT: usize = 4;

/// One of the four tones of a patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ToneId {
    A,
    B,
    C,
    D,
}

impl ToneId {
    pub const ALL: [ToneId; TONE_COUNT] = [ToneId::A, ToneId::B, ToneId::C, ToneId::D];

    /// Position of the tone inside `tones` arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Bit of this tone in the `active_tone` / `layer_tone` masks.
    #[inline]
    pub fn mask(self) -> u8 {
        1 << self.index()
    }
}

impl fmt::Display for ToneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            ToneId::A => 'A',
            ToneId::B => 'B',
            ToneId::C => 'C',
            ToneId::D => 'D',
        };
        write!(f, "{c}")
    }
}

/// 3-band equalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Equalizer {
    pub low_freq: u8,
    pub low_gain: u8,
    pub mid_freq: u8,
    pub mid_q: u8,
    pub mid_gain: u8,
    pub high_freq: u8,
    pub high_gain: u8,
}

impl Default for Equalizer {
    fn default() -> Self {
        // Gains are centered on 15 (0 dB)
        Self {
            low_freq: 0,
            low_gain: 15,
            mid_freq: 8,
            mid_q: 2,
            mid_gain: 15,
            high_freq: 1,
            high_gain: 15,
        }
    }
}

/// Per-tone settings outside of the synthesis sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToneCommon {
    pub velocity_curve: u8,
    pub hold_control: u8,
}

/// Five-stage filter envelope (TVF-ENV).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterEnvelope {
    pub velo: u8,
    pub time_velo: u8,
    pub time_kf: u8,
    pub time1: u8,
    pub level1: u8,
    pub time2: u8,
    pub level2: u8,
    pub time3: u8,
    pub sustain_level: u8,
    pub time4: u8,
    pub level4: u8,
}

impl Default for FilterEnvelope {
    fn default() -> Self {
        Self {
            velo: CENTER,
            time_velo: CENTER,
            time_kf: 10,
            time1: 0,
            level1: 100,
            time2: 0,
            level2: 100,
            time3: 0,
            sustain_level: 100,
            time4: 0,
            level4: 0,
        }
    }
}

/// Amplifier envelope (TVA-ENV). The release always ends at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AmpEnvelope {
    pub velo: u8,
    pub time_velo: u8,
    pub time_kf: u8,
    pub time1: u8,
    pub level1: u8,
    pub time2: u8,
    pub level2: u8,
    pub time3: u8,
    pub sustain_level: u8,
    pub time4: u8,
}

impl Default for AmpEnvelope {
    fn default() -> Self {
        Self {
            velo: CENTER,
            time_velo: CENTER,
            time_kf: 10,
            time1: 0,
            level1: 100,
            time2: 0,
            level2: 100,
            time3: 0,
            sustain_level: 100,
            time4: 10,
        }
    }
}

/// Decodes a fixed-length name field, trimming trailing padding.
pub fn name_to_string(name: &[u8]) -> String {
    let text: String = name
        .iter()
        .map(|&b| if (0x20..0x7F).contains(&b) { b as char } else { ' ' })
        .collect();
    text.trim_end().to_string()
}

/// Encodes `text` into a space-padded name field, dropping non-ASCII characters.
pub fn name_from_str<const N: usize>(text: &str) -> [u8; N] {
    let mut name = [b' '; N];
    for (slot, ch) in name
        .iter_mut()
        .zip(text.chars().filter(|c| c.is_ascii() && !c.is_ascii_control()))
    {
        *slot = ch as u8;
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_masks() {
        assert_eq!(ToneId::A.mask(), 1);
        assert_eq!(ToneId::B.mask(), 2);
        assert_eq!(ToneId::C.mask(), 4);
        assert_eq!(ToneId::D.mask(), 8);
        assert_eq!(ToneId::D.index(), 3);
    }

    #[test]
    fn test_name_roundtrip() {
        let name: [u8; PATCH_NAME_LEN] = name_from_str("Syn Brass");
        assert_eq!(&name[..9], b"Syn Brass");
        assert_eq!(name[9], b' ');
        assert_eq!(name_to_string(&name), "Syn Brass");
    }

    #[test]
    fn test_name_truncates() {
        let name: [u8; 4] = name_from_str("Strings");
        assert_eq!(&name, b"Stri");
    }

    #[test]
    fn test_name_replaces_control_bytes() {
        assert_eq!(name_to_string(&[b'P', 0x00, b'd', 0x7F]), "P d");
    }
}
