//! JD-800 patch and special setup records.
//!
//! The JD-800 has no modulation matrix. Controller routings are fixed
//! sensitivity parameters on the wave generator, filter and amplifier.

use crate::common::{
    AmpEnvelope, Equalizer, FilterEnvelope, ToneCommon, CENTER, KEY_NAME_LEN, PATCH_NAME_LEN,
    SETUP_KEY_COUNT,
};
use serde::{Deserialize, Serialize};

/// Number of internal waveforms.
pub const INTERNAL_WAVEFORMS: u8 = 108;

/// Highest LFO waveform number (TRI, SAW, SQU, S&H, RND).
pub const MAX_LFO_WAVEFORM: u8 = 4;

/// Highest mute group (0 = off, 1-8 = groups A-H).
pub const MAX_MUTE_GROUP: u8 = 8;

/// Highest key effect mode (MIX, DRY, EFX-A, EFX-B).
pub const MAX_EFFECT_MODE: u8 = 3;

/// Highest delay tap value.
pub const MAX_DELAY_TAP: u8 = 0x7D;

/// Highest aftertouch bend sensitivity code.
pub const MAX_AFTERTOUCH_BEND: u8 = 26;

/// Aftertouch bend code of a patch without aftertouch pitch control.
pub const DEFAULT_AFTERTOUCH_BEND: u8 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lfo800 {
    pub rate: u8,
    pub delay: u8,
    pub fade: u8,
    /// 0-4: TRI, SAW, SQU, S&H, RND
    pub waveform: u8,
    pub offset: u8,
    pub key_trigger: u8,
}

impl Default for Lfo800 {
    fn default() -> Self {
        Self {
            rate: 67,
            delay: 0,
            fade: CENTER,
            waveform: 0,
            offset: 1,
            key_trigger: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WaveGenerator800 {
    pub wave_source: u8,
    pub waveform_msb: u8,
    pub waveform_lsb: u8,
    pub pitch_coarse: u8,
    pub pitch_fine: u8,
    pub pitch_random: u8,
    pub key_follow: u8,
    pub bender_switch: u8,
    /// Whether aftertouch bends this tone. The bend amount lives on the patch.
    pub aftertouch_bend: u8,
    pub lfo1_sens: u8,
    pub lfo2_sens: u8,
    pub lever_sens: u8,
    pub aftertouch_mod_sens: u8,
}

impl Default for WaveGenerator800 {
    fn default() -> Self {
        Self {
            wave_source: 0,
            waveform_msb: 0,
            waveform_lsb: 0,
            pitch_coarse: 48,
            pitch_fine: CENTER,
            pitch_random: 0,
            key_follow: 12,
            bender_switch: 1,
            aftertouch_bend: 0,
            lfo1_sens: CENTER,
            lfo2_sens: CENTER,
            lever_sens: CENTER,
            aftertouch_mod_sens: CENTER,
        }
    }
}

/// Pitch envelope with three levels; there is no sustain level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PitchEnvelope800 {
    pub velo: u8,
    pub time_velo: u8,
    pub time_kf: u8,
    pub level0: u8,
    pub time1: u8,
    pub level1: u8,
    pub time2: u8,
    pub time3: u8,
    pub level2: u8,
}

impl Default for PitchEnvelope800 {
    fn default() -> Self {
        Self {
            velo: CENTER,
            time_velo: CENTER,
            time_kf: 10,
            level0: CENTER,
            time1: 0,
            level1: CENTER,
            time2: 0,
            time3: 0,
            level2: CENTER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Filter800 {
    pub filter_mode: u8,
    pub cutoff_freq: u8,
    pub resonance: u8,
    pub key_follow: u8,
    pub aftertouch_sens: u8,
    /// 0 = LFO1, 1 = LFO2
    pub lfo_select: u8,
    pub lfo_depth: u8,
    pub env_depth: u8,
}

impl Default for Filter800 {
    fn default() -> Self {
        Self {
            filter_mode: 0,
            cutoff_freq: 100,
            resonance: 0,
            key_follow: 12,
            aftertouch_sens: CENTER,
            lfo_select: 0,
            lfo_depth: CENTER,
            env_depth: CENTER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amplifier800 {
    pub bias_direction: u8,
    pub bias_point: u8,
    pub bias_level: u8,
    pub level: u8,
    pub aftertouch_sens: u8,
    /// 0 = LFO1, 1 = LFO2
    pub lfo_select: u8,
    pub lfo_depth: u8,
}

impl Default for Amplifier800 {
    fn default() -> Self {
        Self {
            bias_direction: 0,
            bias_point: 36,
            bias_level: 10,
            level: 100,
            aftertouch_sens: CENTER,
            lfo_select: 0,
            lfo_depth: CENTER,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tone800 {
    pub common: ToneCommon,
    pub lfo1: Lfo800,
    pub lfo2: Lfo800,
    pub wg: WaveGenerator800,
    pub pitch_env: PitchEnvelope800,
    pub tvf: Filter800,
    pub tvf_env: FilterEnvelope,
    pub tva: Amplifier800,
    pub tva_env: AmpEnvelope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatchCommon800 {
    pub name: [u8; PATCH_NAME_LEN],
    pub patch_level: u8,
    /// Key range per tone, indexed by [`ToneId`](crate::ToneId)
    pub key_range_low: [u8; 4],
    pub key_range_high: [u8; 4],
    pub bender_range_down: u8,
    pub bender_range_up: u8,
    /// Aftertouch pitch bend sensitivity code, 0-26
    pub aftertouch_bend: u8,
    pub solo_sw: u8,
    pub solo_legato: u8,
    pub portamento_sw: u8,
    pub portamento_mode: u8,
    pub portamento_time: u8,
    pub layer_tone: u8,
    pub active_tone: u8,
}

impl Default for PatchCommon800 {
    fn default() -> Self {
        Self {
            name: [b' '; PATCH_NAME_LEN],
            patch_level: 80,
            key_range_low: [0; 4],
            key_range_high: [127; 4],
            bender_range_down: 2,
            bender_range_up: 2,
            aftertouch_bend: DEFAULT_AFTERTOUCH_BEND,
            solo_sw: 0,
            solo_legato: 0,
            portamento_sw: 0,
            portamento_mode: 0,
            portamento_time: 0,
            layer_tone: 0x0F,
            active_tone: 0x0F,
        }
    }
}

/// MIDI transmit settings stored with every JD-800 patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MidiTransmit {
    pub key_mode: u8,
    pub split_point: u8,
    pub lower_channel: u8,
    pub upper_channel: u8,
    pub lower_program_change: u8,
    pub upper_program_change: u8,
    pub hold_mode: u8,
    pub dummy: u8,
}

impl Default for MidiTransmit {
    /// Whole keyboard, split at C4, lower part on channel 2, hold on both parts.
    fn default() -> Self {
        Self {
            key_mode: 0,
            split_point: 36,
            lower_channel: 1,
            upper_channel: 0,
            lower_program_change: 0,
            upper_program_change: 0,
            hold_mode: 2,
            dummy: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Effect800 {
    pub group_a_sequence: u8,
    pub group_b_sequence: u8,
    pub group_a_block_switch: [u8; 4],
    pub group_b_block_switch: [u8; 3],
    pub effects_balance_group_b: u8,

    pub distortion_type: u8,
    pub distortion_drive: u8,
    pub distortion_level: u8,

    pub phaser_manual: u8,
    pub phaser_rate: u8,
    pub phaser_depth: u8,
    pub phaser_resonance: u8,
    pub phaser_mix: u8,

    pub spectrum_band: [u8; 6],
    pub spectrum_bandwidth: u8,

    pub enhancer_sens: u8,
    pub enhancer_mix: u8,

    pub delay_center_tap: u8,
    pub delay_center_level: u8,
    pub delay_left_tap: u8,
    pub delay_left_level: u8,
    pub delay_right_tap: u8,
    pub delay_right_level: u8,
    pub delay_feedback: u8,

    pub chorus_rate: u8,
    pub chorus_depth: u8,
    pub chorus_delay_time: u8,
    pub chorus_feedback: u8,
    pub chorus_level: u8,

    pub reverb_type: u8,
    pub reverb_pre_delay: u8,
    pub reverb_early_ref_level: u8,
    pub reverb_hf_damp: u8,
    pub reverb_time: u8,
    pub reverb_level: u8,
    pub dummy: u8,
}

impl Default for Effect800 {
    fn default() -> Self {
        Self {
            group_a_sequence: 0,
            group_b_sequence: 0,
            group_a_block_switch: [0; 4],
            group_b_block_switch: [0; 3],
            effects_balance_group_b: CENTER,
            distortion_type: 0,
            distortion_drive: 0,
            distortion_level: 0,
            phaser_manual: 0,
            phaser_rate: 0,
            phaser_depth: 0,
            phaser_resonance: 0,
            phaser_mix: 0,
            spectrum_band: [15; 6],
            spectrum_bandwidth: 0,
            enhancer_sens: 0,
            enhancer_mix: 0,
            delay_center_tap: 0x40,
            delay_center_level: 0,
            delay_left_tap: 0x40,
            delay_left_level: 0,
            delay_right_tap: 0x40,
            delay_right_level: 0,
            delay_feedback: 0,
            chorus_rate: 0,
            chorus_depth: 0,
            chorus_delay_time: 0,
            chorus_feedback: CENTER,
            chorus_level: 0,
            reverb_type: 0,
            reverb_pre_delay: 0,
            reverb_early_ref_level: 0,
            reverb_hf_damp: 0,
            reverb_time: 0,
            reverb_level: 0,
            dummy: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Patch800 {
    pub common: PatchCommon800,
    pub eq: Equalizer,
    pub midi_tx: MidiTransmit,
    pub effect: Effect800,
    /// Tones A to D
    pub tones: [Tone800; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetupCommon800 {
    pub bender_range_down: u8,
    pub bender_range_up: u8,
    pub aftertouch_bend: u8,
}

impl Default for SetupCommon800 {
    fn default() -> Self {
        Self {
            bender_range_down: 2,
            bender_range_up: 2,
            aftertouch_bend: DEFAULT_AFTERTOUCH_BEND,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetupKey800 {
    pub name: [u8; KEY_NAME_LEN],
    pub mute_group: u8,
    pub env_mode: u8,
    /// 0-60, 30 = center
    pub pan: u8,
    pub effect_mode: u8,
    pub effect_level: u8,
    pub dummy: u8,
    pub tone: Tone800,
}

impl Default for SetupKey800 {
    fn default() -> Self {
        Self {
            name: [b' '; KEY_NAME_LEN],
            mute_group: 0,
            env_mode: 0,
            pan: 30,
            effect_mode: 0,
            effect_level: 100,
            dummy: 0,
            tone: Tone800::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Setup800 {
    pub common: SetupCommon800,
    pub eq: Equalizer,
    /// One record per key, C2 first
    pub keys: Vec<SetupKey800>,
}

impl Default for Setup800 {
    fn default() -> Self {
        Self {
            common: SetupCommon800::default(),
            eq: Equalizer::default(),
            keys: vec![SetupKey800::default(); SETUP_KEY_COUNT],
        }
    }
}
