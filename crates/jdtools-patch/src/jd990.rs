//! JD-990 patch and special setup records.
//!
//! Field values are the raw parameter bytes as they appear in the JD-990
//! SysEx parameter map. Centered parameters use 50 as their neutral value.

use crate::common::{
    AmpEnvelope, Equalizer, FilterEnvelope, ToneCommon, CENTER, KEY_NAME_LEN, PATCH_NAME_LEN,
    SETUP_KEY_COUNT,
};
use serde::{Deserialize, Serialize};

/// Number of routings per tone control source.
pub const CONTROL_ROUTES: usize = 4;

/// Neutral pitch envelope depth.
pub const NEUTRAL_PITCH_ENV_DEPTH: u8 = 24;

/// Neutral pan key follow.
pub const NEUTRAL_PAN_KEY_FOLLOW: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lfo990 {
    pub rate: u8,
    pub delay: u8,
    pub fade: u8,
    /// 0-7: TRI, SIN, SAW, SQU, TRP, S&H, RND, CHS
    pub waveform: u8,
    pub offset: u8,
    pub key_trigger: u8,
    pub depth_pitch: u8,
    pub depth_tvf: u8,
    pub depth_tva: u8,
}

impl Default for Lfo990 {
    fn default() -> Self {
        Self {
            rate: 67,
            delay: 0,
            fade: CENTER,
            waveform: 0,
            offset: 1,
            key_trigger: 0,
            depth_pitch: CENTER,
            depth_tvf: CENTER,
            depth_tva: CENTER,
        }
    }
}

/// Wave generator (WG).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WaveGenerator990 {
    /// 0 = internal waveforms, otherwise a card slot
    pub wave_source: u8,
    pub waveform_msb: u8,
    pub waveform_lsb: u8,
    pub fxm_color: u8,
    pub fxm_depth: u8,
    pub sync_slave: u8,
    pub tone_delay_mode: u8,
    pub tone_delay_time: u8,
    pub env_depth: u8,
    pub pitch_coarse: u8,
    pub pitch_fine: u8,
    pub pitch_random: u8,
    pub key_follow: u8,
    pub bender_switch: u8,
}

impl WaveGenerator990 {
    /// Combined 14-bit waveform number.
    #[inline]
    pub fn waveform(&self) -> u16 {
        (u16::from(self.waveform_msb) << 7) | u16::from(self.waveform_lsb)
    }
}

impl Default for WaveGenerator990 {
    fn default() -> Self {
        Self {
            wave_source: 0,
            waveform_msb: 0,
            waveform_lsb: 0,
            fxm_color: 0,
            fxm_depth: 0,
            sync_slave: 0,
            tone_delay_mode: 0,
            tone_delay_time: 0,
            env_depth: NEUTRAL_PITCH_ENV_DEPTH,
            pitch_coarse: 48,
            pitch_fine: CENTER,
            pitch_random: 0,
            key_follow: 12,
            bender_switch: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PitchEnvelope990 {
    pub velo: u8,
    pub time_velo: u8,
    pub time_kf: u8,
    pub level0: u8,
    pub time1: u8,
    pub level1: u8,
    pub time2: u8,
    pub sustain_level: u8,
    pub time3: u8,
    pub level3: u8,
}

impl PitchEnvelope990 {
    /// True when every level sits at the center, i.e. the envelope has no audible effect.
    pub fn is_flat(&self) -> bool {
        [self.level0, self.level1, self.sustain_level, self.level3]
            .iter()
            .all(|&level| level == CENTER)
    }
}

impl Default for PitchEnvelope990 {
    fn default() -> Self {
        Self {
            velo: CENTER,
            time_velo: CENTER,
            time_kf: 10,
            level0: CENTER,
            time1: 0,
            level1: CENTER,
            time2: 0,
            sustain_level: CENTER,
            time3: 0,
            level3: CENTER,
        }
    }
}

/// Filter (TVF).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Filter990 {
    pub filter_mode: u8,
    pub cutoff_freq: u8,
    pub resonance: u8,
    pub key_follow: u8,
    pub env_depth: u8,
}

impl Default for Filter990 {
    fn default() -> Self {
        Self {
            filter_mode: 0,
            cutoff_freq: 100,
            resonance: 0,
            key_follow: 12,
            env_depth: CENTER,
        }
    }
}

/// Amplifier (TVA).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amplifier990 {
    pub bias_direction: u8,
    pub bias_point: u8,
    pub bias_level: u8,
    pub level: u8,
    pub pan: u8,
    pub pan_key_follow: u8,
}

impl Default for Amplifier990 {
    fn default() -> Self {
        Self {
            bias_direction: 0,
            bias_point: 36,
            bias_level: 10,
            level: 100,
            pan: CENTER,
            pan_key_follow: NEUTRAL_PAN_KEY_FOLLOW,
        }
    }
}

/// One modulation matrix slot of a tone control source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlRoute {
    /// 0 PITCH, 1 CUTOFF, 2 RESO, 3 LEVEL, 4 P-LFO1, 5 P-LFO2,
    /// 6 F-LFO1, 7 F-LFO2, 8 A-LFO1, 9 A-LFO2, 10 LFO1-R, 11 LFO2-R
    pub destination: u8,
    pub depth: u8,
}

impl ControlRoute {
    pub fn new(destination: u8, depth: u8) -> Self {
        Self { destination, depth }
    }
}

impl Default for ControlRoute {
    fn default() -> Self {
        Self {
            destination: 0,
            depth: CENTER,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tone990 {
    pub common: ToneCommon,
    pub lfo1: Lfo990,
    pub lfo2: Lfo990,
    pub wg: WaveGenerator990,
    pub pitch_env: PitchEnvelope990,
    pub tvf: Filter990,
    pub tvf_env: FilterEnvelope,
    pub tva: Amplifier990,
    pub tva_env: AmpEnvelope,
    /// Routings driven by tone control source 1
    pub control1: [ControlRoute; CONTROL_ROUTES],
    /// Routings driven by tone control source 2
    pub control2: [ControlRoute; CONTROL_ROUTES],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatchCommon990 {
    pub name: [u8; PATCH_NAME_LEN],
    pub patch_level: u8,
    pub patch_pan: u8,
    pub analog_feel: u8,
    pub voice_priority: u8,
    pub bend_range_down: u8,
    pub bend_range_up: u8,
    /// 0 = modulation wheel, 1 = aftertouch, higher values are other controllers
    pub tone_control_source1: u8,
    pub tone_control_source2: u8,
    pub layer_tone: u8,
    pub active_tone: u8,
}

impl Default for PatchCommon990 {
    fn default() -> Self {
        Self {
            name: [b' '; PATCH_NAME_LEN],
            patch_level: 80,
            patch_pan: CENTER,
            analog_feel: 0,
            voice_priority: 0,
            bend_range_down: 2,
            bend_range_up: 2,
            tone_control_source1: 0,
            tone_control_source2: 1,
            layer_tone: 0x0F,
            active_tone: 0x0F,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyEffects990 {
    pub solo_sw: u8,
    pub solo_legato: u8,
    pub solo_sync_master: u8,
    pub portamento_sw: u8,
    pub portamento_mode: u8,
    pub portamento_type: u8,
    pub portamento_time: u8,
}

impl Default for KeyEffects990 {
    fn default() -> Self {
        Self {
            solo_sw: 0,
            solo_legato: 0,
            solo_sync_master: 0,
            portamento_sw: 0,
            portamento_mode: 0,
            portamento_type: 1,
            portamento_time: 0,
        }
    }
}

/// Key range per tone, indexed by [`ToneId`](crate::ToneId).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyRanges {
    pub low: [u8; 4],
    pub high: [u8; 4],
}

impl Default for KeyRanges {
    fn default() -> Self {
        Self {
            low: [0; 4],
            high: [127; 4],
        }
    }
}

/// Velocity range switch per tone, indexed by [`ToneId`](crate::ToneId). 0 = off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VelocityRanges {
    pub range: [u8; 4],
}

/// Structure of the AB and CD tone pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructureTypes {
    pub ab: u8,
    pub cd: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Effect990 {
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

    pub delay_center_tap_msb: u8,
    pub delay_center_tap_lsb: u8,
    pub delay_center_level: u8,
    pub delay_left_tap_msb: u8,
    pub delay_left_tap_lsb: u8,
    pub delay_left_level: u8,
    pub delay_right_tap_msb: u8,
    pub delay_right_tap_lsb: u8,
    pub delay_right_level: u8,
    pub delay_feedback: u8,
    pub delay_mode: u8,

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
}

impl Default for Effect990 {
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
            delay_center_tap_msb: 0,
            delay_center_tap_lsb: 0x40,
            delay_center_level: 0,
            delay_left_tap_msb: 0,
            delay_left_tap_lsb: 0x40,
            delay_left_level: 0,
            delay_right_tap_msb: 0,
            delay_right_tap_lsb: 0x40,
            delay_right_level: 0,
            delay_feedback: 0,
            delay_mode: 0,
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
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Patch990 {
    pub common: PatchCommon990,
    pub key_effects: KeyEffects990,
    pub key_ranges: KeyRanges,
    pub velocity: VelocityRanges,
    pub structure: StructureTypes,
    pub octave_switch: u8,
    pub eq: Equalizer,
    pub effect: Effect990,
    /// Tones A to D
    pub tones: [Tone990; 4],
}

impl Default for Patch990 {
    fn default() -> Self {
        Self {
            common: PatchCommon990::default(),
            key_effects: KeyEffects990::default(),
            key_ranges: KeyRanges::default(),
            velocity: VelocityRanges::default(),
            structure: StructureTypes::default(),
            octave_switch: 1,
            eq: Equalizer::default(),
            effect: Effect990::default(),
            tones: [Tone990::default(); 4],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetupCommon990 {
    pub level: u8,
    pub pan: u8,
    pub analog_feel: u8,
    pub bender_range_down: u8,
    pub bender_range_up: u8,
    pub tone_control_source1: u8,
    pub tone_control_source2: u8,
}

/// Setup level the JD-800 plays at.
pub const NEUTRAL_SETUP_LEVEL: u8 = 80;

impl Default for SetupCommon990 {
    fn default() -> Self {
        Self {
            level: NEUTRAL_SETUP_LEVEL,
            pan: CENTER,
            analog_feel: 0,
            bender_range_down: 2,
            bender_range_up: 2,
            tone_control_source1: 0,
            tone_control_source2: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetupKey990 {
    pub name: [u8; KEY_NAME_LEN],
    /// 0 = off, 1-26 = groups A-Z
    pub mute_group: u8,
    pub env_mode: u8,
    /// 0-3 on the JD-800 routing, higher values address JD-990 only outputs
    pub effect_mode: u8,
    pub effect_level: u8,
    pub tone: Tone990,
}

impl Default for SetupKey990 {
    fn default() -> Self {
        Self {
            name: [b' '; KEY_NAME_LEN],
            mute_group: 0,
            env_mode: 0,
            effect_mode: 0,
            effect_level: 100,
            tone: Tone990::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Setup990 {
    pub common: SetupCommon990,
    pub eq: Equalizer,
    /// One record per key, C2 first
    pub keys: Vec<SetupKey990>,
}

impl Default for Setup990 {
    fn default() -> Self {
        Self {
            common: SetupCommon990::default(),
            eq: Equalizer::default(),
            keys: vec![SetupKey990::default(); SETUP_KEY_COUNT],
        }
    }
}
