//! Parameter records for the Roland JD-990 and JD-800.
//!
//! Both synthesizers share one architecture (wave generator, pitch envelope,
//! TVF, TVA, two LFOs) but store it differently. This crate only describes the
//! records; converting between them lives in `jdtools-convert`.
//!
//! Every record implements `Default` with the hardware's neutral settings,
//! so tests and tools can start from a patch that makes no sound changes.

pub mod common;
pub mod jd800;
pub mod jd990;

pub use common::{
    name_from_str, name_to_string, AmpEnvelope, Equalizer, FilterEnvelope, ToneCommon, ToneId,
    CENTER, KEY_NAME_LEN, PATCH_NAME_LEN, SETUP_KEY_COUNT, TONE_COUNT,
};
pub use jd800::{
    Amplifier800, Effect800, Filter800, Lfo800, MidiTransmit, Patch800, PatchCommon800,
    PitchEnvelope800, Setup800, SetupCommon800, SetupKey800, Tone800, WaveGenerator800,
};
pub use jd990::{
    Amplifier990, ControlRoute, Effect990, Filter990, KeyEffects990, KeyRanges, Lfo990, Patch990,
    PatchCommon990, PitchEnvelope990, Setup990, SetupCommon990, SetupKey990, StructureTypes,
    Tone990, VelocityRanges, WaveGenerator990,
};
