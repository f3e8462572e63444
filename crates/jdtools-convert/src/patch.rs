//! Patch conversion.

use crate::control::ControlSource;
use crate::diagnostic::{DelayTap, Diagnostics, Issue, Scope, TonePair};
use crate::structure::{fix_up, Structure};
use crate::tone::{convert_tone, ToneContext, ToneControls};
use jdtools_patch::jd800::{DEFAULT_AFTERTOUCH_BEND, MAX_DELAY_TAP};
use jdtools_patch::{
    Effect800, Effect990, MidiTransmit, Patch800, Patch990, PatchCommon800, ToneId, CENTER,
};

pub(crate) fn convert_patch(src: &Patch990, diagnostics: &mut Diagnostics) -> Patch800 {
    check_structure(src, diagnostics);

    for tone in ToneId::ALL {
        let range = src.velocity.range[tone.index()];
        if range != 0 {
            diagnostics.push(Scope::Tone(tone), Issue::VelocityRange { value: range });
        }
    }

    let common = convert_common(src, diagnostics);
    let effect = convert_effect(&src.effect, diagnostics);

    let mut patch = Patch800 {
        common,
        eq: src.eq,
        midi_tx: MidiTransmit::default(),
        effect,
        tones: Default::default(),
    };

    let controls = ToneControls {
        sources: control_sources(
            src.common.tone_control_source1,
            src.common.tone_control_source2,
            Scope::Patch,
            diagnostics,
        ),
        context: ToneContext::Patch,
    };
    for tone in ToneId::ALL {
        patch.tones[tone.index()] = convert_tone(
            &src.tones[tone.index()],
            &controls,
            Scope::Tone(tone),
            &mut patch.common.aftertouch_bend,
            diagnostics,
        );
    }

    let [a, b, c, d] = &mut patch.tones;
    fix_up(Structure::from(src.structure.ab), a, b);
    fix_up(Structure::from(src.structure.cd), c, d);

    patch
}

fn check_structure(src: &Patch990, diagnostics: &mut Diagnostics) {
    let pairs = [
        (TonePair::AB, src.structure.ab, ToneId::A.mask() | ToneId::B.mask()),
        (TonePair::CD, src.structure.cd, ToneId::C.mask() | ToneId::D.mask()),
    ];
    for (pair, structure, tones) in pairs {
        // Structures of silent pairs do not matter
        if structure != 0 && src.common.active_tone & tones != 0 {
            diagnostics.push(Scope::Patch, Issue::StructureType { pair, structure });
        }
    }
}

/// Maps the two tone control sources, reporting ones the JD-800 cannot route.
pub(crate) fn control_sources(
    source1: u8,
    source2: u8,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> [ControlSource; 2] {
    for (slot, source) in [(1, source1), (2, source2)] {
        if let ControlSource::Other(source) = ControlSource::from(source) {
            diagnostics.push(scope, Issue::ToneControlSource { slot, source });
        }
    }
    [source1.into(), source2.into()]
}

fn convert_common(src: &Patch990, diagnostics: &mut Diagnostics) -> PatchCommon800 {
    let common = &src.common;
    let keys = &src.key_effects;

    if common.patch_pan != CENTER {
        diagnostics.push(
            Scope::Patch,
            Issue::PatchPan {
                pan: common.patch_pan,
            },
        );
    }
    if common.analog_feel != 0 {
        diagnostics.push(
            Scope::Patch,
            Issue::AnalogFeel {
                value: common.analog_feel,
            },
        );
    }
    if common.voice_priority != 0 {
        diagnostics.push(
            Scope::Patch,
            Issue::VoicePriority {
                value: common.voice_priority,
            },
        );
    }
    if keys.portamento_type != 1 && keys.portamento_sw != 0 {
        diagnostics.push(
            Scope::Patch,
            Issue::PortamentoType {
                value: keys.portamento_type,
            },
        );
    }
    if keys.solo_sync_master != 0 {
        diagnostics.push(
            Scope::Patch,
            Issue::SoloSyncMaster {
                value: keys.solo_sync_master,
            },
        );
    }
    if src.octave_switch != 1 {
        diagnostics.push(
            Scope::Patch,
            Issue::OctaveSwitch {
                value: src.octave_switch,
            },
        );
    }

    PatchCommon800 {
        name: common.name,
        patch_level: common.patch_level,
        key_range_low: src.key_ranges.low,
        key_range_high: src.key_ranges.high,
        bender_range_down: common.bend_range_down,
        bender_range_up: common.bend_range_up,
        // Overwritten by tones routing aftertouch to pitch
        aftertouch_bend: DEFAULT_AFTERTOUCH_BEND,
        solo_sw: keys.solo_sw,
        solo_legato: keys.solo_legato,
        portamento_sw: keys.portamento_sw,
        portamento_mode: keys.portamento_mode,
        portamento_time: keys.portamento_time,
        layer_tone: common.layer_tone,
        active_tone: common.active_tone,
    }
}

/// JD-800 delay tap for a 14-bit JD-990 tap.
fn delay_tap(tap: DelayTap, msb: u8, lsb: u8, diagnostics: &mut Diagnostics) -> u8 {
    if msb != 0 || lsb > MAX_DELAY_TAP {
        diagnostics.push(Scope::Patch, Issue::DelayTap { tap, msb, lsb });
    }
    lsb.min(MAX_DELAY_TAP)
}

fn convert_effect(src: &Effect990, diagnostics: &mut Diagnostics) -> Effect800 {
    let delay_center_tap = delay_tap(
        DelayTap::Center,
        src.delay_center_tap_msb,
        src.delay_center_tap_lsb,
        diagnostics,
    );
    let delay_left_tap = delay_tap(
        DelayTap::Left,
        src.delay_left_tap_msb,
        src.delay_left_tap_lsb,
        diagnostics,
    );
    let delay_right_tap = delay_tap(
        DelayTap::Right,
        src.delay_right_tap_msb,
        src.delay_right_tap_lsb,
        diagnostics,
    );
    if src.delay_mode != 0 {
        diagnostics.push(
            Scope::Patch,
            Issue::DelayMode {
                mode: src.delay_mode,
            },
        );
    }

    Effect800 {
        group_a_sequence: src.group_a_sequence,
        group_b_sequence: src.group_b_sequence,
        group_a_block_switch: src.group_a_block_switch,
        group_b_block_switch: src.group_b_block_switch,
        effects_balance_group_b: src.effects_balance_group_b,

        distortion_type: src.distortion_type,
        distortion_drive: src.distortion_drive,
        distortion_level: src.distortion_level,

        phaser_manual: src.phaser_manual,
        phaser_rate: src.phaser_rate,
        phaser_depth: src.phaser_depth,
        phaser_resonance: src.phaser_resonance,
        phaser_mix: src.phaser_mix,

        spectrum_band: src.spectrum_band,
        spectrum_bandwidth: src.spectrum_bandwidth,

        enhancer_sens: src.enhancer_sens,
        enhancer_mix: src.enhancer_mix,

        delay_center_tap,
        delay_center_level: src.delay_center_level,
        delay_left_tap,
        delay_left_level: src.delay_left_level,
        delay_right_tap,
        delay_right_level: src.delay_right_level,
        delay_feedback: src.delay_feedback,

        chorus_rate: src.chorus_rate,
        chorus_depth: src.chorus_depth,
        chorus_delay_time: src.chorus_delay_time,
        chorus_feedback: src.chorus_feedback,
        chorus_level: src.chorus_level,

        reverb_type: src.reverb_type,
        reverb_pre_delay: src.reverb_pre_delay,
        reverb_early_ref_level: src.reverb_early_ref_level,
        reverb_hf_damp: src.reverb_hf_damp,
        reverb_time: src.reverb_time,
        reverb_level: src.reverb_level,
        dummy: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Diagnostic;
    use jdtools_patch::{name_from_str, ControlRoute};

    fn convert(src: &Patch990) -> (Patch800, Vec<Diagnostic>) {
        let mut diagnostics = Diagnostics::new(false);
        let patch = convert_patch(src, &mut diagnostics);
        (patch, diagnostics.into_vec())
    }

    #[test]
    fn test_neutral_patch_is_lossless() {
        let (patch, diagnostics) = convert(&Patch990::default());
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert_eq!(patch.common.aftertouch_bend, DEFAULT_AFTERTOUCH_BEND);
        assert_eq!(patch.midi_tx, MidiTransmit::default());
    }

    #[test]
    fn test_common_fields_are_copied() {
        let mut src = Patch990::default();
        src.common.name = name_from_str("Glass Pad");
        src.common.patch_level = 93;
        src.common.bend_range_down = 12;
        src.common.bend_range_up = 7;
        src.common.layer_tone = 0b0101;
        src.common.active_tone = 0b0111;
        src.key_ranges.low[1] = 36;
        src.key_ranges.high[3] = 96;
        src.key_effects.solo_sw = 1;
        src.key_effects.portamento_sw = 1;
        src.key_effects.portamento_time = 45;
        src.eq.mid_gain = 22;

        let (patch, diagnostics) = convert(&src);
        assert!(diagnostics.is_empty());
        assert_eq!(patch.common.name, src.common.name);
        assert_eq!(patch.common.patch_level, 93);
        assert_eq!(patch.common.bender_range_down, 12);
        assert_eq!(patch.common.bender_range_up, 7);
        assert_eq!(patch.common.layer_tone, 0b0101);
        assert_eq!(patch.common.active_tone, 0b0111);
        assert_eq!(patch.common.key_range_low[1], 36);
        assert_eq!(patch.common.key_range_high[3], 96);
        assert_eq!(patch.common.solo_sw, 1);
        assert_eq!(patch.common.portamento_time, 45);
        assert_eq!(patch.eq, src.eq);
    }

    #[test]
    fn test_patch_level_diagnostics() {
        let mut src = Patch990::default();
        src.common.patch_pan = 30;
        src.common.analog_feel = 4;
        src.common.voice_priority = 1;
        src.key_effects.portamento_sw = 1;
        src.key_effects.portamento_type = 0;
        src.key_effects.solo_sync_master = 2;
        src.octave_switch = 2;

        let (_, diagnostics) = convert(&src);
        let issues: Vec<_> = diagnostics.iter().map(|d| d.issue).collect();
        assert_eq!(
            issues,
            vec![
                Issue::PatchPan { pan: 30 },
                Issue::AnalogFeel { value: 4 },
                Issue::VoicePriority { value: 1 },
                Issue::PortamentoType { value: 0 },
                Issue::SoloSyncMaster { value: 2 },
                Issue::OctaveSwitch { value: 2 },
            ]
        );
        assert!(diagnostics.iter().all(|d| d.scope == Scope::Patch));
    }

    #[test]
    fn test_portamento_type_ignored_when_off() {
        let mut src = Patch990::default();
        src.key_effects.portamento_type = 0;
        let (_, diagnostics) = convert(&src);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_structure_reported_only_for_active_pairs() {
        let mut src = Patch990::default();
        src.structure.ab = 1;
        src.structure.cd = 3;
        src.common.active_tone = ToneId::A.mask();

        let (_, diagnostics) = convert(&src);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::new(
                Scope::Patch,
                Issue::StructureType {
                    pair: TonePair::AB,
                    structure: 1,
                }
            )]
        );
    }

    #[test]
    fn test_velocity_ranges_reported_per_tone() {
        let mut src = Patch990::default();
        src.velocity.range = [0, 2, 0, 1];

        let (_, diagnostics) = convert(&src);
        assert_eq!(
            diagnostics,
            vec![
                Diagnostic::new(Scope::Tone(ToneId::B), Issue::VelocityRange { value: 2 }),
                Diagnostic::new(Scope::Tone(ToneId::D), Issue::VelocityRange { value: 1 }),
            ]
        );
    }

    #[test]
    fn test_control_sources_reported_once() {
        let mut src = Patch990::default();
        src.common.tone_control_source2 = 4;

        let (_, diagnostics) = convert(&src);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::new(
                Scope::Patch,
                Issue::ToneControlSource { slot: 2, source: 4 }
            )]
        );
    }

    #[test]
    fn test_effects_and_delay_taps() {
        let mut src = Patch990::default();
        src.effect.reverb_time = 77;
        src.effect.chorus_rate = 12;
        src.effect.spectrum_band = [1, 2, 3, 4, 5, 6];
        src.effect.group_a_block_switch = [1, 0, 1, 0];
        src.effect.delay_center_tap_lsb = 0x30;
        src.effect.delay_left_tap_lsb = 0x7F;
        src.effect.delay_right_tap_msb = 1;
        src.effect.delay_right_tap_lsb = 0x10;
        src.effect.delay_mode = 1;

        let (patch, diagnostics) = convert(&src);
        assert_eq!(patch.effect.reverb_time, 77);
        assert_eq!(patch.effect.chorus_rate, 12);
        assert_eq!(patch.effect.spectrum_band, [1, 2, 3, 4, 5, 6]);
        assert_eq!(patch.effect.group_a_block_switch, [1, 0, 1, 0]);
        assert_eq!(patch.effect.delay_center_tap, 0x30);
        assert_eq!(patch.effect.delay_left_tap, MAX_DELAY_TAP);
        assert_eq!(patch.effect.delay_right_tap, 0x10);

        let issues: Vec<_> = diagnostics.iter().map(|d| d.issue).collect();
        assert_eq!(
            issues,
            vec![
                Issue::DelayTap {
                    tap: DelayTap::Left,
                    msb: 0,
                    lsb: 0x7F,
                },
                Issue::DelayTap {
                    tap: DelayTap::Right,
                    msb: 1,
                    lsb: 0x10,
                },
                Issue::DelayMode { mode: 1 },
            ]
        );
    }

    #[test]
    fn test_aftertouch_bend_shared_across_tones() {
        let mut src = Patch990::default();
        src.tones[1].control2[0] = ControlRoute::new(0, 26);

        let (patch, diagnostics) = convert(&src);
        assert!(diagnostics.is_empty());
        assert_eq!(patch.common.aftertouch_bend, 1);
        assert_eq!(patch.tones[0].wg.aftertouch_bend, 0);
        assert_eq!(patch.tones[1].wg.aftertouch_bend, 1);
    }

    #[test]
    fn test_structure_fix_up_applies_per_pair() {
        let mut src = Patch990::default();
        src.structure.ab = 1;
        src.structure.cd = 2;
        src.tones[0].tva.level = 20;
        src.tones[1].tva.level = 85;
        src.tones[1].tva_env.time1 = 64;
        src.tones[3].pitch_env.level0 = 10;
        src.tones[3].pitch_env.level3 = 90;

        let (patch, diagnostics) = convert(&src);
        assert_eq!(patch.tones[0].tva, patch.tones[1].tva);
        assert_eq!(patch.tones[0].tva_env, patch.tones[1].tva_env);
        assert_eq!(patch.tones[0].tva.level, 85);
        assert_eq!(patch.tones[3].pitch_env.level0, CENTER);
        assert_eq!(patch.tones[3].pitch_env.level2, CENTER);
        assert_eq!(diagnostics.len(), 2);
    }
}
