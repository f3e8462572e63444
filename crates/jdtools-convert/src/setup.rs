//! Special setup (drum kit) conversion.

use crate::diagnostic::{Diagnostics, Issue, Scope};
use crate::patch::control_sources;
use crate::tone::{convert_tone, ToneContext, ToneControls};
use jdtools_patch::jd800::{DEFAULT_AFTERTOUCH_BEND, MAX_EFFECT_MODE, MAX_MUTE_GROUP};
use jdtools_patch::jd990::NEUTRAL_SETUP_LEVEL;
use jdtools_patch::{Setup800, Setup990, SetupCommon800, SetupKey800, SetupKey990, CENTER};

pub(crate) fn convert_setup(src: &Setup990, diagnostics: &mut Diagnostics) -> Setup800 {
    diagnostics.push(Scope::Setup, Issue::SetupNameAndEffects);

    let common = &src.common;
    if common.level != NEUTRAL_SETUP_LEVEL {
        diagnostics.push(
            Scope::Setup,
            Issue::SetupLevel {
                level: common.level,
            },
        );
    }
    if common.pan != CENTER {
        diagnostics.push(Scope::Setup, Issue::SetupPan { pan: common.pan });
    }
    if common.analog_feel != 0 {
        diagnostics.push(
            Scope::Setup,
            Issue::AnalogFeel {
                value: common.analog_feel,
            },
        );
    }

    let controls = ToneControls {
        sources: control_sources(
            common.tone_control_source1,
            common.tone_control_source2,
            Scope::Setup,
            diagnostics,
        ),
        context: ToneContext::Setup,
    };

    let mut setup = Setup800 {
        common: SetupCommon800 {
            bender_range_down: common.bender_range_down,
            bender_range_up: common.bender_range_up,
            // Overwritten by keys routing aftertouch to pitch
            aftertouch_bend: DEFAULT_AFTERTOUCH_BEND,
        },
        eq: src.eq,
        keys: Vec::with_capacity(src.keys.len()),
    };

    for (index, key) in src.keys.iter().enumerate() {
        let converted = convert_key(
            key,
            &controls,
            Scope::Key(index),
            &mut setup.common.aftertouch_bend,
            diagnostics,
        );
        setup.keys.push(converted);
    }

    setup
}

/// Narrows the JD-990 pan (0-100) onto the JD-800 key pan (0-60), rounding to nearest.
#[inline]
pub fn rescale_pan(pan: u8) -> u8 {
    ((u32::from(pan) * 3 + 2) / 5) as u8
}

fn convert_key(
    src: &SetupKey990,
    controls: &ToneControls,
    scope: Scope,
    aftertouch_bend: &mut u8,
    diagnostics: &mut Diagnostics,
) -> SetupKey800 {
    let mut mute_group = src.mute_group;
    if mute_group > MAX_MUTE_GROUP {
        diagnostics.push(scope, Issue::MuteGroup { group: mute_group });
        mute_group = 0;
    }
    let mut effect_mode = src.effect_mode;
    if effect_mode > MAX_EFFECT_MODE {
        diagnostics.push(scope, Issue::EffectMode { mode: effect_mode });
        effect_mode = 0;
    }

    SetupKey800 {
        name: src.name,
        mute_group,
        env_mode: src.env_mode,
        pan: rescale_pan(src.tone.tva.pan),
        effect_mode,
        effect_level: src.effect_level,
        dummy: 0,
        tone: convert_tone(&src.tone, controls, scope, aftertouch_bend, diagnostics),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::{Diagnostic, DiagnosticKind};
    use jdtools_patch::{name_from_str, ControlRoute, SETUP_KEY_COUNT};

    fn convert(src: &Setup990) -> (Setup800, Vec<Diagnostic>) {
        let mut diagnostics = Diagnostics::new(false);
        let setup = convert_setup(src, &mut diagnostics);
        (setup, diagnostics.into_vec())
    }

    #[test]
    fn test_pan_rescale() {
        assert_eq!(rescale_pan(0), 0);
        assert_eq!(rescale_pan(50), 30);
        assert_eq!(rescale_pan(100), 60);
        assert_eq!(rescale_pan(127), 76);
        assert_eq!(rescale_pan(1), 1);
        assert_eq!(rescale_pan(2), 1);
    }

    #[test]
    fn test_neutral_setup_only_notes_name_and_effects() {
        let (setup, diagnostics) = convert(&Setup990::default());
        assert_eq!(
            diagnostics,
            vec![Diagnostic::new(Scope::Setup, Issue::SetupNameAndEffects)]
        );
        assert_eq!(diagnostics[0].kind(), DiagnosticKind::Notice);
        assert_eq!(setup.keys.len(), SETUP_KEY_COUNT);
        assert!(setup.keys.iter().all(|key| key.pan == 30));
        assert_eq!(setup.common.aftertouch_bend, DEFAULT_AFTERTOUCH_BEND);
    }

    #[test]
    fn test_setup_common() {
        let mut src = Setup990::default();
        src.common.level = 100;
        src.common.pan = 40;
        src.common.analog_feel = 3;
        src.common.bender_range_down = 24;
        src.common.bender_range_up = 1;
        src.eq.high_gain = 3;

        let (setup, diagnostics) = convert(&src);
        assert_eq!(setup.common.bender_range_down, 24);
        assert_eq!(setup.common.bender_range_up, 1);
        assert_eq!(setup.eq, src.eq);

        let issues: Vec<_> = diagnostics.iter().skip(1).map(|d| d.issue).collect();
        assert_eq!(
            issues,
            vec![
                Issue::SetupLevel { level: 100 },
                Issue::SetupPan { pan: 40 },
                Issue::AnalogFeel { value: 3 },
            ]
        );
    }

    #[test]
    fn test_key_fields() {
        let mut src = Setup990::default();
        let key = &mut src.keys[12];
        key.name = name_from_str("Kick 1");
        key.mute_group = 8;
        key.env_mode = 1;
        key.effect_mode = 3;
        key.effect_level = 64;
        key.tone.tva.pan = 100;
        key.tone.tvf.cutoff_freq = 40;

        let (setup, diagnostics) = convert(&src);
        assert_eq!(diagnostics.len(), 1);
        let key = &setup.keys[12];
        assert_eq!(key.name, src.keys[12].name);
        assert_eq!(key.mute_group, 8);
        assert_eq!(key.env_mode, 1);
        assert_eq!(key.effect_mode, 3);
        assert_eq!(key.effect_level, 64);
        assert_eq!(key.pan, 60);
        assert_eq!(key.tone.tvf.cutoff_freq, 40);
    }

    #[test]
    fn test_out_of_range_indices_are_clamped() {
        let mut src = Setup990::default();
        src.keys[5].mute_group = 9;
        src.keys[7].effect_mode = 4;

        let (setup, diagnostics) = convert(&src);
        assert_eq!(setup.keys[5].mute_group, 0);
        assert_eq!(setup.keys[7].effect_mode, 0);
        assert_eq!(
            &diagnostics[1..],
            &[
                Diagnostic::new(Scope::Key(5), Issue::MuteGroup { group: 9 }),
                Diagnostic::new(Scope::Key(7), Issue::EffectMode { mode: 4 }),
            ]
        );
        assert!(diagnostics[1..]
            .iter()
            .all(|d| d.kind() == DiagnosticKind::Clamped));
    }

    #[test]
    fn test_key_tones_use_setup_controls() {
        let mut src = Setup990::default();
        src.common.tone_control_source1 = 1;
        src.common.tone_control_source2 = 0;
        src.keys[0].tone.control1[0] = ControlRoute::new(3, 77);
        src.keys[60].tone.control1[0] = ControlRoute::new(0, 62);

        let (setup, diagnostics) = convert(&src);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(setup.keys[0].tone.tva.aftertouch_sens, 77);
        assert_eq!(setup.keys[60].tone.wg.aftertouch_bend, 1);
        assert_eq!(setup.common.aftertouch_bend, 26);
    }
}
