//! Conversion tests through the umbrella crate (requires the "convert" feature)
//!
//! Run with:
//! ```bash
//! cargo test -p jdtools --test conversion_integration --features convert
//! ```

#![cfg(feature = "convert")]

use jdtools::convert::diagnostic::DelayTap;
use jdtools::prelude::*;
use jdtools::{name_from_str, name_to_string, ControlRoute, Issue, Scope};

/// A layered string patch: tones A/B ring-modulated, C/D with a shared filter.
fn layered_patch() -> Patch990 {
    let mut src = Patch990::default();
    src.common.name = name_from_str("RingStrings");
    src.structure.ab = 3;
    src.structure.cd = 1;
    src.common.active_tone = 0x0F;

    src.tones[1].pitch_env.level0 = 0;
    src.tones[1].pitch_env.level1 = 100;
    src.tones[1].pitch_env.level3 = 75;
    src.tones[2].tva.level = 20;
    src.tones[3].tva.level = 95;
    src.tones[3].tva_env.time1 = 33;
    src
}

#[test]
fn test_structures_are_folded() {
    let converted = Converter::default().convert_patch(&layered_patch());
    let patch = &converted.output;

    assert_eq!(name_to_string(&patch.common.name), "RingStrings");

    // Ring modulation: the modulating tone loses its pitch envelope
    let b = &patch.tones[1].pitch_env;
    assert_eq!((b.level0, b.level1, b.level2), (50, 50, 50));

    // Shared filter: tone C plays through tone D's amplifier
    assert_eq!(patch.tones[2].tva, patch.tones[3].tva);
    assert_eq!(patch.tones[2].tva.level, 95);
    assert_eq!(patch.tones[2].tva_env.time1, 33);

    let structures: Vec<_> = converted
        .diagnostics
        .iter()
        .filter(|d| matches!(d.issue, Issue::StructureType { .. }))
        .collect();
    assert_eq!(structures.len(), 2);
}

#[test]
fn test_silent_pair_structure_is_not_reported() {
    let mut src = layered_patch();
    // Only tones A and B sound
    src.common.active_tone = ToneId::A.mask() | ToneId::B.mask();

    let converted = jdtools::convert_patch(&src);
    let structures: Vec<_> = converted
        .diagnostics
        .iter()
        .filter(|d| matches!(d.issue, Issue::StructureType { .. }))
        .collect();
    assert_eq!(structures.len(), 1);
}

#[test]
fn test_delay_taps_are_clamped() {
    let mut src = Patch990::default();
    src.effect.delay_center_tap_lsb = 0x7E;
    src.effect.delay_left_tap_msb = 1;
    src.effect.delay_left_tap_lsb = 0x10;
    src.effect.delay_right_tap_lsb = 0x7D;

    let converted = jdtools::convert_patch(&src);
    let effect = &converted.output.effect;
    assert_eq!(effect.delay_center_tap, 0x7D);
    assert_eq!(effect.delay_left_tap, 0x10);
    assert_eq!(effect.delay_right_tap, 0x7D);

    assert_eq!(
        converted
            .diagnostics
            .iter()
            .map(|d| d.issue)
            .collect::<Vec<_>>(),
        vec![
            Issue::DelayTap {
                tap: DelayTap::Center,
                msb: 0,
                lsb: 0x7E,
            },
            Issue::DelayTap {
                tap: DelayTap::Left,
                msb: 1,
                lsb: 0x10,
            },
        ]
    );
}

#[test]
fn test_aftertouch_bend_last_writer_wins() {
    let mut src = Patch990::default();
    src.tones[0].control2[0] = ControlRoute::new(0, 38);
    src.tones[3].control2[1] = ControlRoute::new(0, 26);

    let converted = jdtools::convert_patch(&src);
    assert!(converted.is_exact());
    assert_eq!(converted.output.common.aftertouch_bend, 1);
    assert_eq!(converted.output.tones[0].wg.aftertouch_bend, 1);
    assert_eq!(converted.output.tones[1].wg.aftertouch_bend, 0);
    assert_eq!(converted.output.tones[3].wg.aftertouch_bend, 1);
}

#[test]
fn test_unroutable_bend_depth_keeps_code() {
    let mut src = Patch990::default();
    src.tones[0].control2[0] = ControlRoute::new(0, 44);
    src.tones[1].control2[0] = ControlRoute::new(0, 70);

    let converted = jdtools::convert_patch(&src);
    assert_eq!(converted.output.common.aftertouch_bend, 8);
    assert_eq!(converted.output.tones[1].wg.aftertouch_bend, 1);
    assert_eq!(
        converted.diagnostics,
        vec![Diagnostic::new(
            Scope::Tone(ToneId::B),
            Issue::AftertouchBendDepth { depth: 70 }
        )]
    );
}

#[test]
fn test_setup_conversion() {
    let mut src = Setup990::default();
    src.keys[0].name = name_from_str("Kick");
    src.keys[0].tone.tva.pan = 0;
    src.keys[1].tone.tva.pan = 127;
    src.keys[2].mute_group = 12;

    let converted = jdtools::convert_setup(&src);
    let setup = &converted.output;
    assert_eq!(setup.keys.len(), src.keys.len());
    assert_eq!(name_to_string(&setup.keys[0].name), "Kick");
    assert_eq!(setup.keys[0].pan, 0);
    assert_eq!(setup.keys[1].pan, 76);
    assert_eq!(setup.keys[2].mute_group, 0);

    assert_eq!(converted.diagnostics_of(DiagnosticKind::Notice).count(), 1);
    assert_eq!(converted.diagnostics_of(DiagnosticKind::Clamped).count(), 1);
}

#[test]
fn test_output_is_serializable() {
    let converted = jdtools::convert_patch(&layered_patch());
    let bytes = bincode::serialize(&converted.output).unwrap();
    let back: Patch800 = bincode::deserialize(&bytes).unwrap();
    assert_eq!(back, converted.output);

    let bytes = bincode::serialize(&converted.diagnostics).unwrap();
    let back: Vec<Diagnostic> = bincode::deserialize(&bytes).unwrap();
    assert_eq!(back, converted.diagnostics);
}
