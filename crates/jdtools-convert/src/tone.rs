//! Tone conversion.

use crate::control::{resolve, ControlSource};
use crate::diagnostic::{Diagnostics, Issue, LfoTarget, Scope};
use crate::waveform::{map_internal_waveform, map_lfo_waveform, WaveformMatch};
use jdtools_patch::jd800::INTERNAL_WAVEFORMS;
use jdtools_patch::jd990::{NEUTRAL_PAN_KEY_FOLLOW, NEUTRAL_PITCH_ENV_DEPTH};
use jdtools_patch::{
    Amplifier800, Filter800, Lfo800, Lfo990, PitchEnvelope800, Tone800, Tone990,
    WaveGenerator800, WaveGenerator990, CENTER,
};

/// Whether a tone belongs to a patch or to a special setup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToneContext {
    Patch,
    Setup,
}

/// Settings shared by all tones of one patch or setup.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ToneControls {
    pub sources: [ControlSource; 2],
    pub context: ToneContext,
}

/// Converts one tone.
///
/// `aftertouch_bend` is the patch-wide bend code; matrix entries routing
/// aftertouch to pitch overwrite it.
pub(crate) fn convert_tone(
    src: &Tone990,
    controls: &ToneControls,
    scope: Scope,
    aftertouch_bend: &mut u8,
    diagnostics: &mut Diagnostics,
) -> Tone800 {
    let mut tone = Tone800 {
        common: src.common,
        lfo1: convert_lfo(&src.lfo1, 1, scope, diagnostics),
        lfo2: convert_lfo(&src.lfo2, 2, scope, diagnostics),
        wg: convert_wave_generator(src, scope, diagnostics),
        pitch_env: convert_pitch_envelope(src, scope, diagnostics),
        tvf: convert_filter(src, scope, diagnostics),
        tvf_env: src.tvf_env,
        tva: convert_amplifier(src, controls.context, scope, diagnostics),
        tva_env: src.tva_env,
    };

    let [source1, source2] = controls.sources;
    let routes = src
        .control1
        .iter()
        .map(|route| (source1, route))
        .chain(src.control2.iter().map(|route| (source2, route)));

    for (source, route) in routes {
        let resolution = resolve(source, route.destination.into(), route.depth);
        if let Some(issue) = resolution.issue {
            diagnostics.push(scope, issue);
        }
        if let Some(update) = resolution.update {
            update.apply(&mut tone, aftertouch_bend);
        }
    }

    tone
}

fn convert_lfo(lfo: &Lfo990, number: u8, scope: Scope, diagnostics: &mut Diagnostics) -> Lfo800 {
    let waveform = map_lfo_waveform(lfo.waveform);
    if let WaveformMatch::Substitute(substitute) = waveform {
        diagnostics.push(
            scope,
            Issue::LfoWaveform {
                lfo: number,
                waveform: lfo.waveform,
                substitute,
            },
        );
    }

    Lfo800 {
        rate: lfo.rate,
        delay: lfo.delay,
        fade: lfo.fade,
        waveform: waveform.value(),
        offset: lfo.offset,
        key_trigger: lfo.key_trigger,
    }
}

fn convert_wave_generator(
    src: &Tone990,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> WaveGenerator800 {
    let wg = &src.wg;
    let (waveform_msb, waveform_lsb) = select_waveform(wg, scope, diagnostics);

    if wg.fxm_color != 0 || wg.fxm_depth != 0 {
        diagnostics.push(
            scope,
            Issue::Fxm {
                color: wg.fxm_color,
                depth: wg.fxm_depth,
            },
        );
    }
    if wg.sync_slave != 0 {
        diagnostics.push(scope, Issue::SyncSlave { value: wg.sync_slave });
    }
    if wg.tone_delay_time != 0 {
        diagnostics.push(
            scope,
            Issue::ToneDelay {
                time: wg.tone_delay_time,
            },
        );
    }
    if wg.env_depth != NEUTRAL_PITCH_ENV_DEPTH && !src.pitch_env.is_flat() {
        diagnostics.push(
            scope,
            Issue::PitchEnvDepth {
                depth: wg.env_depth,
            },
        );
    }

    // Sensitivities start at zero and are filled in by tone control resolution
    WaveGenerator800 {
        wave_source: wg.wave_source,
        waveform_msb,
        waveform_lsb,
        pitch_coarse: wg.pitch_coarse,
        pitch_fine: wg.pitch_fine,
        pitch_random: wg.pitch_random,
        key_follow: wg.key_follow,
        bender_switch: wg.bender_switch,
        aftertouch_bend: 0,
        lfo1_sens: src.lfo1.depth_pitch,
        lfo2_sens: src.lfo2.depth_pitch,
        lever_sens: 0,
        aftertouch_mod_sens: 0,
    }
}

/// Picks the JD-800 waveform for the tone's wave generator.
fn select_waveform(wg: &WaveGenerator990, scope: Scope, diagnostics: &mut Diagnostics) -> (u8, u8) {
    if wg.wave_source != 0 {
        // Waveform cards keep their numbering
        return (wg.waveform_msb, wg.waveform_lsb);
    }

    // An internal waveform with MSB > 1 exists on neither machine. It shows up
    // in at least one published patch file and is treated as MSB 0 without a report.
    let msb = if wg.waveform_msb > 1 { 0 } else { wg.waveform_msb };
    if msb == 0 && wg.waveform_lsb < INTERNAL_WAVEFORMS {
        return (0, wg.waveform_lsb);
    }

    let waveform = u16::from(msb) * 128 + u16::from(wg.waveform_lsb);
    let substitute = map_internal_waveform(waveform).value();
    diagnostics.push(
        scope,
        Issue::InternalWaveform {
            waveform,
            substitute,
        },
    );
    (0, substitute)
}

fn convert_pitch_envelope(
    src: &Tone990,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> PitchEnvelope800 {
    let env = &src.pitch_env;
    if env.sustain_level != CENTER {
        diagnostics.push(
            scope,
            Issue::PitchEnvSustain {
                level: env.sustain_level,
            },
        );
    }

    PitchEnvelope800 {
        velo: env.velo,
        time_velo: env.time_velo,
        time_kf: env.time_kf,
        level0: env.level0,
        time1: env.time1,
        level1: env.level1,
        time2: env.time2,
        time3: env.time3,
        level2: env.level3,
    }
}

/// Collapses the per-LFO depths of one section into LFO select + depth.
///
/// LFO2 wins whenever it is in use.
fn select_lfo(
    lfo1_depth: u8,
    lfo2_depth: u8,
    target: LfoTarget,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> (u8, u8) {
    if lfo2_depth == CENTER {
        return (0, lfo1_depth);
    }
    if lfo1_depth != CENTER {
        diagnostics.push(scope, Issue::BothLfos { target });
    }
    (1, lfo2_depth)
}

fn convert_filter(src: &Tone990, scope: Scope, diagnostics: &mut Diagnostics) -> Filter800 {
    let (lfo_select, lfo_depth) = select_lfo(
        src.lfo1.depth_tvf,
        src.lfo2.depth_tvf,
        LfoTarget::Filter,
        scope,
        diagnostics,
    );

    Filter800 {
        filter_mode: src.tvf.filter_mode,
        cutoff_freq: src.tvf.cutoff_freq,
        resonance: src.tvf.resonance,
        key_follow: src.tvf.key_follow,
        aftertouch_sens: 0,
        lfo_select,
        lfo_depth,
        env_depth: src.tvf.env_depth,
    }
}

fn convert_amplifier(
    src: &Tone990,
    context: ToneContext,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> Amplifier800 {
    let (lfo_select, lfo_depth) = select_lfo(
        src.lfo1.depth_tva,
        src.lfo2.depth_tva,
        LfoTarget::Amplifier,
        scope,
        diagnostics,
    );

    // Setup keys carry their own pan; patch tones have none on the JD-800
    if context == ToneContext::Patch && src.tva.pan != CENTER {
        diagnostics.push(scope, Issue::TonePan { pan: src.tva.pan });
    }
    if src.tva.pan_key_follow != NEUTRAL_PAN_KEY_FOLLOW {
        diagnostics.push(
            scope,
            Issue::PanKeyFollow {
                value: src.tva.pan_key_follow,
            },
        );
    }

    Amplifier800 {
        bias_direction: src.tva.bias_direction,
        bias_point: src.tva.bias_point,
        bias_level: src.tva.bias_level,
        level: src.tva.level,
        aftertouch_sens: 0,
        lfo_select,
        lfo_depth,
    }
}
