//! Tone control resolution.
//!
//! The JD-990 routes its two tone control sources through a small
//! modulation matrix (four destinations each). The JD-800 instead has fixed
//! sensitivities: bender lever and aftertouch into the pitch LFOs, aftertouch
//! into TVF and TVA, and a patch-wide aftertouch pitch bend amount.
//! [`resolve`] maps one matrix entry onto those sensitivities.

use crate::diagnostic::Issue;
use jdtools_patch::{Tone800, CENTER};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A JD-990 tone control source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlSource {
    ModWheel,
    Aftertouch,
    /// Any other controller; the JD-800 has no routing for these.
    Other(u8),
}

impl From<u8> for ControlSource {
    fn from(value: u8) -> Self {
        match value {
            0 => ControlSource::ModWheel,
            1 => ControlSource::Aftertouch,
            other => ControlSource::Other(other),
        }
    }
}

impl fmt::Display for ControlSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlSource::ModWheel => write!(f, "mod wheel"),
            ControlSource::Aftertouch => write!(f, "aftertouch"),
            ControlSource::Other(id) => write!(f, "controller {id}"),
        }
    }
}

/// A JD-990 modulation matrix destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlDestination {
    Pitch,
    Cutoff,
    Resonance,
    Level,
    PitchLfo1,
    PitchLfo2,
    CutoffLfo1,
    CutoffLfo2,
    LevelLfo1,
    LevelLfo2,
    Lfo1Rate,
    Lfo2Rate,
    Unknown(u8),
}

impl ControlDestination {
    /// Raw destination number as stored in the patch.
    pub fn id(self) -> u8 {
        match self {
            ControlDestination::Pitch => 0,
            ControlDestination::Cutoff => 1,
            ControlDestination::Resonance => 2,
            ControlDestination::Level => 3,
            ControlDestination::PitchLfo1 => 4,
            ControlDestination::PitchLfo2 => 5,
            ControlDestination::CutoffLfo1 => 6,
            ControlDestination::CutoffLfo2 => 7,
            ControlDestination::LevelLfo1 => 8,
            ControlDestination::LevelLfo2 => 9,
            ControlDestination::Lfo1Rate => 10,
            ControlDestination::Lfo2Rate => 11,
            ControlDestination::Unknown(id) => id,
        }
    }
}

impl From<u8> for ControlDestination {
    fn from(value: u8) -> Self {
        match value {
            0 => ControlDestination::Pitch,
            1 => ControlDestination::Cutoff,
            2 => ControlDestination::Resonance,
            3 => ControlDestination::Level,
            4 => ControlDestination::PitchLfo1,
            5 => ControlDestination::PitchLfo2,
            6 => ControlDestination::CutoffLfo1,
            7 => ControlDestination::CutoffLfo2,
            8 => ControlDestination::LevelLfo1,
            9 => ControlDestination::LevelLfo2,
            10 => ControlDestination::Lfo1Rate,
            11 => ControlDestination::Lfo2Rate,
            other => ControlDestination::Unknown(other),
        }
    }
}

/// A write to one of the JD-800's hardwired sensitivities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensitivityUpdate {
    /// WG bender lever sensitivity
    LeverSens(u8),
    /// WG aftertouch modulation sensitivity
    AftertouchModSens(u8),
    /// Enables aftertouch bend on the tone. `code` is the patch-wide bend
    /// amount, `None` when the depth had no equivalent.
    AftertouchBend { code: Option<u8> },
    /// TVF aftertouch sensitivity
    FilterAftertouchSens(u8),
    /// TVA aftertouch sensitivity
    AmpAftertouchSens(u8),
}

impl SensitivityUpdate {
    /// Writes the update into `tone` and, for pitch bend, the patch-wide bend code.
    pub fn apply(self, tone: &mut Tone800, aftertouch_bend: &mut u8) {
        match self {
            SensitivityUpdate::LeverSens(sens) => tone.wg.lever_sens = sens,
            SensitivityUpdate::AftertouchModSens(sens) => tone.wg.aftertouch_mod_sens = sens,
            SensitivityUpdate::AftertouchBend { code } => {
                tone.wg.aftertouch_bend = 1;
                if let Some(code) = code {
                    *aftertouch_bend = code;
                }
            }
            SensitivityUpdate::FilterAftertouchSens(sens) => tone.tvf.aftertouch_sens = sens,
            SensitivityUpdate::AmpAftertouchSens(sens) => tone.tva.aftertouch_sens = sens,
        }
    }
}

/// Outcome of resolving one matrix entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolution {
    pub update: Option<SensitivityUpdate>,
    pub issue: Option<Issue>,
}

impl Resolution {
    fn update(update: SensitivityUpdate) -> Self {
        Self {
            update: Some(update),
            issue: None,
        }
    }

    fn unsupported(issue: Issue) -> Self {
        Self {
            update: None,
            issue: Some(issue),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PitchLfo {
    Lfo1,
    Lfo2,
}

/// Resolves one (source, destination, depth) matrix entry.
///
/// Depth is centered on 50. The entry either updates one sensitivity, is
/// reported as unsupported, or (at depth 50) does nothing.
pub fn resolve(source: ControlSource, destination: ControlDestination, depth: u8) -> Resolution {
    use ControlDestination as Dest;
    use ControlSource as Src;

    match (source, destination) {
        (Src::ModWheel, Dest::PitchLfo1) => {
            via_pitch_lfo(source, PitchLfo::Lfo1, depth, SensitivityUpdate::LeverSens)
        }
        (Src::ModWheel, Dest::PitchLfo2) => {
            via_pitch_lfo(source, PitchLfo::Lfo2, depth, SensitivityUpdate::LeverSens)
        }
        (Src::Aftertouch, Dest::PitchLfo1) => via_pitch_lfo(
            source,
            PitchLfo::Lfo1,
            depth,
            SensitivityUpdate::AftertouchModSens,
        ),
        (Src::Aftertouch, Dest::PitchLfo2) => via_pitch_lfo(
            source,
            PitchLfo::Lfo2,
            depth,
            SensitivityUpdate::AftertouchModSens,
        ),
        (Src::Aftertouch, Dest::Pitch) if depth != CENTER => {
            let code = aftertouch_bend_code(depth);
            Resolution {
                update: Some(SensitivityUpdate::AftertouchBend { code }),
                issue: code
                    .is_none()
                    .then_some(Issue::AftertouchBendDepth { depth }),
            }
        }
        (Src::Aftertouch, Dest::Cutoff) => {
            Resolution::update(SensitivityUpdate::FilterAftertouchSens(depth))
        }
        (Src::Aftertouch, Dest::Level) => {
            Resolution::update(SensitivityUpdate::AmpAftertouchSens(depth))
        }
        _ if depth != CENTER => Resolution::unsupported(Issue::UnsupportedRouting {
            source,
            destination: destination.id(),
            depth,
        }),
        _ => Resolution::default(),
    }
}

/// Pitch modulation through an LFO.
///
/// The JD-800 sensitivity is a single signed value, so a negative depth is
/// folded onto the positive side. LFO2 is wired with the opposite sign.
fn via_pitch_lfo(
    source: ControlSource,
    lfo: PitchLfo,
    depth: u8,
    write: fn(u8) -> SensitivityUpdate,
) -> Resolution {
    let mut issue = None;
    let mut depth = depth;
    if depth < CENTER {
        issue = Some(Issue::NegativeLfoDepth {
            source,
            lfo: match lfo {
                PitchLfo::Lfo1 => 1,
                PitchLfo::Lfo2 => 2,
            },
            depth,
        });
        depth = 100 - depth;
    }

    let offset = i16::from(depth) - i16::from(CENTER);
    let sens = match lfo {
        PitchLfo::Lfo1 => i16::from(CENTER) + offset,
        PitchLfo::Lfo2 => i16::from(CENTER) - offset,
    };

    Resolution {
        update: Some(write(sens.clamp(0, 100) as u8)),
        issue,
    }
}

/// JD-800 aftertouch bend code for a JD-990 aftertouch pitch depth.
///
/// The JD-800 offers -36, -24 and -12..=+12 semitones; the JD-990 depth
/// encodes semitones around 50.
pub fn aftertouch_bend_code(depth: u8) -> Option<u8> {
    match depth {
        14 => Some(0),
        26 => Some(1),
        38..=62 => Some(depth - 36),
        _ => None,
    }
}
