//! Conversion diagnostics.
//!
//! Every decision that loses or rewrites information produces one
//! [`Diagnostic`]. They are collected in order and returned next to the
//! converted record; a conversion never aborts.

use crate::control::ControlSource;
use jdtools_patch::ToneId;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// How a diagnostic affected the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// The value has no exact equivalent; the closest achievable value was written.
    Lossy,
    /// An out-of-range index was replaced with a safe default.
    Clamped,
    /// Informational; nothing was written for the affected data.
    Notice,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Lossy => write!(f, "lossy"),
            DiagnosticKind::Clamped => write!(f, "clamped"),
            DiagnosticKind::Notice => write!(f, "notice"),
        }
    }
}

/// Part of the record a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Patch,
    Tone(ToneId),
    Setup,
    /// Setup key, 0 = C2
    Key(usize),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Patch => write!(f, "patch"),
            Scope::Tone(tone) => write!(f, "tone {tone}"),
            Scope::Setup => write!(f, "setup"),
            Scope::Key(index) => write!(f, "setup key {index}"),
        }
    }
}

/// Section fed by the consolidated LFO depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LfoTarget {
    Filter,
    Amplifier,
}

impl fmt::Display for LfoTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LfoTarget::Filter => write!(f, "TVF"),
            LfoTarget::Amplifier => write!(f, "TVA"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TonePair {
    AB,
    CD,
}

impl fmt::Display for TonePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TonePair::AB => write!(f, "AB"),
            TonePair::CD => write!(f, "CD"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DelayTap {
    Center,
    Left,
    Right,
}

impl fmt::Display for DelayTap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelayTap::Center => write!(f, "center"),
            DelayTap::Left => write!(f, "left"),
            DelayTap::Right => write!(f, "right"),
        }
    }
}

/// What was lost or corrected, with the offending source value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Issue {
    // Tone control routing
    /// Negative depth through an LFO; written with inverted sign.
    NegativeLfoDepth {
        source: ControlSource,
        lfo: u8,
        depth: u8,
    },
    /// Aftertouch pitch depth with no matching JD-800 bend code.
    AftertouchBendDepth { depth: u8 },
    /// Routing the JD-800 cannot express.
    UnsupportedRouting {
        source: ControlSource,
        destination: u8,
        depth: u8,
    },

    // Tone
    LfoWaveform { lfo: u8, waveform: u8, substitute: u8 },
    InternalWaveform { waveform: u16, substitute: u8 },
    Fxm { color: u8, depth: u8 },
    SyncSlave { value: u8 },
    ToneDelay { time: u8 },
    PitchEnvDepth { depth: u8 },
    PitchEnvSustain { level: u8 },
    BothLfos { target: LfoTarget },
    TonePan { pan: u8 },
    PanKeyFollow { value: u8 },

    // Patch
    StructureType { pair: TonePair, structure: u8 },
    VelocityRange { value: u8 },
    ToneControlSource { slot: u8, source: u8 },
    PatchPan { pan: u8 },
    AnalogFeel { value: u8 },
    VoicePriority { value: u8 },
    PortamentoType { value: u8 },
    SoloSyncMaster { value: u8 },
    OctaveSwitch { value: u8 },
    DelayTap { tap: DelayTap, msb: u8, lsb: u8 },
    DelayMode { mode: u8 },

    // Setup
    SetupNameAndEffects,
    SetupLevel { level: u8 },
    SetupPan { pan: u8 },
    MuteGroup { group: u8 },
    EffectMode { mode: u8 },
}

impl Issue {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Issue::MuteGroup { .. } | Issue::EffectMode { .. } => DiagnosticKind::Clamped,
            Issue::SetupNameAndEffects => DiagnosticKind::Notice,
            _ => DiagnosticKind::Lossy,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Issue::NegativeLfoDepth { source, lfo, depth } => write!(
                f,
                "{source} to pitch via LFO{lfo} has negative depth {depth}, sign inverted"
            ),
            Issue::AftertouchBendDepth { depth } => write!(
                f,
                "aftertouch to pitch depth {depth} has no aftertouch bend equivalent"
            ),
            Issue::UnsupportedRouting {
                source,
                destination,
                depth,
            } => write!(
                f,
                "unsupported mod matrix routing: source = {source}, destination = {destination}, depth = {depth}"
            ),
            Issue::LfoWaveform {
                lfo,
                waveform,
                substitute,
            } => write!(
                f,
                "LFO{lfo} waveform {waveform} is unsupported, using {substitute}"
            ),
            Issue::InternalWaveform {
                waveform,
                substitute,
            } => write!(
                f,
                "internal waveform {waveform} is unsupported, using {substitute}"
            ),
            Issue::Fxm { color, depth } => {
                write!(f, "FXM is enabled (color {color}, depth {depth})")
            }
            Issue::SyncSlave { value } => write!(f, "sync slave switch is enabled: {value}"),
            Issue::ToneDelay { time } => write!(f, "tone delay is enabled: {time}"),
            Issue::PitchEnvDepth { depth } => write!(f, "pitch envelope depth != 24: {depth}"),
            Issue::PitchEnvSustain { level } => {
                write!(f, "pitch envelope sustain level != 50: {level}")
            }
            Issue::BothLfos { target } => {
                write!(f, "both LFOs control the {target}, LFO1 dropped")
            }
            Issue::TonePan { pan } => write!(f, "pan position != 50: {pan}"),
            Issue::PanKeyFollow { value } => write!(f, "pan key follow is used: {value}"),
            Issue::StructureType { pair, structure } => write!(
                f,
                "tones {pair} have unsupported structure type: {structure}"
            ),
            Issue::VelocityRange { value } => write!(f, "velocity range is enabled: {value}"),
            Issue::ToneControlSource { slot, source } => write!(
                f,
                "tone control source {slot} is neither mod wheel nor aftertouch: {source}"
            ),
            Issue::PatchPan { pan } => write!(f, "pan != 50: {pan}"),
            Issue::AnalogFeel { value } => write!(f, "analog feel != 0: {value}"),
            Issue::VoicePriority { value } => write!(f, "voice priority != 0: {value}"),
            Issue::PortamentoType { value } => write!(f, "portamento type != 1: {value}"),
            Issue::SoloSyncMaster { value } => write!(f, "solo sync master != 0: {value}"),
            Issue::OctaveSwitch { value } => write!(f, "octave switch != 1: {value}"),
            Issue::DelayTap { tap, msb, lsb } => {
                write!(f, "unsupported delay {tap} tap: {msb}/{lsb}")
            }
            Issue::DelayMode { mode } => write!(f, "delay effect mode != 0: {mode}"),
            Issue::SetupNameAndEffects => {
                write!(f, "setup name and effect settings cannot be converted")
            }
            Issue::SetupLevel { level } => write!(f, "level != 80: {level}"),
            Issue::SetupPan { pan } => write!(f, "pan != 50: {pan}"),
            Issue::MuteGroup { group } => {
                write!(f, "unsupported mute group {group}, using 0")
            }
            Issue::EffectMode { mode } => {
                write!(f, "unsupported effect mode {mode}, using 0")
            }
        }
    }
}

/// A single conversion diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    pub scope: Scope,
    pub issue: Issue,
}

impl Diagnostic {
    pub fn new(scope: Scope, issue: Issue) -> Self {
        Self { scope, issue }
    }

    #[inline]
    pub fn kind(&self) -> DiagnosticKind {
        self.issue.kind()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind(), self.scope, self.issue)
    }
}

/// Ordered collector threaded through one conversion.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    entries: Vec<Diagnostic>,
    trace: bool,
}

impl Diagnostics {
    pub(crate) fn new(trace: bool) -> Self {
        Self {
            entries: Vec::new(),
            trace,
        }
    }

    pub(crate) fn push(&mut self, scope: Scope, issue: Issue) {
        let diagnostic = Diagnostic::new(scope, issue);
        if self.trace {
            warn!("{}", diagnostic);
        }
        self.entries.push(diagnostic);
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
