//! Conversion entry points.

use crate::diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::{patch, setup};
use jdtools_patch::{name_to_string, Patch800, Patch990, Setup800, Setup990};
use tracing::debug;

/// Converter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Forward every diagnostic to `tracing` at warn level as it is produced.
    pub log_diagnostics: bool,
}

/// A converted record and everything that was lost on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted<T> {
    pub output: T,
    /// In the order the decisions were made
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Converted<T> {
    /// True when nothing had to be approximated or corrected.
    pub fn is_exact(&self) -> bool {
        self.diagnostics
            .iter()
            .all(|d| d.kind() == DiagnosticKind::Notice)
    }

    /// Diagnostics of one kind.
    pub fn diagnostics_of(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.kind() == kind)
    }

    pub fn into_parts(self) -> (T, Vec<Diagnostic>) {
        (self.output, self.diagnostics)
    }
}

/// JD-990 to JD-800 converter.
///
/// Holds only configuration; every call is independent.
///
/// # Example
/// ```ignore
/// let converter = Converter::builder().log_diagnostics(true).build();
/// let converted = converter.convert_patch(&patch990);
/// for diagnostic in &converted.diagnostics {
///     eprintln!("{diagnostic}");
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::default()
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Converts a four-tone patch.
    pub fn convert_patch(&self, src: &Patch990) -> Converted<Patch800> {
        let mut diagnostics = Diagnostics::new(self.config.log_diagnostics);
        let output = patch::convert_patch(src, &mut diagnostics);

        debug!(
            "Converted patch \"{}\" with {} diagnostics",
            name_to_string(&src.common.name),
            diagnostics.len()
        );

        Converted {
            output,
            diagnostics: diagnostics.into_vec(),
        }
    }

    /// Converts a special setup, one tone per key.
    pub fn convert_setup(&self, src: &Setup990) -> Converted<Setup800> {
        let mut diagnostics = Diagnostics::new(self.config.log_diagnostics);
        let output = setup::convert_setup(src, &mut diagnostics);

        debug!(
            "Converted special setup ({} keys) with {} diagnostics",
            output.keys.len(),
            diagnostics.len()
        );

        Converted {
            output,
            diagnostics: diagnostics.into_vec(),
        }
    }
}

/// Builder for [`Converter`].
#[derive(Debug, Clone, Default)]
pub struct ConverterBuilder {
    config: ConvertConfig,
}

impl ConverterBuilder {
    /// Forward diagnostics to `tracing` as they are produced.
    pub fn log_diagnostics(mut self, enabled: bool) -> Self {
        self.config.log_diagnostics = enabled;
        self
    }

    pub fn build(self) -> Converter {
        Converter::new(self.config)
    }
}

/// Converts a patch with the default configuration.
pub fn convert_patch(src: &Patch990) -> Converted<Patch800> {
    Converter::default().convert_patch(src)
}

/// Converts a special setup with the default configuration.
pub fn convert_setup(src: &Setup990) -> Converted<Setup800> {
    Converter::default().convert_setup(src)
}
