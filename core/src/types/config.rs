use crate::types::{FixtureSpec, FixtureSyntax, Preamble};
use std::path::PathBuf;

/// Configuration for a fixture generation run
///
/// # Example
///
/// ```
/// use dcm_fixtures::GeneratorConfig;
///
/// let config = GeneratorConfig::default()
///     .with_output_dir("tests/assets")
///     .include_deflated(true);
///
/// assert_eq!(config.fixtures().len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Directory fixtures are written into and verified from
    pub output_dir: PathBuf,

    /// Transfer syntaxes to generate, in generation order
    pub syntaxes: Vec<FixtureSyntax>,

    /// Preamble states to generate for every syntax
    pub preambles: Vec<Preamble>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            syntaxes: FixtureSyntax::default_active(),
            preambles: Preamble::ALL.to_vec(),
        }
    }
}

impl GeneratorConfig {
    /// Builder: Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Builder: Replace the set of transfer syntaxes
    pub fn with_syntaxes(mut self, syntaxes: Vec<FixtureSyntax>) -> Self {
        self.syntaxes = syntaxes;
        self
    }

    /// Builder: Replace the set of preamble states
    pub fn with_preambles(mut self, preambles: Vec<Preamble>) -> Self {
        self.preambles = preambles;
        self
    }

    /// Builder: Add or remove the deflated syntax
    ///
    /// Enabling appends it after the others; enabling twice has no extra effect.
    pub fn include_deflated(mut self, include: bool) -> Self {
        let deflated = FixtureSyntax::DeflatedExplicitVRLittleEndian;
        if include {
            if !self.syntaxes.contains(&deflated) {
                self.syntaxes.push(deflated);
            }
        } else {
            self.syntaxes.retain(|ts| *ts != deflated);
        }
        self
    }

    /// Enumerates fixtures: syntaxes in the outer loop, preambles in the inner one
    pub fn fixtures(&self) -> Vec<FixtureSpec> {
        self.syntaxes
            .iter()
            .flat_map(|ts| {
                self.preambles
                    .iter()
                    .map(move |preamble| FixtureSpec::new(*ts, *preamble))
            })
            .collect()
    }
}
