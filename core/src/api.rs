use crate::error::Result;
use crate::extraction::{inspect_fixture, Mismatch};
use crate::types::{FixtureSpec, GeneratorConfig};
use crate::writer::write_fixture_file;
use log::{debug, info, warn};
use std::fs;
use std::path::PathBuf;

/// Main entry point for writing and checking fixture sets
///
/// # Example
///
/// ```no_run
/// use dcm_fixtures::{FixtureGenerator, GeneratorConfig};
///
/// let generator = FixtureGenerator::new(GeneratorConfig::default().with_output_dir("assets"));
///
/// let written = generator.generate().unwrap();
/// assert_eq!(written.len(), 6);
///
/// let checks = generator.verify().unwrap();
/// assert!(checks.iter().all(|c| c.is_ok()));
/// ```
pub struct FixtureGenerator {
    config: GeneratorConfig,
}

impl FixtureGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Writes every configured fixture into the output directory
    ///
    /// Fixtures are written one after another, in configuration order.
    /// The output directory is created if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns the first I/O or encoding error; fixtures written before it stay on disk.
    pub fn generate(&self) -> Result<Vec<GeneratedFixture>> {
        let dir = &self.config.output_dir;
        if !dir.is_dir() {
            debug!("Creating output directory {}", dir.display());
            fs::create_dir_all(dir)?;
        }

        let mut generated = Vec::new();
        for spec in self.config.fixtures() {
            let path = write_fixture_file(dir, &spec)?;
            let size = fs::metadata(&path)?.len();
            info!("Wrote {} ({} bytes)", path.display(), size);
            generated.push(GeneratedFixture { spec, path, size });
        }

        Ok(generated)
    }

    /// Checks every configured fixture in the output directory against its name
    ///
    /// Missing or unparsable files are reported as mismatches rather than errors.
    pub fn verify(&self) -> Result<Vec<Verification>> {
        let dir = &self.config.output_dir;

        let verifications = self
            .config
            .fixtures()
            .into_iter()
            .map(|spec| {
                let path = dir.join(spec.file_name());
                let mismatches = if !path.is_file() {
                    vec![Mismatch::Missing]
                } else {
                    match inspect_fixture(&path) {
                        Ok(report) => report.mismatches(&spec),
                        Err(e) => vec![Mismatch::Unreadable {
                            reason: e.to_string(),
                        }],
                    }
                };

                if mismatches.is_empty() {
                    debug!("Verified {}", path.display());
                } else {
                    for mismatch in &mismatches {
                        warn!("{}: {}", path.display(), mismatch);
                    }
                }

                Verification {
                    spec,
                    path,
                    mismatches,
                }
            })
            .collect();

        Ok(verifications)
    }
}

/// A fixture written to disk
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct GeneratedFixture {
    pub spec: FixtureSpec,
    pub path: PathBuf,

    /// File size in bytes
    pub size: u64,
}

/// Outcome of checking one fixture file
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Verification {
    pub spec: FixtureSpec,
    pub path: PathBuf,
    pub mismatches: Vec<Mismatch>,
}

impl Verification {
    /// Whether the file matches its name
    pub fn is_ok(&self) -> bool {
        self.mismatches.is_empty()
    }
}
