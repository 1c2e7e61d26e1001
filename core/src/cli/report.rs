use crate::api::{GeneratedFixture, Verification};
use std::fmt;

/// Text report for a generation run
pub struct GenerationReport<'a> {
    generated: &'a [GeneratedFixture],
}

impl<'a> GenerationReport<'a> {
    pub fn new(generated: &'a [GeneratedFixture]) -> Self {
        Self { generated }
    }
}

impl<'a> fmt::Display for GenerationReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated Fixtures")?;
        writeln!(f, "==================")?;
        writeln!(f)?;

        for fixture in self.generated {
            writeln!(
                f,
                "{:<48} {:>6} bytes  {}",
                fixture.spec.file_name(),
                fixture.size,
                fixture.spec.syntax.uid()
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Total: {}", self.generated.len())?;

        Ok(())
    }
}

/// Text report for a verification run
pub struct VerificationReport<'a> {
    verifications: &'a [Verification],
}

impl<'a> VerificationReport<'a> {
    pub fn new(verifications: &'a [Verification]) -> Self {
        Self { verifications }
    }

    /// Number of fixtures that failed verification
    pub fn failures(&self) -> usize {
        self.verifications.iter().filter(|v| !v.is_ok()).count()
    }
}

impl<'a> fmt::Display for VerificationReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fixture Verification")?;
        writeln!(f, "====================")?;
        writeln!(f)?;

        for verification in self.verifications {
            let status = if verification.is_ok() { "ok" } else { "FAILED" };
            writeln!(f, "{:<48} {}", verification.spec.file_name(), status)?;
            for mismatch in &verification.mismatches {
                writeln!(f, "  - {}", mismatch)?;
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "Passed: {}/{}",
            self.verifications.len() - self.failures(),
            self.verifications.len()
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::Mismatch;
    use crate::types::{FixtureSpec, FixtureSyntax, Preamble};
    use std::path::PathBuf;

    #[test]
    fn test_generation_report_format() {
        let spec = FixtureSpec::new(FixtureSyntax::ExplicitVRBigEndian, Preamble::Present);
        let generated = vec![GeneratedFixture {
            spec,
            path: PathBuf::from("ExplicitVRBigEndian-Preamble.dcm"),
            size: 320,
        }];

        let output = GenerationReport::new(&generated).to_string();

        assert!(output.contains("Generated Fixtures"));
        assert!(output.contains("ExplicitVRBigEndian-Preamble.dcm"));
        assert!(output.contains("320 bytes"));
        assert!(output.contains("1.2.840.10008.1.2.2"));
        assert!(output.contains("Total: 1"));
    }

    #[test]
    fn test_verification_report_format() {
        let ok = FixtureSpec::new(FixtureSyntax::ExplicitVRLittleEndian, Preamble::Absent);
        let missing = FixtureSpec::new(FixtureSyntax::ImplicitVRLittleEndian, Preamble::Absent);
        let verifications = vec![
            Verification {
                spec: ok,
                path: PathBuf::from(ok.file_name()),
                mismatches: vec![],
            },
            Verification {
                spec: missing,
                path: PathBuf::from(missing.file_name()),
                mismatches: vec![Mismatch::Missing],
            },
        ];

        let report = VerificationReport::new(&verifications);
        let output = report.to_string();

        assert_eq!(report.failures(), 1);
        assert!(output.contains("ImplicitVRLittleEndian-NoPreamble.dcm"));
        assert!(output.contains("FAILED"));
        assert!(output.contains("  - file is missing"));
        assert!(output.contains("Passed: 1/2"));
    }
}
