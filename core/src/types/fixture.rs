use crate::types::{FixtureSyntax, Preamble};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// File extension of generated fixtures
pub const FIXTURE_EXTENSION: &str = "dcm";

/// One fixture: a transfer syntax paired with a preamble state
///
/// The fixture name is `{SyntaxName}-{Preamble|NoPreamble}` and is both
/// the file stem and the PatientName written into the data set, so each
/// file identifies the combination that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct FixtureSpec {
    pub syntax: FixtureSyntax,
    pub preamble: Preamble,
}

impl FixtureSpec {
    pub fn new(syntax: FixtureSyntax, preamble: Preamble) -> Self {
        Self { syntax, preamble }
    }

    /// Fixture name, e.g. `ExplicitVRBigEndian-NoPreamble`
    pub fn name(&self) -> String {
        format!("{}-{}", self.syntax.name(), self.preamble.suffix())
    }

    /// File name, e.g. `ExplicitVRBigEndian-NoPreamble.dcm`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name(), FIXTURE_EXTENSION)
    }

    /// Recovers the fixture a file name was generated from
    ///
    /// Only the bare file name is accepted, not a path.
    /// Returns `None` for anything that is not a fixture file name.
    pub fn parse_file_name(file_name: &str) -> Option<Self> {
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| {
            Regex::new(r"^(?P<syntax>[A-Za-z]+)-(?P<preamble>NoPreamble|Preamble)\.dcm$")
                .expect("Failed to compile regex")
        });

        let caps = re.captures(file_name)?;
        let syntax = FixtureSyntax::from_name(&caps["syntax"])?;
        let preamble = Preamble::from_suffix(&caps["preamble"])?;
        Some(Self::new(syntax, preamble))
    }
}

impl fmt::Display for FixtureSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
