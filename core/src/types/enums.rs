use dicom_dictionary_std::uids;
use std::fmt;

/// Length of the zero-filled block written ahead of the `DICM` magic code
pub const PREAMBLE_LENGTH: usize = 128;

const ZERO_PREAMBLE: [u8; PREAMBLE_LENGTH] = [0; PREAMBLE_LENGTH];

/// Transfer syntaxes a fixture can be encoded with
///
/// Each variant carries the byte order and VR encoding of the data set.
/// The file meta group is always explicit VR little endian, whatever the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub enum FixtureSyntax {
    ExplicitVRLittleEndian,
    ImplicitVRLittleEndian,
    ExplicitVRBigEndian,
    DeflatedExplicitVRLittleEndian,
}

impl FixtureSyntax {
    /// Every known syntax, active or not
    pub const ALL: [FixtureSyntax; 4] = [
        FixtureSyntax::ExplicitVRLittleEndian,
        FixtureSyntax::ImplicitVRLittleEndian,
        FixtureSyntax::ExplicitVRBigEndian,
        FixtureSyntax::DeflatedExplicitVRLittleEndian,
    ];

    /// Syntaxes generated when nothing else is requested
    ///
    /// Deflated explicit VR little endian is left out.
    pub fn default_active() -> Vec<FixtureSyntax> {
        Self::ALL
            .iter()
            .copied()
            .filter(|ts| !ts.is_deflated())
            .collect()
    }

    /// Transfer syntax UID written to the file meta group
    pub fn uid(&self) -> &'static str {
        match self {
            FixtureSyntax::ExplicitVRLittleEndian => uids::EXPLICIT_VR_LITTLE_ENDIAN,
            FixtureSyntax::ImplicitVRLittleEndian => uids::IMPLICIT_VR_LITTLE_ENDIAN,
            FixtureSyntax::ExplicitVRBigEndian => uids::EXPLICIT_VR_BIG_ENDIAN,
            FixtureSyntax::DeflatedExplicitVRLittleEndian => {
                uids::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN
            }
        }
    }

    /// Whether the data set is encoded in little endian
    pub fn is_little_endian(&self) -> bool {
        !matches!(self, FixtureSyntax::ExplicitVRBigEndian)
    }

    /// Whether value representations are left implicit
    pub fn is_implicit_vr(&self) -> bool {
        matches!(self, FixtureSyntax::ImplicitVRLittleEndian)
    }

    /// Whether the data set is deflate-compressed after encoding
    pub fn is_deflated(&self) -> bool {
        matches!(self, FixtureSyntax::DeflatedExplicitVRLittleEndian)
    }

    /// Canonical name, as used in fixture file names
    pub fn name(&self) -> &'static str {
        match self {
            FixtureSyntax::ExplicitVRLittleEndian => "ExplicitVRLittleEndian",
            FixtureSyntax::ImplicitVRLittleEndian => "ImplicitVRLittleEndian",
            FixtureSyntax::ExplicitVRBigEndian => "ExplicitVRBigEndian",
            FixtureSyntax::DeflatedExplicitVRLittleEndian => "DeflatedExplicitVRLittleEndian",
        }
    }

    /// Parses a syntax from its canonical name (exact match)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ts| ts.name() == name)
    }

    /// Looks up a syntax by UID
    ///
    /// Trailing NUL and space padding, as found in encoded UI values, is ignored.
    pub fn from_uid(uid: &str) -> Option<Self> {
        let uid = uid.trim_end_matches(['\0', ' ']);
        Self::ALL.iter().copied().find(|ts| ts.uid() == uid)
    }
}

impl fmt::Display for FixtureSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Presence of the 128-byte file preamble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum Preamble {
    Absent,
    Present,
}

impl Preamble {
    /// Both states, absent first
    pub const ALL: [Preamble; 2] = [Preamble::Absent, Preamble::Present];

    /// File name suffix for this state
    pub fn suffix(&self) -> &'static str {
        match self {
            Preamble::Absent => "NoPreamble",
            Preamble::Present => "Preamble",
        }
    }

    /// Bytes written before the magic code
    pub fn bytes(&self) -> &'static [u8] {
        match self {
            Preamble::Absent => &[],
            Preamble::Present => &ZERO_PREAMBLE,
        }
    }

    /// Parses a state from its file name suffix
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "NoPreamble" => Some(Preamble::Absent),
            "Preamble" => Some(Preamble::Present),
            _ => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Preamble::Present)
    }
}

impl fmt::Display for Preamble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}
