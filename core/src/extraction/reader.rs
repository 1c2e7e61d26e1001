use crate::dataset::build_meta;
use crate::error::{FixtureError, Result};
use crate::types::{FixtureSpec, FixtureSyntax, Preamble, PREAMBLE_LENGTH};
use crate::writer::DICM_MAGIC;
use dicom_object::file::ReadPreamble;
use dicom_object::{FileMetaTable, OpenFileOptions};
use flate2::read::DeflateDecoder;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use super::tags::{get_string_value, FILE_META_INFORMATION_GROUP_LENGTH, PATIENT_NAME};

/// What a fixture file says about itself once parsed
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct FixtureReport {
    /// Transfer syntax UID from the file meta group, padding removed
    pub transfer_syntax_uid: String,

    /// Known syntax matching the UID, if any
    pub syntax: Option<FixtureSyntax>,

    /// Whether the stream started with a 128-byte preamble
    pub preamble: Preamble,

    /// PatientName from the data set
    pub patient_name: Option<String>,
}

impl FixtureReport {
    /// Lists every way this report disagrees with the fixture it should be
    ///
    /// An empty list means the file matches.
    pub fn mismatches(&self, spec: &FixtureSpec) -> Vec<Mismatch> {
        let mut mismatches = Vec::new();

        if self.transfer_syntax_uid != spec.syntax.uid() {
            mismatches.push(Mismatch::TransferSyntax {
                expected: spec.syntax.uid().to_string(),
                actual: self.transfer_syntax_uid.clone(),
            });
        }

        if self.preamble != spec.preamble {
            mismatches.push(Mismatch::Preamble {
                expected: spec.preamble,
                actual: self.preamble,
            });
        }

        if self.patient_name.as_deref() != Some(spec.name().as_str()) {
            mismatches.push(Mismatch::PatientName {
                expected: spec.name(),
                actual: self.patient_name.clone(),
            });
        }

        mismatches
    }
}

/// A single disagreement between a fixture file and its name
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Mismatch {
    /// File is absent from the directory
    Missing,

    /// File could not be parsed
    Unreadable { reason: String },

    TransferSyntax { expected: String, actual: String },

    Preamble { expected: Preamble, actual: Preamble },

    PatientName {
        expected: String,
        actual: Option<String>,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Missing => write!(f, "file is missing"),
            Mismatch::Unreadable { reason } => write!(f, "unreadable: {}", reason),
            Mismatch::TransferSyntax { expected, actual } => {
                write!(f, "transfer syntax {} (expected {})", actual, expected)
            }
            Mismatch::Preamble { expected, actual } => {
                write!(f, "preamble {} (expected {})", actual, expected)
            }
            Mismatch::PatientName { expected, actual } => write!(
                f,
                "patient name {} (expected {})",
                actual.as_deref().unwrap_or("<none>"),
                expected
            ),
        }
    }
}

/// Detects whether a stream starts with a preamble
///
/// A preamble is present when `DICM` sits right after the first 128 bytes.
/// It is absent when the stream opens directly with the little endian
/// (0002,0000) group length element, with no magic code.
///
/// # Errors
///
/// Returns [`FixtureError::NotDicom`] if neither layout matches.
pub fn detect_preamble(head: &[u8]) -> Result<Preamble> {
    let magic_end = PREAMBLE_LENGTH + DICM_MAGIC.len();
    if head.len() >= magic_end && &head[PREAMBLE_LENGTH..magic_end] == DICM_MAGIC {
        Ok(Preamble::Present)
    } else if head.starts_with(&meta_group_header()) {
        Ok(Preamble::Absent)
    } else {
        Err(FixtureError::NotDicom(
            "neither DICM at offset 128 nor a file meta group at offset 0".to_string(),
        ))
    }
}

/// Tag bytes of (0002,0000) as they open an explicit VR little endian meta group
fn meta_group_header() -> [u8; 4] {
    let [g0, g1] = FILE_META_INFORMATION_GROUP_LENGTH.group().to_le_bytes();
    let [e0, e1] = FILE_META_INFORMATION_GROUP_LENGTH.element().to_le_bytes();
    [g0, g1, e0, e1]
}

/// Parses a fixture file and reports its encoding
pub fn inspect_fixture<P: AsRef<Path>>(path: P) -> Result<FixtureReport> {
    let input = BufReader::new(File::open(path.as_ref())?);
    inspect_fixture_stream(input)
}

/// Parses a fixture from any byte source and reports its encoding
///
/// Deflated data sets are inflated here and parsed as explicit VR little
/// endian, so no deflate support is needed from the transfer syntax registry.
pub fn inspect_fixture_stream<R: Read>(mut input: R) -> Result<FixtureReport> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;

    let preamble = detect_preamble(&bytes)?;

    // dicom-object expects the stream to open with the magic code
    let stream = match preamble {
        Preamble::Present => bytes.split_off(PREAMBLE_LENGTH),
        Preamble::Absent => {
            let mut stream = DICM_MAGIC.to_vec();
            stream.extend(bytes);
            stream
        }
    };
    let mut reader = Cursor::new(stream);

    let meta = FileMetaTable::from_reader(&mut reader)
        .map_err(|e| FixtureError::DicomError(format!("{}", e)))?;
    let transfer_syntax_uid = meta.transfer_syntax.trim_end_matches(['\0', ' ']).to_string();
    let syntax = FixtureSyntax::from_uid(&transfer_syntax_uid);

    let stream = if syntax.is_some_and(|ts| ts.is_deflated()) {
        let mut inflated = Vec::new();
        DeflateDecoder::new(&mut reader).read_to_end(&mut inflated)?;
        inflated_stream(inflated)?
    } else {
        reader.into_inner()
    };

    let obj = OpenFileOptions::new()
        .read_preamble(ReadPreamble::Never)
        .from_reader(Cursor::new(stream))?;

    Ok(FixtureReport {
        syntax,
        transfer_syntax_uid,
        preamble,
        patient_name: get_string_value(&obj, PATIENT_NAME),
    })
}

/// Wraps an inflated data set into a file stream announcing explicit VR little endian
fn inflated_stream(dataset: Vec<u8>) -> Result<Vec<u8>> {
    let meta = build_meta(FixtureSyntax::ExplicitVRLittleEndian.uid())?;

    let mut stream = DICM_MAGIC.to_vec();
    meta.write(&mut stream)
        .map_err(|e| FixtureError::DicomError(format!("{}", e)))?;
    stream.extend(dataset);
    Ok(stream)
}
