use thiserror::Error;

/// Result type for fixture operations
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Error types for fixture operations
#[derive(Error, Debug)]
pub enum FixtureError {
    /// DICOM building, encoding or parsing error
    #[error("DICOM error: {0}")]
    DicomError(String),

    /// Input opens with neither a preamble nor a file meta group
    #[error("Not a DICOM file: {0}")]
    NotDicom(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for FixtureError {
    fn from(e: dicom_object::ReadError) -> Self {
        FixtureError::DicomError(format!("{}", e))
    }
}

impl From<dicom_object::WriteError> for FixtureError {
    fn from(e: dicom_object::WriteError) -> Self {
        FixtureError::DicomError(format!("{}", e))
    }
}
