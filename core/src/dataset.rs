use crate::error::{FixtureError, Result};
use crate::types::FixtureSpec;
use dicom_core::{DataElement, PrimitiveValue, VR};
use dicom_dictionary_std::{tags, uids};
use dicom_object::{FileDicomObject, FileMetaTable, FileMetaTableBuilder, InMemDicomObject};

/// SOP class recorded in the file meta group (CT Image Storage)
pub const MEDIA_STORAGE_SOP_CLASS_UID: &str = uids::CT_IMAGE_STORAGE;

/// Placeholder SOP instance recorded in the file meta group
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: &str = "1.2.3";

/// Placeholder implementation class recorded in the file meta group
pub const IMPLEMENTATION_CLASS_UID: &str = "1.2.3.4";

/// Builds the in-memory object for a fixture
///
/// The data set holds a single PatientName element set to the fixture name.
/// The file meta group announces the fixture's transfer syntax; its group
/// length is computed by the builder.
pub fn build_fixture(spec: &FixtureSpec) -> Result<FileDicomObject<InMemDicomObject>> {
    let meta = build_meta(spec.syntax.uid())?;
    Ok(build_dataset(spec).with_exact_meta(meta))
}

/// Builds the data set shell without a file meta group
pub fn build_dataset(spec: &FixtureSpec) -> InMemDicomObject {
    let mut dcm = InMemDicomObject::new_empty();
    dcm.put(DataElement::new(
        tags::PATIENT_NAME,
        VR::PN,
        PrimitiveValue::from(spec.name()),
    ));
    dcm
}

/// Builds a file meta table with the fixed placeholder identifiers
pub(crate) fn build_meta(transfer_syntax_uid: &str) -> Result<FileMetaTable> {
    FileMetaTableBuilder::new()
        .media_storage_sop_class_uid(MEDIA_STORAGE_SOP_CLASS_UID)
        .media_storage_sop_instance_uid(MEDIA_STORAGE_SOP_INSTANCE_UID)
        .implementation_class_uid(IMPLEMENTATION_CLASS_UID)
        .transfer_syntax(transfer_syntax_uid)
        .build()
        .map_err(|e| FixtureError::DicomError(format!("{}", e)))
}
