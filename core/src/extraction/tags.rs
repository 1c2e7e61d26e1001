use dicom_core::Tag;
use dicom_object::InMemDicomObject;

// File Meta Information Tags
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);

// Patient Tags
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);

/// Helper to get string value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to string
pub fn get_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<String> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_str().ok())
        .map(|s| s.trim_end_matches(['\0', ' ']).trim().to_string())
}
