use crate::dataset::{build_dataset, build_fixture, build_meta};
use crate::error::Result;
use crate::types::{FixtureSpec, FixtureSyntax};
use flate2::write::DeflateEncoder;
use flate2::Compression;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Magic code following the preamble
pub const DICM_MAGIC: &[u8; 4] = b"DICM";

/// Writes a fixture as a DICOM file stream
///
/// # Layout
///
/// 1. Preamble: 128 zero bytes and the `DICM` magic code, or nothing at all
/// 2. File meta group (explicit VR little endian)
/// 3. Data set, encoded with the fixture's transfer syntax
///
/// For the deflated syntax the data set is encoded as explicit VR
/// little endian and then raw-deflated.
pub fn write_fixture<W: Write>(spec: &FixtureSpec, mut to: W) -> Result<()> {
    let obj = build_fixture(spec)?;

    if spec.preamble.is_present() {
        to.write_all(spec.preamble.bytes())?;
        to.write_all(DICM_MAGIC)?;
    }
    obj.write_meta(&mut to)?;

    if spec.syntax.is_deflated() {
        write_deflated_dataset(spec, &mut to)?;
    } else {
        obj.write_dataset(&mut to)?;
    }

    to.flush()?;
    Ok(())
}

/// Writes a fixture into `dir`, named after the fixture
///
/// An existing file with the same name is truncated.
pub fn write_fixture_file(dir: &Path, spec: &FixtureSpec) -> Result<PathBuf> {
    let path = dir.join(spec.file_name());
    debug!("Writing {} to {}", spec, path.display());

    let mut to = BufWriter::new(File::create(&path)?);
    write_fixture(spec, &mut to)?;
    to.flush()?;

    Ok(path)
}

fn write_deflated_dataset<W: Write>(spec: &FixtureSpec, to: W) -> Result<()> {
    // the meta table here only drives the data set encoder, it is never written
    let body = build_dataset(spec)
        .with_exact_meta(build_meta(FixtureSyntax::ExplicitVRLittleEndian.uid())?);

    let mut encoder = DeflateEncoder::new(to, Compression::default());
    body.write_dataset(&mut encoder)?;
    encoder.finish()?;
    Ok(())
}
