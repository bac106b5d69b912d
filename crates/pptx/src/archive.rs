//! Unpacking a presentation archive into a scratch directory.
//!
//! The scratch directory lives exactly as long as the [`UnpackedArchive`]
//! that owns it: it is removed when the value is dropped, whether the run
//! finished or bailed out early with an error.

use pptx_images_core::{ArchiveFormat, Error, Result};
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::ZipArchive;

/// Directory holding the slide parts, relative to the archive root.
pub const SLIDES_DIR: &str = "ppt/slides";

/// Prefix for scratch directory names.
const SCRATCH_PREFIX: &str = "pptx-images-";

/// A presentation archive extracted to a temporary directory.
#[derive(Debug)]
pub struct UnpackedArchive {
    scratch: TempDir,
    format: ArchiveFormat,
}

impl UnpackedArchive {
    /// Unpack `path` into a scratch directory under the system temp dir.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_in(path, None)
    }

    /// Unpack `path` into a scratch directory under `scratch_parent`, or the
    /// system temp dir when `None`.
    pub fn open_in(path: &Path, scratch_parent: Option<&Path>) -> Result<Self> {
        let format = validate_input(path)?;

        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let mut magic = [0u8; 4];
        if reader.read_exact(&mut magic).is_err() || !ArchiveFormat::is_zip_magic(&magic) {
            return Err(Error::NotAnArchive(path.to_path_buf()));
        }
        reader.seek(SeekFrom::Start(0))?;

        let mut archive = ZipArchive::new(reader)
            .map_err(|e| Error::Zip(format!("Failed to open ZIP: {}", e)))?;

        let scratch = match scratch_parent {
            Some(parent) => tempfile::Builder::new()
                .prefix(SCRATCH_PREFIX)
                .tempdir_in(parent)?,
            None => tempfile::Builder::new().prefix(SCRATCH_PREFIX).tempdir()?,
        };
        log::debug!(
            "Unpacking {} ({} entries) into {}",
            path.display(),
            archive.len(),
            scratch.path().display()
        );

        let unpacked = Self { scratch, format };

        archive
            .extract(unpacked.root())
            .map_err(|e| Error::Zip(format!("Failed to unpack '{}': {}", path.display(), e)))?;

        if !unpacked.slides_dir().is_dir() {
            return Err(Error::MissingSlideDirectory(SLIDES_DIR.to_string()));
        }

        Ok(unpacked)
    }

    /// Root of the unpacked archive.
    pub fn root(&self) -> &Path {
        self.scratch.path()
    }

    /// Directory containing the slide parts.
    pub fn slides_dir(&self) -> PathBuf {
        self.root().join(SLIDES_DIR)
    }

    /// Format detected from the input's extension.
    pub fn format(&self) -> ArchiveFormat {
        self.format
    }

    /// Remove the scratch directory, reporting any failure.
    ///
    /// Dropping the value also removes it, but silently.
    pub fn close(self) -> Result<()> {
        self.scratch.close()?;
        Ok(())
    }
}

/// Check that the input exists and carries an accepted extension.
pub fn validate_input(path: &Path) -> Result<ArchiveFormat> {
    if !path.is_file() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }

    let Some(ext) = path.extension() else {
        return Err(Error::MissingExtension(path.to_path_buf()));
    };

    ArchiveFormat::from_path(path)
        .ok_or_else(|| Error::UnsupportedExtension(ext.to_string_lossy().into_owned()))
}
