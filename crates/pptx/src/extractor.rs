//! Image extraction: unpack, walk each slide, copy its images out.

use crate::archive::UnpackedArchive;
use crate::rels::load_image_relationships;
use crate::slides::enumerate_slides;
use crate::walker::walk_references;
use pptx_images_core::{
    ExtractedImage, ExtractionReport, ImageReference, OutputNaming, Result, SlideFile,
};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Extracts embedded images from PPTX files.
#[derive(Debug, Clone, Default)]
pub struct ImageExtractor {
    /// Parent directory for the scratch directory (system temp dir if unset).
    scratch_parent: Option<PathBuf>,
}

impl ImageExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unpack archives under `dir` instead of the system temp dir.
    pub fn with_scratch_parent(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_parent = Some(dir.into());
        self
    }

    /// Extract every slide image of `input` into `output_dir`.
    ///
    /// The output directory is created (with parents) only once the input has
    /// been validated and unpacked.
    pub fn extract(&self, input: &Path, output_dir: &Path) -> Result<ExtractionReport> {
        let archive = UnpackedArchive::open_in(input, self.scratch_parent.as_deref())?;

        let slides = enumerate_slides(&archive.slides_dir())?;
        log::debug!(
            "Found {} slides in {} ({:?})",
            slides.len(),
            input.display(),
            archive.format()
        );

        std::fs::create_dir_all(output_dir)?;

        let naming = OutputNaming::for_slide_count(slides.len());
        let mut report = ExtractionReport::new(output_dir, archive.format(), slides.len());

        for slide in &slides {
            let references = self.slide_references(&archive, slide)?;
            let images = copy_images(slide.number, &references, &naming, output_dir)?;
            report.add_slide(slide.number, images);
        }

        if let Err(e) = archive.close() {
            log::warn!("Failed to remove scratch directory: {}", e);
        }

        Ok(report)
    }

    /// Resolve the unique image references of one slide.
    fn slide_references(
        &self,
        archive: &UnpackedArchive,
        slide: &SlideFile,
    ) -> Result<Vec<ImageReference>> {
        let rels = load_image_relationships(slide, archive.root())?;
        if rels.is_empty() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&slide.path)?;
        let part = slide
            .path
            .strip_prefix(archive.root())
            .unwrap_or(slide.path.as_path())
            .display()
            .to_string();

        walk_references(&content, &rels, &part)
    }
}

/// Copy a slide's referenced media into `output_dir`.
///
/// References whose media file is missing are skipped without using up a
/// sequence number. Existing files with the same name are overwritten.
///
/// Outputs are written as new files with default permissions; the archive
/// entry's mode (which may be read-only) is not carried over.
pub fn copy_images(
    slide_number: usize,
    references: &[ImageReference],
    naming: &OutputNaming,
    output_dir: &Path,
) -> Result<Vec<ExtractedImage>> {
    let mut images = Vec::new();

    for reference in references {
        if !reference.source.is_file() {
            log::debug!(
                "Slide {}: media for {} not found at {}",
                slide_number,
                reference.rel_id,
                reference.source.display()
            );
            continue;
        }

        let sequence = images.len() + 1;
        let output = output_dir.join(naming.file_name(slide_number, sequence, &reference.source));
        let mut src = File::open(&reference.source)?;
        let mut dst = File::create(&output)?;
        std::io::copy(&mut src, &mut dst)?;
        log::debug!("Copied {} -> {}", reference.source.display(), output.display());

        images.push(ExtractedImage {
            slide: slide_number,
            sequence,
            source: reference
                .source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            output,
        });
    }

    Ok(images)
}
