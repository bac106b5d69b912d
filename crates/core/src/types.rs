//! Domain types for slides, relationships, and extracted images.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// The accepted variants of the ZIP-based presentation format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArchiveFormat {
    /// Standard presentation (.pptx).
    Pptx,
    /// Macro-enabled presentation (.pptm).
    Pptm,
}

impl ArchiveFormat {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pptx" => Some(Self::Pptx),
            "pptm" => Some(Self::Pptm),
            _ => None,
        }
    }

    /// Detect format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Check whether the leading bytes carry a ZIP local file header (PK\x03\x04).
    pub fn is_zip_magic(bytes: &[u8]) -> bool {
        bytes.starts_with(&[0x50, 0x4B, 0x03, 0x04])
    }
}

/// A slide definition part found in the unpacked archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideFile {
    /// Slide index parsed from the file name (`slide7.xml` -> 7).
    pub number: usize,

    /// Absolute path of the slide XML on disk.
    pub path: PathBuf,
}

impl SlideFile {
    /// Create a new slide file entry.
    pub fn new(number: usize, path: impl Into<PathBuf>) -> Self {
        Self {
            number,
            path: path.into(),
        }
    }

    /// Path of the slide's relationship part (`_rels/slideN.xml.rels` beside the slide).
    pub fn rels_path(&self) -> PathBuf {
        let dir = self.path.parent().unwrap_or_else(|| Path::new(""));
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        dir.join("_rels").join(format!("{}.rels", file_name))
    }
}

/// A single entry from a slide's relationship part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId2").
    pub id: String,

    /// Relationship type URI.
    pub rel_type: String,

    /// Resolved absolute path of the target.
    pub target: PathBuf,
}

impl Relationship {
    /// Whether the relationship type denotes an image.
    pub fn is_image(&self) -> bool {
        self.rel_type.ends_with("/image")
    }
}

/// Image relationships of one slide, keyed by relationship ID.
#[derive(Debug, Clone, Default)]
pub struct ImageRelationships {
    by_id: HashMap<String, PathBuf>,
}

impl ImageRelationships {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship; non-image relationships are ignored.
    ///
    /// Returns `true` if the relationship was kept.
    pub fn add(&mut self, rel: Relationship) -> bool {
        if !rel.is_image() {
            return false;
        }
        self.by_id.insert(rel.id, rel.target);
        true
    }

    /// Look up the resolved media path for a relationship ID.
    pub fn get(&self, id: &str) -> Option<&Path> {
        self.by_id.get(id).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// A unique, resolved image reference within one slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    /// Relationship ID the markup referred to.
    pub rel_id: String,

    /// Absolute path of the media file in the unpacked archive.
    pub source: PathBuf,
}

/// A media file copied to the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedImage {
    /// Slide number the image came from.
    pub slide: usize,

    /// 1-based sequence within the slide.
    pub sequence: usize,

    /// Media part name inside the archive (e.g. "image3.png").
    pub source: String,

    /// Path of the written file.
    pub output: PathBuf,
}

/// Per-slide image count, reported only for slides that yielded images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSummary {
    /// Slide number.
    pub number: usize,

    /// Number of images copied from this slide.
    pub image_count: usize,
}

/// Outcome of one extraction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// Directory the images were written to.
    pub output_dir: PathBuf,

    /// Format of the input archive.
    pub format: ArchiveFormat,

    /// Number of slide parts found in the archive.
    pub slide_count: usize,

    /// Slides that contributed at least one image, in slide order.
    pub slides: Vec<SlideSummary>,

    /// Every copied image, in extraction order.
    pub images: Vec<ExtractedImage>,
}

impl ExtractionReport {
    /// Create an empty report for the given output directory.
    pub fn new(output_dir: impl Into<PathBuf>, format: ArchiveFormat, slide_count: usize) -> Self {
        Self {
            output_dir: output_dir.into(),
            format,
            slide_count,
            slides: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Record the images copied for one slide. Slides with no images are not recorded.
    pub fn add_slide(&mut self, number: usize, images: Vec<ExtractedImage>) {
        if images.is_empty() {
            return;
        }
        self.slides.push(SlideSummary {
            number,
            image_count: images.len(),
        });
        self.images.extend(images);
    }

    /// Total number of images copied.
    pub fn total_images(&self) -> usize {
        self.images.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE_TYPE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
    const LAYOUT_TYPE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ArchiveFormat::from_extension("pptx"), Some(ArchiveFormat::Pptx));
        assert_eq!(ArchiveFormat::from_extension("PPTM"), Some(ArchiveFormat::Pptm));
        assert_eq!(ArchiveFormat::from_extension("ppt"), None);
        assert_eq!(ArchiveFormat::from_extension("txt"), None);
        assert_eq!(
            ArchiveFormat::from_path(Path::new("talks/Deck.PPTX")),
            Some(ArchiveFormat::Pptx)
        );
        assert_eq!(ArchiveFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_zip_magic() {
        assert!(ArchiveFormat::is_zip_magic(b"PK\x03\x04rest"));
        assert!(!ArchiveFormat::is_zip_magic(b"PK"));
        assert!(!ArchiveFormat::is_zip_magic(&[0xD0, 0xCF, 0x11, 0xE0]));
    }

    #[test]
    fn test_rels_path() {
        let slide = SlideFile::new(3, "/tmp/x/ppt/slides/slide3.xml");
        assert_eq!(
            slide.rels_path(),
            PathBuf::from("/tmp/x/ppt/slides/_rels/slide3.xml.rels")
        );
    }

    #[test]
    fn test_image_relationships_keep_only_images() {
        let mut rels = ImageRelationships::new();
        assert!(rels.add(Relationship {
            id: "rId2".into(),
            rel_type: IMAGE_TYPE.into(),
            target: PathBuf::from("/x/ppt/media/image1.png"),
        }));
        assert!(!rels.add(Relationship {
            id: "rId1".into(),
            rel_type: LAYOUT_TYPE.into(),
            target: PathBuf::from("/x/ppt/slideLayouts/slideLayout1.xml"),
        }));

        assert_eq!(rels.len(), 1);
        assert_eq!(rels.get("rId2"), Some(Path::new("/x/ppt/media/image1.png")));
        assert_eq!(rels.get("rId1"), None);
    }

    #[test]
    fn test_report_skips_empty_slides() {
        let mut report = ExtractionReport::new("out", ArchiveFormat::Pptx, 3);
        report.add_slide(
            1,
            vec![ExtractedImage {
                slide: 1,
                sequence: 1,
                source: "image1.png".into(),
                output: PathBuf::from("out/slide01_01.png"),
            }],
        );
        report.add_slide(2, Vec::new());

        assert_eq!(report.total_images(), 1);
        assert_eq!(
            report.slides,
            vec![SlideSummary {
                number: 1,
                image_count: 1
            }]
        );
    }

    #[test]
    fn test_report_serializes() {
        let report = ExtractionReport::new("out", ArchiveFormat::Pptm, 0);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["slide_count"], 0);
        assert_eq!(json["format"], "Pptm");
        assert!(json["images"].as_array().unwrap().is_empty());
    }
}
