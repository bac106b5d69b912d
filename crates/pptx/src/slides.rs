//! Slide part enumeration.

use pptx_images_core::{Result, SlideFile};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Slide part file names: `slide<N>.xml`.
static SLIDE_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^slide(\d+)\.xml$").unwrap());

/// Extract the slide number from a file name like "slide12.xml".
pub fn slide_number(file_name: &str) -> Option<usize> {
    SLIDE_NAME_REGEX
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// List the slide parts in `slides_dir`, sorted by slide number.
///
/// Entries that do not look like slide parts (the `_rels` directory, stray
/// files) are skipped.
pub fn enumerate_slides(slides_dir: &Path) -> Result<Vec<SlideFile>> {
    let mut slides = Vec::new();

    for entry in std::fs::read_dir(slides_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        match slide_number(&file_name.to_string_lossy()) {
            Some(number) => slides.push(SlideFile::new(number, entry.path())),
            None => log::debug!("Skipping non-slide entry {:?}", file_name),
        }
    }

    slides.sort_by_key(|s| s.number);
    Ok(slides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_slide_number() {
        assert_eq!(slide_number("slide1.xml"), Some(1));
        assert_eq!(slide_number("slide123.xml"), Some(123));
        assert_eq!(slide_number("slide.xml"), None);
        assert_eq!(slide_number("slide1.xml.rels"), None);
        assert_eq!(slide_number("slideLayout1.xml"), None);
        assert_eq!(slide_number("notesSlide1.xml"), None);
    }

    #[test]
    fn test_enumerate_sorts_numerically() {
        let dir = tempdir().unwrap();
        for name in ["slide10.xml", "slide2.xml", "slide1.xml", "notes.txt"] {
            std::fs::write(dir.path().join(name), "<p:sld/>").unwrap();
        }
        std::fs::create_dir(dir.path().join("_rels")).unwrap();

        let slides = enumerate_slides(dir.path()).unwrap();
        let numbers: Vec<usize> = slides.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 10]);
        assert_eq!(slides[2].path, dir.path().join("slide10.xml"));
    }

    #[test]
    fn test_enumerate_empty_directory() {
        let dir = tempdir().unwrap();
        assert!(enumerate_slides(dir.path()).unwrap().is_empty());
    }
}
