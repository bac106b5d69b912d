//! Output file naming.
//!
//! Extracted images are named `slide<NN>_<MM>.<ext>`, where `NN` is the slide
//! number padded to at least two digits (wider when the deck has 100+ slides)
//! and `MM` is the two-digit sequence within the slide.

use std::path::Path;

/// Minimum width of the zero-padded slide number.
const MIN_SLIDE_WIDTH: usize = 2;

/// Width of the zero-padded sequence number.
const SEQUENCE_WIDTH: usize = 2;

/// Builds output file names for one presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputNaming {
    slide_width: usize,
}

impl Default for OutputNaming {
    fn default() -> Self {
        Self {
            slide_width: MIN_SLIDE_WIDTH,
        }
    }
}

impl OutputNaming {
    /// Create a naming scheme sized for a presentation with `slide_count` slides.
    pub fn for_slide_count(slide_count: usize) -> Self {
        let digits = slide_count.to_string().len();
        Self {
            slide_width: digits.max(MIN_SLIDE_WIDTH),
        }
    }

    /// Width used for the slide number.
    pub fn slide_width(&self) -> usize {
        self.slide_width
    }

    /// Build the file name for an image, keeping the source's extension.
    ///
    /// A source without an extension yields a name without one.
    pub fn file_name(&self, slide: usize, sequence: usize, source: &Path) -> String {
        let stem = format!(
            "slide{:0sw$}_{:0qw$}",
            slide,
            sequence,
            sw = self.slide_width,
            qw = SEQUENCE_WIDTH
        );
        match source.extension().and_then(|e| e.to_str()) {
            Some(ext) if !ext.is_empty() => format!("{}.{}", stem, ext),
            _ => stem,
        }
    }
}
