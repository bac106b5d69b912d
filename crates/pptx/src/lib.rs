//! PPTX (Office Open XML) backend for extracting slide images.
//!
//! A .pptx file is a ZIP archive. It is unpacked to a scratch directory,
//! each slide's relationship part maps IDs to media files, and the slide
//! markup gives the order in which those images appear.

pub mod archive;
pub mod extractor;
pub mod rels;
pub mod slides;
pub mod walker;
pub mod xml;

pub use archive::UnpackedArchive;
pub use extractor::ImageExtractor;
