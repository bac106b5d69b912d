//! Core domain types, errors, and output file naming for extracting
//! images from PowerPoint presentations.

pub mod error;
pub mod naming;
pub mod types;

pub use error::{Error, Result};
pub use naming::OutputNaming;
pub use types::{
    ArchiveFormat, ExtractedImage, ExtractionReport, ImageReference, ImageRelationships,
    Relationship, SlideFile, SlideSummary,
};
