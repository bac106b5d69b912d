//! Image references in slide markup.

use crate::xml;
use pptx_images_core::{ImageReference, ImageRelationships, Result};
use std::collections::HashSet;

/// Collect the slide's image references in document order.
///
/// Every `<a:blip r:embed="...">` is visited. An ID seen earlier on the same
/// slide is skipped, as is an ID with no image relationship.
pub fn walk_references(
    xml_content: &str,
    rels: &ImageRelationships,
    part: &str,
) -> Result<Vec<ImageReference>> {
    let mut seen = HashSet::new();
    let mut references = Vec::new();

    for blip in xml::select(xml_content, xml::BLIP, part)? {
        let Some(rel_id) = blip.attr(xml::EMBED) else {
            continue;
        };
        if !seen.insert(rel_id.to_string()) {
            continue;
        }

        match rels.get(rel_id) {
            Some(source) => references.push(ImageReference {
                rel_id: rel_id.to_string(),
                source: source.to_path_buf(),
            }),
            None => log::debug!("{}: {} is not an image relationship", part, rel_id),
        }
    }

    Ok(references)
}
