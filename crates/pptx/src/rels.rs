//! Slide relationship parts.
//!
//! Each slide may have a `_rels/slideN.xml.rels` part mapping relationship
//! IDs to targets. Only image relationships matter here.

use crate::xml::{self, XmlName};
use pptx_images_core::{ImageRelationships, Relationship, Result, SlideFile};
use std::path::{Component, Path, PathBuf};

const ID: XmlName = XmlName::unqualified(b"Id");
const TYPE: XmlName = XmlName::unqualified(b"Type");
const TARGET: XmlName = XmlName::unqualified(b"Target");
const TARGET_MODE: XmlName = XmlName::unqualified(b"TargetMode");

/// Parse a relationship part, resolving each internal target against
/// `base_dir` (the directory of the source part) or, for absolute targets,
/// against `root`.
///
/// External targets and entries missing an ID or target are dropped.
pub fn parse_relationships(
    content: &str,
    base_dir: &Path,
    root: &Path,
    part: &str,
) -> Result<Vec<Relationship>> {
    let mut rels = Vec::new();

    for element in xml::select(content, xml::RELATIONSHIP, part)? {
        if element.attr(TARGET_MODE) == Some("External") {
            continue;
        }

        let (Some(id), Some(target)) = (element.attr(ID), element.attr(TARGET)) else {
            continue;
        };
        if id.is_empty() || target.is_empty() {
            continue;
        }

        rels.push(Relationship {
            id: id.to_string(),
            rel_type: element.attr(TYPE).unwrap_or_default().to_string(),
            target: resolve_target(base_dir, root, target),
        });
    }

    Ok(rels)
}

/// Load the image relationships of a slide.
///
/// A slide without a relationship part has no images; that is not an error.
pub fn load_image_relationships(slide: &SlideFile, root: &Path) -> Result<ImageRelationships> {
    let mut images = ImageRelationships::new();

    let rels_path = slide.rels_path();
    if !rels_path.is_file() {
        log::debug!("Slide {} has no relationship part", slide.number);
        return Ok(images);
    }

    let content = std::fs::read_to_string(&rels_path)?;
    let base_dir = slide.path.parent().unwrap_or(root);
    let part = rels_path
        .strip_prefix(root)
        .unwrap_or(rels_path.as_path())
        .display()
        .to_string();

    for rel in parse_relationships(&content, base_dir, root, &part)? {
        let id = rel.id.clone();
        if !images.add(rel) {
            log::trace!("Slide {}: ignoring non-image relationship {}", slide.number, id);
        }
    }

    Ok(images)
}

/// Resolve a relationship target to a path on disk.
///
/// `.` and `..` are folded lexically; `..` never climbs above `root`.
pub fn resolve_target(base_dir: &Path, root: &Path, target: &str) -> PathBuf {
    let (start, relative) = match target.strip_prefix('/') {
        Some(rest) => (root, rest),
        None => (base_dir, target),
    };

    let mut resolved = start.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if resolved != root {
                    resolved.pop();
                }
            }
            Component::Normal(part) => resolved.push(part),
            Component::RootDir | Component::Prefix(_) => {}
        }
    }
    resolved
}
