//! Namespace-aware element selection over OOXML parts.
//!
//! Elements and attributes are matched by namespace URI and local name, so
//! a part that binds DrawingML to a prefix other than `a:` still matches.

use pptx_images_core::{Error, Result};
use quick_xml::events::Event;
use quick_xml::name::{LocalName, Namespace, ResolveResult};
use quick_xml::NsReader;

/// DrawingML main namespace.
pub const DRAWINGML_NS: &[u8] = b"http://schemas.openxmlformats.org/drawingml/2006/main";

/// Office document relationships namespace (`r:` attributes in slide markup).
pub const RELATIONSHIPS_NS: &[u8] =
    b"http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Package relationships namespace (root of `.rels` parts).
pub const PACKAGE_RELATIONSHIPS_NS: &[u8] =
    b"http://schemas.openxmlformats.org/package/2006/relationships";

/// `<a:blip>`: an embedded picture fill.
pub const BLIP: XmlName = XmlName::qualified(DRAWINGML_NS, b"blip");

/// `r:embed` on a blip.
pub const EMBED: XmlName = XmlName::qualified(RELATIONSHIPS_NS, b"embed");

/// `<Relationship>` in a `.rels` part.
pub const RELATIONSHIP: XmlName = XmlName::qualified(PACKAGE_RELATIONSHIPS_NS, b"Relationship");

/// A namespace-qualified XML name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlName {
    /// Namespace URI, or `None` for names outside any namespace
    /// (unprefixed attributes).
    pub namespace: Option<&'static [u8]>,
    pub local: &'static [u8],
}

impl XmlName {
    pub const fn qualified(namespace: &'static [u8], local: &'static [u8]) -> Self {
        Self {
            namespace: Some(namespace),
            local,
        }
    }

    pub const fn unqualified(local: &'static [u8]) -> Self {
        Self {
            namespace: None,
            local,
        }
    }

    /// Whether a resolved name refers to this one.
    pub fn matches(&self, ns: &ResolveResult, local: LocalName) -> bool {
        if local.as_ref() != self.local {
            return false;
        }
        match (self.namespace, ns) {
            (Some(expected), ResolveResult::Bound(Namespace(found))) => expected == *found,
            (None, ResolveResult::Unbound) => true,
            _ => false,
        }
    }
}

/// Attributes of one selected element, with resolved names.
#[derive(Debug, Clone, Default)]
pub struct SelectedElement {
    attributes: Vec<(Option<Vec<u8>>, Vec<u8>, String)>,
}

impl SelectedElement {
    /// Value of the attribute with the given name, if present.
    pub fn attr(&self, name: XmlName) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(ns, local, _)| ns.as_deref() == name.namespace && local == name.local)
            .map(|(_, _, value)| value.as_str())
    }
}

/// Select every element named `element` in document order.
///
/// `part` names the source in error messages.
pub fn select(xml: &str, element: XmlName, part: &str) -> Result<Vec<SelectedElement>> {
    let mut reader = NsReader::from_str(xml);
    let mut selected = Vec::new();

    loop {
        let (ns, event) = match reader.read_resolved_event() {
            Ok(resolved) => resolved,
            Err(e) => return Err(xml_error(part, reader.buffer_position(), e)),
        };

        match event {
            Event::Start(e) | Event::Empty(e) => {
                if !element.matches(&ns, e.local_name()) {
                    continue;
                }

                let mut found = SelectedElement::default();
                for attr in e.attributes().flatten() {
                    let (attr_ns, local) = reader.resolve_attribute(attr.key);
                    let attr_ns = match attr_ns {
                        ResolveResult::Bound(Namespace(uri)) => Some(uri.to_vec()),
                        _ => None,
                    };
                    let local = local.as_ref().to_vec();
                    let value = attr
                        .unescape_value()
                        .map_err(|e| xml_error(part, reader.buffer_position(), e))?
                        .into_owned();
                    found.attributes.push((attr_ns, local, value));
                }
                selected.push(found);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(selected)
}

fn xml_error(part: &str, position: usize, e: quick_xml::Error) -> Error {
    Error::Xml(format!("{} at byte {}: {}", part, position, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLIDE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"
       xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"
       xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
  <p:cSld><p:spTree>
    <p:pic><p:blipFill><a:blip r:embed="rId2"/></p:blipFill></p:pic>
    <p:pic><p:blipFill><a:blip r:embed="rId3"><a:extLst/></a:blip></p:blipFill></p:pic>
  </p:spTree></p:cSld>
</p:sld>"#;

    #[test]
    fn test_select_in_document_order() {
        let blips = select(SLIDE, BLIP, "slide1.xml").unwrap();
        let ids: Vec<_> = blips.iter().map(|b| b.attr(EMBED)).collect();
        assert_eq!(ids, vec![Some("rId2"), Some("rId3")]);
    }

    #[test]
    fn test_select_ignores_prefix_choice() {
        let xml = r#"<x:root xmlns:x="urn:other"
            xmlns:dml="http://schemas.openxmlformats.org/drawingml/2006/main"
            xmlns:rel="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
            <dml:blip rel:embed="rId9"/>
        </x:root>"#;
        let blips = select(xml, BLIP, "part").unwrap();
        assert_eq!(blips.len(), 1);
        assert_eq!(blips[0].attr(EMBED), Some("rId9"));
    }

    #[test]
    fn test_select_requires_namespace() {
        // Same local name, wrong namespace.
        let xml = r#"<root xmlns:a="urn:not-drawingml"><a:blip embed="rId1"/></root>"#;
        assert!(select(xml, BLIP, "part").unwrap().is_empty());
    }

    #[test]
    fn test_unqualified_attributes() {
        let xml = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
            <Relationship Id="rId1" Type="t" Target="../media/a&amp;b.png"/>
        </Relationships>"#;
        let rels = select(xml, RELATIONSHIP, "rels").unwrap();
        assert_eq!(rels.len(), 1);
        assert_eq!(rels[0].attr(XmlName::unqualified(b"Id")), Some("rId1"));
        assert_eq!(
            rels[0].attr(XmlName::unqualified(b"Target")),
            Some("../media/a&b.png")
        );
        assert_eq!(rels[0].attr(XmlName::unqualified(b"Missing")), None);
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let result = select("<a><b></a>", BLIP, "broken.xml");
        match result {
            Err(Error::Xml(msg)) => assert!(msg.contains("broken.xml")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
