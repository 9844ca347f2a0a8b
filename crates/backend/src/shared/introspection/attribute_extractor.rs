//! Generic annotation extraction
//!
//! Converts any annotation into an `AttributeInfo`: kind name, fully
//! qualified name and the ordered bag of readable properties.

use contracts::shared::metadata::Annotation;
use contracts::system::attribute_map::{AttributeInfo, PropertyMap};

/// Extract every annotation outside the reserved namespaces, in declaration order
pub fn extract_attributes(
    annotations: &[Annotation],
    reserved_prefixes: &[String],
) -> Vec<AttributeInfo> {
    annotations
        .iter()
        .filter(|a| !is_reserved(a, reserved_prefixes))
        .map(attribute_info)
        .collect()
}

fn is_reserved(annotation: &Annotation, reserved_prefixes: &[String]) -> bool {
    annotation.namespace().is_some_and(|ns| {
        reserved_prefixes
            .iter()
            .any(|prefix| ns.starts_with(prefix.as_str()))
    })
}

/// Kind name of an annotation type: `HttpGetAttribute` -> `HttpGet`
pub fn attribute_name(type_name: &str) -> &str {
    type_name.strip_suffix("Attribute").unwrap_or(type_name)
}

fn attribute_info(annotation: &Annotation) -> AttributeInfo {
    let type_name = annotation.type_name();
    let fully_qualified_name = match annotation.namespace() {
        Some(ns) => format!("{}::{}", ns, type_name),
        None => type_name.to_string(),
    };

    let mut properties = PropertyMap::new();
    for property in annotation.properties() {
        match property.read() {
            Ok(value) => properties.insert(property.name, value),
            Err(e) => {
                tracing::debug!("Skipping property of {}: {}", fully_qualified_name, e);
            }
        }
    }

    AttributeInfo {
        name: attribute_name(type_name).to_string(),
        fully_qualified_name,
        properties,
    }
}
