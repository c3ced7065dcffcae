use std::collections::BTreeSet;

use crate::document::SchemaDocument;
use crate::error::{Error, Result};
use crate::schema::{InterfaceInfo, PropertyInfo, PropertyShape};

/// Validate every interface in a document.
///
/// This checks:
/// - duplicate interface names
/// - the per-interface rules of [`validate_interface`]
pub fn validate_document(document: &SchemaDocument) -> Result<()> {
    let mut names = BTreeSet::new();
    for interface in &document.interfaces {
        if !names.insert(interface.name.as_str()) {
            return Err(Error::InvalidSchema(format!(
                "duplicate interface name: {}",
                interface.name
            )));
        }
        validate_interface(interface)?;
    }
    Ok(())
}

/// Validate structural invariants of an interface.
///
/// This checks:
/// - interface and field names are non-empty
/// - field names are unique within the top level and within each object
/// - field names contain no `.`, which is the flattened column separator
///
/// Empty unions and empty literal sets are accepted here; synthesis
/// degrades them to null.
pub fn validate_interface(interface: &InterfaceInfo) -> Result<()> {
    if interface.name.trim().is_empty() {
        return Err(Error::InvalidSchema(
            "interface name must not be empty".to_string(),
        ));
    }
    validate_fields(&interface.name, &interface.properties)
}

fn validate_fields(path: &str, fields: &[PropertyInfo]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for field in fields {
        if !seen.insert(field.name.as_str()) {
            return Err(Error::InvalidSchema(format!(
                "duplicate field name: {path}.{}",
                field.name
            )));
        }
        validate_property(path, field)?;
    }
    Ok(())
}

fn validate_property(parent: &str, property: &PropertyInfo) -> Result<()> {
    if property.name.trim().is_empty() {
        return Err(Error::InvalidSchema(format!(
            "empty field name under {parent}"
        )));
    }
    if property.name.contains('.') {
        return Err(Error::InvalidSchema(format!(
            "field name must not contain '.': {parent}.{}",
            property.name
        )));
    }
    let path = format!("{parent}.{}", property.name);

    match &property.shape {
        PropertyShape::Array {
            element_type: Some(element),
        } => validate_property(&path, element),
        PropertyShape::Object { fields } => validate_fields(&path, fields),
        PropertyShape::Union { alternatives } => alternatives
            .iter()
            .try_for_each(|alternative| validate_property(&path, alternative)),
        PropertyShape::String
        | PropertyShape::Number
        | PropertyShape::Boolean
        | PropertyShape::Date
        | PropertyShape::Array { element_type: None }
        | PropertyShape::LiteralSet { .. }
        | PropertyShape::Dynamic
        | PropertyShape::Unresolved => Ok(()),
    }
}
