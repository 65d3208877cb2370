// src/parser.rs

use crate::bindings::BindingTable;
use crate::error::MapperError;
use crate::model::Scl;
use crate::resolver;
use crate::types::{DocumentMapping, Role};

/// Parses an SCL (Substation Configuration Language) string slice and resolves
/// its attribute annotations against `bindings`.
///
/// For [`Role::Client`] the returned mapping also carries the IED's endpoint,
/// its report instances and its control variables.
///
/// # Arguments
/// * `xml_content` - A string slice containing the full SCL XML file.
/// * `bindings` - The located variables of the PLC program.
/// * `role` - The runtime the mapping is generated for.
///
/// # Errors
/// Returns a `MapperError` if the XML is not well-formed. Unresolved
/// references are never errors.
pub fn map_document(
    xml_content: &str,
    bindings: &BindingTable,
    role: Role,
) -> Result<DocumentMapping, MapperError> {
    let scl = load_scl_from_str(xml_content)?;
    Ok(resolver::resolve_document(&scl, bindings, role))
}

/// Deserializes the raw XML string into our internal model.
pub(crate) fn load_scl_from_str(xml_content: &str) -> Result<Scl, MapperError> {
    Ok(quick_xml::de::from_str(xml_content)?)
}
