// crates/iec61850-mapper/src/mapper.rs

//! The pipeline driver that owns all state of a mapping run.

use crate::bindings::BindingTable;
use crate::error::MapperError;
use crate::output::MappingOutput;
use crate::parser::map_document;
use crate::types::{DocumentMapping, Role};
use alloc::vec::Vec;
use log::debug;

/// Drives one mapping run.
///
/// The binding table is loaded once and handed over here; documents are then
/// processed strictly one after another and their results accumulated until
/// [`Mapper::finish`] hands back the assembled output.
///
/// ```
/// use iec61850_mapper::{Mapper, Role, load_bindings_from_str};
///
/// let bindings = load_bindings_from_str("VAR\nV1 AT %IX0.0 : BOOL;\nEND_VAR\n").unwrap();
/// let mut mapper = Mapper::new(Role::Server, bindings);
/// mapper.process_document("<SCL/>").unwrap();
/// assert_eq!(mapper.finish().to_string(), "");
/// ```
#[derive(Debug)]
pub struct Mapper {
    role: Role,
    bindings: BindingTable,
    documents: Vec<DocumentMapping>,
}

impl Mapper {
    pub fn new(role: Role, bindings: BindingTable) -> Self {
        Self {
            role,
            bindings,
            documents: Vec::new(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Documents processed so far, in processing order.
    pub fn documents(&self) -> &[DocumentMapping] {
        &self.documents
    }

    /// Maps the next SCL document.
    ///
    /// # Errors
    /// Returns `MapperError::TooManyDocuments` once the role's document limit
    /// is reached, or `MapperError::XmlParsing` for malformed XML. Nothing is
    /// recorded for a document that fails.
    pub fn process_document(&mut self, xml_content: &str) -> Result<&DocumentMapping, MapperError> {
        if let Some(limit) = self.role.document_limit() {
            if self.documents.len() >= limit {
                return Err(MapperError::TooManyDocuments {
                    role: self.role,
                    limit,
                });
            }
        }

        let mapping = map_document(xml_content, &self.bindings, self.role)?;
        debug!(
            "Mapped IED '{}': {} attribute bindings",
            mapping.device_name,
            mapping.bindings.len()
        );

        self.documents.push(mapping);
        Ok(&self.documents[self.documents.len() - 1])
    }

    /// Ends the run and returns the assembled output.
    pub fn finish(self) -> MappingOutput {
        MappingOutput::new(self.role, self.documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_accepts_a_single_document() {
        let mut mapper = Mapper::new(Role::Server, BindingTable::new());
        assert!(mapper.process_document("<SCL/>").is_ok());

        let err = mapper.process_document("<SCL/>").unwrap_err();
        assert!(matches!(
            err,
            MapperError::TooManyDocuments {
                role: Role::Server,
                limit: 1
            }
        ));
        assert_eq!(mapper.documents().len(), 1);
    }

    #[test]
    fn test_client_accepts_many_documents() {
        let mut mapper = Mapper::new(Role::Client, BindingTable::new());
        for _ in 0..3 {
            mapper.process_document("<SCL/>").unwrap();
        }
        assert_eq!(mapper.documents().len(), 3);
        assert_eq!(mapper.role(), Role::Client);
    }

    #[test]
    fn test_failed_document_is_not_recorded() {
        let mut mapper = Mapper::new(Role::Client, BindingTable::new());
        assert!(mapper.process_document("<SCL>").is_err());
        assert!(mapper.documents().is_empty());
    }
}
