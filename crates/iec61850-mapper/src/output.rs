// crates/iec61850-mapper/src/output.rs

//! Assembles per-document results into the final, role-specific record stream.

use crate::types::{AttributeBinding, DocumentMapping, Role};
use alloc::vec::Vec;
use core::fmt;

/// The result of a whole mapping run.
///
/// `Display` renders the mapping file, one record per line:
///
/// * Server: `<ROLE> <path> <address>` for every attribute binding.
/// * Client: per document, the endpoint line, its report lines and its
///   control variable lines; then a blank line and the same attribute binding
///   dump the server gets, across all documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingOutput {
    role: Role,
    documents: Vec<DocumentMapping>,
}

impl MappingOutput {
    pub fn new(role: Role, documents: Vec<DocumentMapping>) -> Self {
        Self { role, documents }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn documents(&self) -> &[DocumentMapping] {
        &self.documents
    }

    /// All attribute bindings, concatenated in document-processing order.
    pub fn attribute_bindings(&self) -> impl Iterator<Item = &AttributeBinding> {
        self.documents.iter().flat_map(|doc| doc.bindings.iter())
    }

    fn fmt_bindings(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for binding in self.attribute_bindings() {
            writeln!(f, "{}", binding)?;
        }
        Ok(())
    }

    fn fmt_client_groups(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for details in self.documents.iter().filter_map(|doc| doc.client.as_ref()) {
            writeln!(f, "{}", details.endpoint)?;
            for report in &details.reports {
                writeln!(f, "{}", report)?;
            }
            for control in &details.control_variables {
                writeln!(f, "{}", control)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for MappingOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            Role::Server => self.fmt_bindings(f),
            Role::Client => {
                self.fmt_client_groups(f)?;
                writeln!(f)?;
                self.fmt_bindings(f)
            }
        }
    }
}
