//! Internal `serde` data structures that map directly to the SCL XML schema.
//!
//! Only the parts of an IEC 61850-6 SCL file that the mapper reads are
//! modelled; everything else is skipped by the deserializer. Every element
//! and attribute is optional here so that incomplete files degrade to empty
//! values instead of failing. These structs are not intended for direct
//! public use.

#![allow(clippy::pedantic)] // XML schema naming conventions differ from Rust

use alloc::vec::Vec;
use serde::Deserialize;

pub mod communication;
pub mod ied;
pub mod templates;

// Re-export key components for internal use
pub use communication::Communication;
pub use ied::Ied;
pub use templates::DataTypeTemplates;

/// The root element of an SCL file.
///
/// Represents the `<SCL>` element defined in `SCL.xsd`.
#[derive(Debug, Deserialize, Default)]
#[serde(rename = "SCL")]
pub struct Scl {
    /// Only the first IED is mapped.
    #[serde(rename = "IED", default)]
    pub ied: Vec<Ied>,

    #[serde(rename = "DataTypeTemplates", default)]
    pub data_type_templates: Option<DataTypeTemplates>,

    #[serde(rename = "Communication", default)]
    pub communication: Option<Communication>,
}
