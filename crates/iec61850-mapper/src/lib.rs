// src/lib.rs

#![no_std]
#![doc = "Maps IEC 61850 SCL data attributes to IEC 61131-3 located variables."]
#![doc = ""]
#![doc = "Written against `core` and `alloc`; the `regex` dependency still needs `std`."]
#![doc = ""]
#![doc = "This library resolves the `sMonitoringVar` / `sControlVar`"]
#![doc = "annotations of an SCL file against the `AT %...` declarations of a"]
#![doc = "Structured Text program, producing the mapping table consumed by an"]
#![doc = "IEC 61850 server or client runtime."]
#![doc = ""]
#![doc = "It supports:"]
#![doc = "- `load_bindings_from_str`: Parsing located variables from Structured Text."]
#![doc = "- `map_document`: Resolving a single SCL document."]
#![doc = "- `Mapper`: Driving a whole run and rendering the final mapping."]

extern crate alloc;

// --- Crate Modules ---

mod bindings;
mod error;
mod mapper;
mod model;
mod output;
mod parser;
mod resolver;
mod types;

// --- Public API Re-exports ---

pub use bindings::{BindingTable, load_bindings_from_str};
pub use error::MapperError;
pub use mapper::Mapper;
pub use output::MappingOutput;
pub use parser::map_document;
pub use types::{
    AttributeBinding, BindingRole, ClientDetails, ControlVariable, DocumentMapping,
    ReportInstance, Resolution, Role, SENTINEL,
};
