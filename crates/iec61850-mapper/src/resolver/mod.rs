// crates/iec61850-mapper/src/resolver/mod.rs

//! Handles the business logic of resolving a mapping from a deserialized SCL model.
//!
//! This module contains the main `resolve_document` orchestrator and sub-modules
//! for each pass over the document.

use crate::bindings::BindingTable;
use crate::model::Scl;
use crate::types::{BindingRole, ClientDetails, ControlVariable, DocumentMapping, Role};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use log::debug;

// --- Sub-modules ---

mod endpoint;
mod index;
mod reports;
mod walker;

/// Names the mapped device: the first `IED` and its first `LDevice`.
///
/// Every SCL path the mapper emits starts with `IED@name` immediately followed
/// by `LDevice@inst`, without a separator.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DeviceContext<'a> {
    pub ied_name: &'a str,
    pub ld_inst: &'a str,
}

impl DeviceContext<'_> {
    /// `IED@name + LDevice@inst`, e.g. `IED1LD0`.
    pub(crate) fn prefix(&self) -> String {
        format!("{}{}", self.ied_name, self.ld_inst)
    }
}

/// Resolves the final `DocumentMapping` from the raw deserialized document.
/// This function contains all the logic for mapping the internal `model`
/// to the public, ergonomic `types`.
pub(crate) fn resolve_document(scl: &Scl, bindings: &BindingTable, role: Role) -> DocumentMapping {
    let ied = scl.ied.first();
    let ldevice = ied.and_then(|ied| ied.first_logical_device());

    let device = DeviceContext {
        ied_name: ied.map_or("", |ied| ied.name.as_str()),
        ld_inst: ldevice.map_or("", |ld| ld.inst.as_str()),
    };

    if ied.map_or(0, |ied| ied.access_point.len()) > 0 && ldevice.is_none() {
        debug!("IED '{}' declares no LDevice", device.ied_name);
    }

    let templates = scl.data_type_templates.as_ref();

    // --- Pass 1: Build LN type -> LN label map ---
    let ln_index = index::LogicalNodeIndex::build(ldevice);

    // --- Pass 2: Build DO type -> full path map ---
    let do_index = index::DataObjectIndex::build(templates, &ln_index, &device);

    // --- Pass 3: Walk DA annotations ---
    let attribute_bindings = walker::walk_templates(templates, &do_index, bindings);

    // --- Pass 4 (client only): Reports and endpoint ---
    let client = match role {
        Role::Server => None,
        Role::Client => {
            let ln0 = ldevice.and_then(|ld| ld.ln0.as_ref());
            let control_variables: Vec<ControlVariable> = attribute_bindings
                .iter()
                .filter(|b| b.role == BindingRole::Control)
                .map(|b| ControlVariable {
                    path: b.path.clone(),
                    address: b.address.clone(),
                })
                .collect();

            Some(ClientDetails {
                endpoint: endpoint::resolve_endpoint(scl.communication.as_ref(), device.ied_name),
                reports: reports::resolve_reports(&device, ln0),
                control_variables,
            })
        }
    };

    DocumentMapping {
        device_name: String::from(device.ied_name),
        bindings: attribute_bindings,
        client,
    }
}
