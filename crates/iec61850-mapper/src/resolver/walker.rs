// crates/iec61850-mapper/src/resolver/walker.rs

//! Recursive descent through the `Private`/`Property` annotations of data attributes.

use super::index::DataObjectIndex;
use crate::bindings::BindingTable;
use crate::model::DataTypeTemplates;
use crate::model::templates::{DataAttribute, Private, Property};
use crate::types::{AttributeBinding, BindingRole};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use log::debug;

/// A node that may carry annotation containers or leaf properties.
trait Annotated {
    fn containers(&self) -> &[Private];
    fn properties(&self) -> &[Property];
}

impl Annotated for DataAttribute {
    fn containers(&self) -> &[Private] {
        &self.private
    }
    fn properties(&self) -> &[Property] {
        &self.property
    }
}

impl Annotated for Private {
    fn containers(&self) -> &[Private] {
        &self.private
    }
    fn properties(&self) -> &[Property] {
        &self.property
    }
}

/// Walks every `<DA>` of every `<DOType>` in document order.
///
/// Each data attribute starts from its data object's indexed path. A
/// `DOType` no `DO` references starts from the empty path.
pub(crate) fn walk_templates(
    templates: Option<&DataTypeTemplates>,
    do_index: &DataObjectIndex<'_>,
    bindings: &BindingTable,
) -> Vec<AttributeBinding> {
    let mut records = Vec::new();

    for do_type in templates.into_iter().flat_map(|t| t.do_type.iter()) {
        let start = do_index.path(&do_type.id).unwrap_or_else(|| {
            debug!("DOType '{}' is not referenced by any DO", do_type.id);
            ""
        });

        for data_attribute in &do_type.data_attribute {
            records.extend(walk(data_attribute, start, bindings));
        }
    }

    debug!("Discovered {} attribute bindings", records.len());
    records
}

/// Descends one node. Containers take precedence: when a node has any
/// `<Private>` children its own `<Property>` entries are not read.
fn walk<N: Annotated>(node: &N, path: &str, bindings: &BindingTable) -> Vec<AttributeBinding> {
    let containers = node.containers();

    if !containers.is_empty() {
        return containers
            .iter()
            .flat_map(|private| {
                let child_path = format!("{}.{}", path, private.name);
                walk(private, &child_path, bindings)
            })
            .collect();
    }

    node.properties()
        .iter()
        .filter_map(|property| binding_for(property, path, bindings))
        .collect()
}

/// Turns an `sMonitoringVar`/`sControlVar` property with a value into a record.
fn binding_for(property: &Property, path: &str, bindings: &BindingTable) -> Option<AttributeBinding> {
    let role = BindingRole::from_property_name(&property.name)?;
    if property.value.is_empty() {
        return None;
    }

    Some(AttributeBinding {
        role,
        path: String::from(path),
        address: bindings.resolve(&property.value),
    })
}
