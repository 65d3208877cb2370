// crates/iec61850-mapper/src/resolver/index.rs

//! The two structural lookup tables built per document before the walk.

use super::DeviceContext;
use crate::model::DataTypeTemplates;
use crate::model::ied::LDevice;
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use log::debug;

/// `LN@lnType` -> `LN@lnClass + LN@inst` (e.g. `XCBR1`).
#[derive(Debug, Default)]
pub(crate) struct LogicalNodeIndex<'a> {
    labels: BTreeMap<&'a str, String>,
}

impl<'a> LogicalNodeIndex<'a> {
    /// Indexes every `<LN>` of the logical device. When several LNs share a
    /// type, the last one declared wins.
    pub(crate) fn build(ldevice: Option<&'a LDevice>) -> Self {
        let mut labels = BTreeMap::new();

        for ln in ldevice.into_iter().flat_map(|ld| ld.ln.iter()) {
            labels.insert(ln.ln_type.as_str(), format!("{}{}", ln.ln_class, ln.inst));
        }

        debug!("Indexed {} logical node types", labels.len());
        Self { labels }
    }

    pub(crate) fn label(&self, ln_type: &str) -> Option<&str> {
        self.labels.get(ln_type).map(String::as_str)
    }
}

/// `DO@type` -> full data object path (e.g. `IED1LD0/XCBR1.Pos`).
#[derive(Debug, Default)]
pub(crate) struct DataObjectIndex<'a> {
    paths: BTreeMap<&'a str, String>,
}

impl<'a> DataObjectIndex<'a> {
    /// Composes `prefix + "/" + ln-label + "." + DO@name` for every `<DO>` of
    /// every `<LNodeType>`.
    ///
    /// An `LNodeType` no LN instantiates contributes an empty label, giving a
    /// path like `IED1LD0/.Pos`. Later `<DO>`s with the same type overwrite
    /// earlier ones.
    pub(crate) fn build(
        templates: Option<&'a DataTypeTemplates>,
        ln_index: &LogicalNodeIndex<'_>,
        device: &DeviceContext<'_>,
    ) -> Self {
        let prefix = device.prefix();
        let mut paths = BTreeMap::new();

        for lnode_type in templates.into_iter().flat_map(|t| t.lnode_type.iter()) {
            let label = ln_index.label(&lnode_type.id).unwrap_or_else(|| {
                debug!("LNodeType '{}' is not instantiated by any LN", lnode_type.id);
                ""
            });

            for data_object in &lnode_type.data_object {
                paths.insert(
                    data_object.do_type.as_str(),
                    format!("{}/{}.{}", prefix, label, data_object.name),
                );
            }
        }

        debug!("Indexed {} data object types", paths.len());
        Self { paths }
    }

    pub(crate) fn path(&self, do_type: &str) -> Option<&str> {
        self.paths.get(do_type).map(String::as_str)
    }
}
