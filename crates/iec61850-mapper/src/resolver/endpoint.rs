// crates/iec61850-mapper/src/resolver/endpoint.rs

//! Extracts the IED's IP address from the `<Communication>` section.

use crate::model::Communication;
use crate::model::communication::ConnectedAp;
use crate::types::Resolution;
use alloc::string::String;
use alloc::vec::Vec;
use log::debug;

const IP_TYPE: &str = "IP";

/// The first `type="IP"` address of the document's connected access point.
pub(crate) fn resolve_endpoint(communication: Option<&Communication>, ied_name: &str) -> Resolution {
    let addresses = ip_addresses(communication);
    if addresses.len() > 1 {
        debug!(
            "IED '{}' lists {} IP addresses; using the first",
            ied_name,
            addresses.len()
        );
    }

    addresses.first().map(|ip| String::from(*ip)).into()
}

/// Every `type="IP"` entry of the selected access point, in document order.
pub(crate) fn ip_addresses(communication: Option<&Communication>) -> Vec<&str> {
    select_access_point(communication)
        .and_then(|ap| ap.address.as_ref())
        .map(|address| {
            address
                .p
                .iter()
                .filter(|p| p.p_type == IP_TYPE)
                .map(|p| p.value.trim())
                .collect()
        })
        .unwrap_or_default()
}

/// The first `<ConnectedAP>` of the first `<SubNetwork>`. Later subnetworks
/// are never consulted, whatever their `iedName`.
fn select_access_point(communication: Option<&Communication>) -> Option<&ConnectedAp> {
    communication?.sub_network.first()?.connected_ap.first()
}
