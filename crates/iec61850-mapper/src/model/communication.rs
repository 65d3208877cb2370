// crates/iec61850-mapper/src/model/communication.rs

//! Contains model structs related to `<Communication>`.
//! (Schema: `SCL_Communication.xsd`)

use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

/// Represents `<Communication>`.
#[derive(Debug, Deserialize, Default)]
pub struct Communication {
    #[serde(rename = "SubNetwork", default)]
    pub sub_network: Vec<SubNetwork>,
}

/// Represents `<SubNetwork>` (from XSD `tSubNetwork`).
#[derive(Debug, Deserialize, Default)]
pub struct SubNetwork {
    #[serde(rename = "ConnectedAP", default)]
    pub connected_ap: Vec<ConnectedAp>,
}

/// Represents `<ConnectedAP>` (from XSD `tConnectedAP`).
#[derive(Debug, Deserialize, Default)]
pub struct ConnectedAp {
    #[serde(rename = "@iedName", default)]
    pub ied_name: String,

    #[serde(rename = "Address", default)]
    pub address: Option<Address>,
}

/// Represents `<Address>` (from XSD `tAddress`).
#[derive(Debug, Deserialize, Default)]
pub struct Address {
    #[serde(rename = "P", default)]
    pub p: Vec<AddressParameter>,
}

/// Represents `<P type="IP">192.168.0.10</P>` (from XSD `tP`).
#[derive(Debug, Deserialize, Default)]
pub struct AddressParameter {
    #[serde(rename = "@type", default)]
    pub p_type: String,

    #[serde(rename = "$text", default)]
    pub value: String,
}
