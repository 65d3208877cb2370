// crates/iec61850-mapper/src/model/ied.rs

//! Contains model structs related to `<IED>`.
//! (Schema: `SCL_IED.xsd`)

use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

/// Represents `<IED>` (from XSD `tIED`).
#[derive(Debug, Deserialize, Default)]
pub struct Ied {
    #[serde(rename = "@name", default)]
    pub name: String,

    #[serde(rename = "AccessPoint", default)]
    pub access_point: Vec<AccessPoint>,
}

impl Ied {
    /// The first logical device of the first access point that hosts a server.
    /// Further logical devices are not mapped.
    pub fn first_logical_device(&self) -> Option<&LDevice> {
        self.access_point
            .iter()
            .find_map(|ap| ap.server.as_ref())
            .and_then(|server| server.ldevice.first())
    }
}

/// Represents `<AccessPoint>` (from XSD `tAccessPoint`).
#[derive(Debug, Deserialize, Default)]
pub struct AccessPoint {
    #[serde(rename = "Server", default)]
    pub server: Option<Server>,
}

/// Represents `<Server>` (from XSD `tServer`).
#[derive(Debug, Deserialize, Default)]
pub struct Server {
    #[serde(rename = "LDevice", default)]
    pub ldevice: Vec<LDevice>,
}

/// Represents `<LDevice>` (from XSD `tLDevice`).
#[derive(Debug, Deserialize, Default)]
pub struct LDevice {
    #[serde(rename = "@inst", default)]
    pub inst: String,

    #[serde(rename = "LN0", default)]
    pub ln0: Option<Ln0>,

    #[serde(rename = "LN", default)]
    pub ln: Vec<Ln>,
}

/// Represents `<LN>` (from XSD `tLN`).
#[derive(Debug, Deserialize, Default)]
pub struct Ln {
    #[serde(rename = "@lnType", default)]
    pub ln_type: String,
    #[serde(rename = "@lnClass", default)]
    pub ln_class: String,
    #[serde(rename = "@inst", default)]
    pub inst: String,
}

/// Represents `<LN0>` (from XSD `tLN0`). Only the reporting parts are modelled.
#[derive(Debug, Deserialize, Default)]
pub struct Ln0 {
    #[serde(rename = "DataSet", default)]
    pub data_set: Vec<DataSet>,

    #[serde(rename = "ReportControl", default)]
    pub report_control: Vec<ReportControl>,
}

/// Represents `<DataSet>` (from XSD `tDataSet`).
#[derive(Debug, Deserialize, Default)]
pub struct DataSet {
    #[serde(rename = "@name", default)]
    pub name: String,
}

/// Represents `<ReportControl>` (from XSD `tReportControl`).
#[derive(Debug, Deserialize, Default)]
pub struct ReportControl {
    #[serde(rename = "@name", default)]
    pub name: String,

    /// Name of a sibling `<DataSet>`.
    #[serde(rename = "@datSet", default)]
    pub dat_set: Option<String>,

    #[serde(rename = "RptEnabled", default)]
    pub rpt_enabled: Option<RptEnabled>,
}

/// Represents `<RptEnabled>` (from XSD `tRptEnabled`).
#[derive(Debug, Deserialize, Default)]
pub struct RptEnabled {
    /// xsd:unsignedInt, schema default 1. Kept as text so a bad value
    /// degrades instead of failing the whole document.
    #[serde(rename = "@max", default)]
    pub max: Option<String>,
}
