// crates/iec61850-mapper/src/model/templates.rs

//! Contains model structs related to `<DataTypeTemplates>`.
//! (Schema: `SCL_DataTypeTemplates.xsd`, plus the mapper's `Private`/`Property`
//! annotations on data attributes.)

use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

/// Represents `<DataTypeTemplates>`.
#[derive(Debug, Deserialize, Default)]
pub struct DataTypeTemplates {
    #[serde(rename = "LNodeType", default)]
    pub lnode_type: Vec<LNodeType>,

    #[serde(rename = "DOType", default)]
    pub do_type: Vec<DoType>,
}

/// Represents `<LNodeType>` (from XSD `tLNodeType`).
#[derive(Debug, Deserialize, Default)]
pub struct LNodeType {
    #[serde(rename = "@id", default)]
    pub id: String,

    #[serde(rename = "DO", default)]
    pub data_object: Vec<DataObject>,
}

/// Represents `<DO>` (from XSD `tDO`).
#[derive(Debug, Deserialize, Default)]
pub struct DataObject {
    #[serde(rename = "@name", default)]
    pub name: String,

    /// References a `<DOType>` id.
    #[serde(rename = "@type", default)]
    pub do_type: String,
}

/// Represents `<DOType>` (from XSD `tDOType`).
#[derive(Debug, Deserialize, Default)]
pub struct DoType {
    #[serde(rename = "@id", default)]
    pub id: String,

    #[serde(rename = "DA", default)]
    pub data_attribute: Vec<DataAttribute>,
}

/// Represents `<DA>` (from XSD `tDA`) with its mapper annotations.
#[derive(Debug, Deserialize, Default)]
pub struct DataAttribute {
    #[serde(rename = "Private", default)]
    pub private: Vec<Private>,

    #[serde(rename = "Property", default)]
    pub property: Vec<Property>,
}

/// Represents a `<Private name="...">` annotation container. Containers nest.
#[derive(Debug, Deserialize, Default)]
pub struct Private {
    #[serde(rename = "@name", default)]
    pub name: String,

    #[serde(rename = "Private", default)]
    pub private: Vec<Private>,

    #[serde(rename = "Property", default)]
    pub property: Vec<Property>,
}

/// Represents `<Property Name="..." Value="..."/>`.
#[derive(Debug, Deserialize, Default)]
pub struct Property {
    #[serde(rename = "@Name", alias = "@name", default)]
    pub name: String,

    #[serde(rename = "@Value", alias = "@value", default)]
    pub value: String,
}
