// crates/iec61850-mapper/src/types.rs

//! Public, ergonomic data structures for representing a resolved mapping.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Placeholder written wherever a lookup failed to resolve.
pub const SENTINEL: &str = "X";

// --- Run Configuration ---

/// The runtime the mapping is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Exposes local PLC variables under SCL paths. Accepts exactly one document.
    Server,
    /// Polls remote IEDs. Accepts one or more documents.
    Client,
}

impl Role {
    /// Maximum number of SCL documents a run may process, if limited.
    pub fn document_limit(self) -> Option<usize> {
        match self {
            Role::Server => Some(1),
            Role::Client => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Server => f.write_str("server"),
            Role::Client => f.write_str("client"),
        }
    }
}

// --- Lookups ---

/// Outcome of a lookup that is allowed to miss.
///
/// A miss never aborts a run. It is kept explicit here and only turned into
/// [`SENTINEL`] when formatted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Resolution {
    Found(String),
    #[default]
    Unresolved,
}

impl Resolution {
    /// Returns the resolved value, or [`SENTINEL`] on a miss.
    pub fn as_str(&self) -> &str {
        match self {
            Resolution::Found(value) => value,
            Resolution::Unresolved => SENTINEL,
        }
    }
}

impl From<Option<String>> for Resolution {
    fn from(value: Option<String>) -> Self {
        value.map_or(Resolution::Unresolved, Resolution::Found)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Attribute Bindings ---

/// Which annotation produced an [`AttributeBinding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingRole {
    /// `sMonitoringVar`: the attribute reports the variable's value.
    Monitor,
    /// `sControlVar`: the attribute writes the variable.
    Control,
}

impl BindingRole {
    /// Maps a `Property@Name` to its role.
    pub(crate) fn from_property_name(name: &str) -> Option<Self> {
        match name {
            "sMonitoringVar" => Some(BindingRole::Monitor),
            "sControlVar" => Some(BindingRole::Control),
            _ => None,
        }
    }
}

impl fmt::Display for BindingRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingRole::Monitor => f.write_str("MONITOR"),
            BindingRole::Control => f.write_str("CONTROL"),
        }
    }
}

/// A binding request discovered in a data attribute's annotations.
///
/// Formats as `<ROLE> <path> <address>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeBinding {
    pub role: BindingRole,
    /// Full SCL path, e.g. `IED1LD0/XCBR1.Pos.stVal`.
    pub path: String,
    /// The located address of the referenced variable.
    pub address: Resolution,
}

impl fmt::Display for AttributeBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.role, self.path, self.address)
    }
}

/// A control point polled by the client. Formats as `<path> <address>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlVariable {
    pub path: String,
    pub address: Resolution,
}

impl fmt::Display for ControlVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path, self.address)
    }
}

// --- Reports ---

/// One enabled instance of a report control block.
///
/// Formats as `<report-path> <dataset-path>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportInstance {
    /// e.g. `IED1LD0/LLN0.RP.urcb01`
    pub path: String,
    /// e.g. `IED1LD0/LLN0$Measurements`
    pub dataset: Resolution,
}

impl fmt::Display for ReportInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path, self.dataset)
    }
}

// --- Documents ---

/// Results the client role gathers per document on top of the bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientDetails {
    /// First `type="IP"` address of the IED's connected access point.
    pub endpoint: Resolution,
    /// Report instances in declaration order, then ascending instance number.
    pub reports: Vec<ReportInstance>,
    /// `sControlVar` bindings in walker order.
    pub control_variables: Vec<ControlVariable>,
}

/// Everything resolved from a single SCL document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentMapping {
    /// `IED@name` of the processed device.
    pub device_name: String,
    /// `sMonitoringVar` / `sControlVar` bindings in document order.
    pub bindings: Vec<AttributeBinding>,
    /// Present only when the document was mapped for the client role.
    pub client: Option<ClientDetails>,
}
