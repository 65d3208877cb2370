// crates/iec61850-mapper/src/error.rs

use crate::types::Role;
use alloc::fmt;
use quick_xml::errors::serialize::DeError;

/// Errors that can occur while loading bindings or mapping SCL documents.
///
/// Lookup misses are not errors; they surface as [`crate::Resolution::Unresolved`].
#[derive(Debug)]
pub enum MapperError {
    /// An error from the underlying `quick-xml` deserializer.
    XmlParsing(DeError),

    /// The located-variable pattern failed to compile.
    Pattern(regex::Error),

    /// More documents were supplied than the role accepts.
    TooManyDocuments { role: Role, limit: usize },
}

impl From<DeError> for MapperError {
    fn from(e: DeError) -> Self {
        MapperError::XmlParsing(e)
    }
}

impl From<regex::Error> for MapperError {
    fn from(e: regex::Error) -> Self {
        MapperError::Pattern(e)
    }
}

impl fmt::Display for MapperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapperError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            MapperError::Pattern(e) => write!(f, "Variable pattern error: {}", e),
            MapperError::TooManyDocuments { role, limit } => {
                write!(f, "Only {} SCL file(s) allowed for {} target", limit, role)
            }
        }
    }
}

impl core::error::Error for MapperError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            MapperError::XmlParsing(e) => Some(e),
            MapperError::Pattern(e) => Some(e),
            MapperError::TooManyDocuments { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MapperError;
    use crate::types::Role;
    use alloc::string::ToString;

    #[test]
    fn test_from_de_error() {
        // Create a dummy DeError by failing to parse
        let xml_err = quick_xml::de::from_str::<()>("invalid xml").unwrap_err();
        let err: MapperError = xml_err.into();
        assert!(matches!(err, MapperError::XmlParsing(_)));
    }

    #[test]
    fn test_from_regex_error() {
        let regex_err = regex::Regex::new("(unclosed").unwrap_err();
        let err: MapperError = regex_err.into();
        assert!(matches!(err, MapperError::Pattern(_)));
    }

    #[test]
    fn test_too_many_documents_message() {
        let err = MapperError::TooManyDocuments {
            role: Role::Server,
            limit: 1,
        };
        assert_eq!(err.to_string(), "Only 1 SCL file(s) allowed for server target");
    }
}
