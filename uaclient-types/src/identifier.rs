use bytes::Bytes;
use uuid::Uuid;

/// The identifier body of a [NodeId](crate::NodeId).
///
/// Exactly one of the four OPC UA identifier types is held.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    Numeric(u32),
    String(String),
    Guid(Uuid),
    Opaque(Bytes),
}

impl IdentifierKind {
    /// Returns true if the identifier is the null value for its kind
    ///
    /// Zero, the empty string, the nil GUID and the empty byte string are all considered null.
    pub fn is_null(&self) -> bool {
        match self {
            IdentifierKind::Numeric(v) => *v == 0,
            IdentifierKind::String(s) => s.is_empty(),
            IdentifierKind::Guid(g) => g.is_nil(),
            IdentifierKind::Opaque(b) => b.is_empty(),
        }
    }

    /// The single character tag used by the textual grammar
    pub fn tag(&self) -> char {
        match self {
            IdentifierKind::Numeric(_) => 'i',
            IdentifierKind::String(_) => 's',
            IdentifierKind::Guid(_) => 'g',
            IdentifierKind::Opaque(_) => 'b',
        }
    }
}

impl Default for IdentifierKind {
    fn default() -> Self {
        IdentifierKind::Numeric(0)
    }
}

impl From<u32> for IdentifierKind {
    fn from(value: u32) -> Self {
        IdentifierKind::Numeric(value)
    }
}

impl From<&str> for IdentifierKind {
    fn from(value: &str) -> Self {
        IdentifierKind::String(value.to_owned())
    }
}

impl From<String> for IdentifierKind {
    fn from(value: String) -> Self {
        IdentifierKind::String(value)
    }
}

impl From<Uuid> for IdentifierKind {
    fn from(value: Uuid) -> Self {
        IdentifierKind::Guid(value)
    }
}

impl From<Bytes> for IdentifierKind {
    fn from(value: Bytes) -> Self {
        IdentifierKind::Opaque(value)
    }
}

impl From<Vec<u8>> for IdentifierKind {
    fn from(value: Vec<u8>) -> Self {
        IdentifierKind::Opaque(Bytes::from(value))
    }
}
