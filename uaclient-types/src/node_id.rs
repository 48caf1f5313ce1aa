use bytes::Bytes;
use uuid::Uuid;

use crate::{grammar, ExpandedNodeId, FormatError, IdentifierKind, NamespaceTable};

/// A namespace scoped identifier of a node in a server's address space.
///
/// The text form is `[ns=<index>;]<kind>=<value>` and is available through
/// [Display](std::fmt::Display) and [FromStr](std::str::FromStr).
///
/// # Examples
///
/// ```
/// use uaclient_types::NodeId;
///
/// let id: NodeId = "ns=2;s=Demo".parse().unwrap();
/// assert_eq!(id, NodeId::string(2, "Demo"));
/// assert_eq!(NodeId::numeric(0, 42).to_string(), "i=42");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodeId {
    namespace_index: u16,
    identifier: IdentifierKind,
}

impl NodeId {
    /// The null NodeId, `ns=0;i=0`
    pub const NULL: NodeId = NodeId {
        namespace_index: 0,
        identifier: IdentifierKind::Numeric(0),
    };

    pub fn new<I: Into<IdentifierKind>>(namespace_index: u16, identifier: I) -> Self {
        Self {
            namespace_index,
            identifier: identifier.into(),
        }
    }

    pub fn numeric(namespace_index: u16, value: u32) -> Self {
        Self::new(namespace_index, IdentifierKind::Numeric(value))
    }

    pub fn string<S: Into<String>>(namespace_index: u16, value: S) -> Self {
        Self::new(namespace_index, IdentifierKind::String(value.into()))
    }

    pub fn guid(namespace_index: u16, value: Uuid) -> Self {
        Self::new(namespace_index, IdentifierKind::Guid(value))
    }

    pub fn opaque<B: Into<Bytes>>(namespace_index: u16, value: B) -> Self {
        Self::new(namespace_index, IdentifierKind::Opaque(value.into()))
    }

    /// Parse a NodeId from its text form
    pub fn parse(s: &str) -> Result<Self, FormatError> {
        grammar::parse_node_id(s)
    }

    pub fn namespace_index(&self) -> u16 {
        self.namespace_index
    }

    pub fn identifier(&self) -> &IdentifierKind {
        &self.identifier
    }

    /// Returns true if this is in namespace 0 and the identifier is the null value for its kind
    pub fn is_null(&self) -> bool {
        self.namespace_index == 0 && self.identifier.is_null()
    }

    /// Creates an [ExpandedNodeId] carrying the namespace uri registered for this id's namespace index.
    ///
    /// Namespace 0 and indices missing from the table keep the plain index.
    pub fn to_expanded_node_id(&self, namespace_uris: &NamespaceTable) -> ExpandedNodeId {
        if self.namespace_index == 0 {
            return ExpandedNodeId::from(self.clone());
        }
        match namespace_uris.uri(self.namespace_index) {
            Some(uri) => ExpandedNodeId::new(
                NodeId::new(0, self.identifier.clone()),
                Some(uri.to_owned()),
                0,
            ),
            None => ExpandedNodeId::from(self.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn null_node_id() {
        assert!(NodeId::NULL.is_null());
        assert!(NodeId::default().is_null());
        assert_eq!(NodeId::default(), NodeId::NULL);
        assert!(NodeId::string(0, "").is_null());
        assert!(NodeId::guid(0, Uuid::nil()).is_null());
        assert!(!NodeId::numeric(1, 0).is_null());
        assert!(!NodeId::numeric(0, 1).is_null());
    }

    #[test]
    fn equality_and_hashing() {
        let mut map = HashMap::new();
        map.insert(NodeId::numeric(1, 5), "a");
        map.insert(NodeId::string(1, "5"), "b");
        map.insert(NodeId::numeric(2, 5), "c");
        assert_eq!(map.len(), 3);
        assert_eq!(map.get(&NodeId::numeric(1, 5)), Some(&"a"));
        assert_eq!(map.get(&NodeId::parse("ns=1;s=5").unwrap()), Some(&"b"));
    }

    #[test]
    fn to_expanded_node_id_uses_table() {
        let mut table = NamespaceTable::new();
        table.push("urn:demo");

        let expanded = NodeId::string(1, "Pump").to_expanded_node_id(&table);
        assert_eq!(expanded.namespace_uri(), Some("urn:demo"));
        assert_eq!(expanded.namespace_index(), 0);
        assert_eq!(expanded.to_string(), "nsu=urn:demo;s=Pump");

        let unknown = NodeId::numeric(7, 1).to_expanded_node_id(&table);
        assert_eq!(unknown, ExpandedNodeId::from(NodeId::numeric(7, 1)));

        let standard = NodeId::numeric(0, 85).to_expanded_node_id(&table);
        assert_eq!(standard.namespace_uri(), None);
    }
}
