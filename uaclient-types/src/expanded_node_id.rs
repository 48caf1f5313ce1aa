use crate::{grammar, FormatError, IdentifierKind, NamespaceTable, NodeId};

/// A [NodeId] that may name its namespace by uri and may live on another server.
///
/// When a namespace uri is present it takes precedence over the namespace index when the id is
/// resolved. Both are kept in the value so the text form round trips exactly.
///
/// # Examples
///
/// ```
/// use uaclient_types::{ExpandedNodeId, NodeId};
///
/// let id: ExpandedNodeId = "svr=5;nsu=http://example.org;i=1".parse().unwrap();
/// assert_eq!(id.server_index(), 5);
/// assert_eq!(id.namespace_uri(), Some("http://example.org"));
/// assert_eq!(id.node_id(), &NodeId::numeric(0, 1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExpandedNodeId {
    node_id: NodeId,
    namespace_uri: Option<String>,
    server_index: u32,
}

impl ExpandedNodeId {
    pub fn new(node_id: NodeId, namespace_uri: Option<String>, server_index: u32) -> Self {
        Self {
            node_id,
            namespace_uri,
            server_index,
        }
    }

    /// Parse an ExpandedNodeId from its text form
    pub fn parse(s: &str) -> Result<Self, FormatError> {
        grammar::parse_expanded_node_id(s)
    }

    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    pub fn namespace_index(&self) -> u16 {
        self.node_id.namespace_index()
    }

    pub fn identifier(&self) -> &IdentifierKind {
        self.node_id.identifier()
    }

    pub fn namespace_uri(&self) -> Option<&str> {
        self.namespace_uri.as_deref()
    }

    pub fn server_index(&self) -> u32 {
        self.server_index
    }

    /// True when the node lives on the local server
    pub fn is_local(&self) -> bool {
        self.server_index == 0
    }

    pub fn is_null(&self) -> bool {
        self.node_id.is_null() && self.namespace_uri.is_none() && self.server_index == 0
    }

    /// Drops the namespace uri and server index.
    ///
    /// The namespace index is kept as is. If the id was addressed by uri, use
    /// [ExpandedNodeId::to_node_id] to resolve the index instead.
    pub fn into_node_id(self) -> NodeId {
        self.node_id
    }

    /// Resolves this id to a [NodeId] in the namespace table of the local server.
    ///
    /// Returns `None` when the id refers to another server or its namespace uri is not in the table.
    pub fn to_node_id(&self, namespace_uris: &NamespaceTable) -> Option<NodeId> {
        if !self.is_local() {
            return None;
        }
        match &self.namespace_uri {
            Some(uri) => {
                let index = namespace_uris.index_of(uri)?;
                Some(NodeId::new(index, self.node_id.identifier().clone()))
            }
            None => Some(self.node_id.clone()),
        }
    }
}

impl From<NodeId> for ExpandedNodeId {
    fn from(node_id: NodeId) -> Self {
        Self::new(node_id, None, 0)
    }
}
