use std::str::FromStr;

use crate::{grammar, FormatError, NodeId};

/// Identifies the DefaultXml encoding node of a data type.
///
/// Declared once from a literal in the expanded node id text form. The literal is parsed when the
/// value is created so a malformed declaration fails immediately instead of at first use. Only
/// the [NodeId] part of the parsed id is kept.
///
/// # Examples
///
/// ```
/// use uaclient_types::{NodeId, XmlEncodingId};
///
/// let id = XmlEncodingId::new("i=462").unwrap();
/// assert_eq!(id.node_id(), &NodeId::numeric(0, 462));
/// assert!(XmlEncodingId::new("x=bad").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct XmlEncodingId {
    node_id: NodeId,
}

impl XmlEncodingId {
    pub fn new(s: &str) -> Result<Self, FormatError> {
        let expanded = grammar::parse_expanded_node_id(s)?;
        Ok(Self {
            node_id: expanded.into_node_id(),
        })
    }

    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }
}

impl FromStr for XmlEncodingId {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<XmlEncodingId> for NodeId {
    fn from(value: XmlEncodingId) -> Self {
        value.node_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn create() {
        let cases = vec![
            ("i=1000", NodeId::numeric(0, 1000)),
            ("ns=2;i=1000", NodeId::numeric(2, 1000)),
            ("ns=2;s=Demo.Static", NodeId::string(2, "Demo.Static")),
            (
                "ns=2;g=72962b91-fa75-4ae6-8d28-b404dc7daf63",
                NodeId::guid(2, Uuid::parse_str("72962b91-fa75-4ae6-8d28-b404dc7daf63").unwrap()),
            ),
            ("ns=2;b=YWJj", NodeId::opaque(2, vec![0x61, 0x62, 0x63])),
            ("nsu=http://example.org;i=1", NodeId::numeric(0, 1)),
            ("svr=5;nsu=http://example.org;ns=3;s=x", NodeId::string(3, "x")),
        ];
        for (s, expected) in cases {
            let att = XmlEncodingId::new(s).unwrap();
            assert_eq!(att.node_id(), &expected, "creating from {s}");
        }
    }

    #[test]
    fn malformed_literal_fails_at_construction() {
        assert_eq!(
            XmlEncodingId::new("x=bad"),
            Err(FormatError::UnexpectedField("x=bad".into()))
        );
        assert!("i=abc".parse::<XmlEncodingId>().is_err());
        assert!(XmlEncodingId::new("").is_err());
    }
}
