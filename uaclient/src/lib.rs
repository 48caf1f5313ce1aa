//! uaclient, an OPC UA client library.
//!
//! - [types]: node identifiers, their text and binary encodings and the service messages
//! - [channel]: the request channel abstraction services are sent over
//! - [session]: the Session Service Set (feature `session`, enabled by default)

pub use uaclient_channel as channel;
#[cfg(feature = "session")]
pub use uaclient_session as session;
pub use uaclient_types as types;

pub use uaclient_types::{ExpandedNodeId, IdentifierKind, NodeId, XmlEncodingId};
