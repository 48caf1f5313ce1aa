//! Part of uaclient, an OPC UA client library.
//!
//! This library defines the OPC UA node identifier types, their text and binary encodings and the
//! session service messages.

pub mod constants;

mod identifier;
mod node_id;
mod expanded_node_id;
mod namespace;
mod xml_encoding_id;
mod status_code;
mod date_time;

pub mod binary;
pub mod grammar;
pub mod services;

pub use identifier::IdentifierKind;
pub use node_id::NodeId;
pub use expanded_node_id::ExpandedNodeId;
pub use namespace::NamespaceTable;
pub use xml_encoding_id::XmlEncodingId;
pub use status_code::StatusCode;
pub use date_time::DateTime;
pub use grammar::FormatError;
pub use binary::{BinaryEncodable, DecodeError};
