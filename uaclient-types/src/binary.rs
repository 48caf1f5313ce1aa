//! OPC UA binary encoding of node identifiers (Part 6, 5.2.2.9 and 5.2.2.10).

use std::string::FromUtf8Error;

use bytes::{Buf, BufMut, Bytes};
use thiserror::Error;
use uuid::Uuid;

use crate::{
    constants::{
        ENCODING_BYTE_STRING, ENCODING_FOUR_BYTE, ENCODING_GUID, ENCODING_MASK, ENCODING_NUMERIC,
        ENCODING_STRING, ENCODING_TWO_BYTE, NAMESPACE_URI_FLAG, SERVER_INDEX_FLAG,
    },
    ExpandedNodeId, IdentifierKind, NodeId,
};

/// Errors produced when decoding binary identifiers.
#[derive(Error, Debug, PartialEq)]
pub enum DecodeError {
    #[error("Unexpected end of buffer, needed {needed} bytes but {remaining} remain")]
    UnexpectedEof { needed: usize, remaining: usize },
    #[error("Invalid node id encoding byte {0:#04x}")]
    InvalidEncodingByte(u8),
    #[error("Invalid length prefix {0}")]
    InvalidLength(i32),
    #[error("String was not valid utf8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

/// A type with an OPC UA binary representation
pub trait BinaryEncodable: Sized {
    /// Number of bytes [BinaryEncodable::encode] will write
    fn encoded_len(&self) -> usize;

    fn encode<B: BufMut>(&self, buf: &mut B);

    fn decode<B: Buf>(buf: &mut B) -> Result<Self, DecodeError>;

    fn encode_to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.encode(&mut out);
        out
    }
}

fn ensure_remaining<B: Buf>(buf: &B, needed: usize) -> Result<(), DecodeError> {
    if buf.remaining() < needed {
        return Err(DecodeError::UnexpectedEof {
            needed,
            remaining: buf.remaining(),
        });
    }
    Ok(())
}

fn get_u8<B: Buf>(buf: &mut B) -> Result<u8, DecodeError> {
    ensure_remaining(buf, 1)?;
    Ok(buf.get_u8())
}

fn get_u16<B: Buf>(buf: &mut B) -> Result<u16, DecodeError> {
    ensure_remaining(buf, 2)?;
    Ok(buf.get_u16_le())
}

fn get_u32<B: Buf>(buf: &mut B) -> Result<u32, DecodeError> {
    ensure_remaining(buf, 4)?;
    Ok(buf.get_u32_le())
}

/// Length prefixed byte string. A length of -1 is the null byte string and decodes as empty.
fn get_byte_string<B: Buf>(buf: &mut B) -> Result<Bytes, DecodeError> {
    ensure_remaining(buf, 4)?;
    let len = buf.get_i32_le();
    if len == -1 {
        return Ok(Bytes::new());
    }
    let len = usize::try_from(len).map_err(|_| DecodeError::InvalidLength(len))?;
    ensure_remaining(buf, len)?;
    Ok(buf.copy_to_bytes(len))
}

fn get_string<B: Buf>(buf: &mut B) -> Result<String, DecodeError> {
    let bytes = get_byte_string(buf)?;
    Ok(String::from_utf8(bytes.to_vec())?)
}

fn put_byte_string<B: BufMut>(buf: &mut B, bytes: &[u8]) {
    buf.put_i32_le(bytes.len() as i32);
    buf.put_slice(bytes);
}

fn node_id_len(namespace_index: u16, identifier: &IdentifierKind) -> usize {
    match identifier {
        IdentifierKind::Numeric(v) if namespace_index == 0 && *v <= u8::MAX as u32 => 2,
        IdentifierKind::Numeric(v) if namespace_index <= u8::MAX as u16 && *v <= u16::MAX as u32 => 4,
        IdentifierKind::Numeric(_) => 7,
        IdentifierKind::String(s) => 7 + s.len(),
        IdentifierKind::Guid(_) => 19,
        IdentifierKind::Opaque(b) => 7 + b.len(),
    }
}

/// Writes the most compact form for the identifier, or'ing `flags` into the encoding byte.
fn put_node_id<B: BufMut>(
    buf: &mut B,
    flags: u8,
    namespace_index: u16,
    identifier: &IdentifierKind,
) {
    match identifier {
        IdentifierKind::Numeric(v) if namespace_index == 0 && *v <= u8::MAX as u32 => {
            buf.put_u8(ENCODING_TWO_BYTE | flags);
            buf.put_u8(*v as u8);
        }
        IdentifierKind::Numeric(v) if namespace_index <= u8::MAX as u16 && *v <= u16::MAX as u32 => {
            buf.put_u8(ENCODING_FOUR_BYTE | flags);
            buf.put_u8(namespace_index as u8);
            buf.put_u16_le(*v as u16);
        }
        IdentifierKind::Numeric(v) => {
            buf.put_u8(ENCODING_NUMERIC | flags);
            buf.put_u16_le(namespace_index);
            buf.put_u32_le(*v);
        }
        IdentifierKind::String(s) => {
            buf.put_u8(ENCODING_STRING | flags);
            buf.put_u16_le(namespace_index);
            put_byte_string(buf, s.as_bytes());
        }
        IdentifierKind::Guid(g) => {
            buf.put_u8(ENCODING_GUID | flags);
            buf.put_u16_le(namespace_index);
            buf.put_slice(&g.to_bytes_le());
        }
        IdentifierKind::Opaque(b) => {
            buf.put_u8(ENCODING_BYTE_STRING | flags);
            buf.put_u16_le(namespace_index);
            put_byte_string(buf, b);
        }
    }
}

/// Reads the node id body following an encoding byte whose flag bits have been stripped.
fn get_node_id_body<B: Buf>(buf: &mut B, encoding: u8) -> Result<NodeId, DecodeError> {
    let node_id = match encoding {
        ENCODING_TWO_BYTE => NodeId::numeric(0, get_u8(buf)? as u32),
        ENCODING_FOUR_BYTE => {
            let namespace_index = get_u8(buf)? as u16;
            NodeId::numeric(namespace_index, get_u16(buf)? as u32)
        }
        ENCODING_NUMERIC => {
            let namespace_index = get_u16(buf)?;
            NodeId::numeric(namespace_index, get_u32(buf)?)
        }
        ENCODING_STRING => {
            let namespace_index = get_u16(buf)?;
            NodeId::string(namespace_index, get_string(buf)?)
        }
        ENCODING_GUID => {
            let namespace_index = get_u16(buf)?;
            ensure_remaining(buf, 16)?;
            let mut bytes = [0u8; 16];
            buf.copy_to_slice(&mut bytes);
            NodeId::guid(namespace_index, Uuid::from_bytes_le(bytes))
        }
        ENCODING_BYTE_STRING => {
            let namespace_index = get_u16(buf)?;
            NodeId::opaque(namespace_index, get_byte_string(buf)?)
        }
        other => return Err(DecodeError::InvalidEncodingByte(other)),
    };
    Ok(node_id)
}

impl BinaryEncodable for NodeId {
    fn encoded_len(&self) -> usize {
        node_id_len(self.namespace_index(), self.identifier())
    }

    fn encode<B: BufMut>(&self, buf: &mut B) {
        put_node_id(buf, 0, self.namespace_index(), self.identifier())
    }

    fn decode<B: Buf>(buf: &mut B) -> Result<Self, DecodeError> {
        let encoding = get_u8(buf)?;
        if encoding & !ENCODING_MASK != 0 {
            return Err(DecodeError::InvalidEncodingByte(encoding));
        }
        get_node_id_body(buf, encoding)
    }
}

impl BinaryEncodable for ExpandedNodeId {
    fn encoded_len(&self) -> usize {
        // the index is not sent when the uri is
        let namespace_index = match self.namespace_uri() {
            Some(_) => 0,
            None => self.namespace_index(),
        };
        let mut len = node_id_len(namespace_index, self.identifier());
        if let Some(uri) = self.namespace_uri() {
            len += 4 + uri.len();
        }
        if self.server_index() != 0 {
            len += 4;
        }
        len
    }

    fn encode<B: BufMut>(&self, buf: &mut B) {
        let mut flags = 0;
        let mut namespace_index = self.namespace_index();
        if self.namespace_uri().is_some() {
            flags |= NAMESPACE_URI_FLAG;
            namespace_index = 0;
        }
        if self.server_index() != 0 {
            flags |= SERVER_INDEX_FLAG;
        }
        put_node_id(buf, flags, namespace_index, self.identifier());
        if let Some(uri) = self.namespace_uri() {
            put_byte_string(buf, uri.as_bytes());
        }
        if self.server_index() != 0 {
            buf.put_u32_le(self.server_index());
        }
    }

    fn decode<B: Buf>(buf: &mut B) -> Result<Self, DecodeError> {
        let encoding = get_u8(buf)?;
        let node_id = get_node_id_body(buf, encoding & ENCODING_MASK)?;
        let namespace_uri = match encoding & NAMESPACE_URI_FLAG {
            0 => None,
            _ => Some(get_string(buf)?),
        };
        let server_index = match encoding & SERVER_INDEX_FLAG {
            0 => 0,
            _ => get_u32(buf)?,
        };
        Ok(ExpandedNodeId::new(node_id, namespace_uri, server_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all<T: BinaryEncodable>(bytes: &[u8]) -> Result<T, DecodeError> {
        let mut buf = bytes;
        let value = T::decode(&mut buf)?;
        assert!(buf.is_empty(), "trailing bytes left after decode");
        Ok(value)
    }

    fn assert_encoding<T: BinaryEncodable + PartialEq + std::fmt::Debug>(value: T, expected: &[u8]) {
        let bytes = value.encode_to_vec();
        assert_eq!(bytes, expected);
        assert_eq!(value.encoded_len(), expected.len());
        assert_eq!(decode_all::<T>(&bytes).unwrap(), value);
    }

    #[test]
    fn node_id_compact_forms() {
        assert_encoding(NodeId::numeric(0, 72), &[0x00, 0x48]);
        assert_encoding(NodeId::numeric(5, 1025), &[0x01, 0x05, 0x01, 0x04]);
        assert_encoding(NodeId::numeric(0, 256), &[0x01, 0x00, 0x00, 0x01]);
        assert_encoding(
            NodeId::numeric(256, 1),
            &[0x02, 0x00, 0x01, 0x01, 0x00, 0x00, 0x00],
        );
        assert_encoding(
            NodeId::numeric(1, 65536),
            &[0x02, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00],
        );
    }

    #[test]
    fn node_id_string_guid_opaque() {
        assert_encoding(
            NodeId::string(1, "Hot水"),
            &[
                0x03, 0x01, 0x00, 0x06, 0x00, 0x00, 0x00, 0x48, 0x6F, 0x74, 0xE6, 0xB0, 0xB4,
            ],
        );

        let guid = Uuid::parse_str("72962b91-fa75-4ae6-8d28-b404dc7daf63").unwrap();
        assert_encoding(
            NodeId::guid(4, guid),
            &[
                0x04, 0x04, 0x00, 0x91, 0x2b, 0x96, 0x72, 0x75, 0xfa, 0xe6, 0x4a, 0x8d, 0x28,
                0xb4, 0x04, 0xdc, 0x7d, 0xaf, 0x63,
            ],
        );

        assert_encoding(
            NodeId::opaque(2, vec![0x61, 0x62, 0x63]),
            &[0x05, 0x02, 0x00, 0x03, 0x00, 0x00, 0x00, 0x61, 0x62, 0x63],
        );
    }

    #[test]
    fn expanded_node_id_flags() {
        assert_encoding(ExpandedNodeId::from(NodeId::numeric(0, 1)), &[0x00, 0x01]);
        assert_encoding(
            ExpandedNodeId::new(NodeId::numeric(0, 1), Some("urn:a".into()), 5),
            &[
                0xC0, 0x01, 0x05, 0x00, 0x00, 0x00, b'u', b'r', b'n', b':', b'a', 0x05, 0x00,
                0x00, 0x00,
            ],
        );
        assert_encoding(
            ExpandedNodeId::new(NodeId::numeric(3, 1), None, 2),
            &[0x41, 0x03, 0x01, 0x00, 0x02, 0x00, 0x00, 0x00],
        );
    }

    #[test]
    fn uri_replaces_index_on_the_wire() {
        let id = ExpandedNodeId::new(NodeId::numeric(7, 1), Some("urn:a".into()), 0);
        let decoded: ExpandedNodeId = decode_all(&id.encode_to_vec()).unwrap();
        assert_eq!(decoded.namespace_index(), 0);
        assert_eq!(decoded.namespace_uri(), Some("urn:a"));
        assert_eq!(decoded.identifier(), id.identifier());
    }

    #[test]
    fn null_lengths_decode_empty() {
        let id: NodeId = decode_all(&[0x03, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff]).unwrap();
        assert_eq!(id, NodeId::string(0, ""));
        let id: NodeId = decode_all(&[0x05, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff]).unwrap();
        assert_eq!(id, NodeId::opaque(0, Bytes::new()));
    }

    #[test]
    fn decode_errors() {
        assert_eq!(
            decode_all::<NodeId>(&[]),
            Err(DecodeError::UnexpectedEof {
                needed: 1,
                remaining: 0
            })
        );
        assert_eq!(
            decode_all::<NodeId>(&[0x01, 0x00, 0x01]),
            Err(DecodeError::UnexpectedEof {
                needed: 2,
                remaining: 1
            })
        );
        assert_eq!(
            decode_all::<NodeId>(&[0x06, 0x00]),
            Err(DecodeError::InvalidEncodingByte(0x06))
        );
        // expanded flags are not valid on a plain node id
        assert_eq!(
            decode_all::<NodeId>(&[0x40, 0x00]),
            Err(DecodeError::InvalidEncodingByte(0x40))
        );
        assert_eq!(
            decode_all::<NodeId>(&[0x03, 0x00, 0x00, 0xfe, 0xff, 0xff, 0xff]),
            Err(DecodeError::InvalidLength(-2))
        );
        assert!(matches!(
            decode_all::<NodeId>(&[0x03, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0xff]),
            Err(DecodeError::InvalidUtf8(_))
        ));
        assert_eq!(
            decode_all::<ExpandedNodeId>(&[0x80, 0x01]),
            Err(DecodeError::UnexpectedEof {
                needed: 4,
                remaining: 0
            })
        );
    }
}
