//! Textual identifier grammar.
//!
//! ```text
//! expanded-node-id := [ "svr=" uint32 ";" ] [ "nsu=" uri ";" ] [ "ns=" uint16 ";" ] body
//! node-id          := [ "ns=" uint16 ";" ] body
//! body             := "i=" uint32 | "s=" text | "g=" guid | "b=" base64
//! ```
//!
//! Fields appear in the fixed order shown. The body is always last and a string body
//! consumes the remainder of the input, separators included. Inside the `nsu` value `%` and `;`
//! are percent escaped as `%25` and `%3B`.

use std::{borrow::Cow, fmt, str::FromStr};

use base64::{engine::general_purpose::STANDARD, Engine};
use bytes::Bytes;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use uuid::Uuid;

use crate::{
    constants::{
        FIELD_SEPARATOR, GUID_TAG, NAMESPACE_INDEX_TAG, NAMESPACE_URI_TAG, NUMERIC_TAG,
        OPAQUE_TAG, SERVER_INDEX_TAG, STRING_TAG,
    },
    ExpandedNodeId, IdentifierKind, NodeId,
};

/// Errors produced when parsing the textual identifier grammar.
///
/// Every variant carries the fragment of the input that could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Unexpected or out of order field '{0}'")]
    UnexpectedField(String),
    #[error("Missing identifier field in '{0}'")]
    MissingIdentifier(String),
    #[error("Invalid namespace index '{0}'")]
    InvalidNamespaceIndex(String),
    #[error("Invalid server index '{0}'")]
    InvalidServerIndex(String),
    #[error("Invalid numeric identifier '{0}'")]
    InvalidNumeric(String),
    #[error("Invalid guid identifier '{0}'")]
    InvalidGuid(String),
    #[error("Invalid base64 opaque identifier '{0}'")]
    InvalidOpaque(String),
}

impl FormatError {
    /// The offending fragment of the input
    pub fn fragment(&self) -> &str {
        match self {
            FormatError::UnexpectedField(s)
            | FormatError::MissingIdentifier(s)
            | FormatError::InvalidNamespaceIndex(s)
            | FormatError::InvalidServerIndex(s)
            | FormatError::InvalidNumeric(s)
            | FormatError::InvalidGuid(s)
            | FormatError::InvalidOpaque(s) => s,
        }
    }
}

/// Digits only. Rejects signs and whitespace that `str::parse` would otherwise accept.
fn parse_decimal<T: FromStr>(value: &str) -> Option<T> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Splits off an optional `tag=value;` prefix field.
///
/// A prefix field with no terminating separator can never be followed by an identifier body.
fn split_prefix_field<'a>(
    input: &str,
    s: &'a str,
    tag: &str,
) -> Result<Option<(&'a str, &'a str)>, FormatError> {
    let Some(rest) = s.strip_prefix(tag) else {
        return Ok(None);
    };
    match rest.split_once(FIELD_SEPARATOR) {
        Some(parts) => Ok(Some(parts)),
        None => Err(FormatError::MissingIdentifier(input.to_owned())),
    }
}

fn escape_uri(uri: &str) -> Cow<'_, str> {
    if !uri.contains(['%', FIELD_SEPARATOR]) {
        return Cow::Borrowed(uri);
    }
    let mut out = String::with_capacity(uri.len() + 4);
    for c in uri.chars() {
        match c {
            '%' => out.push_str("%25"),
            FIELD_SEPARATOR => out.push_str("%3B"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Decodes `%XX` escapes in a namespace uri field.
fn unescape_uri(value: &str) -> Result<String, FormatError> {
    if !value.contains('%') {
        return Ok(value.to_owned());
    }
    let invalid = || FormatError::UnexpectedField(format!("{NAMESPACE_URI_TAG}{value}"));

    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }
        let hex = bytes.get(i + 1..i + 3).ok_or_else(invalid)?;
        if !hex.iter().all(u8::is_ascii_hexdigit) {
            return Err(invalid());
        }
        let hex = std::str::from_utf8(hex).map_err(|_| invalid())?;
        out.push(u8::from_str_radix(hex, 16).map_err(|_| invalid())?);
        i += 3;
    }
    String::from_utf8(out).map_err(|_| invalid())
}

fn field_name(s: &str) -> String {
    match s.split_once(FIELD_SEPARATOR) {
        Some((field, _)) => field.to_owned(),
        None => s.to_owned(),
    }
}

fn parse_namespace_index<'a>(input: &str, s: &'a str) -> Result<(u16, &'a str), FormatError> {
    match split_prefix_field(input, s, NAMESPACE_INDEX_TAG)? {
        Some((value, rest)) => match parse_decimal(value) {
            Some(ns) => Ok((ns, rest)),
            None => Err(FormatError::InvalidNamespaceIndex(value.to_owned())),
        },
        None => Ok((0, s)),
    }
}

fn parse_identifier(input: &str, body: &str) -> Result<IdentifierKind, FormatError> {
    if body.is_empty() {
        return Err(FormatError::MissingIdentifier(input.to_owned()));
    }
    let Some((tag, value)) = body.split_once('=') else {
        return Err(FormatError::UnexpectedField(field_name(body)));
    };

    if tag == STRING_TAG {
        return Ok(IdentifierKind::String(value.to_owned()));
    }

    if !matches!(tag, NUMERIC_TAG | GUID_TAG | OPAQUE_TAG) {
        return Err(FormatError::UnexpectedField(field_name(body)));
    }

    // only a string body may contain a separator
    if let Some((_, trailing)) = value.split_once(FIELD_SEPARATOR) {
        return Err(FormatError::UnexpectedField(field_name(trailing)));
    }

    match tag {
        NUMERIC_TAG => parse_decimal(value)
            .map(IdentifierKind::Numeric)
            .ok_or_else(|| FormatError::InvalidNumeric(value.to_owned())),
        GUID_TAG => {
            // hyphenated form only, no braces, urn prefix or simple form
            if value.len() != 36 {
                return Err(FormatError::InvalidGuid(value.to_owned()));
            }
            Uuid::parse_str(value)
                .map(IdentifierKind::Guid)
                .map_err(|_| FormatError::InvalidGuid(value.to_owned()))
        }
        _ => STANDARD
            .decode(value)
            .map(|b| IdentifierKind::Opaque(Bytes::from(b)))
            .map_err(|_| FormatError::InvalidOpaque(value.to_owned())),
    }
}

/// Parse the `node-id` production.
pub fn parse_node_id(input: &str) -> Result<NodeId, FormatError> {
    let (namespace_index, body) = parse_namespace_index(input, input)?;
    let identifier = parse_identifier(input, body)?;
    Ok(NodeId::new(namespace_index, identifier))
}

/// Parse the `expanded-node-id` production.
pub fn parse_expanded_node_id(input: &str) -> Result<ExpandedNodeId, FormatError> {
    let (server_index, rest) = match split_prefix_field(input, input, SERVER_INDEX_TAG)? {
        Some((value, rest)) => match parse_decimal(value) {
            Some(svr) => (svr, rest),
            None => return Err(FormatError::InvalidServerIndex(value.to_owned())),
        },
        None => (0, input),
    };

    let (namespace_uri, rest) = match split_prefix_field(input, rest, NAMESPACE_URI_TAG)? {
        Some((uri, rest)) => (Some(unescape_uri(uri)?), rest),
        None => (None, rest),
    };

    let (namespace_index, body) = parse_namespace_index(input, rest)?;
    let identifier = parse_identifier(input, body)?;

    Ok(ExpandedNodeId::new(
        NodeId::new(namespace_index, identifier),
        namespace_uri,
        server_index,
    ))
}

fn write_identifier(f: &mut fmt::Formatter<'_>, identifier: &IdentifierKind) -> fmt::Result {
    match identifier {
        IdentifierKind::Numeric(v) => write!(f, "{NUMERIC_TAG}={v}"),
        IdentifierKind::String(s) => write!(f, "{STRING_TAG}={s}"),
        IdentifierKind::Guid(g) => write!(f, "{GUID_TAG}={}", g.hyphenated()),
        IdentifierKind::Opaque(b) => write!(f, "{OPAQUE_TAG}={}", STANDARD.encode(b)),
    }
}

fn write_node_id(f: &mut fmt::Formatter<'_>, node_id: &NodeId) -> fmt::Result {
    if node_id.namespace_index() != 0 {
        write!(
            f,
            "{NAMESPACE_INDEX_TAG}{}{FIELD_SEPARATOR}",
            node_id.namespace_index()
        )?;
    }
    write_identifier(f, node_id.identifier())
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node_id(f, self)
    }
}

impl fmt::Display for ExpandedNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.server_index() != 0 {
            write!(f, "{SERVER_INDEX_TAG}{}{FIELD_SEPARATOR}", self.server_index())?;
        }
        if let Some(uri) = self.namespace_uri() {
            write!(f, "{NAMESPACE_URI_TAG}{}{FIELD_SEPARATOR}", escape_uri(uri))?;
        }
        write_node_id(f, self.node_id())
    }
}

impl FromStr for NodeId {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_node_id(s)
    }
}

impl FromStr for ExpandedNodeId {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_expanded_node_id(s)
    }
}

macro_rules! impl_serde_as_string {
    ($type:ty) => {
        impl Serialize for $type {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $type {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(de::Error::custom)
            }
        }
    };
}

impl_serde_as_string!(NodeId);
impl_serde_as_string!(ExpandedNodeId);
