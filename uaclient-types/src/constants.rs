pub const SERVER_INDEX_TAG: &str = "svr=";
pub const NAMESPACE_URI_TAG: &str = "nsu=";
pub const NAMESPACE_INDEX_TAG: &str = "ns=";

pub const NUMERIC_TAG: &str = "i";
pub const STRING_TAG: &str = "s";
pub const GUID_TAG: &str = "g";
pub const OPAQUE_TAG: &str = "b";

pub const FIELD_SEPARATOR: char = ';';

/// Namespace index 0 is always reserved for the OPC UA namespace
pub const OPC_UA_NAMESPACE_URI: &str = "http://opcfoundation.org/UA/";

/* Binary NodeId encoding bytes, OPC UA Part 6 5.2.2.9 */
pub const ENCODING_TWO_BYTE: u8 = 0x00;
pub const ENCODING_FOUR_BYTE: u8 = 0x01;
pub const ENCODING_NUMERIC: u8 = 0x02;
pub const ENCODING_STRING: u8 = 0x03;
pub const ENCODING_GUID: u8 = 0x04;
pub const ENCODING_BYTE_STRING: u8 = 0x05;
pub const ENCODING_MASK: u8 = 0x3F;
pub const SERVER_INDEX_FLAG: u8 = 0x40;
pub const NAMESPACE_URI_FLAG: u8 = 0x80;
