use bytes::Bytes;

use crate::{DateTime, NodeId, StatusCode};

/// Common parameters sent with every service request
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestHeader {
    /// The secret session identifier issued by the server in the CreateSession response
    pub authentication_token: NodeId,
    pub timestamp: DateTime,
    /// Client assigned handle echoed back in the response header
    pub request_handle: u32,
    pub return_diagnostics: u32,
    pub audit_entry_id: Option<String>,
    /// Milliseconds the client is prepared to wait, 0 for no timeout
    pub timeout_hint: u32,
}

/// Common parameters returned with every service response
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponseHeader {
    pub timestamp: DateTime,
    pub request_handle: u32,
    pub service_result: StatusCode,
    pub string_table: Vec<String>,
}

impl ResponseHeader {
    /// A good header answering the request with the given handle
    pub fn new_good(request_handle: u32) -> Self {
        Self {
            timestamp: DateTime::now(),
            request_handle,
            service_result: StatusCode::GOOD,
            string_table: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApplicationType {
    Server = 0,
    #[default]
    Client = 1,
    ClientAndServer = 2,
    DiscoveryServer = 3,
}

/// Describes an OPC UA application
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationDescription {
    pub application_uri: String,
    pub product_uri: String,
    pub application_name: String,
    pub application_type: ApplicationType,
    pub gateway_server_uri: Option<String>,
    pub discovery_profile_uri: Option<String>,
    pub discovery_urls: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageSecurityMode {
    #[default]
    Invalid = 0,
    None = 1,
    Sign = 2,
    SignAndEncrypt = 3,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EndpointDescription {
    pub endpoint_url: String,
    pub server: ApplicationDescription,
    pub server_certificate: Bytes,
    pub security_mode: MessageSecurityMode,
    pub security_policy_uri: String,
    pub transport_profile_uri: String,
    pub security_level: u8,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignatureData {
    pub algorithm: Option<String>,
    pub signature: Bytes,
}

/// The credentials a client presents when activating a session
#[derive(Clone, Debug, PartialEq)]
pub enum UserIdentityToken {
    Anonymous {
        policy_id: String,
    },
    UserName {
        policy_id: String,
        user_name: String,
        password: Bytes,
        encryption_algorithm: Option<String>,
    },
    X509 {
        policy_id: String,
        certificate_data: Bytes,
    },
    Issued {
        policy_id: String,
        token_data: Bytes,
        encryption_algorithm: Option<String>,
    },
}

impl UserIdentityToken {
    pub fn anonymous<S: Into<String>>(policy_id: S) -> Self {
        UserIdentityToken::Anonymous {
            policy_id: policy_id.into(),
        }
    }

    /// The id of the server's user token policy this token satisfies
    pub fn policy_id(&self) -> &str {
        match self {
            UserIdentityToken::Anonymous { policy_id }
            | UserIdentityToken::UserName { policy_id, .. }
            | UserIdentityToken::X509 { policy_id, .. }
            | UserIdentityToken::Issued { policy_id, .. } => policy_id,
        }
    }
}

impl Default for UserIdentityToken {
    fn default() -> Self {
        Self::anonymous("")
    }
}
