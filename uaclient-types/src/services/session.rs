use bytes::Bytes;

use crate::{NodeId, StatusCode};

use super::{
    ApplicationDescription, EndpointDescription, RequestHeader, ResponseHeader, SignatureData,
    UserIdentityToken,
};

/// Asks the server to create a new session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateSessionRequest {
    pub request_header: RequestHeader,
    pub client_description: ApplicationDescription,
    pub server_uri: Option<String>,
    pub endpoint_url: String,
    pub session_name: Option<String>,
    pub client_nonce: Bytes,
    pub client_certificate: Bytes,
    /// Milliseconds
    pub requested_session_timeout: f64,
    /// 0 means no limit
    pub max_response_message_size: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateSessionResponse {
    pub response_header: ResponseHeader,
    /// Public identifier of the session
    pub session_id: NodeId,
    /// Secret that must be sent in the header of every later request for the session
    pub authentication_token: NodeId,
    pub revised_session_timeout: f64,
    pub server_nonce: Bytes,
    pub server_certificate: Bytes,
    pub server_endpoints: Vec<EndpointDescription>,
    pub server_signature: SignatureData,
    pub max_request_message_size: u32,
}

/// Presents the user identity for a created session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivateSessionRequest {
    pub request_header: RequestHeader,
    pub client_signature: SignatureData,
    pub locale_ids: Vec<String>,
    pub user_identity_token: UserIdentityToken,
    pub user_token_signature: SignatureData,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivateSessionResponse {
    pub response_header: ResponseHeader,
    pub server_nonce: Bytes,
    pub results: Vec<StatusCode>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CloseSessionRequest {
    pub request_header: RequestHeader,
    pub delete_subscriptions: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CloseSessionResponse {
    pub response_header: ResponseHeader,
}
