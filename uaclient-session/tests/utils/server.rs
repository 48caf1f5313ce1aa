#![allow(dead_code)]

use bytes::Bytes;
use uaclient_channel::{
    channel::{ChannelPeer, PendingRequest},
    ChannelFault,
};
use uaclient_types::{
    services::{
        ActivateSessionResponse, CloseSessionResponse, CreateSessionResponse, ResponseHeader,
        ServiceRequest,
    },
    NodeId, StatusCode,
};

pub const SERVER_NONCE: &[u8] = b"server-nonce";

pub fn session_id() -> NodeId {
    NodeId::numeric(1, 5001)
}

pub fn authentication_token() -> NodeId {
    "ns=1;g=72962b91-fa75-4ae6-8d28-b404dc7daf63".parse().unwrap()
}

/// Answers a single request the way a server hosting one session would.
pub fn answer(pending: PendingRequest) {
    let header = ResponseHeader::new_good(pending.request.request_header().request_handle);
    let token = &pending.request.request_header().authentication_token;

    match &pending.request {
        ServiceRequest::CreateSession(request) => {
            let response = CreateSessionResponse {
                response_header: header,
                session_id: session_id(),
                authentication_token: authentication_token(),
                revised_session_timeout: request.requested_session_timeout.min(60_000.0),
                server_nonce: Bytes::from_static(SERVER_NONCE),
                ..Default::default()
            };
            pending.respond(response);
        }
        ServiceRequest::ActivateSession(_) | ServiceRequest::CloseSession(_)
            if *token != authentication_token() =>
        {
            pending.fail(ChannelFault::ServiceResult(
                StatusCode::BAD_SESSION_ID_INVALID,
            ));
        }
        ServiceRequest::ActivateSession(_) => {
            let response = ActivateSessionResponse {
                response_header: header,
                server_nonce: Bytes::from_static(b"activated"),
                results: Vec::new(),
            };
            pending.respond(response);
        }
        ServiceRequest::CloseSession(_) => {
            pending.respond(CloseSessionResponse {
                response_header: header,
            });
        }
    }
}

/// Runs the server until every transport handle is dropped, returning the requests it saw.
pub async fn serve(mut peer: ChannelPeer) -> Vec<ServiceRequest> {
    let mut seen = Vec::new();
    while let Some(pending) = peer.next_request().await {
        seen.push(pending.request.clone());
        answer(pending);
    }
    seen
}
