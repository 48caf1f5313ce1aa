use uaclient::{
    channel::{channel::ChannelTransport, CancellationToken},
    session::{Session, SessionConfig, SessionState},
    types::services::{ServiceRequest, ServiceResponse},
    ExpandedNodeId, IdentifierKind, NodeId,
};

#[test]
pub fn identifiers_are_reexported() {
    let id: NodeId = "ns=2;s=Demo".parse().unwrap();
    assert_eq!(id.identifier(), &IdentifierKind::String("Demo".into()));

    let expanded = ExpandedNodeId::from(id.clone());
    assert_eq!(expanded.to_string(), "ns=2;s=Demo");
    assert_eq!(expanded.into_node_id(), id);
}

#[tokio::test]
pub async fn session_over_facade() {
    let (transport, mut peer) = ChannelTransport::new();
    tokio::spawn(async move {
        while let Some(pending) = peer.next_request().await {
            let handle = pending.request.request_header().request_handle;
            let mut response = match &pending.request {
                ServiceRequest::CreateSession(_) => ServiceResponse::CreateSession(Default::default()),
                ServiceRequest::ActivateSession(_) => {
                    ServiceResponse::ActivateSession(Default::default())
                }
                ServiceRequest::CloseSession(_) => ServiceResponse::CloseSession(Default::default()),
            };
            if let ServiceResponse::CreateSession(created) = &mut response {
                created.response_header.request_handle = handle;
                created.authentication_token = NodeId::numeric(0, 99);
            }
            pending.respond(response);
        }
    });

    let mut session = Session::new(transport, SessionConfig::new("opc.tcp://localhost:4840"));
    let token = CancellationToken::new();
    session.open(&token).await.unwrap();
    assert_eq!(session.state(), SessionState::Activated);
    assert_eq!(session.authentication_token(), &NodeId::numeric(0, 99));
    session.close(false, &token).await.unwrap();
    assert_eq!(session.state(), SessionState::Closed);
}
