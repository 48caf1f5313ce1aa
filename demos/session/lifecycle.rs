use log::{info, LevelFilter};
use uaclient::channel::{channel::ChannelTransport, CancellationToken};
use uaclient::session::{Session, SessionConfig};
use uaclient::types::services::{
    ActivateSessionResponse, CloseSessionResponse, CreateSessionResponse, ResponseHeader,
    ServiceRequest,
};
use uaclient::NodeId;

#[tokio::main]
async fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Trace)
        .init();

    // stands in for a server reached over a secure channel
    let (transport, mut peer) = ChannelTransport::new();
    tokio::spawn(async move {
        while let Some(pending) = peer.next_request().await {
            let header = ResponseHeader::new_good(pending.request.request_header().request_handle);
            match &pending.request {
                ServiceRequest::CreateSession(request) => {
                    info!("Server: creating session {:?}", request.session_name);
                    let response = CreateSessionResponse {
                        response_header: header,
                        session_id: NodeId::numeric(1, 1),
                        authentication_token: NodeId::opaque(0, b"secret".to_vec()),
                        revised_session_timeout: request.requested_session_timeout,
                        ..Default::default()
                    };
                    pending.respond(response);
                }
                ServiceRequest::ActivateSession(request) => {
                    info!(
                        "Server: activating with policy {:?}",
                        request.user_identity_token.policy_id()
                    );
                    pending.respond(ActivateSessionResponse {
                        response_header: header,
                        ..Default::default()
                    });
                }
                ServiceRequest::CloseSession(_) => {
                    pending.respond(CloseSessionResponse {
                        response_header: header,
                    });
                }
            }
        }
    });

    let config = SessionConfig::new("opc.tcp://localhost:4840").with_session_name("demo");
    let mut session = Session::new(transport, config);
    let token = CancellationToken::new();

    let shutdown = token.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            info!("Failed to register CTRL-C handler: {e}");
            return;
        }
        shutdown.cancel();
    });

    if let Err(e) = session.open(&token).await {
        info!("Failed to open session: {e}");
        return;
    }
    info!(
        "Session {} open, timeout {} ms, token {}",
        session.session_id(),
        session.revised_session_timeout(),
        session.authentication_token()
    );

    match session.close(true, &token).await {
        Ok(_) => info!("Session closed"),
        Err(e) => info!("Failed to close session: {e}"),
    }
}
