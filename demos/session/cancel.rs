use std::time::Duration;

use log::{info, LevelFilter};
use uaclient::channel::{channel::ChannelTransport, CancellationToken};
use uaclient::session::{create_session, ServiceError};
use uaclient::types::services::CreateSessionRequest;

#[tokio::main]
async fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Trace)
        .init();

    // a server that accepts requests but never answers
    let (transport, mut peer) = ChannelTransport::new();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Some(pending) = peer.next_request().await {
            held.push(pending);
        }
    });

    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(500)).await;
        info!("Giving up on the server");
        canceller.cancel();
    });

    let request = CreateSessionRequest {
        endpoint_url: "opc.tcp://localhost:4840".into(),
        ..Default::default()
    };
    match create_session(&transport, request, &token).await {
        Err(ServiceError::Cancelled) => info!("Request cancelled"),
        other => info!("Unexpected outcome: {other:?}"),
    }
}
