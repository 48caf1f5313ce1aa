use async_trait::async_trait;
use log::trace;
use tokio::sync::{mpsc, oneshot};
use tokio_util::sync::CancellationToken;
use uaclient_types::services::{ServiceRequest, ServiceResponse};

use crate::ChannelFault;

type Reply = Result<ServiceResponse, ChannelFault>;

/// A [RequestChannel](crate::RequestChannel) implementation that uses channels for message passing.
///
/// Each request carries its own reply slot, so responses reach the caller that issued the
/// request no matter what order the [ChannelPeer] answers in.
///
/// # Examples
///
/// See [ChannelPeer]
#[derive(Clone)]
pub struct ChannelTransport {
    tx: mpsc::UnboundedSender<PendingRequest>,
}

impl ChannelTransport {
    /// Creates a new transport along with the peer that receives its requests.
    pub fn new() -> (Self, ChannelPeer) {
        let (tx, rx_request) = mpsc::unbounded_channel();
        (Self { tx }, ChannelPeer { rx_request })
    }
}

#[async_trait]
impl crate::RequestChannel for ChannelTransport {
    async fn request(
        &self,
        request: ServiceRequest,
        _token: &CancellationToken,
    ) -> Result<ServiceResponse, ChannelFault> {
        let (reply_tx, reply_rx) = oneshot::channel();
        trace!("Dispatching {}", request.type_name());
        if self
            .tx
            .send(PendingRequest {
                request,
                reply: reply_tx,
            })
            .is_err()
        {
            return Err(ChannelFault::Closed);
        }
        match reply_rx.await {
            Ok(reply) => reply,
            Err(_) => Err(ChannelFault::Closed),
        }
    }
}

/// A request waiting for the [ChannelPeer] to answer it.
#[derive(Debug)]
pub struct PendingRequest {
    pub request: ServiceRequest,
    reply: oneshot::Sender<Reply>,
}

impl PendingRequest {
    /// Completes the exchange with a response.
    ///
    /// Returns `false` if the requester is no longer waiting, e.g. because it was cancelled.
    pub fn respond<R: Into<ServiceResponse>>(self, response: R) -> bool {
        self.reply.send(Ok(response.into())).is_ok()
    }

    /// Completes the exchange with a fault.
    pub fn fail(self, fault: ChannelFault) -> bool {
        self.reply.send(Err(fault)).is_ok()
    }

    /// Returns true if the requester has stopped waiting for a reply
    pub fn is_abandoned(&self) -> bool {
        self.reply.is_closed()
    }
}

/// The remote end of a [ChannelTransport].
///
/// Used to inspect the requests a transport issues and to answer them.
///
/// # Examples
///
/// ```no_run
/// use uaclient_channel::{channel::ChannelTransport, CancellationToken, RequestChannel};
/// use uaclient_types::services::{CloseSessionRequest, CloseSessionResponse};
/// use tokio::runtime::Runtime;
///
/// let rt = Runtime::new().unwrap();
/// rt.block_on(async {
///     let (transport, mut peer) = ChannelTransport::new();
///
///     tokio::spawn(async move {
///         let pending = peer.next_request().await.unwrap();
///         pending.respond(CloseSessionResponse::default());
///     });
///
///     let token = CancellationToken::new();
///     let response = transport
///         .request(CloseSessionRequest::default().into(), &token)
///         .await
///         .unwrap();
/// });
/// ```
pub struct ChannelPeer {
    pub rx_request: mpsc::UnboundedReceiver<PendingRequest>,
}

impl ChannelPeer {
    /// Waits for the next request. Returns `None` once every transport handle has been dropped.
    pub async fn next_request(&mut self) -> Option<PendingRequest> {
        self.rx_request.recv().await
    }

    /// Returns a request if one is already queued
    pub fn try_next_request(&mut self) -> Option<PendingRequest> {
        self.rx_request.try_recv().ok()
    }
}
