//! The OPC UA Session Service Set.
//!
//! Each operation forwards a single request over a [RequestChannel] and narrows the reply to the
//! response type of the service. Sessions move through `Unestablished -> Created -> Activated ->
//! Closed`; these functions do not track that state themselves, see [Session](crate::Session)
//! for a handle that does.

use log::{debug, trace, warn};
use tokio::select;
use uaclient_channel::{CancellationToken, RequestChannel};
use uaclient_types::services::{
    ActivateSessionRequest, ActivateSessionResponse, CloseSessionRequest, CloseSessionResponse,
    CreateSessionRequest, CreateSessionResponse, ServiceMessage, ServiceRequest, ServiceResponse,
};

use crate::ServiceError;

async fn call<C, Req, Resp>(
    channel: &C,
    request: Option<Req>,
    token: &CancellationToken,
) -> Result<Resp, ServiceError>
where
    C: RequestChannel + ?Sized,
    Req: ServiceMessage + Into<ServiceRequest>,
    Resp: ServiceMessage + TryFrom<ServiceResponse, Error = ServiceResponse>,
{
    let request = match request {
        Some(request) => request.into(),
        None => {
            debug!("Rejecting {} call without a request", Req::TYPE_NAME);
            return Err(ServiceError::Argument("request"));
        }
    };

    let handle = request.request_header().request_handle;
    trace!("Sending {} handle={handle}", Req::TYPE_NAME);

    // a token cancelled before the call never reaches the channel
    let response = select! {
        biased;
        _ = token.cancelled() => {
            warn!("{} handle={handle} cancelled", Req::TYPE_NAME);
            return Err(ServiceError::Cancelled);
        }
        response = channel.request(request, token) => response?,
    };

    trace!("Received {} for handle={handle}", response.type_name());
    Resp::try_from(response).map_err(|other| {
        debug!(
            "Expected {} for handle={handle} but got {}",
            Resp::TYPE_NAME,
            other.type_name()
        );
        ServiceError::ProtocolContract {
            expected: Resp::TYPE_NAME,
            actual: other.type_name(),
        }
    })
}

/// Asks the server to create a session.
///
/// The returned response carries the session id and the authentication token that must be
/// placed in the header of every later request for the session.
///
/// # Errors
///
/// - [ServiceError::Argument] if `request` is `None`. The channel is not used.
/// - [ServiceError::Cancelled] if `token` is cancelled before the response arrives.
/// - [ServiceError::ProtocolContract] if the channel returns a response of another type.
/// - [ServiceError::Channel] with the channel's fault, unchanged.
pub async fn create_session<C>(
    channel: &C,
    request: impl Into<Option<CreateSessionRequest>>,
    token: &CancellationToken,
) -> Result<CreateSessionResponse, ServiceError>
where
    C: RequestChannel + ?Sized,
{
    call(channel, request.into(), token).await
}

/// Activates a created session with the user identity in the request.
///
/// Fails in the same ways as [create_session].
pub async fn activate_session<C>(
    channel: &C,
    request: impl Into<Option<ActivateSessionRequest>>,
    token: &CancellationToken,
) -> Result<ActivateSessionResponse, ServiceError>
where
    C: RequestChannel + ?Sized,
{
    call(channel, request.into(), token).await
}

/// Closes a session.
///
/// Fails in the same ways as [create_session].
pub async fn close_session<C>(
    channel: &C,
    request: impl Into<Option<CloseSessionRequest>>,
    token: &CancellationToken,
) -> Result<CloseSessionResponse, ServiceError>
where
    C: RequestChannel + ?Sized,
{
    call(channel, request.into(), token).await
}
