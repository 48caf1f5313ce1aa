use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use uaclient_types::services::{ServiceRequest, ServiceResponse};

use crate::ChannelFault;

#[async_trait]
pub trait RequestChannel {
    /// Sends a request and waits for the response the remote peer correlates with it.
    ///
    /// This method will yield to the async runtime until the response arrives or the exchange fails.
    ///
    /// # Parameters
    ///
    /// - `request`: The request to send
    /// - `token`: Signals that the caller is no longer interested in the response. Implementations
    ///   may use it to abandon the exchange early. Cancelling does not guarantee the remote peer
    ///   did not process the request.
    ///
    /// # Returns
    ///
    /// - `Ok(response)` with whatever response the peer sent back. The response type is not checked
    ///   against the request type.
    /// - `Err(ChannelFault)` if the transport failed or the peer reported a fault
    async fn request(
        &self,
        request: ServiceRequest,
        token: &CancellationToken,
    ) -> Result<ServiceResponse, ChannelFault>;
}

pub type DynRequestChannel = dyn RequestChannel + Send + Sync;
