use thiserror::Error;
use uaclient_types::StatusCode;

/// Failures surfaced by a [RequestChannel](crate::RequestChannel) implementation.
///
/// Service layers pass these through to their callers unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChannelFault {
    #[error("The channel is closed")]
    Closed,
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("The server reported a fault: {0}")]
    ServiceResult(StatusCode),
}

impl ChannelFault {
    /// The status code describing the fault
    pub fn status_code(&self) -> StatusCode {
        match self {
            ChannelFault::Closed => StatusCode::BAD_SECURE_CHANNEL_CLOSED,
            ChannelFault::Transport(_) => StatusCode::BAD_COMMUNICATION_ERROR,
            ChannelFault::ServiceResult(code) => *code,
        }
    }
}
