use thiserror::Error;
use uaclient_channel::ChannelFault;

use crate::SessionState;

/// Errors returned by the session service operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// A required argument was missing. Carries the parameter name.
    #[error("Missing required argument: {0}")]
    Argument(&'static str),
    /// The channel answered with a response of the wrong type.
    #[error("Expected a {expected} but the channel returned a {actual}")]
    ProtocolContract {
        expected: &'static str,
        actual: &'static str,
    },
    #[error("The operation was cancelled")]
    Cancelled,
    #[error(transparent)]
    Channel(#[from] ChannelFault),
    /// The session is not in a state that allows the operation.
    #[error("Cannot {operation} a session in the {state:?} state")]
    InvalidState {
        operation: &'static str,
        state: SessionState,
    },
}

impl ServiceError {
    /// Returns true if the error originated in the request channel
    pub fn is_channel_fault(&self) -> bool {
        matches!(self, ServiceError::Channel(_))
    }
}

#[cfg(test)]
mod tests {
    use uaclient_types::StatusCode;

    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            ServiceError::Argument("request").to_string(),
            "Missing required argument: request"
        );
        assert_eq!(
            ServiceError::ProtocolContract {
                expected: "CloseSessionResponse",
                actual: "CreateSessionResponse"
            }
            .to_string(),
            "Expected a CloseSessionResponse but the channel returned a CreateSessionResponse"
        );
        assert_eq!(
            ServiceError::InvalidState {
                operation: "activate",
                state: SessionState::Closed
            }
            .to_string(),
            "Cannot activate a session in the Closed state"
        );
    }

    #[test]
    fn channel_faults_are_transparent() {
        let fault = ChannelFault::ServiceResult(StatusCode::BAD_TOO_MANY_SESSIONS);
        let err = ServiceError::from(fault.clone());
        assert!(err.is_channel_fault());
        assert_eq!(err.to_string(), fault.to_string());
        assert_eq!(err, ServiceError::Channel(fault));
    }
}
