use std::sync::Arc;

use log::{debug, info};
use uaclient_channel::{CancellationToken, DynRequestChannel, RequestChannel};
use uaclient_types::{
    services::{
        ActivateSessionRequest, ActivateSessionResponse, CloseSessionRequest,
        CloseSessionResponse, CreateSessionRequest, CreateSessionResponse, RequestHeader,
    },
    DateTime, NodeId,
};

use crate::{
    service_set::{activate_session, close_session, create_session},
    ServiceError, SessionConfig,
};

/// The lifecycle state of a [Session]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No session has been created yet
    Unestablished,
    /// The server created the session but it has not been activated
    Created,
    Activated,
    Closed,
}

/// A session on a single request channel.
///
/// `Session` drives the session service set in order and keeps the values the server hands out
/// along the way. Every request it sends gets a fresh request handle, the current time, the
/// configured timeout hint and, once the session is created, the authentication token.
///
/// Operations called out of order fail with [ServiceError::InvalidState] without sending anything.
/// A failed or cancelled operation leaves the state unchanged. The server may still have acted
/// on a cancelled request.
///
/// # Examples
///
/// ```no_run
/// use uaclient_channel::CancellationToken;
/// use uaclient_session::{Session, SessionConfig};
/// # async fn run(channel: impl uaclient_channel::RequestChannel + Send + Sync + 'static) {
/// let config = SessionConfig::new("opc.tcp://localhost:4840").with_session_name("demo");
/// let mut session = Session::new(channel, config);
/// let token = CancellationToken::new();
///
/// session.create(&token).await.unwrap();
/// session.activate(&token).await.unwrap();
/// // use the session
/// session.close(true, &token).await.unwrap();
/// # }
/// ```
pub struct Session {
    channel: Arc<DynRequestChannel>,
    config: SessionConfig,
    state: SessionState,
    last_request_handle: u32,
    session_id: NodeId,
    authentication_token: NodeId,
    revised_session_timeout: f64,
    server_nonce: Vec<u8>,
}

impl Session {
    pub fn new<C: RequestChannel + Send + Sync + 'static>(channel: C, config: SessionConfig) -> Self {
        Self::with_shared_channel(Arc::new(channel), config)
    }

    /// Creates a session that shares a channel with other users of it
    pub fn with_shared_channel(channel: Arc<DynRequestChannel>, config: SessionConfig) -> Self {
        Self {
            channel,
            config,
            state: SessionState::Unestablished,
            last_request_handle: 0,
            session_id: NodeId::NULL,
            authentication_token: NodeId::NULL,
            revised_session_timeout: 0.0,
            server_nonce: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The server assigned session id, null until the session is created
    pub fn session_id(&self) -> &NodeId {
        &self.session_id
    }

    /// The token placed in each request header, null until the session is created
    pub fn authentication_token(&self) -> &NodeId {
        &self.authentication_token
    }

    /// The session timeout in milliseconds as revised by the server
    pub fn revised_session_timeout(&self) -> f64 {
        self.revised_session_timeout
    }

    /// The most recent nonce the server returned
    pub fn server_nonce(&self) -> &[u8] {
        &self.server_nonce
    }

    fn ensure_state(
        &self,
        operation: &'static str,
        allowed: &[SessionState],
    ) -> Result<(), ServiceError> {
        if allowed.contains(&self.state) {
            return Ok(());
        }
        debug!("Refusing to {operation} session in state {:?}", self.state);
        Err(ServiceError::InvalidState {
            operation,
            state: self.state,
        })
    }

    fn next_request_handle(&mut self) -> u32 {
        // 0 is never used as a handle
        self.last_request_handle = self.last_request_handle.wrapping_add(1).max(1);
        self.last_request_handle
    }

    /// Builds the header for the next request of this session.
    pub fn request_header(&mut self) -> RequestHeader {
        RequestHeader {
            authentication_token: self.authentication_token.clone(),
            timestamp: DateTime::now(),
            request_handle: self.next_request_handle(),
            return_diagnostics: 0,
            audit_entry_id: None,
            timeout_hint: self.config.timeout_hint,
        }
    }

    fn set_state(&mut self, state: SessionState) {
        info!(
            "Session {} on {}: {:?} -> {:?}",
            self.session_id, self.config.endpoint_url, self.state, state
        );
        self.state = state;
    }

    /// Creates the session on the server.
    ///
    /// Only allowed while [SessionState::Unestablished].
    pub async fn create(
        &mut self,
        token: &CancellationToken,
    ) -> Result<CreateSessionResponse, ServiceError> {
        self.ensure_state("create", &[SessionState::Unestablished])?;

        let request = CreateSessionRequest {
            request_header: self.request_header(),
            client_description: self.config.client_description.clone(),
            server_uri: None,
            endpoint_url: self.config.endpoint_url.clone(),
            session_name: self.config.session_name.clone(),
            requested_session_timeout: self.config.requested_session_timeout,
            max_response_message_size: self.config.max_response_message_size,
            ..Default::default()
        };
        let response = create_session(self.channel.as_ref(), request, token).await?;

        self.session_id = response.session_id.clone();
        self.authentication_token = response.authentication_token.clone();
        self.revised_session_timeout = response.revised_session_timeout;
        self.server_nonce = response.server_nonce.to_vec();
        self.set_state(SessionState::Created);
        Ok(response)
    }

    /// Activates the session with the configured identity.
    ///
    /// Allowed once the session is created. Activating an active session again is allowed and
    /// presents the identity anew.
    pub async fn activate(
        &mut self,
        token: &CancellationToken,
    ) -> Result<ActivateSessionResponse, ServiceError> {
        self.ensure_state("activate", &[SessionState::Created, SessionState::Activated])?;

        let request = ActivateSessionRequest {
            request_header: self.request_header(),
            locale_ids: self.config.locale_ids.clone(),
            user_identity_token: self.config.identity.clone(),
            ..Default::default()
        };
        let response = activate_session(self.channel.as_ref(), request, token).await?;

        self.server_nonce = response.server_nonce.to_vec();
        if self.state != SessionState::Activated {
            self.set_state(SessionState::Activated);
        }
        Ok(response)
    }

    /// Creates and then activates the session.
    pub async fn open(&mut self, token: &CancellationToken) -> Result<(), ServiceError> {
        self.create(token).await?;
        self.activate(token).await?;
        Ok(())
    }

    /// Closes the session, asking the server to also delete its subscriptions if
    /// `delete_subscriptions` is set.
    ///
    /// Allowed once the session is created. The session cannot be used again afterwards.
    pub async fn close(
        &mut self,
        delete_subscriptions: bool,
        token: &CancellationToken,
    ) -> Result<CloseSessionResponse, ServiceError> {
        self.ensure_state("close", &[SessionState::Created, SessionState::Activated])?;

        let request = CloseSessionRequest {
            request_header: self.request_header(),
            delete_subscriptions,
        };
        let response = close_session(self.channel.as_ref(), request, token).await?;

        self.set_state(SessionState::Closed);
        self.authentication_token = NodeId::NULL;
        self.server_nonce.clear();
        Ok(response)
    }
}
