use uaclient_types::services::{ApplicationDescription, UserIdentityToken};

/// Default requested session timeout in milliseconds
pub const DEFAULT_SESSION_TIMEOUT: f64 = 120_000.0;
/// Default timeout hint placed in request headers, in milliseconds
pub const DEFAULT_TIMEOUT_HINT: u32 = 15_000;

/// Settings used by a [Session](crate::Session) to fill in its requests.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub(crate) endpoint_url: String,
    pub(crate) client_description: ApplicationDescription,
    pub(crate) session_name: Option<String>,
    pub(crate) requested_session_timeout: f64,
    pub(crate) max_response_message_size: u32,
    pub(crate) locale_ids: Vec<String>,
    pub(crate) timeout_hint: u32,
    pub(crate) identity: UserIdentityToken,
}

impl SessionConfig {
    /// Creates a config for a session on the given endpoint.
    ///
    /// Uses an anonymous identity, a requested session timeout of 2 minutes, a timeout hint of
    /// 15 seconds and no response size limit.
    pub fn new<S: Into<String>>(endpoint_url: S) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            client_description: ApplicationDescription::default(),
            session_name: None,
            requested_session_timeout: DEFAULT_SESSION_TIMEOUT,
            max_response_message_size: 0,
            locale_ids: Vec::new(),
            timeout_hint: DEFAULT_TIMEOUT_HINT,
            identity: UserIdentityToken::default(),
        }
    }

    /// Sets the description of the client application sent when creating the session.
    pub fn with_client_description(mut self, description: ApplicationDescription) -> Self {
        self.client_description = description;
        self
    }

    /// Sets a human readable name for the session.
    pub fn with_session_name<S: Into<String>>(mut self, name: S) -> Self {
        self.session_name = Some(name.into());
        self
    }

    /// Sets how long, in milliseconds, the server should keep the session alive without activity.
    ///
    /// The server may revise the value.
    pub fn with_requested_session_timeout(mut self, millis: f64) -> Self {
        self.requested_session_timeout = millis;
        self
    }

    /// Sets the largest response the client accepts. 0 means no limit.
    pub fn with_max_response_message_size(mut self, size: u32) -> Self {
        self.max_response_message_size = size;
        self
    }

    /// Sets the preferred locales, most preferred first.
    pub fn with_locale_ids<I, S>(mut self, locale_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locale_ids = locale_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the timeout hint, in milliseconds, placed in each request header.
    pub fn with_timeout_hint(mut self, millis: u32) -> Self {
        self.timeout_hint = millis;
        self
    }

    /// Sets the identity presented when activating the session.
    pub fn with_identity(mut self, identity: UserIdentityToken) -> Self {
        self.identity = identity;
        self
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    pub fn session_name(&self) -> Option<&str> {
        self.session_name.as_deref()
    }

    pub fn identity(&self) -> &UserIdentityToken {
        &self.identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SessionConfig::new("opc.tcp://localhost:4840");
        assert_eq!(config.endpoint_url(), "opc.tcp://localhost:4840");
        assert_eq!(config.session_name(), None);
        assert_eq!(config.requested_session_timeout, 120_000.0);
        assert_eq!(config.max_response_message_size, 0);
        assert_eq!(config.timeout_hint, 15_000);
        assert_eq!(config.identity(), &UserIdentityToken::anonymous(""));
        assert!(config.locale_ids.is_empty());
    }

    #[test]
    fn builder() {
        let config = SessionConfig::new("opc.tcp://plc:4840")
            .with_session_name("line 3")
            .with_requested_session_timeout(30_000.0)
            .with_max_response_message_size(1 << 20)
            .with_locale_ids(["en-US", "de-DE"])
            .with_timeout_hint(5_000)
            .with_identity(UserIdentityToken::anonymous("anonymous"));
        assert_eq!(config.session_name(), Some("line 3"));
        assert_eq!(config.requested_session_timeout, 30_000.0);
        assert_eq!(config.max_response_message_size, 1 << 20);
        assert_eq!(config.locale_ids, vec!["en-US", "de-DE"]);
        assert_eq!(config.timeout_hint, 5_000);
        assert_eq!(config.identity().policy_id(), "anonymous");
    }
}
