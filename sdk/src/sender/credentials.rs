/// Credentials attached to every request by [`HttpSender`](super::HttpSender).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Secret key pair, for server-side use.
    Static { auth_id: String, auth_token: String },
    /// Embedded (website) key, optionally bound to a referer host.
    Shared { key: String, referer: Option<String> },
}

impl Credentials {
    pub fn new_static(auth_id: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self::Static {
            auth_id: auth_id.into(),
            auth_token: auth_token.into(),
        }
    }

    pub fn new_shared(key: impl Into<String>, referer: Option<String>) -> Self {
        Self::Shared {
            key: key.into(),
            referer,
        }
    }

    /// Query parameters that authenticate a request.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Static {
                auth_id,
                auth_token,
            } => vec![("auth-id", auth_id.as_str()), ("auth-token", auth_token.as_str())],
            Self::Shared { key, .. } => vec![("key", key.as_str())],
        }
    }

    #[must_use]
    pub fn referer(&self) -> Option<&str> {
        match self {
            Self::Shared { referer, .. } => referer.as_deref(),
            Self::Static { .. } => None,
        }
    }
}
