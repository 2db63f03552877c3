use thiserror::Error;

/// FCM Client Error Types
#[derive(Error, Debug)]
pub enum FCMError {
    /// Key material missing or unparseable. Raised at client construction,
    /// before any request is served.
    #[error("invalid service account credentials: {0}")]
    Credentials(String),

    /// The signing primitive rejected the key or message.
    #[error("failed to sign service account assertion: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// The token endpoint answered with a non-2xx status. Fatal for the
    /// whole batch: without an access token no device can be reached.
    #[error("token exchange failed with status {status}: {body}")]
    TokenExchange { status: u16, body: String },

    /// FCM rejected a single device send. Scoped to that device only.
    #[error("delivery failed with status {status}: {body}")]
    Delivery { status: u16, body: String },

    /// Connection-level failure on either outbound call.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl FCMError {
    /// Whether this error is scoped to one device endpoint rather than the
    /// whole batch.
    pub fn is_per_device(&self) -> bool {
        matches!(self, FCMError::Delivery { .. })
    }
}
