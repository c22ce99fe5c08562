//! ResRobot client errors.

/// Errors from talking to ResRobot.
#[derive(Debug, thiserror::Error)]
pub enum ResRobotError {
    #[error("request to ResRobot failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The access ID was rejected (HTTP 401 or 403)
    #[error("ResRobot rejected the API key")]
    Unauthorized,

    /// HTTP 429; the key's quota is used up for now
    #[error("ResRobot quota exceeded")]
    QuotaExceeded,

    /// Any other non-success HTTP status
    #[error("ResRobot returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// A 200 response carrying `errorCode` instead of data, e.g.
    /// `SVC_LOC` for an unknown stop ID
    #[error("ResRobot error {code}{}", .text.as_deref().map(|t| format!(": {t}")).unwrap_or_default())]
    ErrorCode { code: String, text: Option<String> },

    /// The body was not the expected JSON; `excerpt` holds its start
    #[error("unexpected ResRobot response ({message}): {excerpt}")]
    Decode { message: String, excerpt: String },

    /// A trip search answered without a `Trip` list
    #[error("no trips in response")]
    NoTrips,
}
