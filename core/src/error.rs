use std::fmt;
use thiserror::Error as ThisError;

/// The error type for ncp-client operations.
///
/// The rendered message (`Display`) is part of the observable contract of
/// this library: validation failures carry the rule's literal message and
/// classified transport failures carry fixed strings such as
/// `No response from the server`. The [`ErrorKind`] is preserved alongside
/// so callers can match on the taxonomy instead of string content.
#[derive(ThisError, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A client-side rule rejected the input; no network call was made.
    Validation,

    /// The resolved request URL is not a well-formed http(s) URL.
    InvalidUrl,

    /// The server answered with a status outside the success range.
    HttpStatus(u16),

    /// The request went out but no response arrived (connect/timeout).
    NoResponse,

    /// The request could not even be dispatched.
    RequestSetup,

    /// The HTTP call succeeded but the payload does not match the
    /// operation's documented shape.
    MalformedResponse,

    /// Anything that does not fit the taxonomy above.
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error.
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check whether this error was produced before any network attempt.
    pub fn is_pre_flight(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation | ErrorKind::InvalidUrl)
    }
}

// Convenience constructors. The literal messages here are observable
// behavior and must not change.
impl Error {
    /// Create a validation error carrying the failed rule's message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create an invalid-url error.
    pub fn invalid_url() -> Self {
        Self::new(ErrorKind::InvalidUrl, "Invalid URL")
    }

    /// Create an unexpected-status error for the given HTTP status code.
    pub fn http_status(code: u16) -> Self {
        Self::new(
            ErrorKind::HttpStatus(code),
            format!("Unexpected HTTP Status Code : {code}"),
        )
    }

    /// Create a no-response error.
    pub fn no_response() -> Self {
        Self::new(ErrorKind::NoResponse, "No response from the server")
    }

    /// Create a request-setup error.
    pub fn request_setup() -> Self {
        Self::new(ErrorKind::RequestSetup, "Error occured during setup request")
    }

    /// Create a malformed-response error.
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedResponse, message)
    }

    /// Create an unexpected error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Validation => write!(f, "validation rejected"),
            ErrorKind::InvalidUrl => write!(f, "invalid url"),
            ErrorKind::HttpStatus(code) => write!(f, "unexpected http status {code}"),
            ErrorKind::NoResponse => write!(f, "no response"),
            ErrorKind::RequestSetup => write!(f, "request setup failed"),
            ErrorKind::MalformedResponse => write!(f, "malformed response"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, Error>;

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_setup().with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_setup().with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderName> for Error {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Self::request_setup().with_source(anyhow::Error::from(err))
    }
}
