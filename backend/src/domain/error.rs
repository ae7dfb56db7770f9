//! Classified domain failures.
//!
//! Every pipeline stage ends in either a value or a [`ClassifiedError`]: a
//! failure kind paired with an HTTP-shaped status and a human-readable
//! message. The status is part of the domain contract because callers of both
//! services observe it verbatim; inbound adapters only translate it into their
//! protocol's envelope.

use std::fmt;

/// Message for zipcodes that fail format validation or that the postal
/// directory reports as malformed.
pub const INVALID_ZIPCODE_MESSAGE: &str = "invalid zipcode";
/// Message for well-formed zipcodes that resolve to no location.
pub const ZIPCODE_NOT_FOUND_MESSAGE: &str = "can not find zipcode";
/// Message for unexpected upstream statuses.
pub const REQUEST_FAILED_MESSAGE: &str = "error making request";

const STATUS_BAD_REQUEST: u16 = 400;
const STATUS_NOT_FOUND: u16 = 404;
const STATUS_UNPROCESSABLE_ENTITY: u16 = 422;
const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

/// Failure category carried by a [`ClassifiedError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Raw input is not a well-formed zipcode.
    Validation,
    /// Zipcode is well-formed but resolves to no location.
    NotFound,
    /// The postal directory answered with its own "malformed code" shape.
    UpstreamFormat,
    /// Network failure or unexpected status from a provider.
    Transport,
    /// A provider body matched none of the known shapes.
    Decode,
    /// Classification produced by a remote orchestration service and relayed
    /// as-is across the service hop.
    Relayed,
}

/// A failure kind with its caller-visible status and message.
///
/// # Examples
/// ```
/// use backend::domain::{ClassifiedError, ErrorKind};
///
/// let err = ClassifiedError::zipcode_not_found();
/// assert_eq!(err.kind(), ErrorKind::NotFound);
/// assert_eq!(err.status(), 404);
/// assert_eq!(err.message(), "can not find zipcode");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedError {
    kind: ErrorKind,
    status: u16,
    message: String,
}

impl ClassifiedError {
    fn new(kind: ErrorKind, status: u16, message: impl Into<String>) -> Self {
        Self {
            kind,
            status,
            message: message.into(),
        }
    }

    /// Input failed zipcode validation: `422 invalid zipcode`.
    pub fn invalid_zipcode() -> Self {
        Self::new(
            ErrorKind::Validation,
            STATUS_UNPROCESSABLE_ENTITY,
            INVALID_ZIPCODE_MESSAGE,
        )
    }

    /// Zipcode could not be resolved: `404 can not find zipcode`.
    pub fn zipcode_not_found() -> Self {
        Self::new(
            ErrorKind::NotFound,
            STATUS_NOT_FOUND,
            ZIPCODE_NOT_FOUND_MESSAGE,
        )
    }

    /// Postal directory flagged the code as malformed: `422 invalid zipcode`.
    pub fn upstream_format() -> Self {
        Self::new(
            ErrorKind::UpstreamFormat,
            STATUS_UNPROCESSABLE_ENTITY,
            INVALID_ZIPCODE_MESSAGE,
        )
    }

    /// Transport failure with the best available status.
    ///
    /// `status` is `None` when the call failed before any response existed;
    /// the classification then falls back to `400`.
    pub fn transport(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Transport,
            status.unwrap_or(STATUS_BAD_REQUEST),
            message,
        )
    }

    /// Provider answered with a status the caller does not handle:
    /// `400 error making request`.
    pub fn request_failed() -> Self {
        Self::transport(None, REQUEST_FAILED_MESSAGE)
    }

    /// Provider body could not be decoded: `500` with the parse error text.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode, STATUS_INTERNAL_SERVER_ERROR, message)
    }

    /// Status and message relayed from a remote orchestration service.
    pub fn relayed(status: u16, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Relayed, status, message)
    }

    /// Failure category.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP-shaped status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Human-readable message returned to callers.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl fmt::Display for ClassifiedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.status)
    }
}

impl std::error::Error for ClassifiedError {}
