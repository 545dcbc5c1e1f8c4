use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

/// HTTP method type, re-exported for use with error inspection.
pub use reqwest::Method;
/// HTTP status code type, re-exported for use with error inspection.
pub use reqwest::StatusCode;
/// Response header map, re-exported for use with error inspection.
pub use reqwest::header::HeaderMap;
use reqwest::header;
use serde::Deserialize;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Error related to non-successful HTTP call
    Status,
    /// Error related to a missing or malformed argument, raised before any request is sent
    Validation,
    /// Error related to converting an enum to or from its canonical name
    Codec,
    /// Internal error from dependencies (transport, URL building, JSON decoding)
    Internal,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Validation {
            reason: message.into(),
        }
        .into()
    }

    /// Builds a [`Kind::Status`] error from a non-successful response.
    ///
    /// The body is kept verbatim in `message`; when it carries the API error
    /// envelope, the individual entries are exposed through `errors`.
    pub fn status<S: Into<String>>(
        status_code: StatusCode,
        method: Method,
        path: String,
        headers: HeaderMap,
        message: S,
    ) -> Self {
        let message = message.into();
        let errors = serde_json::from_str::<ErrorEnvelope>(&message)
            .ok()
            .and_then(|envelope| envelope.error)
            .map(|body| body.errors)
            .unwrap_or_default();

        Status {
            status_code,
            method,
            path,
            headers,
            message,
            errors,
        }
        .into()
    }

    /// Builds an error for a successful response whose body could not be decoded.
    ///
    /// The kind is [`Kind::Codec`] when the failure came from an enum field and
    /// [`Kind::Internal`] otherwise.
    pub fn decode(
        status_code: StatusCode,
        headers: HeaderMap,
        body: String,
        source: serde_json::Error,
        enum_error: Option<EnumError>,
    ) -> Self {
        let kind = if enum_error.is_some() {
            Kind::Codec
        } else {
            Kind::Internal
        };

        Error::with_source(
            kind,
            Decode {
                status_code,
                headers,
                body,
                enum_error,
                source,
            },
        )
    }

    /// Returns the HTTP status code when this error came with a response, either a
    /// non-successful one or one whose body could not be decoded.
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        self.downcast_ref::<Status>()
            .map(|s| s.status_code)
            .or_else(|| self.downcast_ref::<Decode>().map(|d| d.status_code))
    }

    /// Returns the response headers when this error came with a response.
    #[must_use]
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.downcast_ref::<Status>()
            .map(|s| &s.headers)
            .or_else(|| self.downcast_ref::<Decode>().map(|d| &d.headers))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// A non-successful HTTP response, with everything the server sent back.
#[non_exhaustive]
#[derive(Debug)]
pub struct Status {
    pub status_code: StatusCode,
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    /// Raw response body.
    pub message: String,
    /// Structured error entries, when the body carried them.
    pub errors: Vec<ApiErrorDetail>,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error({}) making {} call to {} with {}",
            self.status_code, self.method, self.path, self.message
        )
    }
}

impl StdError for Status {}

/// One entry of the `error.errors` array returned by the API.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorDetail {
    pub message_code: String,
    pub message: String,
    pub field: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
}

/// A successful response whose body did not match the expected type.
#[non_exhaustive]
#[derive(Debug)]
pub struct Decode {
    pub status_code: StatusCode,
    pub headers: HeaderMap,
    /// Raw response body.
    pub body: String,
    /// The enum failure behind `source`, when an enum field was at fault.
    pub enum_error: Option<EnumError>,
    pub source: serde_json::Error,
}

impl fmt::Display for Decode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unable to decode {} response: {}",
            self.status_code, self.source
        )
    }
}

impl StdError for Decode {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Validation {
    pub reason: String,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid: {}", self.reason)
    }
}

impl StdError for Validation {}

/// Failure converting a closed enum to or from its canonical representation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumError {
    /// The integer is not one of the declared members (zero never is).
    InvalidValue { type_name: &'static str, value: u8 },
    /// The string is not the canonical name of any declared member.
    InvalidName { type_name: &'static str, name: String },
    /// The JSON value is not a string.
    InvalidShape {
        type_name: &'static str,
        found: String,
    },
}

impl fmt::Display for EnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { type_name, value } => {
                write!(f, "invalid {type_name} value: {value}")
            }
            Self::InvalidName { type_name, name } => {
                write!(f, "invalid {type_name} name: {name:?}")
            }
            Self::InvalidShape { type_name, found } => {
                write!(f, "invalid {type_name} shape: expected a string, found {found}")
            }
        }
    }
}

impl StdError for EnumError {}

impl From<EnumError> for Error {
    fn from(err: EnumError) -> Self {
        Error::with_source(Kind::Codec, err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<header::InvalidHeaderValue> for Error {
    fn from(e: header::InvalidHeaderValue) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<Validation> for Error {
    fn from(err: Validation) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

impl From<Status> for Error {
    fn from(err: Status) -> Self {
        Error::with_source(Kind::Status, err)
    }
}
