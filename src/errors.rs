use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

/// The error type for the operations of the [`Client`], [`Connection`] and associated structs and traits.
///
/// Errors mostly occur while communicating with the server, but can also happen e.g. when describing
/// document shapes.
///
/// [`Client`]: crate::client::Client
/// [`Connection`]: crate::connection::Connection
#[derive(Debug)]
pub enum ClientError {
    /// The server address is not a valid `http` or `https` URL.
    InvalidUrl {
        /// The rejected address.
        url: String,
        /// What makes the address invalid.
        reason: String,
    },
    /// The exchange with the server broke down, in transport or with a failure status.
    Connection(ConnectionFailure),
    /// The server rejected the request as malformed, typically over an unknown field name.
    InvalidField {
        /// The server's own description of the problem.
        message: String,
    },
    /// The document shape has no field marked as the unique key, yet the operation needs one.
    NoUniqueKey {
        /// Name of the document type.
        type_name: &'static str,
    },
    /// The document shape marks more than one field as the unique key.
    MultipleUniqueKeys {
        /// Name of the document type.
        type_name: &'static str,
        /// First field marked as the unique key.
        first: &'static str,
        /// Second field marked as the unique key.
        second: &'static str,
    },
    /// The unique key field of this document carries no value to address it by.
    MissingUniqueKeyValue {
        /// Name of the document type.
        type_name: &'static str,
        /// Name of the unique key field.
        field: &'static str,
    },
    /// The response body could not be decoded into results.
    ResultParse(Box<dyn Error + Send + Sync>),
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &*self {
            ClientError::InvalidUrl { url, reason } => write!(f, "invalid server URL {}: {}", url, reason),
            ClientError::Connection(ref e) => e.fmt(f),
            ClientError::InvalidField { message } => write!(f, "{}", message),
            ClientError::NoUniqueKey { type_name } => {
                write!(f, "document type {} has no unique key field", type_name)
            }
            ClientError::MultipleUniqueKeys { type_name, first, second } => write!(
                f,
                "document type {} marks both {} and {} as unique key fields",
                type_name, first, second
            ),
            ClientError::MissingUniqueKeyValue { type_name, field } => write!(
                f,
                "document type {} has no value in its unique key field {}",
                type_name, field
            ),
            ClientError::ResultParse(ref e) => e.fmt(f),
        }
    }
}

impl Error for ClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ClientError::Connection(e) => Some(e),
            ClientError::ResultParse(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<io::Error> for ClientError {
    fn from(err: io::Error) -> ClientError {
        ClientError::Connection(ConnectionFailure::Transport(err))
    }
}

/// The way an exchange with the server broke down.
#[derive(Debug)]
pub enum ConnectionFailure {
    /// The request never completed, e.g. the server is unreachable or the connection timed out.
    Transport(io::Error),
    /// The server answered with a failure status other than a rejected request.
    Status {
        /// The HTTP status code.
        status: u16,
        /// The response body as received.
        body: String,
    },
}

impl Display for ConnectionFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &*self {
            ConnectionFailure::Transport(ref e) => e.fmt(f),
            ConnectionFailure::Status { status, body } => {
                write!(f, "server answered with status {}: {}", status, body)
            }
        }
    }
}

impl Error for ConnectionFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConnectionFailure::Transport(e) => Some(e),
            ConnectionFailure::Status { .. } => None,
        }
    }
}
