use crate::errors::ConnectionFailure;
use crate::http::{HttpRequest, HttpTransport, Method, UreqTransport};
use crate::{ClientError, Result};
use std::collections::BTreeMap;
use url::Url;

/// How a status code maps onto the error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResponseClass {
    Success,
    BadRequest,
    Failed,
}

/// Classifies a status code. This is the only place a status turns into an outcome.
fn classify(status: u16) -> ResponseClass {
    match status {
        200..=299 => ResponseClass::Success,
        400 => ResponseClass::BadRequest,
        _ => ResponseClass::Failed,
    }
}

/// Represents a validated address of one server endpoint, bound to the transport that talks
/// to it.
///
/// The address is checked once, on construction; no request leaves over an invalid one. All
/// methods borrow the connection immutably, so one connection can serve many threads when its
/// transport can.
///
/// # Example
/// ```
/// use solr::{ClientError, Connection};
///
/// fn main() -> Result<(), ClientError> {
///     let connection = Connection::new("http://localhost:8983/solr")?;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Connection<T = UreqTransport>
where
    T: HttpTransport,
{
    base_url: String,
    transport: T,
}

impl Connection<UreqTransport> {
    /// Returns a connection to the given server over the bundled transport.
    ///
    /// # Arguments
    /// *  `base_url` address of the server core, e.g. `http://localhost:8983/solr`.
    ///
    /// # Example
    /// ```
    /// use solr::{ClientError, Connection};
    ///
    /// fn main() -> Result<(), ClientError> {
    ///     let connection = Connection::new("http://localhost:8983/solr")?;
    ///     let invalid = Connection::new("ftp://localhost:8983/solr");
    ///     assert!(matches!(invalid, Err(ClientError::InvalidUrl { .. })));
    ///     Ok(())
    /// }
    /// ```
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_transport(base_url, UreqTransport::new())
    }
}

impl<T> Connection<T>
where
    T: HttpTransport,
{
    /// Returns a connection to the given server over a custom transport.
    ///
    /// Typically, you only need to use this method when substituting the transport, e.g. with
    /// a recording double in tests. For regular usage, refer to the `Connection::new` method.
    ///
    /// # Example
    /// ```
    /// use solr::{ClientError, Connection, UreqTransport};
    ///
    /// fn main() -> Result<(), ClientError> {
    ///     let connection = Connection::with_transport("https://localhost:8983/solr", UreqTransport::new())?;
    ///     Ok(())
    /// }
    /// ```
    pub fn with_transport(base_url: &str, transport: T) -> Result<Self> {
        // The WHATWG parser repairs "http:/host" into "http://host", so the prefix check
        // cannot be left to it.
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl {
                url: base_url.to_owned(),
                reason: "the scheme must be http or https".to_owned(),
            });
        }
        if let Err(e) = Url::parse(base_url) {
            return Err(ClientError::InvalidUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            });
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            transport,
        })
    }

    /// Sends one GET request and returns the response body.
    ///
    /// Parameters are percent-encoded into the query string. An empty map appends nothing,
    /// not even the `?` separator.
    ///
    /// # Arguments
    /// *  `path` path below the base address, starting with `/`.
    /// *  `parameters` query string parameters.
    pub fn get(&self, path: &str, parameters: &BTreeMap<String, String>) -> Result<String> {
        let url = self.build_url(path, parameters)?;
        self.exchange(&HttpRequest {
            method: Method::Get,
            url,
            body: None,
        })
    }

    /// Sends one POST request with the given payload and returns the response body.
    ///
    /// # Arguments
    /// *  `path` path below the base address, starting with `/`.
    /// *  `body` the payload, sent as-is.
    pub fn post(&self, path: &str, body: &str) -> Result<String> {
        let url = self.build_url(path, &BTreeMap::new())?;
        self.exchange(&HttpRequest {
            method: Method::Post,
            url,
            body: Some(body.to_owned()),
        })
    }

    fn build_url(&self, path: &str, parameters: &BTreeMap<String, String>) -> Result<String> {
        let raw = format!("{}{}", self.base_url, path);
        if parameters.is_empty() {
            return Ok(raw);
        }

        let mut url = Url::parse(&raw).map_err(|e| ClientError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        url.query_pairs_mut().extend_pairs(parameters);

        Ok(url.into())
    }

    fn exchange(&self, request: &HttpRequest) -> Result<String> {
        let response = self.transport.send(request)?;

        match classify(response.status) {
            ResponseClass::Success => Ok(response.body),
            ResponseClass::BadRequest => Err(ClientError::InvalidField { message: response.body }),
            ResponseClass::Failed => Err(ClientError::Connection(ConnectionFailure::Status {
                status: response.status,
                body: response.body,
            })),
        }
    }
}
