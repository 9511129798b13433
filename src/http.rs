use std::io;

/// HTTP method of a [`HttpRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Reads a resource, with parameters in the query string.
    Get,
    /// Submits a payload in the request body.
    Post,
}

/// A single request for a [`HttpTransport`] to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method.
    pub method: Method,
    /// The absolute URL, query string included.
    pub url: String,
    /// The request body, present on [`Method::Post`].
    pub body: Option<String>,
}

/// The outcome of a carried-out [`HttpRequest`], whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The response body as text.
    pub body: String,
}

/// Carries out HTTP exchanges on behalf of a [`Connection`].
///
/// A transport reports every completed exchange as [`Ok`], failure statuses included. Mapping
/// statuses onto the error taxonomy belongs to the [`Connection`]. Only problems that keep an
/// exchange from completing at all, e.g. an unreachable server or a timeout, surface as [`Err`].
///
/// [`Connection`]: crate::connection::Connection
pub trait HttpTransport {
    /// Carries out a single exchange, returning the response regardless of its status code.
    fn send(&self, request: &HttpRequest) -> io::Result<HttpResponse>;
}

/// The bundled [`HttpTransport`].
///
/// # Example
/// ```
/// use solr::{ClientError, Connection, UreqTransport};
///
/// fn main() -> Result<(), ClientError> {
///     let connection = Connection::with_transport("http://localhost:8983/solr", UreqTransport::new())?;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Returns a transport with its own agent. The agent hands failure statuses back as
    /// responses instead of treating them as errors.
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();

        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> io::Result<HttpResponse> {
        let mut response = match request.method {
            Method::Get => self.agent.get(&request.url).call(),
            Method::Post => self
                .agent
                .post(&request.url)
                .content_type("text/xml; charset=utf-8")
                .send(request.body.as_deref().unwrap_or("").as_bytes()),
        }
        .map_err(io::Error::other)?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().map_err(io::Error::other)?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_formats_as_debug() {
        let transport = UreqTransport::new();
        let _ = format!("{:?}", transport);
    }

    #[test]
    fn test_default_transport_matches_new() {
        let _ = UreqTransport::default();
    }

    #[test]
    fn test_request_to_unreachable_server_fails() {
        let transport = UreqTransport::new();
        let request = HttpRequest {
            method: Method::Get,
            url: "http://localhost:1".to_owned(),
            body: None,
        };

        let _ = transport.send(&request).expect_err("Operation must fail");
    }
}
