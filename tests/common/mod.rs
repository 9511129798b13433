#![allow(dead_code)]

use solr::{
    Document, Field, FieldSpec, HttpRequest, HttpResponse, HttpTransport, QueryResults, Result,
    ResultParser,
};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

/// Transport double that answers every request from a script and records what was sent.
///
/// Cloning shares the record, so a connection can own one handle while the scenario inspects
/// the other.
#[derive(Debug, Clone)]
pub struct MockTransport {
    requests: Rc<RefCell<Vec<HttpRequest>>>,
    status: u16,
    body: String,
}

impl MockTransport {
    pub fn new(body: &str) -> Self {
        Self::with_status(200, body)
    }

    pub fn with_status(status: u16, body: &str) -> Self {
        Self {
            requests: Rc::new(RefCell::new(vec![])),
            status,
            body: body.to_owned(),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

impl HttpTransport for MockTransport {
    fn send(&self, request: &HttpRequest) -> io::Result<HttpResponse> {
        self.requests.borrow_mut().push(request.clone());

        Ok(HttpResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

/// Transport double whose every exchange breaks down before reaching a server.
#[derive(Debug)]
pub struct FailingTransport;

impl HttpTransport for FailingTransport {
    fn send(&self, _request: &HttpRequest) -> io::Result<HttpResponse> {
        Err(io::Error::new(io::ErrorKind::ConnectionRefused, ""))
    }
}

/// Parser double that ignores the body and returns a scripted page.
#[derive(Debug, Clone)]
pub struct StubParser<D> {
    documents: Vec<D>,
    num_found: u64,
}

impl<D> StubParser<D> {
    pub fn new(documents: Vec<D>, num_found: u64) -> Self {
        Self { documents, num_found }
    }
}

impl<D: Clone> ResultParser<D> for StubParser<D> {
    fn parse(&self, _raw: &str) -> Result<QueryResults<D>> {
        Ok(QueryResults::new(self.documents.clone(), self.num_found))
    }
}

/// Catalog entry the scenarios index and search.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub in_stock: bool,
}

impl Document for Product {
    fn schema() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::unique_key("id"),
            FieldSpec::new("name"),
            FieldSpec::new("in_stock"),
        ];
        FIELDS
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("id", &self.id),
            Field::new("name", &self.name),
            Field::new("in_stock", &self.in_stock),
        ]
    }
}

/// Shape without an identity field, for the scenarios that need one.
#[derive(Debug, Clone)]
pub struct Draft {
    pub body: String,
}

impl Document for Draft {
    fn schema() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[FieldSpec::new("body")];
        FIELDS
    }

    fn fields(&self) -> Vec<Field> {
        vec![Field::new("body", &self.body)]
    }
}
