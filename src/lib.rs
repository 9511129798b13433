//! A typed client library for Apache Solr search servers.
//!
//! Document shapes are declared once with the [`Document`] trait and then pushed to the index,
//! deleted and searched through a [`Client`], which talks to one server core over a
//! [`Connection`]. Update commands and query parameters are rendered by the crate; decoding
//! response bodies stays behind the [`ResultParser`] trait.
//!
//! # Example
//! ```no_run
//! use solr::{Client, Connection, Document, Field, FieldSpec, Query, Result};
//!
//! struct Product {
//!     id: i32,
//!     name: String,
//! }
//!
//! impl Document for Product {
//!     fn schema() -> &'static [FieldSpec] {
//!         const FIELDS: &[FieldSpec] = &[FieldSpec::unique_key("id"), FieldSpec::new("name")];
//!         FIELDS
//!     }
//!
//!     fn fields(&self) -> Vec<Field> {
//!         vec![Field::new("id", &self.id), Field::new("name", &self.name)]
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     let connection = Connection::new("http://localhost:8983/solr/products")?;
//!     let client = Client::new(connection, ());
//!
//!     client.add(&Product { id: 123456, name: "iPod".to_owned() })?;
//!     client.commit()?;
//!     client.delete_by_query(&Query::new("name:obsolete"))?;
//!     Ok(())
//! }
//! ```
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(unused)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::private_intra_doc_links)]
#![warn(rustdoc::private_doc_tests)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]
#![warn(rustdoc::invalid_html_tags)]
#![warn(rustdoc::invalid_rust_codeblocks)]
#![warn(rustdoc::bare_urls)]
mod client;
mod command;
mod connection;
mod document;
mod errors;
mod escape;
mod http;
mod query;
mod results;

pub use client::Client;
pub use connection::Connection;
pub use document::{unique_key, Document, Field, FieldSpec, ToFieldValue};
pub use errors::{ClientError, ConnectionFailure};
pub use http::{HttpRequest, HttpResponse, HttpTransport, Method, UreqTransport};
pub use query::{Order, ParseSortError, Query, SortOrder};
pub use results::{QueryResults, ResultParser};

/// A [`Result`] with its [`Err`] variant set to [`ClientError`].
///
/// [`Result`]: std::result::Result
/// [`Err`]: std::result::Result::Err
/// [`ClientError`]: crate::errors::ClientError
pub type Result<T> = std::result::Result<T, ClientError>;
