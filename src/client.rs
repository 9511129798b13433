use crate::command::{DeleteFlags, UpdateCommand, WaitFlags};
use crate::connection::Connection;
use crate::document::{unique_key, Document};
use crate::http::HttpTransport;
use crate::query::Query;
use crate::results::{QueryResults, ResultParser};
use crate::{ClientError, Result};
use std::any::type_name;
use std::marker::PhantomData;

/// Path all index-changing commands are posted to.
const UPDATE_PATH: &str = "/update";
/// Path searches are issued against.
const SELECT_PATH: &str = "/select";

/// Represents an interface to work with one document shape against the server. Its main purpose
/// is to push index changes and run [queries](crate::Query).
///
/// Index changes work with any parser in place; searching needs one that implements
/// [`ResultParser`] for the shape.
///
/// # Example
/// ```no_run
/// use solr::{Client, ClientError, Connection, Document, Field, FieldSpec, Query};
/// use solr::{QueryResults, Result, ResultParser};
///
/// struct Product {
///     id: i32,
///     name: String,
/// }
///
/// impl Document for Product {
///     fn schema() -> &'static [FieldSpec] {
///         const FIELDS: &[FieldSpec] = &[FieldSpec::unique_key("id"), FieldSpec::new("name")];
///         FIELDS
///     }
///
///     fn fields(&self) -> Vec<Field> {
///         vec![Field::new("id", &self.id), Field::new("name", &self.name)]
///     }
/// }
///
/// struct EmptyParser;
///
/// impl ResultParser<Product> for EmptyParser {
///     fn parse(&self, _raw: &str) -> Result<QueryResults<Product>> {
///         Ok(QueryResults::new(vec![], 0))
///     }
/// }
///
/// fn main() -> Result<()> {
///     let connection = Connection::new("http://localhost:8983/solr/products")?;
///     let client = Client::new(connection, EmptyParser);
///
///     client.add(&Product { id: 123456, name: "iPod".to_owned() })?;
///     client.commit()?;
///
///     let results = client.query(&Query::new("name:iPod"))?;
///     for product in &results {
///         println!("{}", product.name);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Client<D, T, P>
where
    T: HttpTransport,
{
    connection: Connection<T>,
    parser: P,
    document: PhantomData<fn() -> D>,
}

impl<D, T, P> Client<D, T, P>
where
    D: Document,
    T: HttpTransport,
{
    /// Returns a new client for one document shape, bound to the given connection and parser.
    ///
    /// Clients that only push index changes never call the parser; `()` does fine there.
    ///
    /// # Example
    /// ```
    /// use solr::{Client, ClientError, Connection, Document, Field, FieldSpec};
    ///
    /// struct Event {
    ///     id: i32,
    /// }
    ///
    /// impl Document for Event {
    ///     fn schema() -> &'static [FieldSpec] {
    ///         const FIELDS: &[FieldSpec] = &[FieldSpec::unique_key("id")];
    ///         FIELDS
    ///     }
    ///
    ///     fn fields(&self) -> Vec<Field> {
    ///         vec![Field::new("id", &self.id)]
    ///     }
    /// }
    ///
    /// fn main() -> Result<(), ClientError> {
    ///     let connection = Connection::new("http://localhost:8983/solr/events")?;
    ///     let client: Client<Event, _, _> = Client::new(connection, ());
    ///     Ok(())
    /// }
    /// ```
    pub fn new(connection: Connection<T>, parser: P) -> Self {
        Self {
            connection,
            parser,
            document: PhantomData,
        }
    }

    /// Adds one document to the index. The change becomes visible to searches after a
    /// [commit](Self::commit).
    ///
    /// # Example
    /// ```no_run
    /// # use solr::{Client, ClientError, Connection, Document, Field, FieldSpec};
    /// # struct Event { id: i32 }
    /// # impl Document for Event {
    /// #     fn schema() -> &'static [FieldSpec] {
    /// #         const FIELDS: &[FieldSpec] = &[FieldSpec::unique_key("id")];
    /// #         FIELDS
    /// #     }
    /// #     fn fields(&self) -> Vec<Field> { vec![Field::new("id", &self.id)] }
    /// # }
    /// fn main() -> Result<(), ClientError> {
    ///     let client = Client::new(Connection::new("http://localhost:8983/solr/events")?, ());
    ///     client.add(&Event { id: 9 })?;
    ///     client.commit()?;
    ///     Ok(())
    /// }
    /// ```
    pub fn add(&self, document: &D) -> Result<()> {
        self.add_many(std::slice::from_ref(document))
    }

    /// Adds a batch of documents to the index in a single command.
    pub fn add_many(&self, documents: &[D]) -> Result<()> {
        let command = UpdateCommand::Add {
            documents: documents.iter().map(|document| document.fields()).collect(),
        };
        self.update(&command)
    }

    /// Makes all changes since the last commit visible to searches.
    pub fn commit(&self) -> Result<()> {
        self.update(&UpdateCommand::Commit { flags: None })
    }

    /// Commits while controlling how the server waits on the change.
    ///
    /// # Arguments
    /// *  `wait_searcher` block until a new searcher serves the committed state.
    /// *  `wait_flush` block until the changes reach stable storage.
    pub fn commit_with_options(&self, wait_searcher: bool, wait_flush: bool) -> Result<()> {
        self.update(&UpdateCommand::Commit {
            flags: Some(WaitFlags { wait_searcher, wait_flush }),
        })
    }

    /// Merges the index segments for faster searches.
    pub fn optimize(&self) -> Result<()> {
        self.update(&UpdateCommand::Optimize { flags: None })
    }

    /// Optimizes while controlling how the server waits on the change.
    ///
    /// # Arguments
    /// *  `wait_searcher` block until a new searcher serves the optimized index.
    /// *  `wait_flush` block until the changes reach stable storage.
    pub fn optimize_with_options(&self, wait_searcher: bool, wait_flush: bool) -> Result<()> {
        self.update(&UpdateCommand::Optimize {
            flags: Some(WaitFlags { wait_searcher, wait_flush }),
        })
    }

    /// Deletes the given document from the index, addressed by its unique key.
    ///
    /// A shape without a unique key field cannot address single documents; the operation fails
    /// with [`ClientError::NoUniqueKey`] before anything reaches the server. A document whose
    /// key field carries no value fails the same way with [`ClientError::MissingUniqueKeyValue`].
    ///
    /// # Example
    /// ```no_run
    /// # use solr::{Client, ClientError, Connection, Document, Field, FieldSpec};
    /// # struct Event { id: i32 }
    /// # impl Document for Event {
    /// #     fn schema() -> &'static [FieldSpec] {
    /// #         const FIELDS: &[FieldSpec] = &[FieldSpec::unique_key("id")];
    /// #         FIELDS
    /// #     }
    /// #     fn fields(&self) -> Vec<Field> { vec![Field::new("id", &self.id)] }
    /// # }
    /// fn main() -> Result<(), ClientError> {
    ///     let client = Client::new(Connection::new("http://localhost:8983/solr/events")?, ());
    ///     client.delete(&Event { id: 9 })?;
    ///     client.commit()?;
    ///     Ok(())
    /// }
    /// ```
    pub fn delete(&self, document: &D) -> Result<()> {
        self.delete_command(document, None)
    }

    /// Deletes like [`delete`](Self::delete) while restricting which index state the deletion
    /// applies to.
    ///
    /// # Arguments
    /// *  `from_pending` delete from documents not yet committed.
    /// *  `from_committed` delete from the committed index.
    pub fn delete_with_options(&self, document: &D, from_pending: bool, from_committed: bool) -> Result<()> {
        self.delete_command(document, Some(DeleteFlags { from_pending, from_committed }))
    }

    /// Deletes every document matching the given query.
    pub fn delete_by_query(&self, query: &Query) -> Result<()> {
        self.delete_by_query_command(query, None)
    }

    /// Deletes by query while restricting which index state the deletion applies to.
    ///
    /// # Arguments
    /// *  `from_pending` delete from documents not yet committed.
    /// *  `from_committed` delete from the committed index.
    pub fn delete_by_query_with_options(
        &self,
        query: &Query,
        from_pending: bool,
        from_committed: bool,
    ) -> Result<()> {
        self.delete_by_query_command(query, Some(DeleteFlags { from_pending, from_committed }))
    }

    fn delete_command(&self, document: &D, flags: Option<DeleteFlags>) -> Result<()> {
        let key = match unique_key::<D>()? {
            Some(key) => key,
            None => return Err(ClientError::NoUniqueKey { type_name: type_name::<D>() }),
        };
        let id = document
            .fields()
            .iter()
            .find(|field| field.name() == key)
            .and_then(|field| field.value().map(ToOwned::to_owned))
            .ok_or_else(|| ClientError::MissingUniqueKeyValue {
                type_name: type_name::<D>(),
                field: key,
            })?;

        self.update(&UpdateCommand::DeleteById { id, flags })
    }

    fn delete_by_query_command(&self, query: &Query, flags: Option<DeleteFlags>) -> Result<()> {
        self.update(&UpdateCommand::DeleteByQuery {
            query: query.text().to_owned(),
            flags,
        })
    }

    fn update(&self, command: &UpdateCommand) -> Result<()> {
        self.connection.post(UPDATE_PATH, &command.to_xml())?;
        Ok(())
    }
}

impl<D, T, P> Client<D, T, P>
where
    D: Document,
    T: HttpTransport,
    P: ResultParser<D>,
{
    /// Runs a search and returns the typed matches.
    ///
    /// The query parameters are encoded into the request; the response body goes to the
    /// parser verbatim.
    ///
    /// # Example
    /// ```no_run
    /// # use solr::{Client, ClientError, Connection, Document, Field, FieldSpec, Query};
    /// # use solr::{QueryResults, Result, ResultParser, SortOrder};
    /// # struct Event { id: i32 }
    /// # impl Document for Event {
    /// #     fn schema() -> &'static [FieldSpec] {
    /// #         const FIELDS: &[FieldSpec] = &[FieldSpec::unique_key("id")];
    /// #         FIELDS
    /// #     }
    /// #     fn fields(&self) -> Vec<Field> { vec![Field::new("id", &self.id)] }
    /// # }
    /// # struct EmptyParser;
    /// # impl ResultParser<Event> for EmptyParser {
    /// #     fn parse(&self, _raw: &str) -> Result<QueryResults<Event>> {
    /// #         Ok(QueryResults::new(vec![], 0))
    /// #     }
    /// # }
    /// fn main() -> Result<()> {
    ///     let client = Client::new(Connection::new("http://localhost:8983/solr/events")?, EmptyParser);
    ///
    ///     let query = Query::new("id:[0 TO 100]").page(0, 10).order_by(SortOrder::ascending("id"));
    ///     let results = client.query(&query)?;
    ///     assert!(results.num_found() >= results.len() as u64);
    ///     Ok(())
    /// }
    /// ```
    pub fn query(&self, query: &Query) -> Result<QueryResults<D>> {
        let raw = self.connection.get(SELECT_PATH, &query.parameters())?;
        self.parser.parse(&raw)
    }
}
