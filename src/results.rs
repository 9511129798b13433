use crate::Result;
use std::slice::Iter;

/// One page of matches for a [`Query`], in the order the server returned them.
///
/// Besides the documents of the page, the collection knows how many documents match in the
/// whole index, which pagination does not change.
///
/// # Example
/// ```
/// use solr::QueryResults;
///
/// let results = QueryResults::new(vec!["first", "second"], 42);
/// assert_eq!(2, results.len());
/// assert_eq!(42, results.num_found());
/// ```
///
/// [`Query`]: crate::query::Query
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResults<D> {
    documents: Vec<D>,
    num_found: u64,
}

impl<D> QueryResults<D> {
    /// Returns a page of documents with the total match count.
    pub fn new(documents: Vec<D>, num_found: u64) -> Self {
        Self { documents, num_found }
    }

    /// Returns how many documents match in the whole index, not just on this page.
    pub fn num_found(&self) -> u64 {
        self.num_found
    }

    /// Returns how many documents this page holds.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns `true` if this page holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Returns the document at the given position of this page.
    pub fn get(&self, index: usize) -> Option<&D> {
        self.documents.get(index)
    }

    /// Returns an iterator over this page's documents.
    pub fn iter(&self) -> Iter<'_, D> {
        self.documents.iter()
    }
}

impl<D> IntoIterator for QueryResults<D> {
    type Item = D;
    type IntoIter = std::vec::IntoIter<D>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.into_iter()
    }
}

impl<'a, D> IntoIterator for &'a QueryResults<D> {
    type Item = &'a D;
    type IntoIter = Iter<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

/// Turns raw response bodies into typed [`QueryResults`].
///
/// The client issues the search and hands the body over verbatim; decoding the server's
/// response format is entirely the parser's concern. A parser reports undecodable input as
/// [`ResultParse`].
///
/// # Example
/// ```
/// use solr::{QueryResults, Result, ResultParser};
///
/// struct LineParser;
///
/// impl ResultParser<String> for LineParser {
///     fn parse(&self, raw: &str) -> Result<QueryResults<String>> {
///         let documents: Vec<String> = raw.lines().map(ToOwned::to_owned).collect();
///         let num_found = documents.len() as u64;
///         Ok(QueryResults::new(documents, num_found))
///     }
/// }
/// ```
///
/// [`ResultParse`]: crate::ClientError::ResultParse
pub trait ResultParser<D> {
    /// Decodes one response body.
    fn parse(&self, raw: &str) -> Result<QueryResults<D>>;
}
