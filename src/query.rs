use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::result;
use std::str::FromStr;

/// Error that has occurred when parsing a sort token.
#[derive(Debug)]
pub struct ParseSortError {
    token: String,
}

impl ParseSortError {
    fn new(token: &str) -> Self {
        Self {
            token: token.to_owned(),
        }
    }
}

impl Display for ParseSortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format!("expected a sort order such as \"price asc\", got: {}", self.token))
    }
}

impl Error for ParseSortError {}

/// Direction of a [`SortOrder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Lowest values first.
    Ascending,
    /// Highest values first.
    Descending,
}

impl ToString for Order {
    fn to_string(&self) -> String {
        match self {
            Order::Ascending => "asc".to_owned(),
            Order::Descending => "desc".to_owned(),
        }
    }
}

impl FromStr for Order {
    type Err = ParseSortError;

    fn from_str(s: &str) -> result::Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Order::Ascending),
            "desc" => Ok(Order::Descending),
            _ => Err(ParseSortError::new(s)),
        }
    }
}

/// One key of a sort sequence, rendered as e.g. `price desc`.
///
/// # Example
/// ```
/// use solr::SortOrder;
/// use std::str::FromStr;
///
/// let order = SortOrder::from_str("price desc").unwrap();
/// assert_eq!("price", order.field());
/// assert_eq!("price desc", &order.to_string());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SortOrder {
    field: String,
    order: Order,
}

impl SortOrder {
    /// Returns a sort key over the given field.
    pub fn new(field: &str, order: Order) -> Self {
        Self {
            field: field.to_owned(),
            order,
        }
    }

    /// Returns a sort key with the lowest values of the given field first.
    pub fn ascending(field: &str) -> Self {
        Self::new(field, Order::Ascending)
    }

    /// Returns a sort key with the highest values of the given field first.
    pub fn descending(field: &str) -> Self {
        Self::new(field, Order::Descending)
    }

    /// Returns the field this key sorts over.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the direction of this key.
    pub fn order(&self) -> Order {
        self.order
    }
}

impl ToString for SortOrder {
    fn to_string(&self) -> String {
        format!("{} {}", self.field, self.order.to_string())
    }
}

impl FromStr for SortOrder {
    type Err = ParseSortError;

    fn from_str(s: &str) -> result::Result<Self, Self::Err> {
        let (field, order) = s.rsplit_once(' ').ok_or_else(|| ParseSortError::new(s))?;
        if field.is_empty() {
            return Err(ParseSortError::new(s));
        }
        let order = Order::from_str(order).map_err(|_| ParseSortError::new(s))?;

        Ok(Self::new(field, order))
    }
}

/// A search over the index, with optional pagination and sorting.
///
/// The query text passes through to the server untouched; pagination and sort keys only make it
/// onto the wire when set.
///
/// # Example
/// ```
/// use solr::{Query, SortOrder};
///
/// let query = Query::new("name:iPod")
///     .page(0, 10)
///     .order_by(SortOrder::ascending("price"));
/// assert_eq!("name:iPod", query.text());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    text: String,
    window: Option<(u32, u32)>,
    orders: Vec<SortOrder>,
}

impl Query {
    /// Returns a query matching the given text, unpaginated and unsorted.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            window: None,
            orders: vec![],
        }
    }

    /// Restricts results to one page.
    ///
    /// # Arguments
    /// *  `start` offset of the first result to return.
    /// *  `rows` maximum number of results to return.
    pub fn page(mut self, start: u32, rows: u32) -> Self {
        self.window = Some((start, rows));
        self
    }

    /// Appends a sort key. Keys apply in the order they were appended.
    pub fn order_by(mut self, order: SortOrder) -> Self {
        self.orders.push(order);
        self
    }

    /// Returns the query text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Renders the parameters for the wire. Pagination and sorting appear only when set.
    pub fn parameters(&self) -> BTreeMap<String, String> {
        let mut parameters = BTreeMap::new();
        parameters.insert("q".to_owned(), self.text.clone());
        if let Some((start, rows)) = self.window {
            parameters.insert("start".to_owned(), start.to_string());
            parameters.insert("rows".to_owned(), rows.to_string());
        }
        if !self.orders.is_empty() {
            let orders: Vec<String> = self.orders.iter().map(|order| order.to_string()).collect();
            parameters.insert("sort".to_owned(), orders.join(","));
        }
        parameters
    }
}
