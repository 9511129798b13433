use crate::{ClientError, Result};
use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

/// Describes one field of a document shape.
///
/// Descriptors are const-constructible so a shape can expose its schema as a static slice.
///
/// # Example
/// ```
/// use solr::FieldSpec;
///
/// const FIELDS: &[FieldSpec] = &[FieldSpec::unique_key("id"), FieldSpec::new("name")];
/// assert!(FIELDS[0].is_unique_key());
/// assert_eq!("name", FIELDS[1].name());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    name: &'static str,
    unique_key: bool,
}

impl FieldSpec {
    /// Returns a descriptor of a regular field.
    pub const fn new(name: &'static str) -> Self {
        Self { name, unique_key: false }
    }

    /// Returns a descriptor of the field that uniquely identifies a document.
    pub const fn unique_key(name: &'static str) -> Self {
        Self { name, unique_key: true }
    }

    /// Returns the field name as the index schema knows it.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if this field uniquely identifies a document.
    pub fn is_unique_key(&self) -> bool {
        self.unique_key
    }
}

/// Makes a type addressable as a document of the index.
///
/// The schema names every field the shape can emit and marks at most one of them as the unique
/// key. Values are rendered per instance by [`fields`].
///
/// # Example
/// ```
/// use solr::{Document, Field, FieldSpec};
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
/// ```
///
/// [`fields`]: Document::fields
pub trait Document: 'static {
    /// Returns the descriptors of every field this shape can emit.
    fn schema() -> &'static [FieldSpec]
    where
        Self: Sized;

    /// Renders this instance's field values for serialization.
    fn fields(&self) -> Vec<Field>;
}

/// One rendered field of a document instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: &'static str,
    value: Option<String>,
}

impl Field {
    /// Renders a named value.
    ///
    /// # Example
    /// ```
    /// use solr::Field;
    ///
    /// let field = Field::new("in_stock", &true);
    /// assert_eq!(Some("true"), field.value());
    /// ```
    pub fn new<V: ToFieldValue>(name: &'static str, value: &V) -> Self {
        Self { name, value: value.to_field_value() }
    }

    /// Returns the field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the rendered value, or [`None`] when the field stays out of the payload.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Makes this type able to be rendered as a document field value.
///
/// Rendering to [`None`] keeps the field out of the payload, which is how unset optional
/// values are skipped.
pub trait ToFieldValue {
    /// Renders this value for the wire.
    fn to_field_value(&self) -> Option<String>;
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ToFieldValue for u8 {
    fn to_field_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ToFieldValue for i8 {
    fn to_field_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ToFieldValue for u16 {
    fn to_field_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ToFieldValue for i16 {
    fn to_field_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ToFieldValue for u32 {
    fn to_field_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ToFieldValue for i32 {
    fn to_field_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ToFieldValue for u64 {
    fn to_field_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ToFieldValue for i64 {
    fn to_field_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ToFieldValue for f32 {
    fn to_field_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ToFieldValue for f64 {
    fn to_field_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ToFieldValue for &str {
    fn to_field_value(&self) -> Option<String> {
        Some((*self).to_owned())
    }
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl<V: ToFieldValue> ToFieldValue for &V {
    fn to_field_value(&self) -> Option<String> {
        (*self).to_field_value()
    }
}

impl<V: ToFieldValue> ToFieldValue for Option<V> {
    fn to_field_value(&self) -> Option<String> {
        self.as_ref().and_then(|value| value.to_field_value())
    }
}

/// Outcome of inspecting one shape's schema, kept per [`TypeId`].
#[derive(Debug, Clone, Copy)]
enum ResolvedKey {
    None,
    Key(&'static str),
    Duplicate(&'static str, &'static str),
}

fn cache() -> &'static RwLock<HashMap<TypeId, ResolvedKey>> {
    static CACHE: OnceLock<RwLock<HashMap<TypeId, ResolvedKey>>> = OnceLock::new();
    CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

fn resolve(schema: &[FieldSpec]) -> ResolvedKey {
    let mut keys = schema.iter().filter(|field| field.is_unique_key());
    match (keys.next(), keys.next()) {
        (None, _) => ResolvedKey::None,
        (Some(first), None) => ResolvedKey::Key(first.name()),
        (Some(first), Some(second)) => ResolvedKey::Duplicate(first.name(), second.name()),
    }
}

/// Returns the name of the field that uniquely identifies documents of the given shape.
///
/// The schema is inspected once per shape and the outcome cached, so repeated and concurrent
/// lookups stay cheap and agree with each other. Shapes without a key field resolve to [`None`].
///
/// # Example
/// ```
/// use solr::{unique_key, ClientError, Document, Field, FieldSpec};
///
/// struct Product {
///     id: i32,
/// }
///
/// impl Document for Product {
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
///     assert_eq!(Some("id"), unique_key::<Product>()?);
///     Ok(())
/// }
/// ```
pub fn unique_key<D: Document>() -> Result<Option<&'static str>> {
    let resolved = {
        let cache = cache().read().unwrap_or_else(|e| e.into_inner());
        cache.get(&TypeId::of::<D>()).copied()
    };
    let resolved = match resolved {
        Some(resolved) => resolved,
        None => {
            let mut cache = cache().write().unwrap_or_else(|e| e.into_inner());
            *cache.entry(TypeId::of::<D>()).or_insert_with(|| resolve(D::schema()))
        }
    };

    match resolved {
        ResolvedKey::None => Ok(None),
        ResolvedKey::Key(name) => Ok(Some(name)),
        ResolvedKey::Duplicate(first, second) => Err(ClientError::MultipleUniqueKeys {
            type_name: type_name::<D>(),
            first,
            second,
        }),
    }
}
