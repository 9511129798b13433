use crate::document::Field;
use crate::escape::{escape_attribute, escape_text};

/// Flags for commands that wait on the server making changes durable and visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WaitFlags {
    pub(crate) wait_searcher: bool,
    pub(crate) wait_flush: bool,
}

/// Flags restricting which index state a deletion applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DeleteFlags {
    pub(crate) from_pending: bool,
    pub(crate) from_committed: bool,
}

/// Represents an index-changing command in the server's XML dialect.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum UpdateCommand {
    Add { documents: Vec<Vec<Field>> },
    DeleteById { id: String, flags: Option<DeleteFlags> },
    DeleteByQuery { query: String, flags: Option<DeleteFlags> },
    Commit { flags: Option<WaitFlags> },
    Optimize { flags: Option<WaitFlags> },
}

impl UpdateCommand {
    /// Renders this command to the exact payload the server expects. The rendering is
    /// byte-stable: attribute order is fixed and whitespace never varies.
    pub(crate) fn to_xml(&self) -> String {
        match self {
            UpdateCommand::Add { documents } => {
                let mut xml = String::from("<add>");
                for fields in documents {
                    write_doc(&mut xml, fields);
                }
                xml.push_str("</add>");
                xml
            }
            UpdateCommand::DeleteById { id, flags } => {
                format!("{}<id>{}</id></delete>", delete_tag(*flags), escape_text(id))
            }
            UpdateCommand::DeleteByQuery { query, flags } => {
                format!("{}<query>{}</query></delete>", delete_tag(*flags), escape_text(query))
            }
            UpdateCommand::Commit { flags } => wait_tag("commit", *flags),
            UpdateCommand::Optimize { flags } => wait_tag("optimize", *flags),
        }
    }
}

fn write_doc(xml: &mut String, fields: &[Field]) {
    let values: Vec<(&str, &str)> = fields
        .iter()
        .filter_map(|field| field.value().map(|value| (field.name(), value)))
        .collect();

    if values.is_empty() {
        xml.push_str("<doc />");
        return;
    }

    xml.push_str("<doc>");
    for (name, value) in values {
        xml.push_str("<field name=\"");
        xml.push_str(&escape_attribute(name));
        xml.push_str("\">");
        xml.push_str(&escape_text(value));
        xml.push_str("</field>");
    }
    xml.push_str("</doc>");
}

fn delete_tag(flags: Option<DeleteFlags>) -> String {
    match flags {
        None => "<delete>".to_owned(),
        Some(flags) => format!(
            "<delete fromPending=\"{}\" fromCommitted=\"{}\">",
            flags.from_pending, flags.from_committed
        ),
    }
}

fn wait_tag(name: &str, flags: Option<WaitFlags>) -> String {
    match flags {
        None => format!("<{} />", name),
        Some(flags) => format!(
            "<{} waitSearcher=\"{}\" waitFlush=\"{}\" />",
            name, flags.wait_searcher, flags.wait_flush
        ),
    }
}
