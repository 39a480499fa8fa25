use crate::document::from_apollo_parser::document_from_cst;
use crate::document::Definition;
use crate::document::Document;
use crate::document::Selection;
use crate::document::Value;

type Result<T> = std::result::Result<T, DocumentParseError>;

/// Parse query-document text into a [`Document`].
///
/// Blank text is rejected with [`DocumentParseError::EmptyDocument`] rather
/// than being handed to the parser.
pub fn parse_document(text: &str) -> Result<Document> {
    if text.trim().is_empty() {
        return Err(DocumentParseError::EmptyDocument);
    }
    let tree = apollo_parser::Parser::new(text).parse();
    if let Some(err) = tree.errors().next() {
        return Err(DocumentParseError::ParseError {
            message: err.message().to_string(),
            offset: err.index(),
        });
    }
    document_from_cst(tree.document())
}

/// Parse a single GraphQL value literal (e.g. `{a: 1, b: [ASC]}`), as
/// found in the `defaultValue` strings of an introspection result.
pub fn parse_value_literal(text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Err(DocumentParseError::EmptyDocument);
    }
    let doc = parse_document(&format!("{{ f(v: {text}) }}"))?;
    doc.definitions.into_iter()
        .next()
        .and_then(|def| match def {
            Definition::Operation(op) => op.selections.into_iter().next(),
            Definition::Fragment(_) => None,
        })
        .and_then(|selection| match selection {
            Selection::Field(field) => field.arguments.into_iter().next(),
            _ => None,
        })
        .map(|arg| arg.value)
        .ok_or_else(|| DocumentParseError::NotAValueLiteral(text.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentParseError {
    #[error("The query document is empty")]
    EmptyDocument,

    #[error("`{0}` is not a GraphQL value literal")]
    NotAValueLiteral(String),

    #[error("Error parsing query document at offset {offset}: {message}")]
    ParseError {
        message: String,
        offset: usize,
    },

    #[error("Query documents may only define operations and fragments")]
    TypeSystemDefinition,
}
