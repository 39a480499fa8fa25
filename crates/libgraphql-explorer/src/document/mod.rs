//! An owned, editable model of a GraphQL query document.
//!
//! Documents are parsed with [`apollo_parser`] and converted into the types
//! in this module. Every type is plain data (`Clone + PartialEq`) so that an
//! edit can build a new [`Document`] from an old one while moving untouched
//! definitions and selections over unchanged.

mod directive;
mod document;
mod fragment_definition;
mod from_apollo_parser;
mod from_graphql_parser;
mod operation_definition;
mod operation_kind;
mod parse;
mod parsed_document_cache;
mod paths;
mod printer;
mod selection;
mod type_ref;
mod value;
mod variable_definition;

pub use directive::Directive;
pub use document::Definition;
pub use document::DefinitionId;
pub use document::Document;
pub use fragment_definition::FragmentDefinition;
pub(crate) use from_graphql_parser::value_from_ast;
pub use operation_definition::OperationDefinition;
pub use operation_kind::OperationKind;
pub use parse::parse_document;
pub use parse::parse_value_literal;
pub use parse::DocumentParseError;
pub use parsed_document_cache::ParsedDocumentCache;
pub use paths::ArgumentPath;
pub use paths::FieldPath;
pub use selection::FieldSelection;
pub use selection::FragmentSpread;
pub use selection::InlineFragment;
pub use selection::Selection;
pub use type_ref::TypeRef;
pub use value::Argument;
pub use value::NamedValue;
pub use value::ObjectField;
pub use value::Value;
pub use variable_definition::VariableDefinition;

#[cfg(test)]
mod tests;
