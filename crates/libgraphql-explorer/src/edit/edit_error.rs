use crate::document::ArgumentPath;
use crate::document::DefinitionId;
use crate::document::FieldPath;

/// A structural mismatch between a requested edit and the document (or
/// schema) it was applied to.
///
/// None of these are fatal: the document an edit was applied to is left
/// untouched.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EditError {
    #[error("There is nothing selected in `{field_name}` to extract into a fragment")]
    EmptySelectionToExtract {
        field_name: String,
    },

    #[error("There is no `{name}` argument or input field to edit")]
    MissingArgument {
        name: String,
    },

    #[error("There is no field selection at `{0}`")]
    MissingFieldSelection(FieldPath),

    #[error(
        "Unable to set `{name}` from raw text: `{type_name}` is not a scalar or \
        enum type"
    )]
    NonLeafRawValue {
        name: String,
        type_name: String,
    },

    #[error("The value of `{name}` is not an input object value")]
    NotAnInputObjectValue {
        name: String,
    },

    #[error("Definition {0} is not an operation")]
    NotAnOperation(DefinitionId),

    #[error("Field `{field_name}` returns `{type_name}`, which is not an object type")]
    NotAnObjectField {
        field_name: String,
        type_name: String,
    },

    #[error("The value at `{0}` is not a variable reference")]
    NotAVariable(ArgumentPath),

    #[error("The edited document would print as text that doesn't parse: {0}")]
    UnparseableDocument(String),

    #[error("Variable `${name}` is not defined by the enclosing operation")]
    UndefinedVariable {
        name: String,
    },

    #[error("`{parent}` does not accept an argument or input field named `{name}`")]
    UnknownArgument {
        parent: String,
        name: String,
    },

    #[error("No definition with id {0} exists in the document")]
    UnknownDefinition(DefinitionId),

    #[error("The `{type_name}` type does not define a `{field_name}` field")]
    UnknownField {
        type_name: String,
        field_name: String,
    },

    #[error("The `{type_name}` type is not defined in the schema")]
    UnknownType {
        type_name: String,
    },

    #[error("Unable to synthesize a value of type `{type_name}` for `{name}`")]
    UnsupportedArgumentType {
        name: String,
        type_name: String,
    },
}
