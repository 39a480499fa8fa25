use crate::document::Value;
use crate::loc;
use crate::types::DirectiveAnnotation;
use crate::types::TypeAnnotation;

/// Represents an
/// [input field](https://spec.graphql.org/October2021/#InputFieldsDefinition)
/// defined on an [`InputObjectType`](crate::types::InputObjectType).
#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) default_value: Option<Value>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) parent_type_name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl InputField {
    /// Where in the schema this input field was declared.
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    /// The default declared for this input field (e.g. `= 10`), if any.
    ///
    /// An input field with a default is not required even when its type is
    /// non-null.
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// The description written before this input field, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The directives applied to this input field, in the order they were
    /// written.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The name of the input object type that defines this input field.
    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    /// The type of value this input field accepts.
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
