use crate::document::Value;
use crate::loc;
use crate::types::TypeAnnotation;

/// An [argument](https://spec.graphql.org/October2021/#ArgumentsDefinition)
/// accepted by a [`Field`](crate::types::Field).
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) default_value: Option<Value>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    /// The default declared for this argument, if any.
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The type of value this argument accepts.
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
