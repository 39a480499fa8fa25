use crate::loc;
use crate::types::DirectiveAnnotation;

/// A custom [scalar type](https://spec.graphql.org/October2021/#sec-Scalars)
/// declared by the schema, e.g. `scalar DateTime`.
///
/// The builtin scalars (`Boolean`, `Float`, `ID`, `Int`, `String`) have
/// their own [`GraphQLType`](crate::types::GraphQLType) variants instead.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
}
impl ScalarType {
    /// Where in the schema this scalar was declared.
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    /// The description written before the `scalar` definition, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The directives applied to this scalar, in the order they were
    /// written. Directives from `extend scalar` definitions follow those of
    /// the original definition.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    /// The name of this scalar.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
