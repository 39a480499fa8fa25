use crate::loc;
use crate::types::DirectiveAnnotation;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) members: Vec<String>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    /// An ordered list of the names of each type defined as a member of this
    /// union.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.iter()
            .map(String::as_str)
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
