use crate::loc;
use crate::types::DirectiveAnnotation;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType(pub(crate) ObjectOrInterfaceTypeData);
impl InterfaceType {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.0.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.0.directives
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.0.fields.get(name)
    }

    /// The fields of this type, in declaration order. Fields added by type
    /// extensions follow the fields of the original definition.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.0.fields
    }

    /// The names of the interfaces this type declares that it implements.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interfaces.iter()
            .map(String::as_str)
            .collect()
    }

    pub fn name(&self) -> &str {
        self.0.name.as_str()
    }
}
