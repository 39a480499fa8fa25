use crate::loc;
use crate::types::DeprecationState;
use crate::types::DirectiveAnnotation;
use indexmap::IndexMap;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    /// The first value declared on this enum, if it declares any.
    pub fn first_value(&self) -> Option<&EnumValue> {
        self.values.values().next()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.get(name)
    }

    /// The values of this enum, in declaration order.
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }
}

/// One declared value of an [`EnumType`].
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
}
impl EnumValue {
    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        (&self.directives).into()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
