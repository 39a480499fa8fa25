use crate::loc;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;

/// Represents a defined GraphQL type
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}
impl GraphQLType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(t) = self {
            Some(t)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(t) = self {
            Some(t)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(t) = self {
            Some(t)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(t) = self {
            Some(t)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(t) = self {
            Some(t)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> loc::SchemaDefLocation {
        match self {
            Self::Bool
                | Self::Float
                | Self::ID
                | Self::Int
                | Self::String =>
                loc::SchemaDefLocation::GraphQLBuiltIn,
            Self::Enum(t) => t.def_location().clone(),
            Self::InputObject(t) => t.def_location().clone(),
            Self::Interface(t) => t.def_location().clone(),
            Self::Object(t) => t.def_location().clone(),
            Self::Scalar(t) => t.def_location().clone(),
            Self::Union(t) => t.def_location().clone(),
        }
    }

    /// The fields of an object or interface type. `None` for every other
    /// kind of type.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            Self::Interface(t) => Some(t.fields()),
            Self::Object(t) => Some(t.fields()),
            _ => None,
        }
    }

    /// Indicates if this is an interface or union type.
    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Union(_))
    }

    /// Indicates if this is a type that selections can be made on (object,
    /// interface, or union).
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Object(_) | Self::Union(_))
    }

    pub fn is_input_object(&self) -> bool {
        matches!(self, Self::InputObject(_))
    }

    /// Indicates if this is a scalar or enum type.
    pub fn is_leaf(&self) -> bool {
        match self {
            Self::Bool
                | Self::Enum(_)
                | Self::Float
                | Self::ID
                | Self::Int
                | Self::Scalar(_)
                | Self::String => true,
            Self::InputObject(_)
                | Self::Interface(_)
                | Self::Object(_)
                | Self::Union(_) => false,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::Int => "Int",
            Self::String => "String",
            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }
}
