use crate::document::OperationKind;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::sync::OnceLock;

fn empty_field_map() -> &'static IndexMap<String, Field> {
    static EMPTY_FIELD_MAP: OnceLock<IndexMap<String, Field>> = OnceLock::new();
    EMPTY_FIELD_MAP.get_or_init(IndexMap::new)
}

/// Read-only reflection over a built schema.
///
/// Built via [`SchemaBuilder`](crate::schema::SchemaBuilder), which
/// guarantees that a query root type exists and that every root type is an
/// object type.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) mutation_type_name: Option<String>,
    pub(crate) query_type_name: String,
    pub(crate) subscription_type_name: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// All types in the schema (including builtin scalars), keyed by name.
    pub fn defined_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Look up the field `field_name` on the object or interface type named
    /// `type_name`.
    pub fn field(&self, type_name: &str, field_name: &str) -> Option<&Field> {
        self.lookup_type(type_name)
            .and_then(GraphQLType::fields)
            .and_then(|fields| fields.get(field_name))
    }

    /// The fields that can be selected on `type_`.
    ///
    /// Object and interface types yield their own fields; unions yield an
    /// empty map since only `__typename` and type-conditioned fragments can
    /// be selected on them. `None` means `type_` cannot have a selection set.
    pub fn fields_of<'a>(&'a self, type_: &'a GraphQLType) -> Option<&'a IndexMap<String, Field>> {
        match type_ {
            GraphQLType::Union(_) => Some(empty_field_map()),
            _ => type_.fields(),
        }
    }

    pub fn lookup_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.object_type_named(self.mutation_type_name.as_deref())
    }

    fn object_type_named(&self, name: Option<&str>) -> Option<&ObjectType> {
        name.and_then(|name| self.lookup_type(name))
            .and_then(GraphQLType::as_object)
    }

    /// The object types that can appear where `type_` is expected: the
    /// implementors of an interface, the members of a union, or the type
    /// itself for an object type.
    pub fn possible_types(&self, type_: &GraphQLType) -> Vec<&ObjectType> {
        match type_ {
            GraphQLType::Object(obj_type) =>
                self.object_type_named(Some(obj_type.name())).into_iter().collect(),
            GraphQLType::Interface(iface_type) =>
                self.types.values()
                    .filter_map(GraphQLType::as_object)
                    .filter(|obj_type| {
                        obj_type.interface_names().contains(&iface_type.name())
                    })
                    .collect(),
            GraphQLType::Union(union_type) =>
                union_type.member_type_names()
                    .into_iter()
                    .filter_map(|name| self.object_type_named(Some(name)))
                    .collect(),
            _ => vec![],
        }
    }

    pub fn query_type(&self) -> Option<&ObjectType> {
        self.object_type_named(Some(self.query_type_name.as_str()))
    }

    /// The root type that operations of `kind` select against, if the schema
    /// defines one.
    pub fn root_type(&self, kind: OperationKind) -> Option<&ObjectType> {
        match kind {
            OperationKind::Mutation => self.mutation_type(),
            OperationKind::Query => self.query_type(),
            OperationKind::Subscription => self.subscription_type(),
        }
    }

    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.object_type_named(self.subscription_type_name.as_deref())
    }

    /// Strip all list/non-null wrappers from `annot` and look up the named
    /// type underneath.
    pub fn unwrap_type(&self, annot: &TypeAnnotation) -> Option<&GraphQLType> {
        self.lookup_type(annot.innermost_type_name())
    }
}
