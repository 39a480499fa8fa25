use crate::defaults;
use crate::document::Value;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputValueRef;
use crate::types::TYPENAME_META_FIELD;

/// Host-supplied decisions about what to populate by default.
///
/// Every method has a default implementation, so a host only overrides the
/// decisions it cares about.
pub trait ExplorerPolicy {
    /// Which fields to select when an object field is first expanded.
    fn default_field_names(&self, schema: &Schema, type_: &GraphQLType) -> Vec<String> {
        default_field_names(schema, type_)
    }

    /// The literal to synthesize for a scalar or enum argument (or input
    /// field) of `parent_field` that is being populated by default.
    fn default_scalar_arg_value(
        &self,
        _parent_field: &Field,
        _input_value: InputValueRef<'_>,
        arg_type: &GraphQLType,
    ) -> Value {
        defaults::default_value(arg_type)
    }

    /// Whether to populate an argument (or input field) that isn't required.
    fn make_default_arg(&self, _parent_field: &Field, _input_value: InputValueRef<'_>) -> bool {
        false
    }
}

/// An [`ExplorerPolicy`] that uses every default.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultExplorerPolicy;
impl ExplorerPolicy for DefaultExplorerPolicy {}

/// Pick a handful of fields that identify an object: `id` (plus `email` or
/// `name`), else a connection's `edges`/`node`/`nodes`, else the first two
/// leaf fields, else `__typename`.
pub fn default_field_names(schema: &Schema, type_: &GraphQLType) -> Vec<String> {
    let Some(fields) = schema.fields_of(type_) else {
        return vec![];
    };

    if fields.contains_key("id") {
        let mut names = vec!["id".to_string()];
        if fields.contains_key("email") {
            names.push("email".to_string());
        } else if fields.contains_key("name") {
            names.push("name".to_string());
        }
        return names;
    }

    for connection_field in ["edges", "node", "nodes"] {
        if fields.contains_key(connection_field) {
            return vec![connection_field.to_string()];
        }
    }

    let leaf_field_names: Vec<String> =
        fields.values()
            .filter(|field| {
                field.return_type(schema).is_some_and(GraphQLType::is_leaf)
            })
            .take(2)
            .map(|field| field.name().to_string())
            .collect();

    if leaf_field_names.is_empty() {
        vec![TYPENAME_META_FIELD.to_string()]
    } else {
        leaf_field_names
    }
}
