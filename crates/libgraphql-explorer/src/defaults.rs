//! Synthesizes default values for arguments and input-object fields.

use crate::document::Argument;
use crate::document::NamedValue;
use crate::document::ObjectField;
use crate::document::Value;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputValueRef;
use crate::ExplorerPolicy;

/// The literal used for a newly populated scalar or enum value.
///
/// Enums use their first declared value. `Int`, `Float`, and `Boolean` use
/// `10`, `1.5`, and `false`. Every other scalar (`String`, `ID`, and custom
/// scalars) uses the empty string.
pub fn default_value(type_: &GraphQLType) -> Value {
    match type_ {
        GraphQLType::Enum(enum_type) => match enum_type.first_value() {
            Some(value) => Value::Enum(value.name().to_string()),
            None => Value::String(String::new()),
        },
        GraphQLType::Bool => Value::Boolean(false),
        GraphQLType::Float => Value::Float(1.5),
        GraphQLType::Int => Value::Int(10),
        _ => Value::String(String::new()),
    }
}

/// The arguments to populate when `field` is newly selected: each argument
/// that is required or that `policy` opts into.
pub fn default_arguments<P: ExplorerPolicy + ?Sized>(
    schema: &Schema,
    field: &Field,
    policy: &P,
) -> Vec<Argument> {
    let mut expanding = vec![];
    field.parameters()
        .values()
        .map(InputValueRef::from)
        .filter(|input_value| should_populate(field, *input_value, policy))
        .filter_map(|input_value| {
            default_named_value(schema, field, input_value, policy, &mut expanding)
        })
        .collect()
}

/// The fields to populate within a newly synthesized value of `input_type`,
/// using the same required-or-policy rule as [`default_arguments()`].
pub fn default_input_object_fields<P: ExplorerPolicy + ?Sized>(
    schema: &Schema,
    parent_field: &Field,
    input_type: &InputObjectType,
    policy: &P,
) -> Vec<ObjectField> {
    let mut expanding = vec![];
    default_input_object_fields_impl(schema, parent_field, input_type, policy, &mut expanding)
}

/// Synthesize a single argument or input field, regardless of whether it is
/// required. `None` if its type can't be given a literal value.
pub fn default_argument<P: ExplorerPolicy + ?Sized>(
    schema: &Schema,
    parent_field: &Field,
    input_value: InputValueRef<'_>,
    policy: &P,
) -> Option<NamedValue> {
    let mut expanding = vec![];
    default_named_value(schema, parent_field, input_value, policy, &mut expanding)
}

fn should_populate<P: ExplorerPolicy + ?Sized>(
    parent_field: &Field,
    input_value: InputValueRef<'_>,
    policy: &P,
) -> bool {
    input_value.is_required() || policy.make_default_arg(parent_field, input_value)
}

fn default_input_object_fields_impl<'schema, P: ExplorerPolicy + ?Sized>(
    schema: &'schema Schema,
    parent_field: &Field,
    input_type: &'schema InputObjectType,
    policy: &P,
    expanding: &mut Vec<&'schema str>,
) -> Vec<ObjectField> {
    // An input type can only refer back to itself through optional fields,
    // so this only happens when the policy opts into one of those.
    if expanding.contains(&input_type.name()) {
        log::warn!(
            "Not populating a nested `{}` value within another `{}` value.",
            input_type.name(),
            input_type.name(),
        );
        return vec![];
    }

    expanding.push(input_type.name());
    let fields =
        input_type.fields()
            .values()
            .map(InputValueRef::from)
            .filter(|input_value| should_populate(parent_field, *input_value, policy))
            .filter_map(|input_value| {
                default_named_value(schema, parent_field, input_value, policy, expanding)
            })
            .collect();
    expanding.pop();
    fields
}

fn default_named_value<'schema, P: ExplorerPolicy + ?Sized>(
    schema: &'schema Schema,
    parent_field: &Field,
    input_value: InputValueRef<'_>,
    policy: &P,
    expanding: &mut Vec<&'schema str>,
) -> Option<NamedValue> {
    let Some(value_type) = schema.unwrap_type(input_value.type_annotation()) else {
        log::error!(
            "Unable to populate `{}`: its type `{}` is not defined in the schema.",
            input_value.name(),
            input_value.type_annotation().innermost_type_name(),
        );
        return None;
    };

    let value = match value_type {
        GraphQLType::InputObject(input_type) => Value::Object(
            default_input_object_fields_impl(schema, parent_field, input_type, policy, expanding),
        ),
        type_ if type_.is_leaf() =>
            policy.default_scalar_arg_value(parent_field, input_value, type_),
        type_ => {
            log::error!(
                "Unable to populate `{}` with a value of the `{}` type.",
                input_value.name(),
                type_.name(),
            );
            return None;
        },
    };

    Some(NamedValue::new(input_value.name(), value))
}
