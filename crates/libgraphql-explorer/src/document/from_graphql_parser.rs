use crate::document::NamedValue;
use crate::document::Value;
use graphql_parser::query as gp;

/// Convert a value literal from a schema definition (a default value or a
/// directive argument).
///
/// `graphql_parser` stores object values in a `BTreeMap`, so object fields
/// come out sorted by name.
pub(crate) fn value_from_ast(value: gp::Value<'_, String>) -> Value {
    match value {
        gp::Value::Boolean(b) => Value::Boolean(b),
        gp::Value::Enum(name) => Value::Enum(name),
        gp::Value::Float(f) => Value::Float(f),
        // graphql_parser only produces numbers that fit in an i64.
        gp::Value::Int(num) => Value::Int(num.as_i64().unwrap_or_default()),
        gp::Value::List(items) =>
            Value::List(items.into_iter().map(value_from_ast).collect()),
        gp::Value::Null => Value::Null,
        gp::Value::Object(fields) => Value::Object(
            fields.into_iter()
                .map(|(name, value)| NamedValue::new(name, value_from_ast(value)))
                .collect(),
        ),
        gp::Value::String(s) => Value::String(s),
        gp::Value::Variable(name) => Value::Variable(name),
    }
}
