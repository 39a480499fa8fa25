use crate::defaults;
use crate::document::Argument;
use crate::document::ObjectField;
use crate::document::Value;
use crate::edit::EditError;
use crate::edit::Result;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputValueRef;
use crate::ExplorerPolicy;

const INT_FALLBACK: i64 = 10;
const FLOAT_FALLBACK: f64 = 1.5;

/// The new value for an argument (or input field) slot.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgumentValueInput {
    /// Reference the operation variable with this name.
    Variable(String),

    /// Clear the slot's value (it becomes `null`).
    Clear,

    /// Use this value as-is.
    Literal(Value),

    /// Text typed by a user, coerced according to the slot's type with
    /// [`coerce_argument_value()`].
    Raw(String),
}

/// Coerce raw text into a literal of the scalar or enum type `type_`.
///
/// Coercion never fails. Text that doesn't fit the type falls back to a
/// literal of the right kind (and a warning is logged):
///
/// * `Int` takes the leading (optionally signed) base-10 digits of the text,
///   falling back to `10` if there are none or they don't fit in 32 bits.
/// * `Float` takes the leading decimal number of the text, falling back to
///   `1.5`.
/// * `Boolean` accepts the JSON literals `true` and `false`; anything else is
///   `false`.
/// * Enums accept any declared value name, falling back to the first value.
/// * `String`, `ID`, and custom scalars use the text as a string.
pub fn coerce_argument_value(type_: &GraphQLType, raw: &str) -> Value {
    match type_ {
        GraphQLType::Bool => match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(serde_json::Value::Bool(b)) => Value::Boolean(b),
            _ => {
                log::warn!("Coercing `{raw}` to `false`: it is not a Boolean literal.");
                Value::Boolean(false)
            },
        },

        GraphQLType::Enum(enum_type) => {
            if let Some(value) = enum_type.value(raw) {
                return Value::Enum(value.name().to_string());
            }
            log::warn!(
                "`{raw}` is not a value of the `{}` enum; using its first value.",
                enum_type.name(),
            );
            defaults::default_value(type_)
        },

        GraphQLType::Float => match parse_float_prefix(raw) {
            Some(f) => Value::Float(f),
            None => {
                log::warn!("Coercing `{raw}` to `{FLOAT_FALLBACK}`: it is not a Float.");
                Value::Float(FLOAT_FALLBACK)
            },
        },

        GraphQLType::Int => match parse_int_prefix(raw) {
            Some(i) => Value::Int(i),
            None => {
                log::warn!("Coercing `{raw}` to `{INT_FALLBACK}`: it is not an Int.");
                Value::Int(INT_FALLBACK)
            },
        },

        GraphQLType::ID
            | GraphQLType::Scalar(_)
            | GraphQLType::String => Value::String(raw.to_string()),

        GraphQLType::InputObject(_)
            | GraphQLType::Interface(_)
            | GraphQLType::Object(_)
            | GraphQLType::Union(_) => {
            log::warn!(
                "Coercing `{raw}` to a String: `{}` is not a scalar or enum type.",
                type_.name(),
            );
            Value::String(raw.to_string())
        },
    }
}

/// The integer spelled by the leading sign and base-10 digits of `raw`
/// (after leading whitespace), if it fits in a GraphQL `Int`.
fn parse_int_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len =
        trimmed[sign_len..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
    if digits_len == 0 {
        return None;
    }
    trimmed[..sign_len + digits_len]
        .parse::<i32>()
        .ok()
        .map(i64::from)
}

/// The finite number spelled by the longest decimal-literal prefix of `raw`
/// (after leading whitespace).
fn parse_float_prefix(raw: &str) -> Option<f64> {
    let bytes = raw.trim_start().as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    std::str::from_utf8(&bytes[..end])
        .ok()
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .filter(|f| f.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Set the value of the slot named `name` in `slots`.
///
/// `value_type` is the unwrapped type of the slot; it decides how
/// [`ArgumentValueInput::Raw`] text is coerced.
pub fn set_argument_value(
    slots: Vec<Argument>,
    name: &str,
    input: ArgumentValueInput,
    value_type: &GraphQLType,
) -> Result<Vec<Argument>> {
    let value = match input {
        ArgumentValueInput::Clear => Value::Null,
        ArgumentValueInput::Literal(value) => value,
        ArgumentValueInput::Raw(text) => {
            if !value_type.is_leaf() {
                return Err(EditError::NonLeafRawValue {
                    name: name.to_string(),
                    type_name: value_type.name().to_string(),
                });
            }
            coerce_argument_value(value_type, &text)
        },
        ArgumentValueInput::Variable(var_name) => Value::Variable(var_name),
    };
    replace_slot_value(slots, name, value)
}

pub(crate) fn replace_slot_value(
    mut slots: Vec<Argument>,
    name: &str,
    value: Value,
) -> Result<Vec<Argument>> {
    let slot = slots.iter_mut()
        .find(|slot| slot.name == name)
        .ok_or_else(|| EditError::MissingArgument {
            name: name.to_string(),
        })?;
    slot.value = value;
    Ok(slots)
}

/// Replace the value of the slot named `name` with an object value holding
/// `fields`.
pub fn set_input_object_fields(
    slots: Vec<Argument>,
    name: &str,
    fields: Vec<ObjectField>,
) -> Result<Vec<Argument>> {
    replace_slot_value(slots, name, Value::Object(fields))
}

/// The outcome of [`remove_argument()`].
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentToggle {
    pub slots: Vec<Argument>,
    pub removed: Option<Argument>,
}

/// Add a slot for `input_value` unless one is already present.
///
/// The slot is `previous` when given, so a removed argument comes back with
/// the value it had. Otherwise its value is synthesized the same way
/// [`defaults::default_arguments()`] does.
pub fn add_argument<P: ExplorerPolicy + ?Sized>(
    mut slots: Vec<Argument>,
    input_value: InputValueRef<'_>,
    parent_field: &Field,
    previous: Option<Argument>,
    schema: &Schema,
    policy: &P,
) -> Result<Vec<Argument>> {
    if slots.iter().any(|slot| slot.name == input_value.name()) {
        return Ok(slots);
    }

    let slot = match previous {
        Some(previous) => previous,
        None => defaults::default_argument(schema, parent_field, input_value, policy)
            .ok_or_else(|| EditError::UnsupportedArgumentType {
                name: input_value.name().to_string(),
                type_name: input_value.type_annotation().innermost_type_name().to_string(),
            })?,
    };
    slots.push(slot);
    Ok(slots)
}

/// Remove the slot named `name`, returning it so that it can be restored.
pub fn remove_argument(mut slots: Vec<Argument>, name: &str) -> ArgumentToggle {
    let removed =
        slots.iter()
            .position(|slot| slot.name == name)
            .map(|idx| slots.remove(idx));
    ArgumentToggle { slots, removed }
}
