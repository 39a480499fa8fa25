use crate::document::Argument;
use crate::document::ArgumentPath;
use crate::document::Definition;
use crate::document::DefinitionId;
use crate::document::Document;
use crate::document::FieldPath;
use crate::document::NamedValue;
use crate::document::Selection;
use crate::document::Value;
use crate::edit::normalize_operation_selections;
use crate::edit::EditError;
use crate::edit::Result;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputValueRef;

/// Rebuild `doc` with the selection list at `path` (within the definition
/// `def_id`) replaced by whatever `edit` makes of it.
///
/// When `def_id` is an operation, its root selection list is then passed
/// through [`normalize_operation_selections()`].
pub fn update_selections<F>(
    doc: &Document,
    def_id: DefinitionId,
    path: &FieldPath,
    edit: F,
) -> Result<Document>
where
    F: FnOnce(Vec<Selection>) -> Result<Vec<Selection>>,
{
    let mut new_doc = doc.clone();
    let def = new_doc.definitions
        .get_mut(def_id.0)
        .ok_or(EditError::UnknownDefinition(def_id))?;

    let root_selections = match def {
        Definition::Fragment(frag) => &mut frag.selections,
        Definition::Operation(op) => &mut op.selections,
    };
    let target = selections_at_mut(root_selections, path.segments())
        .ok_or_else(|| EditError::MissingFieldSelection(path.clone()))?;
    let edited = edit(std::mem::take(target))?;
    *target = edited;

    if let Definition::Operation(op) = def {
        op.selections = normalize_operation_selections(std::mem::take(&mut op.selections));
    }
    Ok(new_doc)
}

fn selections_at_mut<'a>(
    selections: &'a mut Vec<Selection>,
    segments: &[String],
) -> Option<&'a mut Vec<Selection>> {
    let Some((first, rest)) = segments.split_first() else {
        return Some(selections);
    };
    let field_sel = selections.iter_mut().find_map(|sel| match sel {
        Selection::Field(field_sel) if field_sel.name == *first => Some(field_sel),
        _ => None,
    })?;
    selections_at_mut(&mut field_sel.selections, rest)
}

/// Rebuild `doc` with the list of argument slots that holds the leaf of
/// `arg_path` replaced by whatever `edit` makes of it.
///
/// For a top-level argument that list is the arguments of the field
/// selection at `arg_path.field_path`. For a nested input field it is the
/// fields of the enclosing object value.
pub fn update_argument_slots<F>(
    doc: &Document,
    def_id: DefinitionId,
    arg_path: &ArgumentPath,
    edit: F,
) -> Result<Document>
where
    F: FnOnce(Vec<Argument>) -> Result<Vec<Argument>>,
{
    let field_path = &arg_path.field_path;
    let (Some(parent_path), Some(field_name)) = (field_path.parent(), field_path.last()) else {
        return Err(EditError::MissingFieldSelection(field_path.clone()));
    };

    update_selections(doc, def_id, &parent_path, |mut selections| {
        let field_sel = selections.iter_mut()
            .find_map(|sel| match sel {
                Selection::Field(field_sel) if field_sel.name == field_name => Some(field_sel),
                _ => None,
            })
            .ok_or_else(|| EditError::MissingFieldSelection(field_path.clone()))?;

        let prefix: Vec<&str> =
            std::iter::once(arg_path.argument.as_str())
                .chain(arg_path.input_fields.iter().map(String::as_str))
                .collect();
        let container_path = &prefix[..prefix.len() - 1];
        field_sel.arguments =
            edit_nested_slots(std::mem::take(&mut field_sel.arguments), container_path, edit)?;
        Ok(selections)
    })
}

fn edit_nested_slots<F>(
    mut slots: Vec<Argument>,
    container_path: &[&str],
    edit: F,
) -> Result<Vec<Argument>>
where
    F: FnOnce(Vec<Argument>) -> Result<Vec<Argument>>,
{
    let Some((first, rest)) = container_path.split_first() else {
        return edit(slots);
    };

    let slot = slots.iter_mut()
        .find(|slot| slot.name == *first)
        .ok_or_else(|| EditError::MissingArgument {
            name: first.to_string(),
        })?;
    let Value::Object(fields) = &mut slot.value else {
        return Err(EditError::NotAnInputObjectValue {
            name: first.to_string(),
        });
    };
    *fields = edit_nested_slots(std::mem::take(fields), rest, edit)?;
    Ok(slots)
}

/// The type that the root selection set of the definition `def_id` selects
/// against: the schema's root type for an operation, or a fragment's type
/// condition.
pub fn root_type_of<'schema>(
    schema: &'schema Schema,
    doc: &Document,
    def_id: DefinitionId,
) -> Result<&'schema GraphQLType> {
    let def = doc.definition(def_id).ok_or(EditError::UnknownDefinition(def_id))?;
    let type_name = match def {
        Definition::Fragment(frag) => frag.type_condition.as_str(),
        Definition::Operation(op) => match schema.root_type(op.kind) {
            Some(root_type) => root_type.name(),
            None => return Err(EditError::UnknownType {
                type_name: op.kind.capitalized().to_string(),
            }),
        },
    };
    schema.lookup_type(type_name).ok_or_else(|| EditError::UnknownType {
        type_name: type_name.to_string(),
    })
}

/// The schema field addressed by `path` within the definition `def_id`.
///
/// Only the schema is consulted, so the field needn't be selected.
pub fn field_at_path<'schema>(
    schema: &'schema Schema,
    doc: &Document,
    def_id: DefinitionId,
    path: &FieldPath,
) -> Result<&'schema Field> {
    let (Some(parent_path), Some(field_name)) = (path.parent(), path.last()) else {
        return Err(EditError::MissingFieldSelection(path.clone()));
    };
    let parent_type = type_at_path(schema, doc, def_id, &parent_path)?;
    field_on_type(schema, parent_type, field_name)
}

/// The type whose fields can be selected beneath `path`. For the root path
/// this is [`root_type_of()`].
pub fn type_at_path<'schema>(
    schema: &'schema Schema,
    doc: &Document,
    def_id: DefinitionId,
    path: &FieldPath,
) -> Result<&'schema GraphQLType> {
    let mut current = root_type_of(schema, doc, def_id)?;
    for segment in path.segments() {
        let field = field_on_type(schema, current, segment)?;
        current = field.return_type(schema).ok_or_else(|| EditError::UnknownType {
            type_name: field.type_annotation().innermost_type_name().to_string(),
        })?;
    }
    Ok(current)
}

fn field_on_type<'schema>(
    schema: &'schema Schema,
    type_: &'schema GraphQLType,
    field_name: &str,
) -> Result<&'schema Field> {
    schema.fields_of(type_)
        .and_then(|fields| fields.get(field_name))
        .ok_or_else(|| EditError::UnknownField {
            type_name: type_.name().to_string(),
            field_name: field_name.to_string(),
        })
}

/// The schema field at `arg_path.field_path` along with the argument or
/// nested input field that `arg_path` addresses.
pub fn resolve_input_value<'schema>(
    schema: &'schema Schema,
    doc: &Document,
    def_id: DefinitionId,
    arg_path: &ArgumentPath,
) -> Result<(&'schema Field, InputValueRef<'schema>)> {
    let field = field_at_path(schema, doc, def_id, &arg_path.field_path)?;
    let param = field.parameter(&arg_path.argument).ok_or_else(|| EditError::UnknownArgument {
        parent: format!("{}.{}", field.parent_type_name(), field.name()),
        name: arg_path.argument.clone(),
    })?;

    let mut current = InputValueRef::from(param);
    for input_field_name in &arg_path.input_fields {
        let input_type = match schema.unwrap_type(current.type_annotation()) {
            Some(GraphQLType::InputObject(input_type)) => input_type,
            Some(other) => return Err(EditError::NotAnInputObjectValue {
                name: format!("{}: {}", current.name(), other.name()),
            }),
            None => return Err(EditError::UnknownType {
                type_name: current.type_annotation().innermost_type_name().to_string(),
            }),
        };
        let input_field = input_type.field(input_field_name).ok_or_else(|| {
            EditError::UnknownArgument {
                parent: input_type.name().to_string(),
                name: input_field_name.clone(),
            }
        })?;
        current = InputValueRef::from(input_field);
    }
    Ok((field, current))
}

/// The value currently held by the argument (or nested input field) at
/// `arg_path`.
pub fn value_at_path<'doc>(
    doc: &'doc Document,
    def_id: DefinitionId,
    arg_path: &ArgumentPath,
) -> Result<&'doc Value> {
    let def = doc.definition(def_id).ok_or(EditError::UnknownDefinition(def_id))?;
    let missing_field = || EditError::MissingFieldSelection(arg_path.field_path.clone());

    let mut selections = def.selections();
    let mut field_sel = None;
    for segment in arg_path.field_path.segments() {
        let found = selections.iter()
            .find_map(|sel| match sel {
                Selection::Field(field_sel) if field_sel.name == *segment => Some(field_sel),
                _ => None,
            })
            .ok_or_else(missing_field)?;
        selections = &found.selections;
        field_sel = Some(found);
    }
    let field_sel = field_sel.ok_or_else(missing_field)?;

    let mut value = &NamedValue::find(&field_sel.arguments, &arg_path.argument)
        .ok_or_else(|| EditError::MissingArgument {
            name: arg_path.argument.clone(),
        })?
        .value;
    let mut container_name = arg_path.argument.as_str();
    for input_field_name in &arg_path.input_fields {
        let fields = value.as_object_fields().ok_or_else(|| {
            EditError::NotAnInputObjectValue {
                name: container_name.to_string(),
            }
        })?;
        value = &NamedValue::find(fields, input_field_name)
            .ok_or_else(|| EditError::MissingArgument {
                name: input_field_name.clone(),
            })?
            .value;
        container_name = input_field_name.as_str();
    }
    Ok(value)
}
