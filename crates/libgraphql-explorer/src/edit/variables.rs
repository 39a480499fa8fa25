use crate::document::ArgumentPath;
use crate::document::Definition;
use crate::document::DefinitionId;
use crate::document::Document;
use crate::document::OperationDefinition;
use crate::document::Value;
use crate::document::VariableDefinition;
use crate::edit::arguments::replace_slot_value;
use crate::edit::resolve_input_value;
use crate::edit::unique_name;
use crate::edit::update_argument_slots;
use crate::edit::value_at_path;
use crate::edit::EditError;
use crate::edit::Result;
use crate::schema::Schema;
use std::collections::HashMap;

/// Replace the value at `arg_path` with a reference to a new operation
/// variable.
///
/// The variable is named after the argument (or input field), suffixed as
/// needed to avoid the operation's existing variable names. If the slot
/// held a value, that value becomes the variable's default and the
/// variable's type loses its outer non-null wrapper. Variables referenced
/// within that value are inlined (replaced by their own defaults) first, and
/// any of them left without other uses are no longer declared.
///
/// Uses are counted within the operation only (see
/// [`OperationDefinition::count_variable_uses()`]).
pub fn variablize(
    doc: &Document,
    def_id: DefinitionId,
    arg_path: &ArgumentPath,
    schema: &Schema,
) -> Result<Document> {
    let op = operation(doc, def_id)?;
    let (_, input_value) = resolve_input_value(schema, doc, def_id, arg_path)?;
    let current_value = value_at_path(doc, def_id, arg_path)?.clone();

    let var_name = unique_name(
        arg_path.leaf_name(),
        op.variable_definitions.iter().map(|var_def| var_def.name.as_str()),
    );

    let mut uses_within_value = HashMap::<String, usize>::new();
    current_value.visit_variables(&mut |name| {
        *uses_within_value.entry(name.to_string()).or_default() += 1;
    });
    let unused_after_inlining: Vec<&str> =
        uses_within_value.iter()
            .filter(|(name, uses)| op.count_variable_uses(name) <= **uses)
            .map(|(name, _)| name.as_str())
            .collect();

    let inlined_value = current_value.replace_variables(&mut |name| {
        match op.variable_definition(name) {
            Some(var_def) => var_def.default_value.clone().unwrap_or(Value::Null),
            None => {
                log::warn!("Inlining undefined variable `${name}` as `null`.");
                Value::Null
            },
        }
    });

    let mut var_type = input_value.type_annotation().to_type_ref();
    let default_value = if inlined_value.is_null() {
        None
    } else {
        var_type = var_type.into_nullable();
        Some(inlined_value)
    };

    let mut new_doc = update_argument_slots(doc, def_id, arg_path, |slots| {
        replace_slot_value(slots, arg_path.leaf_name(), Value::Variable(var_name.clone()))
    })?;

    let new_op = operation_mut(&mut new_doc, def_id)?;
    new_op.variable_definitions.retain(|var_def| {
        !unused_after_inlining.contains(&var_def.name.as_str())
    });
    new_op.variable_definitions.push(VariableDefinition {
        name: var_name,
        var_type,
        default_value,
    });
    Ok(new_doc)
}

/// Replace the variable reference at `arg_path` with the variable's default
/// value (or `null` if it has none), and stop declaring the variable if
/// nothing else in the operation references it.
///
/// Fragments spread by the operation are not searched, so a variable that
/// is also used inside one of them is still dropped.
pub fn devariablize(
    doc: &Document,
    def_id: DefinitionId,
    arg_path: &ArgumentPath,
) -> Result<Document> {
    let op = operation(doc, def_id)?;
    let var_name = value_at_path(doc, def_id, arg_path)?
        .as_variable_name()
        .ok_or_else(|| EditError::NotAVariable(arg_path.clone()))?;
    let var_def = op.variable_definition(var_name).ok_or_else(|| {
        EditError::UndefinedVariable {
            name: var_name.to_string(),
        }
    })?;
    let inlined_value = var_def.default_value.clone().unwrap_or(Value::Null);

    let mut new_doc = update_argument_slots(doc, def_id, arg_path, |slots| {
        replace_slot_value(slots, arg_path.leaf_name(), inlined_value)
    })?;

    let new_op = operation_mut(&mut new_doc, def_id)?;
    if new_op.count_variable_uses(var_name) == 0 {
        new_op.variable_definitions.retain(|var_def| var_def.name != var_name);
    }
    Ok(new_doc)
}

fn operation(doc: &Document, def_id: DefinitionId) -> Result<&OperationDefinition> {
    match doc.definition(def_id) {
        Some(Definition::Operation(op)) => Ok(op),
        Some(Definition::Fragment(_)) => Err(EditError::NotAnOperation(def_id)),
        None => Err(EditError::UnknownDefinition(def_id)),
    }
}

fn operation_mut(doc: &mut Document, def_id: DefinitionId) -> Result<&mut OperationDefinition> {
    match doc.definitions.get_mut(def_id.0) {
        Some(Definition::Operation(op)) => Ok(op),
        Some(Definition::Fragment(_)) => Err(EditError::NotAnOperation(def_id)),
        None => Err(EditError::UnknownDefinition(def_id)),
    }
}
