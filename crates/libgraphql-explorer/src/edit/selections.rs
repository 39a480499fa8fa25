use crate::defaults;
use crate::document::Argument;
use crate::document::FieldSelection;
use crate::document::FragmentDefinition;
use crate::document::FragmentSpread;
use crate::document::Selection;
use crate::edit::unique_name;
use crate::edit::EditError;
use crate::edit::Result;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::TYPENAME_META_FIELD;
use crate::ExplorerPolicy;

/// The outcome of toggling something in a selection list.
///
/// When the toggle removed a node, `removed` holds it so that toggling it
/// back on can restore it exactly.
#[derive(Clone, Debug, PartialEq)]
pub struct Toggled<T> {
    pub selections: Vec<Selection>,
    pub removed: Option<T>,
}

pub type FieldToggle = Toggled<FieldSelection>;
pub type SpreadToggle = Toggled<FragmentSpread>;

/// Remove the first selection of `field` or, if it isn't selected, append
/// `previous` (when given) or a new childless selection of it populated
/// with its default arguments.
pub fn toggle_field<P: ExplorerPolicy + ?Sized>(
    mut selections: Vec<Selection>,
    field: &Field,
    previous: Option<FieldSelection>,
    schema: &Schema,
    policy: &P,
) -> FieldToggle {
    let existing_idx =
        selections.iter().position(|sel| sel.is_field_named(field.name()));

    if let Some(idx) = existing_idx {
        let removed = match selections.remove(idx) {
            Selection::Field(field_sel) => Some(field_sel),
            _ => None,
        };
        return Toggled { selections, removed };
    }

    let added = previous.unwrap_or_else(|| FieldSelection::new(
        field.name(),
        defaults::default_arguments(schema, field, policy),
    ));
    selections.push(Selection::Field(added));
    Toggled {
        selections,
        removed: None,
    }
}

/// Replace any selections of `field` with one that selects each of
/// `subfield_names` directly beneath it.
///
/// `field` gets its default arguments. The subfields get no arguments and
/// no children of their own.
pub fn select_all_subfields<P, S>(
    selections: Vec<Selection>,
    field: &Field,
    subfield_names: &[S],
    schema: &Schema,
    policy: &P,
) -> Vec<Selection>
where
    P: ExplorerPolicy + ?Sized,
    S: AsRef<str>,
{
    let mut selections: Vec<Selection> =
        selections.into_iter()
            .filter(|sel| !sel.is_field_named(field.name()))
            .collect();

    let mut field_sel = FieldSelection::new(
        field.name(),
        defaults::default_arguments(schema, field, policy),
    );
    field_sel.selections =
        subfield_names.iter()
            .map(|name| Selection::Field(FieldSelection::new(name.as_ref(), vec![])))
            .collect();
    selections.push(Selection::Field(field_sel));
    selections
}

/// Select `field_names` beneath the selection of `field_name`, keeping
/// anything already selected there.
pub fn select_default_subfields<S: AsRef<str>>(
    selections: Vec<Selection>,
    field_name: &str,
    field_names: &[S],
) -> Result<Vec<Selection>> {
    map_field_selection(selections, field_name, |mut field_sel| {
        for name in field_names {
            let name = name.as_ref();
            if !field_sel.selections.iter().any(|sel| sel.is_field_named(name)) {
                field_sel.selections.push(
                    Selection::Field(FieldSelection::new(name, vec![])),
                );
            }
        }
        Ok(field_sel)
    })
}

/// Replace the child selections of the selection of `field_name`.
pub fn set_child_selections(
    selections: Vec<Selection>,
    field_name: &str,
    children: Vec<Selection>,
) -> Result<Vec<Selection>> {
    map_field_selection(selections, field_name, |mut field_sel| {
        field_sel.selections = children;
        Ok(field_sel)
    })
}

/// Replace the arguments of the selection of `field_name`.
pub fn set_field_arguments(
    selections: Vec<Selection>,
    field_name: &str,
    arguments: Vec<Argument>,
) -> Result<Vec<Selection>> {
    map_field_selection(selections, field_name, |mut field_sel| {
        field_sel.arguments = arguments;
        Ok(field_sel)
    })
}

/// Normalize the root selection list of an operation: drop `__typename`
/// selections and, if nothing is left, select `__typename` alone so the
/// operation stays syntactically valid.
pub fn normalize_operation_selections(selections: Vec<Selection>) -> Vec<Selection> {
    let selections: Vec<Selection> =
        selections.into_iter()
            .filter(|sel| !sel.is_field_named(TYPENAME_META_FIELD))
            .collect();

    if selections.is_empty() {
        vec![typename_placeholder()]
    } else {
        selections
    }
}

pub(crate) fn typename_placeholder() -> Selection {
    Selection::Field(FieldSelection::new(TYPENAME_META_FIELD, vec![]))
}

/// Remove the spread of `fragment_name` or, if it isn't spread here, append
/// `previous` (when given) or a new spread of it.
pub fn toggle_fragment_spread(
    mut selections: Vec<Selection>,
    fragment_name: &str,
    previous: Option<FragmentSpread>,
) -> SpreadToggle {
    let existing_idx =
        selections.iter().position(|sel| sel.is_spread_of(fragment_name));

    if let Some(idx) = existing_idx {
        let removed = match selections.remove(idx) {
            Selection::FragmentSpread(spread) => Some(spread),
            _ => None,
        };
        return Toggled { selections, removed };
    }

    selections.push(Selection::FragmentSpread(
        previous.unwrap_or_else(|| FragmentSpread::new(fragment_name)),
    ));
    Toggled {
        selections,
        removed: None,
    }
}

/// Move the children of the selection of `field_name` into a new fragment on
/// `type_name`, leaving a spread of that fragment in their place.
///
/// The fragment is named `<type_name>Fragment`, suffixed as needed to avoid
/// `existing_fragment_names`. The caller is responsible for adding the
/// returned [`FragmentDefinition`] to the document.
pub fn extract_fragment<'a, I>(
    selections: Vec<Selection>,
    field_name: &str,
    type_name: &str,
    existing_fragment_names: I,
) -> Result<(Vec<Selection>, FragmentDefinition)>
where
    I: IntoIterator<Item = &'a str>,
{
    let fragment_name =
        unique_name(&format!("{type_name}Fragment"), existing_fragment_names);

    let mut extracted = None;
    let selections = map_field_selection(selections, field_name, |mut field_sel| {
        if field_sel.selections.is_empty() {
            return Err(EditError::EmptySelectionToExtract {
                field_name: field_name.to_string(),
            });
        }
        let children = std::mem::replace(
            &mut field_sel.selections,
            vec![Selection::FragmentSpread(FragmentSpread::new(fragment_name.as_str()))],
        );
        extracted = Some(children);
        Ok(field_sel)
    })?;

    let fragment = FragmentDefinition {
        name: fragment_name,
        type_condition: type_name.to_string(),
        directives: vec![],
        selections: extracted.unwrap_or_default(),
    };
    Ok((selections, fragment))
}

/// The names of the direct subfields of an object type, for
/// [`select_all_subfields()`]. Fails for every other kind of type.
pub(crate) fn object_subfield_names(
    field: &Field,
    field_type: &GraphQLType,
) -> Result<Vec<String>> {
    match field_type {
        GraphQLType::Object(obj_type) => Ok(obj_type.fields().keys().cloned().collect()),
        other => Err(EditError::NotAnObjectField {
            field_name: field.name().to_string(),
            type_name: other.name().to_string(),
        }),
    }
}

fn map_field_selection<F>(
    mut selections: Vec<Selection>,
    field_name: &str,
    edit: F,
) -> Result<Vec<Selection>>
where
    F: FnOnce(FieldSelection) -> Result<FieldSelection>,
{
    let Some(idx) = selections.iter().position(|sel| sel.is_field_named(field_name)) else {
        return Err(EditError::MissingFieldSelection(
            crate::document::FieldPath::new([field_name]),
        ));
    };

    if let Selection::Field(field_sel) = selections.remove(idx) {
        selections.insert(idx, Selection::Field(edit(field_sel)?));
    }
    Ok(selections)
}
