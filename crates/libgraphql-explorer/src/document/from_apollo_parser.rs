use crate::document::Definition;
use crate::document::Directive;
use crate::document::Document;
use crate::document::DocumentParseError;
use crate::document::FieldSelection;
use crate::document::FragmentDefinition;
use crate::document::FragmentSpread;
use crate::document::InlineFragment;
use crate::document::NamedValue;
use crate::document::OperationDefinition;
use crate::document::OperationKind;
use crate::document::Selection;
use crate::document::TypeRef;
use crate::document::Value;
use crate::document::VariableDefinition;
use apollo_parser::cst;

// Every conversion below runs on a tree that parsed without errors, so the
// optional children it reads are always present.

pub(crate) fn document_from_cst(
    doc: cst::Document,
) -> Result<Document, DocumentParseError> {
    doc.definitions()
        .map(|def| match def {
            cst::Definition::FragmentDefinition(frag) =>
                Ok(Definition::Fragment(fragment_from_cst(frag))),
            cst::Definition::OperationDefinition(op) =>
                Ok(Definition::Operation(operation_from_cst(op))),
            _ => Err(DocumentParseError::TypeSystemDefinition),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Document::new)
}

fn fragment_from_cst(frag: cst::FragmentDefinition) -> FragmentDefinition {
    FragmentDefinition {
        name: name_text(frag.fragment_name().and_then(|name| name.name())),
        type_condition: name_text(
            frag.type_condition()
                .and_then(|cond| cond.named_type())
                .and_then(|named| named.name()),
        ),
        directives: directives_from_cst(frag.directives()),
        selections: selections_from_cst(frag.selection_set()),
    }
}

fn operation_from_cst(op: cst::OperationDefinition) -> OperationDefinition {
    let kind = match op.operation_type() {
        Some(op_type) if op_type.mutation_token().is_some() => OperationKind::Mutation,
        Some(op_type) if op_type.subscription_token().is_some() => OperationKind::Subscription,
        _ => OperationKind::Query,
    };

    OperationDefinition {
        kind,
        name: op.name().map(|name| name.text().to_string()),
        variable_definitions: op.variable_definitions()
            .map(|var_defs| {
                var_defs.variable_definitions()
                    .map(variable_definition_from_cst)
                    .collect()
            })
            .unwrap_or_default(),
        directives: directives_from_cst(op.directives()),
        selections: selections_from_cst(op.selection_set()),
    }
}

fn variable_definition_from_cst(var_def: cst::VariableDefinition) -> VariableDefinition {
    VariableDefinition {
        name: name_text(var_def.variable().and_then(|var| var.name())),
        var_type: var_def.ty()
            .map(type_ref_from_cst)
            .unwrap_or_else(|| TypeRef::Named(String::new())),
        default_value: var_def.default_value()
            .and_then(|default| default.value())
            .map(value_from_cst),
    }
}

fn selections_from_cst(selection_set: Option<cst::SelectionSet>) -> Vec<Selection> {
    let Some(selection_set) = selection_set else {
        return vec![];
    };
    selection_set.selections()
        .map(selection_from_cst)
        .collect()
}

fn selection_from_cst(selection: cst::Selection) -> Selection {
    match selection {
        cst::Selection::Field(field) => Selection::Field(FieldSelection {
            alias: field.alias()
                .and_then(|alias| alias.name())
                .map(|name| name.text().to_string()),
            name: name_text(field.name()),
            arguments: arguments_from_cst(field.arguments()),
            directives: directives_from_cst(field.directives()),
            selections: selections_from_cst(field.selection_set()),
        }),

        cst::Selection::FragmentSpread(spread) =>
            Selection::FragmentSpread(FragmentSpread {
                fragment_name: name_text(spread.fragment_name().and_then(|name| name.name())),
                directives: directives_from_cst(spread.directives()),
            }),

        cst::Selection::InlineFragment(inline) =>
            Selection::InlineFragment(InlineFragment {
                type_condition: inline.type_condition()
                    .and_then(|cond| cond.named_type())
                    .and_then(|named| named.name())
                    .map(|name| name.text().to_string()),
                directives: directives_from_cst(inline.directives()),
                selections: selections_from_cst(inline.selection_set()),
            }),
    }
}

fn directives_from_cst(directives: Option<cst::Directives>) -> Vec<Directive> {
    let Some(directives) = directives else {
        return vec![];
    };
    directives.directives()
        .map(|directive| Directive {
            name: name_text(directive.name()),
            arguments: arguments_from_cst(directive.arguments()),
        })
        .collect()
}

fn arguments_from_cst(arguments: Option<cst::Arguments>) -> Vec<NamedValue> {
    let Some(arguments) = arguments else {
        return vec![];
    };
    arguments.arguments()
        .filter_map(|arg| {
            let value = value_from_cst(arg.value()?);
            Some(NamedValue::new(name_text(arg.name()), value))
        })
        .collect()
}

fn type_ref_from_cst(ty: cst::Type) -> TypeRef {
    match ty {
        cst::Type::ListType(list) => TypeRef::List(Box::new(
            list.ty()
                .map(type_ref_from_cst)
                .unwrap_or_else(|| TypeRef::Named(String::new())),
        )),

        cst::Type::NamedType(named) => TypeRef::Named(name_text(named.name())),

        cst::Type::NonNullType(non_null) => {
            let inner = match (non_null.named_type(), non_null.list_type()) {
                (Some(named), _) => type_ref_from_cst(cst::Type::NamedType(named)),
                (None, Some(list)) => type_ref_from_cst(cst::Type::ListType(list)),
                (None, None) => TypeRef::Named(String::new()),
            };
            TypeRef::NonNull(Box::new(inner))
        },
    }
}

/// Object fields keep the order they were written in.
fn value_from_cst(value: cst::Value) -> Value {
    match value {
        cst::Value::BooleanValue(b) => Value::Boolean(b.true_token().is_some()),
        cst::Value::EnumValue(enum_value) => Value::Enum(name_text(enum_value.name())),
        cst::Value::FloatValue(float) => Value::Float(
            float.float_token()
                .and_then(|token| token.text().parse::<f64>().ok())
                .unwrap_or_default(),
        ),
        // Literals beyond the i64 range have no exact representation, so they
        // are kept as floats.
        cst::Value::IntValue(int) => {
            let text = int.int_token()
                .map(|token| token.text().to_string())
                .unwrap_or_default();
            match text.parse::<i64>() {
                Ok(num) => Value::Int(num),
                Err(_) => Value::Float(text.parse::<f64>().unwrap_or_default()),
            }
        },
        cst::Value::ListValue(list) => Value::List(list.values().map(value_from_cst).collect()),
        cst::Value::NullValue(_) => Value::Null,
        cst::Value::ObjectValue(object) => Value::Object(
            object.object_fields()
                .filter_map(|field| {
                    let value = value_from_cst(field.value()?);
                    Some(NamedValue::new(name_text(field.name()), value))
                })
                .collect(),
        ),
        cst::Value::StringValue(s) => Value::String(String::from(&s)),
        cst::Value::Variable(var) => Value::Variable(name_text(var.name())),
    }
}

fn name_text(name: Option<cst::Name>) -> String {
    name.map(|name| name.text().to_string()).unwrap_or_default()
}
