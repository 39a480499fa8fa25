use crate::document::parse_document;
use crate::document::Definition;
use crate::document::Document;
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
use crate::edit::normalize_operation_selections;
use proptest::prelude::*;

const NAMES: [&str; 6] = ["id", "name", "first", "filter", "node", "edges"];
const TYPE_NAMES: [&str; 4] = ["Int", "String", "Package", "PackageFilter"];

fn name() -> impl Strategy<Value = String> {
    prop::sample::select(NAMES.to_vec()).prop_map(str::to_string)
}

fn type_name() -> impl Strategy<Value = String> {
    prop::sample::select(TYPE_NAMES.to_vec()).prop_map(str::to_string)
}

fn scalar_value(with_variables: bool) -> BoxedStrategy<Value> {
    let literals = prop_oneof![
        any::<bool>().prop_map(Value::Boolean),
        (-100_000i64..100_000).prop_map(Value::Int),
        (-400i32..400).prop_map(|n| Value::Float(f64::from(n) / 4.0)),
        "[a-zA-Z0-9 \"\\\\]{0,8}".prop_map(Value::String),
        prop::sample::select(vec!["ASC", "DESC"]).prop_map(|s| Value::Enum(s.to_string())),
        Just(Value::Null),
    ];
    if with_variables {
        prop_oneof![
            4 => literals,
            1 => name().prop_map(Value::Variable),
        ].boxed()
    } else {
        literals.boxed()
    }
}

fn value(with_variables: bool) -> impl Strategy<Value = Value> {
    scalar_value(with_variables).prop_recursive(3, 16, 3, |inner| prop_oneof![
        prop::collection::vec(inner.clone(), 0..3).prop_map(Value::List),
        prop::collection::vec((name(), inner), 0..3).prop_map(|fields| {
            Value::Object(
                fields.into_iter()
                    .map(|(name, value)| NamedValue::new(name, value))
                    .collect(),
            )
        }),
    ])
}

fn arguments() -> impl Strategy<Value = Vec<NamedValue>> {
    prop::collection::btree_map(name(), value(true), 0..3).prop_map(|args| {
        args.into_iter()
            .map(|(name, value)| NamedValue::new(name, value))
            .collect()
    })
}

fn selection() -> impl Strategy<Value = Selection> {
    let leaf = prop_oneof![
        (name(), arguments()).prop_map(|(name, args)| {
            Selection::Field(FieldSelection::new(name, args))
        }),
        type_name().prop_map(|name| {
            Selection::FragmentSpread(FragmentSpread::new(format!("{name}Fragment")))
        }),
    ];
    leaf.prop_recursive(3, 24, 3, |inner| prop_oneof![
        (
            prop::option::of(name().prop_map(|name| format!("{name}Alias"))),
            name(),
            arguments(),
            prop::collection::vec(inner.clone(), 1..3),
        ).prop_map(|(alias, name, args, children)| {
            let mut field = FieldSelection::new(name, args);
            field.alias = alias;
            field.selections = children;
            Selection::Field(field)
        }),
        (prop::option::of(type_name()), prop::collection::vec(inner, 1..3))
            .prop_map(|(type_condition, selections)| {
                Selection::InlineFragment(InlineFragment {
                    type_condition,
                    directives: vec![],
                    selections,
                })
            }),
    ])
}

fn type_ref() -> impl Strategy<Value = TypeRef> {
    (type_name(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(name, inner_non_null, list, outer_non_null)| {
            let mut type_ref = TypeRef::Named(name);
            if list {
                if inner_non_null {
                    type_ref = TypeRef::NonNull(Box::new(type_ref));
                }
                type_ref = TypeRef::List(Box::new(type_ref));
            }
            if outer_non_null {
                type_ref = TypeRef::NonNull(Box::new(type_ref));
            }
            type_ref
        },
    )
}

fn variable_definitions() -> impl Strategy<Value = Vec<VariableDefinition>> {
    prop::collection::btree_map(
        name(),
        (type_ref(), prop::option::of(value(false))),
        0..3,
    ).prop_map(|var_defs| {
        var_defs.into_iter()
            .map(|(name, (var_type, default_value))| VariableDefinition {
                name,
                var_type,
                default_value,
            })
            .collect()
    })
}

/// Root selection lists, which may be empty.
fn root_selections() -> impl Strategy<Value = Vec<Selection>> {
    prop::collection::vec(selection(), 0..4)
}

fn definition() -> impl Strategy<Value = Definition> {
    prop_oneof![
        (
            prop::sample::select(vec![
                OperationKind::Mutation,
                OperationKind::Query,
                OperationKind::Subscription,
            ]),
            prop::option::of(type_name().prop_map(|name| format!("My{name}"))),
            variable_definitions(),
            root_selections(),
        ).prop_map(|(kind, name, variable_definitions, selections)| {
            Definition::Operation(OperationDefinition {
                kind,
                name,
                variable_definitions,
                directives: vec![],
                selections: normalize_operation_selections(selections),
            })
        }),
        (type_name(), root_selections()).prop_map(|(type_condition, selections)| {
            Definition::Fragment(FragmentDefinition {
                name: format!("{type_condition}Fragment"),
                type_condition,
                directives: vec![],
                selections,
            })
        }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Operation roots are normalized the way every edit leaves them. An
    /// empty fragment has no printable selection set, so its text is
    /// rejected instead.
    #[test]
    fn printed_documents_parse_back_unchanged(
        definitions in prop::collection::vec(definition(), 1..4),
    ) {
        let doc = Document::new(definitions);
        let printed = doc.to_graphql_string();
        let has_empty_fragment = doc.fragments().any(|(_, frag)| frag.selections.is_empty());

        if has_empty_fragment {
            prop_assert!(parse_document(&printed).is_err());
        } else {
            let reparsed = parse_document(&printed)
                .unwrap_or_else(|err| panic!("Failed to reparse:\n{printed}\n{err}"));
            prop_assert_eq!(reparsed, doc);
        }
    }
}

#[test]
fn default_document_parses_back_unchanged() {
    let doc = Document::default_document();
    let printed = doc.to_graphql_string();
    assert_eq!(printed, "query MyQuery {\n  __typename\n}\n");
    assert_eq!(parse_document(&printed).unwrap(), doc);
}
