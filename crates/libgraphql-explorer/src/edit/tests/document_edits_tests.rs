use crate::document::ArgumentPath;
use crate::document::DefinitionId;
use crate::document::FieldPath;
use crate::document::NamedValue;
use crate::document::Selection;
use crate::document::Value;
use crate::edit::field_at_path;
use crate::edit::resolve_input_value;
use crate::edit::root_type_of;
use crate::edit::toggle_field;
use crate::edit::type_at_path;
use crate::edit::update_argument_slots;
use crate::edit::update_selections;
use crate::edit::value_at_path;
use crate::edit::EditError;
use crate::edit::Result;
use crate::test_fixtures::field;
use crate::test_fixtures::parse;
use crate::test_fixtures::registry_schema;
use crate::test_fixtures::FIRST_DEF;
use crate::DefaultExplorerPolicy;
use proptest::prelude::*;

fn unchanged(selections: Vec<Selection>) -> Result<Vec<Selection>> {
    Ok(selections)
}

mod update_selections {
    use super::*;

    #[test]
    fn edits_only_the_addressed_selection_set() {
        let doc = parse("query Q { viewer { id packages { name } } name }\nfragment F on User { id }");
        let new_doc = update_selections(
            &doc,
            FIRST_DEF,
            &FieldPath::new(["viewer", "packages"]),
            |mut selections| {
                selections.clear();
                Ok(selections)
            },
        ).unwrap();

        assert_eq!(
            new_doc,
            parse("query Q { viewer { id packages } name }\nfragment F on User { id }"),
        );
        assert_eq!(
            doc,
            parse("query Q { viewer { id packages { name } } name }\nfragment F on User { id }"),
        );
    }

    #[test]
    fn operation_roots_are_never_empty() {
        let doc = parse("query Q { name }");
        let new_doc = update_selections(&doc, FIRST_DEF, &FieldPath::root(), |_| Ok(vec![])).unwrap();
        assert_eq!(new_doc.to_graphql_string(), "query Q {\n  __typename\n}\n");
    }

    #[test]
    fn fragment_roots_may_be_empty() {
        let doc = parse("fragment F on User { id }");
        let new_doc = update_selections(&doc, FIRST_DEF, &FieldPath::root(), |_| Ok(vec![])).unwrap();
        assert!(new_doc.definitions[0].selections().is_empty());
    }

    #[test]
    fn missing_selection_and_definition() {
        let doc = parse("query Q { name }");
        let path = FieldPath::new(["viewer"]);
        assert_eq!(
            update_selections(&doc, FIRST_DEF, &path, unchanged).unwrap_err(),
            EditError::MissingFieldSelection(path),
        );
        assert_eq!(
            update_selections(&doc, DefinitionId(3), &FieldPath::root(), unchanged).unwrap_err(),
            EditError::UnknownDefinition(DefinitionId(3)),
        );
    }

    proptest! {
        #[test]
        fn removing_every_root_field_leaves_a_placeholder(
            order in Just(vec!["name", "homepage", "viewer", "package"]).prop_shuffle(),
        ) {
            let schema = registry_schema();
            let mut doc = parse(r#"query Q { name homepage viewer { id } package(name: "a") { id } }"#);
            for field_name in order {
                doc = update_selections(&doc, FIRST_DEF, &FieldPath::root(), |selections| {
                    Ok(toggle_field(
                        selections,
                        field(&schema, "Query", field_name),
                        None,
                        &schema,
                        &DefaultExplorerPolicy,
                    ).selections)
                }).unwrap();
                prop_assert!(!doc.definitions[0].selections().is_empty());
            }
            prop_assert_eq!(doc, parse("query Q { __typename }"));
        }
    }
}

mod update_argument_slots {
    use super::*;

    #[test]
    fn edits_field_arguments() {
        let doc = parse("{ viewer { packages { name } } packages(first: 1) { id } }");
        let arg_path = ArgumentPath::new(FieldPath::new(["packages"]), "first");
        let new_doc = update_argument_slots(&doc, FIRST_DEF, &arg_path, |mut slots| {
            slots.push(NamedValue::new("sort", Value::Enum("DESC".to_string())));
            Ok(slots)
        }).unwrap();
        assert_eq!(
            new_doc,
            parse("{ viewer { packages { name } } packages(first: 1, sort: DESC) { id } }"),
        );
    }

    #[test]
    fn edits_nested_object_fields() {
        let doc = parse(r#"{ packages(filter: {and: {author: "a"}}) { id } }"#);
        let arg_path =
            ArgumentPath::new(FieldPath::new(["packages"]), "filter")
                .input_field("and")
                .input_field("author");
        let new_doc = update_argument_slots(&doc, FIRST_DEF, &arg_path, |mut slots| {
            slots[0].value = Value::String("b".to_string());
            Ok(slots)
        }).unwrap();
        assert_eq!(new_doc, parse(r#"{ packages(filter: {and: {author: "b"}}) { id } }"#));
    }

    #[test]
    fn nested_fields_need_an_object_value() {
        let doc = parse("{ packages(filter: null) { id } }");
        let arg_path =
            ArgumentPath::new(FieldPath::new(["packages"]), "filter").input_field("author");
        assert_eq!(
            update_argument_slots(&doc, FIRST_DEF, &arg_path, Ok).unwrap_err(),
            EditError::NotAnInputObjectValue {
                name: "filter".to_string(),
            },
        );
    }

    #[test]
    fn root_path_has_no_arguments() {
        let doc = parse("{ name }");
        let arg_path = ArgumentPath::new(FieldPath::root(), "first");
        assert!(matches!(
            update_argument_slots(&doc, FIRST_DEF, &arg_path, Ok),
            Err(EditError::MissingFieldSelection(_)),
        ));
    }
}

mod schema_lookups {
    use super::*;

    #[test]
    fn root_types() {
        let schema = registry_schema();
        let doc = parse("mutation M { publish { id } }\nfragment F on User { id }");
        assert_eq!(root_type_of(&schema, &doc, FIRST_DEF).unwrap().name(), "Mutation");
        assert_eq!(root_type_of(&schema, &doc, DefinitionId(1)).unwrap().name(), "User");

        let doc = parse("fragment F on Nope { id }");
        assert_eq!(
            root_type_of(&schema, &doc, FIRST_DEF).unwrap_err(),
            EditError::UnknownType {
                type_name: "Nope".to_string(),
            },
        );
    }

    #[test]
    fn fields_and_types_along_a_path() {
        let schema = registry_schema();
        let doc = parse("{ name }");
        let path = FieldPath::new(["viewer", "packages", "author"]);

        let author = field_at_path(&schema, &doc, FIRST_DEF, &path).unwrap();
        assert_eq!(author.parent_type_name(), "Package");
        assert_eq!(type_at_path(&schema, &doc, FIRST_DEF, &path).unwrap().name(), "User");
        assert_eq!(
            type_at_path(&schema, &doc, FIRST_DEF, &FieldPath::root()).unwrap().name(),
            "Query",
        );

        assert_eq!(
            field_at_path(&schema, &doc, FIRST_DEF, &FieldPath::new(["viewer", "avatar"]))
                .unwrap_err(),
            EditError::UnknownField {
                type_name: "User".to_string(),
                field_name: "avatar".to_string(),
            },
        );
    }

    #[test]
    fn input_values_along_an_argument_path() {
        let schema = registry_schema();
        let doc = parse("{ name }");
        let filter = ArgumentPath::new(FieldPath::new(["packages"]), "filter");

        let (field, input_value) =
            resolve_input_value(&schema, &doc, FIRST_DEF, &filter.input_field("and").input_field("author"))
                .unwrap();
        assert_eq!(field.name(), "packages");
        assert_eq!(input_value.name(), "author");

        assert_eq!(
            resolve_input_value(&schema, &doc, FIRST_DEF, &filter.input_field("owner")).unwrap_err(),
            EditError::UnknownArgument {
                parent: "PackageFilter".to_string(),
                name: "owner".to_string(),
            },
        );
        assert_eq!(
            resolve_input_value(
                &schema,
                &doc,
                FIRST_DEF,
                &ArgumentPath::new(FieldPath::new(["packages"]), "last"),
            ).unwrap_err(),
            EditError::UnknownArgument {
                parent: "Query.packages".to_string(),
                name: "last".to_string(),
            },
        );
        assert!(matches!(
            resolve_input_value(
                &schema,
                &doc,
                FIRST_DEF,
                &ArgumentPath::new(FieldPath::new(["packages"]), "first").input_field("x"),
            ),
            Err(EditError::NotAnInputObjectValue { .. }),
        ));
    }

    #[test]
    fn current_values() {
        let doc = parse(r#"{ viewer { packages { name } } packages(first: 3, filter: {author: "a"}) { id } }"#);
        let packages = FieldPath::new(["packages"]);

        let first = ArgumentPath::new(packages.clone(), "first");
        assert_eq!(value_at_path(&doc, FIRST_DEF, &first).unwrap(), &Value::Int(3));

        let author = ArgumentPath::new(packages.clone(), "filter").input_field("author");
        assert_eq!(
            value_at_path(&doc, FIRST_DEF, &author).unwrap(),
            &Value::String("a".to_string()),
        );

        let sort = ArgumentPath::new(packages, "sort");
        assert_eq!(
            value_at_path(&doc, FIRST_DEF, &sort).unwrap_err(),
            EditError::MissingArgument {
                name: "sort".to_string(),
            },
        );
    }
}
