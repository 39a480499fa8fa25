use crate::document::ArgumentPath;
use crate::document::DefinitionId;
use crate::document::FieldPath;
use crate::edit::devariablize;
use crate::edit::variablize;
use crate::edit::EditError;
use crate::test_fixtures::parse;
use crate::test_fixtures::registry_schema;
use crate::test_fixtures::FIRST_DEF;

fn arg(field_path: &[&str], argument: &str) -> ArgumentPath {
    ArgumentPath::new(FieldPath::new(field_path.iter().copied()), argument)
}

mod variablize {
    use super::*;

    #[test]
    fn current_value_becomes_the_default() {
        let schema = registry_schema();
        let doc = parse(r#"{ package(name: "left-pad") { name } }"#);
        let new_doc = variablize(&doc, FIRST_DEF, &arg(&["package"], "name"), &schema).unwrap();
        assert_eq!(
            new_doc.to_graphql_string(),
            "query ($name: String = \"left-pad\") {\n  package(name: $name) {\n    name\n  }\n}\n",
        );
    }

    #[test]
    fn null_value_keeps_the_non_null_type() {
        let schema = registry_schema();
        let doc = parse("query Q { package(name: null) { name } }");
        let new_doc = variablize(&doc, FIRST_DEF, &arg(&["package"], "name"), &schema).unwrap();
        assert_eq!(
            new_doc.to_graphql_string(),
            "query Q($name: String!) {\n  package(name: $name) {\n    name\n  }\n}\n",
        );
    }

    #[test]
    fn name_avoids_existing_variables() {
        let schema = registry_schema();
        let doc = parse("query Q($name: String!) { package(name: $name) { id } viewer { packages { id } } search(text: \"x\") { __typename } }");
        let new_doc = variablize(&doc, FIRST_DEF, &arg(&["search"], "text"), &schema).unwrap();
        let op = new_doc.definitions[0].as_operation().unwrap();
        let var_names: Vec<&str> =
            op.variable_definitions.iter().map(|var_def| var_def.name.as_str()).collect();
        assert_eq!(var_names, vec!["name", "text"]);

        let doc = parse(r#"query Q($name: String!) { package(name: $name) { id } node(id: "1") { id } }"#);
        let new_doc = variablize(&doc, FIRST_DEF, &arg(&["node"], "id"), &schema).unwrap();
        assert!(new_doc.to_graphql_string().starts_with("query Q($name: String!, $id: ID = \"1\")"));
    }

    #[test]
    fn repeated_argument_names_get_suffixes() {
        let schema = registry_schema();
        let doc = parse(r#"query Q($name: String) { package(name: "a") { id } }"#);
        let new_doc = variablize(&doc, FIRST_DEF, &arg(&["package"], "name"), &schema).unwrap();
        assert_eq!(
            new_doc.to_graphql_string(),
            "query Q($name: String, $name1: String = \"a\") {\n  package(name: $name1) {\n    id\n  }\n}\n",
        );
    }

    #[test]
    fn nested_input_field() {
        let schema = registry_schema();
        let doc = parse(r#"query Q { packages(filter: {author: "sindre"}) { id } }"#);
        let path = arg(&["packages"], "filter").input_field("author");
        let new_doc = variablize(&doc, FIRST_DEF, &path, &schema).unwrap();
        assert_eq!(
            new_doc.to_graphql_string(),
            "query Q($author: String = \"sindre\") {\n  packages(filter: {author: $author}) {\n    id\n  }\n}\n",
        );
    }

    #[test]
    fn variables_within_the_value_are_inlined() {
        let schema = registry_schema();
        let doc = parse(r#"query Q($who: String = "sindre") { packages(filter: {nameContains: "x", author: $who}) { id } }"#);
        let new_doc = variablize(&doc, FIRST_DEF, &arg(&["packages"], "filter"), &schema).unwrap();
        assert_eq!(
            new_doc.to_graphql_string(),
            "query Q($filter: PackageFilter = {nameContains: \"x\", author: \"sindre\"}) {\n  packages(filter: $filter) {\n    id\n  }\n}\n",
        );
    }

    #[test]
    fn inlined_variables_used_elsewhere_stay_declared() {
        let schema = registry_schema();
        let doc = parse(r#"query Q($who: String) { packages(filter: {author: $who}) { id } viewer { name } search(text: $who) { __typename } }"#);
        let new_doc = variablize(&doc, FIRST_DEF, &arg(&["packages"], "filter"), &schema).unwrap();
        let op = new_doc.definitions[0].as_operation().unwrap();
        let var_names: Vec<&str> =
            op.variable_definitions.iter().map(|var_def| var_def.name.as_str()).collect();
        assert_eq!(var_names, vec!["who", "filter"]);
        assert_eq!(op.variable_definitions[1].default_value.as_ref().unwrap().to_string(), "{author: null}");
    }

    #[test]
    fn fragments_have_no_variables() {
        let schema = registry_schema();
        let doc = parse("query Q { name }\nfragment F on User { packages { id } }");
        assert_eq!(
            variablize(&doc, DefinitionId(1), &arg(&["packages"], "first"), &schema).unwrap_err(),
            EditError::NotAnOperation(DefinitionId(1)),
        );
    }
}

mod devariablize {
    use super::*;

    #[test]
    fn round_trips_with_variablize() {
        let schema = registry_schema();
        let doc = parse(r#"{ package(name: "left-pad") { name } packages(filter: {author: "a"}, first: 3) { id } }"#);
        for path in [
            arg(&["package"], "name"),
            arg(&["packages"], "first"),
            arg(&["packages"], "filter"),
            arg(&["packages"], "filter").input_field("author"),
        ] {
            let variablized = variablize(&doc, FIRST_DEF, &path, &schema).unwrap();
            assert_ne!(variablized, doc);
            assert_eq!(devariablize(&variablized, FIRST_DEF, &path).unwrap(), doc);
        }
    }

    #[test]
    fn variable_without_default_becomes_null() {
        let doc = parse("query Q($first: Int) { packages(first: $first) { id } }");
        let new_doc = devariablize(&doc, FIRST_DEF, &arg(&["packages"], "first")).unwrap();
        assert_eq!(new_doc, parse("query Q { packages(first: null) { id } }"));
    }

    #[test]
    fn variable_used_elsewhere_stays_declared() {
        let doc = parse("query Q($n: Int = 2) { packages(first: $n) { id } viewer { packages { id } } search(text: \"x\", limit: $n) { __typename } }");
        let new_doc = devariablize(&doc, FIRST_DEF, &arg(&["packages"], "first")).unwrap();
        assert_eq!(
            new_doc,
            parse("query Q($n: Int = 2) { packages(first: 2) { id } viewer { packages { id } } search(text: \"x\", limit: $n) { __typename } }"),
        );
    }

    /// Only the operation's own selections are searched for other uses.
    #[test]
    fn uses_within_spread_fragments_are_not_counted() {
        let fragment = "fragment Top on Query { search(text: \"x\", limit: $n) { __typename } }";
        let doc = parse(&format!("query Q($n: Int = 2) {{ packages(first: $n) {{ id }} ...Top }}\n{fragment}"));
        let new_doc = devariablize(&doc, FIRST_DEF, &arg(&["packages"], "first")).unwrap();
        assert_eq!(
            new_doc,
            parse(&format!("query Q {{ packages(first: 2) {{ id }} ...Top }}\n{fragment}")),
        );
    }

    #[test]
    fn only_variables_can_be_devariablized() {
        let doc = parse("query Q { packages(first: 1) { id } }");
        let path = arg(&["packages"], "first");
        assert_eq!(
            devariablize(&doc, FIRST_DEF, &path).unwrap_err(),
            EditError::NotAVariable(path),
        );

        let doc = parse("query Q { packages(first: $missing) { id } }");
        assert_eq!(
            devariablize(&doc, FIRST_DEF, &arg(&["packages"], "first")).unwrap_err(),
            EditError::UndefinedVariable {
                name: "missing".to_string(),
            },
        );
    }
}
