use crate::defaults::default_argument;
use crate::defaults::default_arguments;
use crate::defaults::default_input_object_fields;
use crate::defaults::default_value;
use crate::document::Value;
use crate::test_fixtures::field;
use crate::test_fixtures::registry_schema;
use crate::types::Field;
use crate::types::InputValueRef;
use crate::DefaultExplorerPolicy;
use crate::ExplorerPolicy;

/// Populates every argument and input field, required or not.
struct PopulateEverything;
impl ExplorerPolicy for PopulateEverything {
    fn make_default_arg(&self, _parent_field: &Field, _input_value: InputValueRef<'_>) -> bool {
        true
    }
}

fn printed(args: &[crate::document::NamedValue]) -> Vec<String> {
    args.iter().map(|arg| format!("{}: {}", arg.name, arg.value)).collect()
}

#[test]
fn scalar_defaults() {
    let schema = registry_schema();
    let value_of = |type_name: &str| default_value(schema.lookup_type(type_name).unwrap());
    assert_eq!(value_of("Boolean"), Value::Boolean(false));
    assert_eq!(value_of("Float"), Value::Float(1.5));
    assert_eq!(value_of("Int"), Value::Int(10));
    assert_eq!(value_of("String"), Value::String(String::new()));
    assert_eq!(value_of("ID"), Value::String(String::new()));
    assert_eq!(value_of("DateTime"), Value::String(String::new()));
    assert_eq!(value_of("SortDirection"), Value::Enum("ASC".to_string()));
}

#[test]
fn only_required_arguments_by_default() {
    let schema = registry_schema();
    let args = |field_name: &str| {
        printed(&default_arguments(&schema, field(&schema, "Query", field_name), &DefaultExplorerPolicy))
    };
    assert_eq!(args("package"), vec![r#"name: """#]);
    assert_eq!(args("search"), vec![r#"text: """#]);
    assert!(args("packages").is_empty());
    assert!(args("viewer").is_empty());
}

/// Required input fields are populated recursively; optional ones are not.
#[test]
fn required_input_object_fields() {
    let schema = registry_schema();
    let publish = field(&schema, "Mutation", "publish");
    assert_eq!(
        printed(&default_arguments(&schema, publish, &DefaultExplorerPolicy)),
        vec![r#"input: {name: "", version: "", meta: {license: "", private: false}}"#],
    );

    let meta_type = schema.lookup_type("PublishMeta").unwrap().as_input_object().unwrap();
    assert_eq!(
        printed(&default_input_object_fields(&schema, publish, meta_type, &DefaultExplorerPolicy)),
        vec![r#"license: """#, "private: false"],
    );
}

#[test]
fn policy_can_populate_optional_arguments() {
    let schema = registry_schema();
    let packages = field(&schema, "Query", "packages");
    assert_eq!(
        printed(&default_arguments(&schema, packages, &PopulateEverything)),
        vec![
            r#"filter: {nameContains: "", author: "", and: {}}"#,
            "first: 10",
            r#"orderBy: {field: "", direction: ASC}"#,
            "sort: ASC",
        ],
    );
}

#[test]
fn single_argument_regardless_of_policy() {
    let schema = registry_schema();
    let search = field(&schema, "Query", "search");
    let boost = default_argument(
        &schema,
        search,
        InputValueRef::from(search.parameter("boost").unwrap()),
        &DefaultExplorerPolicy,
    );
    assert_eq!(boost.map(|arg| arg.value), Some(Value::Float(1.5)));
}
