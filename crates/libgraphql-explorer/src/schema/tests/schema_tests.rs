use crate::test_fixtures::registry_schema;
use crate::types::ObjectType;

#[test]
fn fields_of_object_interface_union_and_leaf_types() {
    let schema = registry_schema();
    let fields_of = |name: &str| {
        schema.fields_of(schema.lookup_type(name).unwrap())
            .map(|fields| fields.keys().cloned().collect::<Vec<_>>())
    };

    assert_eq!(fields_of("User").unwrap(), vec!["id", "email", "name", "packages"]);
    assert_eq!(fields_of("Node").unwrap(), vec!["id"]);
    assert_eq!(fields_of("SearchResult").unwrap(), Vec::<String>::new());
    assert_eq!(fields_of("String"), None);
    assert_eq!(fields_of("PackageFilter"), None);
}

#[test]
fn field_lookup_by_type_and_name() {
    let schema = registry_schema();
    assert!(schema.field("Query", "package").is_some());
    assert!(schema.field("Query", "nope").is_none());
    assert!(schema.field("SortDirection", "ASC").is_none());
}

#[test]
fn possible_types_of_abstract_types() {
    let schema = registry_schema();
    let possible_type_names = |name: &str| {
        schema.possible_types(schema.lookup_type(name).unwrap())
            .into_iter()
            .map(ObjectType::name)
            .collect::<Vec<_>>()
    };

    assert_eq!(possible_type_names("Node"), vec!["Package", "User"]);
    assert_eq!(possible_type_names("SearchResult"), vec!["Package", "User"]);
    assert_eq!(possible_type_names("User"), vec!["User"]);
    assert!(possible_type_names("Int").is_empty());
}

#[test]
fn possible_types_borrow_from_the_schema() {
    let schema = registry_schema();
    let user = schema.lookup_type("User").unwrap().clone();
    let possible_types = schema.possible_types(&user);
    drop(user);

    let names: Vec<&str> = possible_types.into_iter().map(ObjectType::name).collect();
    assert_eq!(names, vec!["User"]);
}
