use crate::document::parse_document;
use crate::document::parse_value_literal;
use crate::document::DocumentParseError;
use crate::document::NamedValue;
use crate::document::OperationKind;
use crate::document::Selection;
use crate::document::TypeRef;
use crate::document::Value;
use crate::test_fixtures::parse;

#[test]
fn shorthand_selection_set_is_an_unnamed_query() {
    let doc = parse("{ name homepage }");
    let op = doc.definitions[0].as_operation().unwrap();
    assert_eq!(op.kind, OperationKind::Query);
    assert_eq!(op.name, None);
    assert_eq!(op.selections.len(), 2);
    assert!(op.selections[0].is_field_named("name"));
    assert!(op.selections[1].is_field_named("homepage"));
}

#[test]
fn variable_definitions_keep_types_and_defaults() {
    let doc = parse(
        "query Search($text: String!, $limit: Int = 10, $tags: [String!]) {
            search(text: $text, limit: $limit) { __typename }
        }",
    );
    let op = doc.definitions[0].as_operation().unwrap();
    let var_defs = &op.variable_definitions;
    assert_eq!(var_defs.len(), 3);

    assert_eq!(var_defs[0].name, "text");
    assert_eq!(
        var_defs[0].var_type,
        TypeRef::NonNull(Box::new(TypeRef::Named("String".to_string()))),
    );
    assert_eq!(var_defs[0].default_value, None);

    assert_eq!(var_defs[1].default_value, Some(Value::Int(10)));
    assert_eq!(var_defs[2].var_type.to_string(), "[String!]");
}

#[test]
fn field_selections_keep_aliases_arguments_and_children() {
    let doc = parse(
        r#"{ pkg: package(name: "left-pad") { name author { email } } }"#,
    );
    let op = doc.definitions[0].as_operation().unwrap();
    let field = op.selections[0].as_field().unwrap();
    assert_eq!(field.alias.as_deref(), Some("pkg"));
    assert_eq!(field.name, "package");
    assert_eq!(
        field.arguments,
        vec![NamedValue::new("name", Value::String("left-pad".to_string()))],
    );
    assert_eq!(field.selections.len(), 2);
    assert_eq!(field.selections[1].as_field().unwrap().selections.len(), 1);
}

#[test]
fn fragments_spreads_and_inline_fragments() {
    let doc = parse(
        "query { search(text: \"x\") { ... on Package { ...PackageFields } } }
         fragment PackageFields on Package { name }",
    );
    let op = doc.definitions[0].as_operation().unwrap();
    let search = op.selections[0].as_field().unwrap();
    let Selection::InlineFragment(inline) = &search.selections[0] else {
        panic!("Expected an inline fragment, got: {:?}", search.selections[0]);
    };
    assert_eq!(inline.type_condition.as_deref(), Some("Package"));
    assert!(inline.selections[0].is_spread_of("PackageFields"));

    let frag = doc.definitions[1].as_fragment().unwrap();
    assert_eq!(frag.name, "PackageFields");
    assert_eq!(frag.type_condition, "Package");
}

#[test]
fn blank_text_is_an_empty_document_error() {
    assert!(matches!(parse_document(""), Err(DocumentParseError::EmptyDocument)));
    assert!(matches!(parse_document("  \n\t"), Err(DocumentParseError::EmptyDocument)));
}

#[test]
fn malformed_text_is_a_parse_error() {
    assert!(matches!(
        parse_document("query { name"),
        Err(DocumentParseError::ParseError { .. }),
    ));
    assert!(matches!(
        parse_document("query MyQuery"),
        Err(DocumentParseError::ParseError { .. }),
    ));
}

#[test]
fn type_system_definitions_are_rejected() {
    assert!(matches!(
        parse_document("type Query { name: String } query { name }"),
        Err(DocumentParseError::TypeSystemDefinition),
    ));
}

#[test]
fn object_fields_keep_their_written_order() {
    let doc = parse(r#"{ packages(filter: {nameContains: "a", author: "b"}) { id } }"#);
    let op = doc.definitions[0].as_operation().unwrap();
    let packages = op.selections[0].as_field().unwrap();
    assert_eq!(
        packages.arguments[0].value,
        Value::Object(vec![
            NamedValue::new("nameContains", Value::String("a".to_string())),
            NamedValue::new("author", Value::String("b".to_string())),
        ]),
    );
}

#[test]
fn string_escapes_are_decoded() {
    let doc = parse("{ search(text: \"say \\\"hi\\\"\\n\") { __typename } }");
    let op = doc.definitions[0].as_operation().unwrap();
    let search = op.selections[0].as_field().unwrap();
    assert_eq!(search.arguments[0].value, Value::String("say \"hi\"\n".to_string()));
}

#[test]
fn value_literals() {
    assert_eq!(parse_value_literal("10").unwrap(), Value::Int(10));
    assert_eq!(parse_value_literal("ASC").unwrap(), Value::Enum("ASC".to_string()));
    assert_eq!(parse_value_literal("null").unwrap(), Value::Null);
    assert_eq!(
        parse_value_literal(r#"{b: [1, 2], a: "x"}"#).unwrap(),
        Value::Object(vec![
            NamedValue::new("b", Value::List(vec![Value::Int(1), Value::Int(2)])),
            NamedValue::new("a", Value::String("x".to_string())),
        ]),
    );
    assert!(parse_value_literal("").is_err());
    assert!(parse_value_literal("{").is_err());
}
