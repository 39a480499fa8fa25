use crate::document::Value;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::types::DeprecationState;
use crate::types::GraphQLType;

const INTROSPECTION_JSON: &str = r#"{
  "data": {
    "__schema": {
      "queryType": { "name": "Root" },
      "mutationType": null,
      "subscriptionType": null,
      "types": [
        {
          "kind": "OBJECT",
          "name": "Root",
          "description": "The query root.",
          "fields": [
            {
              "name": "packages",
              "description": null,
              "args": [
                {
                  "name": "first",
                  "description": null,
                  "type": { "kind": "SCALAR", "name": "Int", "ofType": null },
                  "defaultValue": "10"
                },
                {
                  "name": "sort",
                  "description": null,
                  "type": {
                    "kind": "NON_NULL",
                    "name": null,
                    "ofType": { "kind": "ENUM", "name": "Sort", "ofType": null }
                  },
                  "defaultValue": "ASC"
                }
              ],
              "type": {
                "kind": "NON_NULL",
                "name": null,
                "ofType": {
                  "kind": "LIST",
                  "name": null,
                  "ofType": {
                    "kind": "NON_NULL",
                    "name": null,
                    "ofType": { "kind": "OBJECT", "name": "Package", "ofType": null }
                  }
                }
              },
              "isDeprecated": false,
              "deprecationReason": null
            }
          ],
          "inputFields": null,
          "interfaces": [],
          "enumValues": null,
          "possibleTypes": null
        },
        {
          "kind": "OBJECT",
          "name": "Package",
          "description": null,
          "fields": [
            {
              "name": "name",
              "description": null,
              "args": [],
              "type": { "kind": "SCALAR", "name": "String", "ofType": null },
              "isDeprecated": true,
              "deprecationReason": "Use id."
            }
          ],
          "inputFields": null,
          "interfaces": [],
          "enumValues": null,
          "possibleTypes": null
        },
        {
          "kind": "ENUM",
          "name": "Sort",
          "description": null,
          "fields": null,
          "inputFields": null,
          "interfaces": null,
          "enumValues": [
            { "name": "ASC", "description": null, "isDeprecated": false, "deprecationReason": null },
            { "name": "DESC", "description": null, "isDeprecated": false, "deprecationReason": null }
          ],
          "possibleTypes": null
        },
        {
          "kind": "SCALAR",
          "name": "String",
          "description": null,
          "fields": null,
          "inputFields": null,
          "interfaces": null,
          "enumValues": null,
          "possibleTypes": null
        },
        {
          "kind": "OBJECT",
          "name": "__Type",
          "description": null,
          "fields": [],
          "inputFields": null,
          "interfaces": [],
          "enumValues": null,
          "possibleTypes": null
        }
      ]
    }
  }
}"#;

#[test]
fn builds_a_schema_from_an_introspection_result() {
    let schema = SchemaBuilder::from_introspection_json(INTROSPECTION_JSON)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(schema.query_type().map(|t| t.name()), Some("Root"));
    assert!(schema.mutation_type().is_none());
    assert!(schema.lookup_type("__Type").is_none());
    assert_eq!(schema.lookup_type("String"), Some(&GraphQLType::String));

    let packages = schema.field("Root", "packages").unwrap();
    assert_eq!(packages.type_annotation().to_string(), "[Package!]!");

    let first = packages.parameter("first").unwrap();
    assert_eq!(first.default_value(), Some(&Value::Int(10)));
    let sort = packages.parameter("sort").unwrap();
    assert_eq!(sort.default_value(), Some(&Value::Enum("ASC".to_string())));
    assert_eq!(sort.type_annotation().to_string(), "Sort!");

    let sort_type = schema.lookup_type("Sort").and_then(GraphQLType::as_enum).unwrap();
    assert_eq!(sort_type.first_value().map(|value| value.name()), Some("ASC"));
}

#[test]
fn deprecation_is_carried_over() {
    let schema = SchemaBuilder::from_introspection_json(INTROSPECTION_JSON)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        schema.field("Package", "name").unwrap().deprecation_state(),
        DeprecationState::Deprecated("Use id."),
    );
}

#[test]
fn bare_schema_object_is_accepted() {
    let json: serde_json::Value = serde_json::from_str(INTROSPECTION_JSON).unwrap();
    let bare = serde_json::json!({ "__schema": json["data"]["__schema"] });
    let schema = SchemaBuilder::from_introspection_json(&bare.to_string())
        .unwrap()
        .build()
        .unwrap();
    assert!(schema.lookup_type("Package").is_some());
}

#[test]
fn missing_schema_object() {
    let result = SchemaBuilder::from_introspection_json(r#"{"data": {}}"#);
    assert!(matches!(result, Err(SchemaBuildError::IntrospectionSchemaMissing)));
}

#[test]
fn malformed_json() {
    let result = SchemaBuilder::from_introspection_json("{");
    assert!(matches!(result, Err(SchemaBuildError::IntrospectionDecodeError(_))));
}
