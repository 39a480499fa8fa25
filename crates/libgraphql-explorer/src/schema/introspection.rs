//! Loading a schema from the JSON result of the standard introspection
//! query.

use crate::document::parse_value_literal;
use crate::document::Value;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::types::DirectiveAnnotation;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_SCALAR_NAMES: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionSchema {
    mutation_type: Option<IntrospectionNamedRef>,
    query_type: Option<IntrospectionNamedRef>,
    subscription_type: Option<IntrospectionNamedRef>,
    types: Vec<IntrospectionFullType>,
}

#[derive(Debug, serde::Deserialize)]
struct IntrospectionNamedRef {
    name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum IntrospectionTypeKind {
    Enum,
    InputObject,
    Interface,
    List,
    NonNull,
    Object,
    Scalar,
    Union,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionFullType {
    kind: IntrospectionTypeKind,
    name: String,
    description: Option<String>,
    enum_values: Option<Vec<IntrospectionEnumValue>>,
    fields: Option<Vec<IntrospectionField>>,
    input_fields: Option<Vec<IntrospectionInputValue>>,
    interfaces: Option<Vec<IntrospectionTypeRef>>,
    possible_types: Option<Vec<IntrospectionTypeRef>>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionField {
    name: String,
    description: Option<String>,
    #[serde(default)]
    args: Vec<IntrospectionInputValue>,
    #[serde(rename = "type")]
    type_ref: IntrospectionTypeRef,
    #[serde(default)]
    is_deprecated: bool,
    deprecation_reason: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionInputValue {
    name: String,
    description: Option<String>,
    #[serde(rename = "type")]
    type_ref: IntrospectionTypeRef,
    default_value: Option<String>,
    #[serde(default)]
    is_deprecated: bool,
    deprecation_reason: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionEnumValue {
    name: String,
    description: Option<String>,
    #[serde(default)]
    is_deprecated: bool,
    deprecation_reason: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionTypeRef {
    kind: IntrospectionTypeKind,
    name: Option<String>,
    of_type: Option<Box<IntrospectionTypeRef>>,
}

impl SchemaBuilder {
    /// Start a builder from an introspection result. Both the full response
    /// (`{"data": {"__schema": ...}}`) and the bare `{"__schema": ...}` object
    /// are accepted.
    pub fn from_introspection_json(json: &str) -> Result<Self> {
        let mut builder = Self::new();
        builder.load_introspection_json(json)?;
        Ok(builder)
    }

    pub fn load_introspection_json(&mut self, json: &str) -> Result<()> {
        let mut root: serde_json::Value = serde_json::from_str(json)?;
        let schema_json =
            match root.get_mut("data").and_then(|data| data.get_mut("__schema")) {
                Some(schema_json) => schema_json.take(),
                None => root.get_mut("__schema")
                    .map(serde_json::Value::take)
                    .ok_or(SchemaBuildError::IntrospectionSchemaMissing)?,
            };
        let schema: IntrospectionSchema = serde_json::from_value(schema_json)?;

        self.set_root_type_names(
            schema.query_type.map(|named_ref| named_ref.name),
            schema.mutation_type.map(|named_ref| named_ref.name),
            schema.subscription_type.map(|named_ref| named_ref.name),
        );

        for full_type in schema.types {
            if full_type.name.starts_with("__")
                || BUILTIN_SCALAR_NAMES.contains(&full_type.name.as_str()) {
                log::trace!("Skipping builtin type `{}`.", full_type.name);
                continue;
            }
            let type_ = type_from_introspection(full_type)?;
            self.add_new_type(type_)?;
        }

        Ok(())
    }
}

fn type_from_introspection(full_type: IntrospectionFullType) -> Result<GraphQLType> {
    let def_location = loc::SchemaDefLocation::Introspection;
    let type_name = full_type.name;
    Ok(match full_type.kind {
        IntrospectionTypeKind::Enum => GraphQLType::Enum(EnumType {
            def_location,
            description: full_type.description,
            directives: vec![],
            values: full_type.enum_values.unwrap_or_default()
                .into_iter()
                .map(|value| (value.name.clone(), EnumValue {
                    description: value.description,
                    directives: deprecation_directives(
                        value.is_deprecated,
                        value.deprecation_reason,
                    ),
                    name: value.name,
                }))
                .collect(),
            name: type_name,
        }),

        IntrospectionTypeKind::InputObject => {
            let mut fields = IndexMap::new();
            for input_value in full_type.input_fields.unwrap_or_default() {
                let context = format!("{type_name}.{}", input_value.name);
                fields.insert(input_value.name.clone(), InputField {
                    def_location: def_location.clone(),
                    default_value: default_value_from_introspection(
                        &context,
                        input_value.default_value.as_deref(),
                    ),
                    description: input_value.description,
                    directives: deprecation_directives(
                        input_value.is_deprecated,
                        input_value.deprecation_reason,
                    ),
                    parent_type_name: type_name.clone(),
                    type_annotation: type_annotation_from_introspection(
                        &context,
                        &input_value.type_ref,
                    )?,
                    name: input_value.name,
                });
            }
            GraphQLType::InputObject(InputObjectType {
                def_location,
                description: full_type.description,
                directives: vec![],
                fields,
                name: type_name,
            })
        },

        IntrospectionTypeKind::Interface | IntrospectionTypeKind::Object => {
            let is_interface = full_type.kind == IntrospectionTypeKind::Interface;
            let mut data = ObjectOrInterfaceTypeData::new(
                type_name,
                full_type.description,
                def_location,
            );
            data.interfaces = full_type.interfaces.unwrap_or_default()
                .into_iter()
                .filter_map(|type_ref| type_ref.name)
                .collect();
            for field in full_type.fields.unwrap_or_default() {
                let field = field_from_introspection(&data.name, field)?;
                data.fields.insert(field.name.clone(), field);
            }
            if is_interface {
                GraphQLType::Interface(InterfaceType(data))
            } else {
                GraphQLType::Object(ObjectType(data))
            }
        },

        IntrospectionTypeKind::Scalar => GraphQLType::Scalar(ScalarType {
            def_location,
            description: full_type.description,
            directives: vec![],
            name: type_name,
        }),

        IntrospectionTypeKind::Union => GraphQLType::Union(UnionType {
            def_location,
            description: full_type.description,
            directives: vec![],
            members: full_type.possible_types.unwrap_or_default()
                .into_iter()
                .filter_map(|type_ref| type_ref.name)
                .collect(),
            name: type_name,
        }),

        IntrospectionTypeKind::List | IntrospectionTypeKind::NonNull =>
            return Err(SchemaBuildError::IntrospectionInvalidTypeRef {
                context: type_name,
            }),
    })
}

fn field_from_introspection(
    parent_type_name: &str,
    field: IntrospectionField,
) -> Result<Field> {
    let context = format!("{parent_type_name}.{}", field.name);
    let mut parameters = IndexMap::new();
    for arg in field.args {
        let arg_context = format!("{context}({}:)", arg.name);
        parameters.insert(arg.name.clone(), Parameter {
            def_location: loc::SchemaDefLocation::Introspection,
            default_value: default_value_from_introspection(
                &arg_context,
                arg.default_value.as_deref(),
            ),
            description: arg.description,
            type_annotation: type_annotation_from_introspection(&arg_context, &arg.type_ref)?,
            name: arg.name,
        });
    }

    Ok(Field {
        def_location: loc::SchemaDefLocation::Introspection,
        description: field.description,
        directives: deprecation_directives(field.is_deprecated, field.deprecation_reason),
        parameters,
        parent_type_name: parent_type_name.to_string(),
        type_annotation: type_annotation_from_introspection(&context, &field.type_ref)?,
        name: field.name,
    })
}

fn deprecation_directives(
    is_deprecated: bool,
    reason: Option<String>,
) -> Vec<DirectiveAnnotation> {
    if is_deprecated {
        vec![DirectiveAnnotation::deprecated(reason)]
    } else {
        vec![]
    }
}

fn default_value_from_introspection(context: &str, literal: Option<&str>) -> Option<Value> {
    let literal = literal?;
    match parse_value_literal(literal) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!(
                "Ignoring unparseable default value `{literal}` for `{context}`: {err}",
            );
            None
        },
    }
}

fn type_annotation_from_introspection(
    context: &str,
    type_ref: &IntrospectionTypeRef,
) -> Result<TypeAnnotation> {
    type_annotation_from_introspection_impl(context, type_ref, /* nullable = */ true)
}

fn type_annotation_from_introspection_impl(
    context: &str,
    type_ref: &IntrospectionTypeRef,
    nullable: bool,
) -> Result<TypeAnnotation> {
    let invalid = || SchemaBuildError::IntrospectionInvalidTypeRef {
        context: context.to_string(),
    };
    match type_ref.kind {
        IntrospectionTypeKind::List => {
            let inner = type_ref.of_type.as_deref().ok_or_else(invalid)?;
            Ok(TypeAnnotation::List(ListTypeAnnotation {
                inner_type_annotation: Box::new(
                    type_annotation_from_introspection_impl(context, inner, true)?,
                ),
                nullable,
            }))
        },

        IntrospectionTypeKind::NonNull => {
            let inner = type_ref.of_type.as_deref().ok_or_else(invalid)?;
            if !nullable || inner.kind == IntrospectionTypeKind::NonNull {
                return Err(invalid());
            }
            type_annotation_from_introspection_impl(context, inner, false)
        },

        _ => {
            let type_name = type_ref.name.clone().ok_or_else(invalid)?;
            Ok(TypeAnnotation::Named(NamedTypeAnnotation {
                nullable,
                type_name,
            }))
        },
    }
}
