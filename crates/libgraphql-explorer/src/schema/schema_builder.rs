use crate::document::OperationKind;
use crate::document::value_from_ast;
use crate::file_reader;
use crate::loc;
use crate::schema::Schema;
use crate::types::DirectiveAnnotation;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use graphql_parser::schema as ast;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Collects type definitions from SDL files/strings (or an introspection
/// result) and builds them into a [`Schema`].
///
/// Type extensions are applied at [`SchemaBuilder::build()`] time, so an
/// extension may be loaded before the type it extends.
#[derive(Debug)]
pub struct SchemaBuilder {
    mutation_type_name: Option<String>,
    query_type_name: Option<String>,
    root_type_names_declared: bool,
    schema_def_location: Option<loc::FilePosition>,
    subscription_type_name: Option<String>,
    type_extensions: Vec<(Option<PathBuf>, ast::TypeExtension<'static, String>)>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        Self {
            mutation_type_name: None,
            query_type_name: None,
            root_type_names_declared: false,
            schema_def_location: None,
            subscription_type_name: None,
            type_extensions: vec![],
            types: IndexMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    pub fn from_file<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        let mut builder = Self::new();
        builder.load_file(file_path)?;
        Ok(builder)
    }

    pub fn from_files<P: AsRef<Path>>(file_paths: &[P]) -> Result<Self> {
        let mut builder = Self::new();
        builder.load_files(file_paths)?;
        Ok(builder)
    }

    pub fn from_str(file_path: Option<&Path>, content: &str) -> Result<Self> {
        let mut builder = Self::new();
        builder.load_str(file_path, content)?;
        Ok(builder)
    }

    pub fn build(mut self) -> Result<Schema> {
        for (file_path, ext) in std::mem::take(&mut self.type_extensions) {
            self.apply_type_extension(file_path.as_deref(), ext)?;
        }

        let query_type_name =
            self.query_type_name
                .take()
                .unwrap_or_else(|| "Query".to_string());
        match self.types.get(&query_type_name) {
            Some(GraphQLType::Object(_)) => (),
            Some(_) => return Err(SchemaBuildError::RootOperationTypeIsNotAnObject {
                operation: OperationKind::Query,
                type_name: query_type_name,
            }),
            None => return Err(SchemaBuildError::NoQueryTypeDefined),
        }

        let mutation_type_name = self.resolve_optional_root_type(
            OperationKind::Mutation,
            self.mutation_type_name.clone(),
        )?;
        let subscription_type_name = self.resolve_optional_root_type(
            OperationKind::Subscription,
            self.subscription_type_name.clone(),
        )?;

        log::debug!(
            "Built a schema with {} types (query root: `{query_type_name}`).",
            self.types.len(),
        );
        Ok(Schema {
            mutation_type_name,
            query_type_name,
            subscription_type_name,
            types: self.types,
        })
    }

    pub fn load_file<P: AsRef<Path>>(&mut self, file_path: P) -> Result<()> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)
            .map_err(|err| SchemaBuildError::SchemaFileReadError(Box::new(err)))?;
        self.load_str(Some(file_path), content.as_str())
    }

    pub fn load_files<P: AsRef<Path>>(&mut self, file_paths: &[P]) -> Result<()> {
        for file_path in file_paths {
            self.load_file(file_path)?;
        }
        Ok(())
    }

    pub fn load_str(&mut self, file_path: Option<&Path>, content: &str) -> Result<()> {
        let ast_doc = ast::parse_schema::<String>(content)
            .map_err(|err| SchemaBuildError::SchemaParseError {
                file: file_path.map(Path::to_path_buf),
                err,
            })?
            .into_static();

        for def in ast_doc.definitions {
            match def {
                ast::Definition::DirectiveDefinition(directive_def) =>
                    log::trace!(
                        "Ignoring definition of the `@{}` directive.",
                        directive_def.name,
                    ),

                ast::Definition::SchemaDefinition(schema_def) =>
                    self.visit_schema_definition(file_path, schema_def)?,

                ast::Definition::TypeDefinition(type_def) =>
                    self.visit_type_definition(file_path, type_def)?,

                ast::Definition::TypeExtension(type_ext) =>
                    self.type_extensions.push((
                        file_path.map(Path::to_path_buf),
                        type_ext,
                    )),
            }
        }

        Ok(())
    }

    pub(crate) fn add_new_type(&mut self, type_: GraphQLType) -> Result<()> {
        let type_name = type_.name().to_string();
        if let Some(existing_type) = self.types.get(&type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name,
                def1: existing_type.def_location(),
                def2: type_.def_location(),
            });
        }
        self.types.insert(type_name, type_);
        Ok(())
    }

    pub(crate) fn set_root_type_names(
        &mut self,
        query: Option<String>,
        mutation: Option<String>,
        subscription: Option<String>,
    ) {
        self.root_type_names_declared = true;
        self.query_type_name = query;
        self.mutation_type_name = mutation;
        self.subscription_type_name = subscription;
    }

    fn apply_type_extension(
        &mut self,
        file_path: Option<&Path>,
        ext: ast::TypeExtension<'static, String>,
    ) -> Result<()> {
        let (type_name, position) = match &ext {
            ast::TypeExtension::Enum(ext) => (ext.name.clone(), ext.position),
            ast::TypeExtension::InputObject(ext) => (ext.name.clone(), ext.position),
            ast::TypeExtension::Interface(ext) => (ext.name.clone(), ext.position),
            ast::TypeExtension::Object(ext) => (ext.name.clone(), ext.position),
            ast::TypeExtension::Scalar(ext) => (ext.name.clone(), ext.position),
            ast::TypeExtension::Union(ext) => (ext.name.clone(), ext.position),
        };
        let extension_location = loc::FilePosition::from_pos(file_path, position);

        let Some(type_) = self.types.get_mut(&type_name) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name,
                extension_location,
            });
        };

        let def_location = loc::SchemaDefLocation::Schema(extension_location.clone());
        match (type_, ext) {
            (GraphQLType::Enum(enum_type), ast::TypeExtension::Enum(ext)) => {
                enum_type.directives.extend(directives_from_ast(ext.directives));
                for value in ext.values {
                    let value = enum_value_from_ast(value);
                    enum_type.values.insert(value.name.clone(), value);
                }
            },

            (GraphQLType::InputObject(input_type), ast::TypeExtension::InputObject(ext)) => {
                input_type.directives.extend(directives_from_ast(ext.directives));
                for field in ext.fields {
                    let field = input_field_from_ast(file_path, &type_name, field);
                    input_type.fields.insert(field.name.clone(), field);
                }
            },

            (GraphQLType::Interface(InterfaceType(data)), ast::TypeExtension::Interface(ext)) => {
                data.directives.extend(directives_from_ast(ext.directives));
                for field in ext.fields {
                    let field = field_from_ast(file_path, &type_name, field);
                    data.fields.insert(field.name.clone(), field);
                }
            },

            (GraphQLType::Object(ObjectType(data)), ast::TypeExtension::Object(ext)) => {
                data.directives.extend(directives_from_ast(ext.directives));
                data.interfaces.extend(ext.implements_interfaces);
                for field in ext.fields {
                    let field = field_from_ast(file_path, &type_name, field);
                    data.fields.insert(field.name.clone(), field);
                }
            },

            (GraphQLType::Scalar(scalar_type), ast::TypeExtension::Scalar(ext)) =>
                scalar_type.directives.extend(directives_from_ast(ext.directives)),

            (GraphQLType::Union(union_type), ast::TypeExtension::Union(ext)) => {
                union_type.directives.extend(directives_from_ast(ext.directives));
                union_type.members.extend(ext.types);
            },

            (_, _) => return Err(SchemaBuildError::InvalidExtensionType {
                type_name,
                extension_location,
            }),
        }

        log::trace!("Applied type extension of `{type_name}` from {def_location}.");
        Ok(())
    }

    fn resolve_optional_root_type(
        &self,
        operation: OperationKind,
        explicit_name: Option<String>,
    ) -> Result<Option<String>> {
        match explicit_name {
            Some(type_name) => match self.types.get(&type_name) {
                Some(GraphQLType::Object(_)) => Ok(Some(type_name)),
                Some(_) => Err(SchemaBuildError::RootOperationTypeIsNotAnObject {
                    operation,
                    type_name,
                }),
                None => Err(SchemaBuildError::UndefinedRootOperationType {
                    operation,
                    type_name,
                }),
            },

            // Once the roots are declared, an omitted root means there is none.
            None if self.root_type_names_declared => Ok(None),

            None => {
                let conventional_name = operation.capitalized();
                match self.types.get(conventional_name) {
                    Some(GraphQLType::Object(_)) => Ok(Some(conventional_name.to_string())),
                    _ => Ok(None),
                }
            },
        }
    }

    fn visit_schema_definition(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::SchemaDefinition<'static, String>,
    ) -> Result<()> {
        let location = loc::FilePosition::from_pos(file_path, schema_def.position);
        if let Some(location1) = &self.schema_def_location {
            return Err(SchemaBuildError::DuplicateSchemaDefinition {
                location1: location1.clone(),
                location2: location,
            });
        }
        self.schema_def_location = Some(location);
        self.set_root_type_names(
            schema_def.query,
            schema_def.mutation,
            schema_def.subscription,
        );
        Ok(())
    }

    fn visit_type_definition(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::TypeDefinition<'static, String>,
    ) -> Result<()> {
        let type_ = match type_def {
            ast::TypeDefinition::Enum(def) => GraphQLType::Enum(EnumType {
                def_location: schema_def_location(file_path, def.position),
                description: def.description,
                directives: directives_from_ast(def.directives),
                values: def.values.into_iter()
                    .map(|value| {
                        let value = enum_value_from_ast(value);
                        (value.name.clone(), value)
                    })
                    .collect(),
                name: def.name,
            }),

            ast::TypeDefinition::InputObject(def) => GraphQLType::InputObject(InputObjectType {
                def_location: schema_def_location(file_path, def.position),
                description: def.description,
                directives: directives_from_ast(def.directives),
                fields: def.fields.into_iter()
                    .map(|field| {
                        let field = input_field_from_ast(file_path, &def.name, field);
                        (field.name.clone(), field)
                    })
                    .collect(),
                name: def.name,
            }),

            ast::TypeDefinition::Interface(def) => {
                let mut data = ObjectOrInterfaceTypeData::new(
                    def.name,
                    def.description,
                    schema_def_location(file_path, def.position),
                );
                data.directives = directives_from_ast(def.directives);
                data.fields = fields_from_ast(file_path, &data.name, def.fields);
                GraphQLType::Interface(InterfaceType(data))
            },

            ast::TypeDefinition::Object(def) => {
                let mut data = ObjectOrInterfaceTypeData::new(
                    def.name,
                    def.description,
                    schema_def_location(file_path, def.position),
                );
                data.directives = directives_from_ast(def.directives);
                data.interfaces = def.implements_interfaces;
                data.fields = fields_from_ast(file_path, &data.name, def.fields);
                GraphQLType::Object(ObjectType(data))
            },

            ast::TypeDefinition::Scalar(def) => GraphQLType::Scalar(ScalarType {
                def_location: schema_def_location(file_path, def.position),
                description: def.description,
                directives: directives_from_ast(def.directives),
                name: def.name,
            }),

            ast::TypeDefinition::Union(def) => GraphQLType::Union(UnionType {
                def_location: schema_def_location(file_path, def.position),
                description: def.description,
                directives: directives_from_ast(def.directives),
                members: def.types,
                name: def.name,
            }),
        };

        self.add_new_type(type_)
    }
}
impl std::default::Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn schema_def_location(
    file_path: Option<&Path>,
    pos: graphql_parser::Pos,
) -> loc::SchemaDefLocation {
    loc::SchemaDefLocation::Schema(loc::FilePosition::from_pos(file_path, pos))
}

fn directives_from_ast(
    directives: Vec<ast::Directive<'static, String>>,
) -> Vec<DirectiveAnnotation> {
    directives.into_iter()
        .map(DirectiveAnnotation::from_ast)
        .collect()
}

fn enum_value_from_ast(value: ast::EnumValue<'static, String>) -> EnumValue {
    EnumValue {
        description: value.description,
        directives: directives_from_ast(value.directives),
        name: value.name,
    }
}

fn fields_from_ast(
    file_path: Option<&Path>,
    parent_type_name: &str,
    fields: Vec<ast::Field<'static, String>>,
) -> IndexMap<String, Field> {
    fields.into_iter()
        .map(|field| {
            let field = field_from_ast(file_path, parent_type_name, field);
            (field.name.clone(), field)
        })
        .collect()
}

fn field_from_ast(
    file_path: Option<&Path>,
    parent_type_name: &str,
    field: ast::Field<'static, String>,
) -> Field {
    Field {
        def_location: schema_def_location(file_path, field.position),
        description: field.description,
        directives: directives_from_ast(field.directives),
        parameters: field.arguments.into_iter()
            .map(|input_val| {
                let param = Parameter {
                    def_location: schema_def_location(file_path, input_val.position),
                    default_value: input_val.default_value.map(value_from_ast),
                    description: input_val.description,
                    type_annotation: TypeAnnotation::from_ast_type(&input_val.value_type),
                    name: input_val.name,
                };
                (param.name.clone(), param)
            })
            .collect(),
        parent_type_name: parent_type_name.to_string(),
        type_annotation: TypeAnnotation::from_ast_type(&field.field_type),
        name: field.name,
    }
}

fn input_field_from_ast(
    file_path: Option<&Path>,
    parent_type_name: &str,
    input_val: ast::InputValue<'static, String>,
) -> InputField {
    InputField {
        def_location: schema_def_location(file_path, input_val.position),
        default_value: input_val.default_value.map(value_from_ast),
        description: input_val.description,
        directives: directives_from_ast(input_val.directives),
        parent_type_name: parent_type_name.to_string(),
        type_annotation: TypeAnnotation::from_ast_type(&input_val.value_type),
        name: input_val.name,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaBuildError {
    #[error("Found more than one `schema` definition ({location1} and {location2})")]
    DuplicateSchemaDefinition {
        location1: loc::FilePosition,
        location2: loc::FilePosition,
    },

    #[error("The `{type_name}` type is defined more than once ({def1} and {def2})")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error("Found an extension of the undefined type `{type_name}` at {extension_location}")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_location: loc::FilePosition,
    },

    #[error(
        "The extension of `{type_name}` at {extension_location} extends a \
        different kind of type than `{type_name}` is"
    )]
    InvalidExtensionType {
        type_name: String,
        extension_location: loc::FilePosition,
    },

    #[error("Failed to decode the introspection result: {0}")]
    IntrospectionDecodeError(#[from] serde_json::Error),

    #[error("Malformed type reference in the introspection result at `{context}`")]
    IntrospectionInvalidTypeRef {
        context: String,
    },

    #[error("The introspection result does not contain a `__schema` object")]
    IntrospectionSchemaMissing,

    #[error("No query root type is defined")]
    NoQueryTypeDefined,

    #[error("The {operation} root type `{type_name}` is not an object type")]
    RootOperationTypeIsNotAnObject {
        operation: OperationKind,
        type_name: String,
    },

    #[error("Failed to read a schema file: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error("Failed to parse schema (file: {file:?}): {err}")]
    SchemaParseError {
        file: Option<PathBuf>,
        err: ast::ParseError,
    },

    #[error("The {operation} root type `{type_name}` is not defined")]
    UndefinedRootOperationType {
        operation: OperationKind,
        type_name: String,
    },
}
