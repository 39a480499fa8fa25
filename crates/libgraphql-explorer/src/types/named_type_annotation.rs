use crate::schema::Schema;
use crate::types::GraphQLType;

/// A type annotation that names a type directly, such as `String` or
/// `PackageFilter!`.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_name: String,
}
impl NamedTypeAnnotation {
    /// Look up the annotated type in `schema`.
    pub fn graphql_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        schema.lookup_type(&self.type_name)
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
