use crate::document::TypeRef;
use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;
use graphql_parser::schema as ast;

/// Represents the annotated type of a [`Field`](crate::types::Field),
/// [`Parameter`](crate::types::Parameter), or
/// [`InputField`](crate::types::InputField).
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    pub(crate) fn from_ast_type(ast_type: &ast::Type<'_, String>) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(ast_type: &ast::Type<'_, String>, nullable: bool) -> Self {
        match ast_type {
            ast::Type::ListType(inner) =>
                Self::List(ListTypeAnnotation {
                    inner_type_annotation: Box::new(Self::from_ast_type_impl(inner, true)),
                    nullable,
                }),

            ast::Type::NamedType(name) =>
                Self::Named(NamedTypeAnnotation {
                    nullable,
                    type_name: name.to_owned(),
                }),

            ast::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            Self::List(ListTypeAnnotation { inner_type_annotation, .. })
                => inner_type_annotation.innermost_named_type_annotation(),
            Self::Named(named_annot)
                => named_annot,
        }
    }

    /// The name of the named type at the bottom of any list/non-null
    /// wrappers.
    pub fn innermost_type_name(&self) -> &str {
        self.innermost_named_type_annotation().graphql_type_name()
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            Self::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            Self::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }

    pub fn to_graphql_string(&self) -> String {
        self.to_string()
    }

    /// Express this annotation as the [`TypeRef`] a variable of this type
    /// would be declared with.
    pub fn to_type_ref(&self) -> TypeRef {
        let type_ref = match self {
            Self::List(list_annot) =>
                TypeRef::List(Box::new(list_annot.inner_type_annotation().to_type_ref())),
            Self::Named(named_annot) =>
                TypeRef::Named(named_annot.graphql_type_name().to_string()),
        };
        if self.nullable() {
            type_ref
        } else {
            TypeRef::NonNull(Box::new(type_ref))
        }
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation(),
                if list_annot.nullable() { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.graphql_type_name(),
                if named_annot.nullable() { "" } else { "!" },
            ),
        }
    }
}
