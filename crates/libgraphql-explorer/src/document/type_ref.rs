/// A type reference as written in a variable definition (e.g. `[Int!]!`).
#[derive(Clone, Debug, PartialEq)]
pub enum TypeRef {
    List(Box<TypeRef>),
    Named(String),
    NonNull(Box<TypeRef>),
}
impl TypeRef {
    /// Strip one outer non-null wrapper, if present.
    pub fn into_nullable(self) -> Self {
        match self {
            Self::NonNull(inner) => *inner,
            other => other,
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// The name of the named type at the bottom of any list/non-null
    /// wrappers.
    pub fn innermost_type_name(&self) -> &str {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_type_name(),
            Self::Named(name) => name.as_str(),
        }
    }
}
impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Named(name) => write!(f, "{name}"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
