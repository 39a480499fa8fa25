use crate::types::TypeAnnotation;

/// A list type annotation such as `[String!]` or `[Int]!`.
#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation {
    pub(crate) inner_type_annotation: Box<TypeAnnotation>,
    pub(crate) nullable: bool,
}
impl ListTypeAnnotation {
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type_annotation
    }

    /// Whether the list itself may be null (i.e. there is no trailing `!`).
    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
