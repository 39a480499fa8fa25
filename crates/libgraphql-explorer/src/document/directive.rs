use crate::document::Argument;

/// A directive annotation (e.g. `@include(if: $cond)`) applied to a
/// definition or selection.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub name: String,
    pub arguments: Vec<Argument>,
}
