use crate::document::Directive;
use crate::document::Selection;

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub name: String,
    pub type_condition: String,
    pub directives: Vec<Directive>,
    pub selections: Vec<Selection>,
}
