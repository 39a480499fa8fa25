use crate::document::Argument;
use crate::document::Directive;

/// One entry of a selection set.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(FieldSelection),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}
impl Selection {
    pub fn as_field(&self) -> Option<&FieldSelection> {
        if let Self::Field(field) = self {
            Some(field)
        } else {
            None
        }
    }

    /// Indicates if this is a [`FieldSelection`] of the field named `name`.
    pub fn is_field_named(&self, name: &str) -> bool {
        matches!(self, Self::Field(field) if field.name == name)
    }

    /// Indicates if this is a spread of the fragment named `name`.
    pub fn is_spread_of(&self, fragment_name: &str) -> bool {
        matches!(
            self,
            Self::FragmentSpread(spread) if spread.fragment_name == fragment_name,
        )
    }

    /// Call `visitor` with the name of every variable referenced by this
    /// selection or anything nested beneath it.
    pub fn visit_variables<F: FnMut(&str)>(&self, visitor: &mut F) {
        match self {
            Self::Field(field) => {
                for arg in &field.arguments {
                    arg.value.visit_variables(visitor);
                }
                visit_directive_variables(&field.directives, visitor);
                for child in &field.selections {
                    child.visit_variables(visitor);
                }
            },
            Self::FragmentSpread(spread) =>
                visit_directive_variables(&spread.directives, visitor),
            Self::InlineFragment(inline) => {
                visit_directive_variables(&inline.directives, visitor);
                for child in &inline.selections {
                    child.visit_variables(visitor);
                }
            },
        }
    }
}

pub(crate) fn visit_directive_variables<F: FnMut(&str)>(
    directives: &[Directive],
    visitor: &mut F,
) {
    for directive in directives {
        for arg in &directive.arguments {
            arg.value.visit_variables(visitor);
        }
    }
}

/// A selected field, e.g. `alias: field(arg: 1) @dir { ... }`.
///
/// An empty `selections` list means the field has no nested selection set.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selections: Vec<Selection>,
}
impl FieldSelection {
    /// A childless selection of `name` with the given arguments.
    pub fn new<S: Into<String>>(name: S, arguments: Vec<Argument>) -> Self {
        Self {
            alias: None,
            name: name.into(),
            arguments,
            directives: vec![],
            selections: vec![],
        }
    }
}

/// A named fragment spread, e.g. `...UserFields`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub fragment_name: String,
    pub directives: Vec<Directive>,
}
impl FragmentSpread {
    pub fn new<S: Into<String>>(fragment_name: S) -> Self {
        Self {
            fragment_name: fragment_name.into(),
            directives: vec![],
        }
    }
}

/// An inline fragment, e.g. `... on User { name }`. Carried through edits
/// untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<String>,
    pub directives: Vec<Directive>,
    pub selections: Vec<Selection>,
}
