use crate::document::selection::visit_directive_variables;
use crate::document::Directive;
use crate::document::OperationKind;
use crate::document::Selection;
use crate::document::VariableDefinition;

#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub kind: OperationKind,
    pub name: Option<String>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selections: Vec<Selection>,
}
impl OperationDefinition {
    pub fn new(kind: OperationKind, name: Option<String>) -> Self {
        Self {
            kind,
            name,
            variable_definitions: vec![],
            directives: vec![],
            selections: vec![],
        }
    }

    pub fn variable_definition(&self, name: &str) -> Option<&VariableDefinition> {
        self.variable_definitions.iter().find(|var_def| var_def.name == name)
    }

    /// Count the references to the variable `name` from this operation's
    /// directives and selections. The variable's own declaration is not
    /// counted.
    ///
    /// References inside fragments that this operation spreads are not
    /// counted.
    pub fn count_variable_uses(&self, name: &str) -> usize {
        let mut count = 0;
        let mut visitor = |var_name: &str| {
            if var_name == name {
                count += 1;
            }
        };
        visit_directive_variables(&self.directives, &mut visitor);
        for selection in &self.selections {
            selection.visit_variables(&mut visitor);
        }
        count
    }
}
