use crate::document::TypeRef;
use crate::document::Value;

/// A variable declared by an operation (e.g. `$first: Int = 10`).
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub name: String,
    pub var_type: TypeRef,
    pub default_value: Option<Value>,
}
