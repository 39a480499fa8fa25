use crate::document::Value;
use crate::types::InputField;
use crate::types::Parameter;
use crate::types::TypeAnnotation;

/// Either a field argument or an input-object field: anything a value can be
/// supplied for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputValueRef<'a> {
    InputField(&'a InputField),
    Parameter(&'a Parameter),
}
impl<'a> InputValueRef<'a> {
    pub fn default_value(&self) -> Option<&'a Value> {
        match *self {
            Self::InputField(input_field) => input_field.default_value(),
            Self::Parameter(param) => param.default_value(),
        }
    }

    /// Required means the value's type is non-null and there is no default
    /// value to fall back on.
    pub fn is_required(&self) -> bool {
        !self.type_annotation().nullable() && self.default_value().is_none()
    }

    pub fn name(&self) -> &'a str {
        match *self {
            Self::InputField(input_field) => input_field.name(),
            Self::Parameter(param) => param.name(),
        }
    }

    pub fn type_annotation(&self) -> &'a TypeAnnotation {
        match *self {
            Self::InputField(input_field) => input_field.type_annotation(),
            Self::Parameter(param) => param.type_annotation(),
        }
    }
}
impl<'a> std::convert::From<&'a InputField> for InputValueRef<'a> {
    fn from(value: &'a InputField) -> Self {
        Self::InputField(value)
    }
}
impl<'a> std::convert::From<&'a Parameter> for InputValueRef<'a> {
    fn from(value: &'a Parameter) -> Self {
        Self::Parameter(value)
    }
}
