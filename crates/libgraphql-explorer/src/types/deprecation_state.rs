use crate::document::Value;
use crate::types::DirectiveAnnotation;

const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// Whether a schema element carries a `@deprecated` directive.
///
/// A `@deprecated` directive without a `reason` argument reports the
/// default reason, `"No longer supported"`.
#[derive(Clone, Debug, PartialEq)]
pub enum DeprecationState<'a> {
    Deprecated(&'a str),
    NotDeprecated,
}
impl<'a> DeprecationState<'a> {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }
}

impl<'a> std::convert::From<&'a Vec<DirectiveAnnotation>> for DeprecationState<'a> {
    fn from(value: &'a Vec<DirectiveAnnotation>) -> DeprecationState<'a> {
        let directive_annot = value.iter().find(|directive_annot| {
            directive_annot.name() == "deprecated"
        });
        match directive_annot {
            Some(directive_annot) => {
                let reason = match directive_annot.arguments().get("reason") {
                    Some(Value::String(reason)) => reason.as_str(),
                    _ => DEFAULT_DEPRECATION_REASON,
                };
                DeprecationState::Deprecated(reason)
            },
            None => DeprecationState::NotDeprecated,
        }
    }
}
