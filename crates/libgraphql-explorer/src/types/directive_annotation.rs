use crate::document::Value;
use indexmap::IndexMap;

/// A directive applied to a type or field in the schema (e.g.
/// `@deprecated(reason: "...")`).
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) name: String,
}
impl DirectiveAnnotation {
    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_ast(
        directive: graphql_parser::schema::Directive<'_, String>,
    ) -> Self {
        Self {
            arguments: directive.arguments.into_iter()
                .map(|(name, value)| (name, crate::document::value_from_ast(value)))
                .collect(),
            name: directive.name,
        }
    }

    /// The `@deprecated` annotation an introspection result implies with
    /// `isDeprecated: true`.
    pub(crate) fn deprecated(reason: Option<String>) -> Self {
        let mut arguments = IndexMap::new();
        if let Some(reason) = reason {
            arguments.insert("reason".to_string(), Value::String(reason));
        }
        Self {
            arguments,
            name: "deprecated".to_string(),
        }
    }
}
