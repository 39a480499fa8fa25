/// A value literal (or variable reference) as written in a query document.
///
/// Object fields keep their written order, including in documents produced
/// by [`parse_document`](crate::document::parse_document).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(Vec<ObjectField>),
    String(String),
    Variable(String),
}
impl Value {
    pub fn as_object_fields(&self) -> Option<&[ObjectField]> {
        if let Self::Object(fields) = self {
            Some(fields)
        } else {
            None
        }
    }

    pub fn as_variable_name(&self) -> Option<&str> {
        if let Self::Variable(name) = self {
            Some(name.as_str())
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Call `visitor` with the name of every variable referenced anywhere
    /// within this value.
    pub fn visit_variables<F: FnMut(&str)>(&self, visitor: &mut F) {
        match self {
            Self::Variable(name) => visitor(name),
            Self::List(items) => {
                for item in items {
                    item.visit_variables(visitor);
                }
            },
            Self::Object(fields) => {
                for field in fields {
                    field.value.visit_variables(visitor);
                }
            },
            Self::Boolean(_)
                | Self::Enum(_)
                | Self::Float(_)
                | Self::Int(_)
                | Self::Null
                | Self::String(_) => (),
        }
    }

    /// Rebuild this value, replacing every variable reference with whatever
    /// `replace` returns for its name.
    pub fn replace_variables<F: FnMut(&str) -> Value>(
        self,
        replace: &mut F,
    ) -> Value {
        match self {
            Self::Variable(name) => replace(&name),
            Self::List(items) => Self::List(
                items.into_iter()
                    .map(|item| item.replace_variables(replace))
                    .collect(),
            ),
            Self::Object(fields) => Self::Object(
                fields.into_iter()
                    .map(|field| NamedValue {
                        name: field.name,
                        value: field.value.replace_variables(replace),
                    })
                    .collect(),
            ),
            other => other,
        }
    }
}
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = String::new();
        crate::document::printer::write_value(&mut out, self);
        f.write_str(&out)
    }
}

/// A `name: value` pair. Used for both field arguments and the fields of an
/// object value.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedValue {
    pub name: String,
    pub value: Value,
}
impl NamedValue {
    pub fn new<S: Into<String>>(name: S, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Find the entry named `name` in a list of named values.
    pub fn find<'a>(entries: &'a [NamedValue], name: &str) -> Option<&'a NamedValue> {
        entries.iter().find(|entry| entry.name == name)
    }
}

pub type Argument = NamedValue;
pub type ObjectField = NamedValue;
