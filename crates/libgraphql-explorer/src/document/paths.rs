/// Addresses a field selection by the names of the fields leading to it from
/// the root selection set of a definition.
///
/// The empty path addresses the definition's root selection set itself.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct FieldPath(Vec<String>);
impl FieldPath {
    pub fn root() -> Self {
        Self(vec![])
    }

    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Parse a dotted path such as `viewer.repositories.nodes`.
    pub fn parse_dotted(path: &str) -> Self {
        Self::new(path.split('.').map(str::trim).filter(|s| !s.is_empty()))
    }

    pub fn child<S: Into<String>>(&self, name: S) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.into());
        Self(segments)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// The path of the selection set containing the addressed field.
    pub fn parent(&self) -> Option<Self> {
        self.0.split_last().map(|(_, parent)| Self(parent.to_vec()))
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}
impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            write!(f, "<root>")
        } else {
            write!(f, "{}", self.0.join("."))
        }
    }
}

/// Addresses an argument of a selected field, optionally descending into
/// nested input-object fields of the argument's value.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ArgumentPath {
    pub field_path: FieldPath,
    pub argument: String,
    pub input_fields: Vec<String>,
}
impl ArgumentPath {
    pub fn new<S: Into<String>>(field_path: FieldPath, argument: S) -> Self {
        Self {
            field_path,
            argument: argument.into(),
            input_fields: vec![],
        }
    }

    /// Address the input field `name` within the value at this path.
    pub fn input_field<S: Into<String>>(&self, name: S) -> Self {
        let mut input_fields = self.input_fields.clone();
        input_fields.push(name.into());
        Self {
            field_path: self.field_path.clone(),
            argument: self.argument.clone(),
            input_fields,
        }
    }

    /// The name of the addressed argument or input field.
    pub fn leaf_name(&self) -> &str {
        self.input_fields.last().unwrap_or(&self.argument)
    }

    /// The path of the argument or input field containing the addressed one,
    /// or `None` if this path addresses a top-level argument.
    pub fn parent(&self) -> Option<Self> {
        self.input_fields.split_last().map(|(_, parent)| Self {
            field_path: self.field_path.clone(),
            argument: self.argument.clone(),
            input_fields: parent.to_vec(),
        })
    }
}
impl std::fmt::Display for ArgumentPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}", self.field_path, self.argument)?;
        for input_field in &self.input_fields {
            write!(f, ".{input_field}")?;
        }
        write!(f, ":)")
    }
}
