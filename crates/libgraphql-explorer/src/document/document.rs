use crate::document::FragmentDefinition;
use crate::document::OperationDefinition;
use crate::document::OperationKind;
use crate::document::Selection;
use crate::edit::normalize_operation_selections;

/// The name given to the operation in [`Document::default_document()`].
pub const DEFAULT_OPERATION_NAME: &str = "MyQuery";

/// Identifies a definition by its index within one [`Document`].
///
/// Ids are only meaningful for the document they were read from; any edit
/// that inserts or removes definitions shifts the ids of later definitions.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DefinitionId(pub usize);
impl std::fmt::Display for DefinitionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A top-level definition within a [`Document`].
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Fragment(FragmentDefinition),
    Operation(OperationDefinition),
}
impl Definition {
    pub fn as_fragment(&self) -> Option<&FragmentDefinition> {
        if let Self::Fragment(frag) = self {
            Some(frag)
        } else {
            None
        }
    }

    pub fn as_operation(&self) -> Option<&OperationDefinition> {
        if let Self::Operation(op) = self {
            Some(op)
        } else {
            None
        }
    }

    /// The keyword used to identify this kind of definition in rendered
    /// element ids: `query`, `mutation`, `subscription`, or `fragment`.
    pub fn kind_str(&self) -> &'static str {
        match self {
            Self::Fragment(_) => "fragment",
            Self::Operation(op) => op.kind.as_str(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Fragment(frag) => Some(frag.name.as_str()),
            Self::Operation(op) => op.name.as_deref(),
        }
    }

    pub fn selections(&self) -> &[Selection] {
        match self {
            Self::Fragment(frag) => &frag.selections,
            Self::Operation(op) => &op.selections,
        }
    }
}

/// An ordered list of operation and fragment definitions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
}
impl Document {
    pub fn new(definitions: Vec<Definition>) -> Self {
        Self { definitions }
    }

    /// The document shown when there is no (parseable) query text: a single
    /// query named `MyQuery` with nothing selected yet.
    ///
    /// "Nothing selected" means the lone `__typename` placeholder, the same
    /// root an operation is left with once its last field is deselected.
    pub fn default_document() -> Self {
        let mut op = OperationDefinition::new(
            OperationKind::Query,
            Some(DEFAULT_OPERATION_NAME.to_string()),
        );
        op.selections = normalize_operation_selections(vec![]);
        Self {
            definitions: vec![Definition::Operation(op)],
        }
    }

    /// Indicates if this document consists solely of the default operation
    /// from [`Document::default_document()`].
    pub fn is_default_document(&self) -> bool {
        *self == Self::default_document()
    }

    pub fn definition(&self, id: DefinitionId) -> Option<&Definition> {
        self.definitions.get(id.0)
    }

    /// Iterate over all fragment definitions along with their ids.
    pub fn fragments(&self) -> impl Iterator<Item = (DefinitionId, &FragmentDefinition)> {
        self.definitions.iter()
            .enumerate()
            .filter_map(|(idx, def)| {
                def.as_fragment().map(|frag| (DefinitionId(idx), frag))
            })
    }

    /// Iterate over all operation definitions along with their ids.
    pub fn operations(&self) -> impl Iterator<Item = (DefinitionId, &OperationDefinition)> {
        self.definitions.iter()
            .enumerate()
            .filter_map(|(idx, def)| {
                def.as_operation().map(|op| (DefinitionId(idx), op))
            })
    }

    /// Find the first definition with the given name.
    pub fn find_definition(&self, name: &str) -> Option<DefinitionId> {
        self.definitions.iter()
            .position(|def| def.name() == Some(name))
            .map(DefinitionId)
    }

    /// Print this document using the same layout as graphql-js's `print()`.
    pub fn to_graphql_string(&self) -> String {
        crate::document::printer::print_document(self)
    }
}
impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_graphql_string())
    }
}
