use crate::document::Definition;
use crate::document::DefinitionId;
use crate::document::Document;
use crate::document::OperationDefinition;
use crate::document::OperationKind;
use crate::edit::selections::typename_placeholder;
use crate::edit::EditError;
use crate::edit::Result;

/// Identifies a rendered definition that should be scrolled into view, as
/// `<kind>-<name>` (e.g. `query-MyQuery2` or `fragment-UserFragment`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScrollTarget {
    /// `query`, `mutation`, `subscription`, or `fragment`.
    pub kind: &'static str,
    /// `None` for anonymous operations, which print as `<kind>-unknown`.
    pub name: Option<String>,
}
impl ScrollTarget {
    /// The target that scrolls `def` into view.
    pub fn for_definition(def: &Definition) -> Self {
        Self {
            kind: def.kind_str(),
            name: def.name().map(str::to_string),
        }
    }
}
impl std::fmt::Display for ScrollTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.kind, self.name.as_deref().unwrap_or("unknown"))
    }
}

/// Rename the definition `def_id`. An empty name leaves an operation
/// unnamed; fragments keep their current name since they require one.
pub fn rename_definition(
    doc: &Document,
    def_id: DefinitionId,
    new_name: &str,
) -> Result<Document> {
    let mut new_doc = doc.clone();
    match new_doc.definitions.get_mut(def_id.0) {
        Some(Definition::Fragment(frag)) => {
            if new_name.is_empty() {
                log::warn!("Not clearing the name of fragment `{}`.", frag.name);
            } else {
                frag.name = new_name.to_string();
            }
        },
        Some(Definition::Operation(op)) => {
            op.name = (!new_name.is_empty()).then(|| new_name.to_string());
        },
        None => return Err(EditError::UnknownDefinition(def_id)),
    }
    Ok(new_doc)
}

/// Append a copy of the definition `def_id` named `<name>Copy`.
pub fn clone_definition(doc: &Document, def_id: DefinitionId) -> Result<(Document, ScrollTarget)> {
    let mut copy = doc.definition(def_id)
        .ok_or(EditError::UnknownDefinition(def_id))?
        .clone();
    match &mut copy {
        Definition::Fragment(frag) => frag.name.push_str("Copy"),
        Definition::Operation(op) => {
            op.name = Some(format!("{}Copy", op.name.as_deref().unwrap_or_default()));
        },
    }

    let scroll_target = ScrollTarget::for_definition(&copy);
    let mut new_doc = doc.clone();
    new_doc.definitions.push(copy);
    Ok((new_doc, scroll_target))
}

/// Remove the definition `def_id`. Definitions after it shift down by one
/// id.
pub fn destroy_definition(doc: &Document, def_id: DefinitionId) -> Result<Document> {
    if def_id.0 >= doc.definitions.len() {
        return Err(EditError::UnknownDefinition(def_id));
    }
    let mut new_doc = doc.clone();
    new_doc.definitions.remove(def_id.0);
    Ok(new_doc)
}

/// Add a new operation of `kind` that selects only `__typename`.
///
/// The operation is named `My<Kind>`, suffixed with one more than the
/// number of existing operations of that kind when there are any. If `doc`
/// is the default document, the new operation replaces it.
pub fn create_operation(doc: &Document, kind: OperationKind) -> (Document, ScrollTarget) {
    let replacing_default = doc.is_default_document();
    let sibling_count =
        if replacing_default {
            0
        } else {
            doc.operations().filter(|(_, op)| op.kind == kind).count()
        };

    let prefix = format!("My{}", kind.capitalized());
    let name_for = |count: usize| {
        if count == 0 {
            prefix.clone()
        } else {
            format!("{prefix}{}", count + 1)
        }
    };
    let mut name = name_for(sibling_count);
    if !replacing_default {
        let mut count = sibling_count;
        while doc.find_definition(&name).is_some() {
            count += 1;
            name = name_for(count);
        }
    }

    let mut op = OperationDefinition::new(kind, Some(name));
    op.selections = vec![typename_placeholder()];
    let new_def = Definition::Operation(op);
    let scroll_target = ScrollTarget::for_definition(&new_def);

    let new_doc = if replacing_default {
        Document::new(vec![new_def])
    } else {
        let mut new_doc = doc.clone();
        new_doc.definitions.push(new_def);
        new_doc
    };
    (new_doc, scroll_target)
}
