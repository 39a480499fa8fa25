use crate::document::DefinitionId;
use crate::document::Document;
use crate::document::FragmentDefinition;
use indexmap::IndexMap;

/// Indexes the fragment definitions of a [`Document`] by the name of the
/// type they apply to.
///
/// Fragments for each type are ordered by name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentRegistry {
    by_type_name: IndexMap<String, Vec<(DefinitionId, FragmentDefinition)>>,
}
impl FragmentRegistry {
    pub fn from_document(doc: &Document) -> Self {
        let mut by_type_name = IndexMap::<String, Vec<(DefinitionId, FragmentDefinition)>>::new();
        for (def_id, frag) in doc.fragments() {
            by_type_name.entry(frag.type_condition.clone())
                .or_default()
                .push((def_id, frag.clone()));
        }
        for frags in by_type_name.values_mut() {
            frags.sort_by(|(_, a), (_, b)| a.name.cmp(&b.name));
        }
        Self { by_type_name }
    }

    /// The names of every indexed fragment, in no particular order.
    pub fn fragment_names(&self) -> impl Iterator<Item = &str> {
        self.by_type_name.values()
            .flatten()
            .map(|(_, frag)| frag.name.as_str())
    }

    /// The fragments whose type condition is `type_name`, ordered by name.
    pub fn fragments_for_type(&self, type_name: &str) -> &[(DefinitionId, FragmentDefinition)] {
        self.by_type_name
            .get(type_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type_name.is_empty()
    }

    /// The type names that at least one fragment applies to.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.by_type_name.keys().map(String::as_str)
    }
}
