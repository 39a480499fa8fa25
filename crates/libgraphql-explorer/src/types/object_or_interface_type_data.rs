use crate::loc;
use crate::types::DirectiveAnnotation;
use crate::types::Field;
use indexmap::IndexMap;

/// The data object and interface types have in common.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) name: String,
}
impl ObjectOrInterfaceTypeData {
    pub(crate) fn new(
        name: String,
        description: Option<String>,
        def_location: loc::SchemaDefLocation,
    ) -> Self {
        Self {
            def_location,
            description,
            directives: vec![],
            fields: IndexMap::new(),
            interfaces: vec![],
            name,
        }
    }
}
