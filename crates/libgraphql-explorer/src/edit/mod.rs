//! Pure edits over a [`Document`](crate::document::Document).
//!
//! Selection- and argument-level functions take the list being edited by
//! value and return the new list. Document-level functions take a
//! `&Document` and return a new one, leaving the input untouched when they
//! fail.

mod arguments;
mod document_edits;
mod edit_error;
mod naming;
mod operations;
mod selections;
mod variables;

pub use arguments::add_argument;
pub use arguments::coerce_argument_value;
pub use arguments::remove_argument;
pub use arguments::set_argument_value;
pub use arguments::set_input_object_fields;
pub use arguments::ArgumentToggle;
pub use arguments::ArgumentValueInput;
pub use document_edits::field_at_path;
pub use document_edits::resolve_input_value;
pub use document_edits::root_type_of;
pub use document_edits::type_at_path;
pub use document_edits::update_argument_slots;
pub use document_edits::update_selections;
pub use document_edits::value_at_path;
pub use edit_error::EditError;
pub use naming::unique_name;
pub use operations::clone_definition;
pub use operations::create_operation;
pub use operations::destroy_definition;
pub use operations::rename_definition;
pub use operations::ScrollTarget;
pub use selections::extract_fragment;
pub use selections::normalize_operation_selections;
pub(crate) use selections::object_subfield_names;
pub use selections::select_all_subfields;
pub use selections::select_default_subfields;
pub use selections::set_child_selections;
pub use selections::set_field_arguments;
pub use selections::toggle_field;
pub use selections::toggle_fragment_spread;
pub use selections::FieldToggle;
pub use selections::SpreadToggle;
pub use selections::Toggled;
pub use variables::devariablize;
pub use variables::variablize;

pub type Result<T> = std::result::Result<T, EditError>;

#[cfg(test)]
mod tests;
