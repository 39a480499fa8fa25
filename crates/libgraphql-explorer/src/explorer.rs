use crate::document::parse_document;
use crate::document::Argument;
use crate::document::ArgumentPath;
use crate::document::Definition;
use crate::document::DefinitionId;
use crate::document::Document;
use crate::document::FieldPath;
use crate::document::FieldSelection;
use crate::document::FragmentSpread;
use crate::document::ObjectField;
use crate::document::OperationKind;
use crate::document::ParsedDocumentCache;
use crate::document::Selection;
use crate::edit;
use crate::edit::ArgumentValueInput;
use crate::edit::EditError;
use crate::edit::ScrollTarget;
use crate::schema::Schema;
use crate::DefaultExplorerPolicy;
use crate::ExplorerPolicy;
use crate::FragmentRegistry;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, EditError>;

type CommitHook = Box<dyn FnMut(&str)>;

/// An editing session over one query-document text.
///
/// Every edit reads the current [`Document`] (parsing the text at most once
/// per change), applies one pure edit from [`crate::edit`], and returns the
/// new document. When `commit` is true the new document is also printed,
/// stored as the session's text, and handed to the commit hook. When it is
/// false the caller can compose further edits on the returned document and
/// finish with [`Explorer::commit_document()`].
///
/// Failed edits are logged and change nothing. That includes edits whose
/// result would print as text that doesn't parse.
///
/// The session also remembers nodes that edits removed (fields, fragment
/// spreads, and arguments), keyed by where they were removed from, so that
/// toggling one back on restores it exactly.
pub struct Explorer<'schema, P: ExplorerPolicy = DefaultExplorerPolicy> {
    cache: ParsedDocumentCache,
    commit_hook: Option<CommitHook>,
    policy: P,
    removed_arguments: HashMap<(DefinitionId, ArgumentPath), Argument>,
    removed_fields: HashMap<(DefinitionId, FieldPath), FieldSelection>,
    removed_spreads: HashMap<(DefinitionId, FieldPath, String), FragmentSpread>,
    schema: &'schema Schema,
    scroll_target: Option<ScrollTarget>,
    text: String,
}
impl<'schema> Explorer<'schema, DefaultExplorerPolicy> {
    /// Start a session over `text` using the [`DefaultExplorerPolicy`].
    pub fn new<S: Into<String>>(schema: &'schema Schema, text: S) -> Self {
        Self::with_policy(schema, DefaultExplorerPolicy, text)
    }
}
impl<'schema, P: ExplorerPolicy> Explorer<'schema, P> {
    /// Start a session over `text` whose defaults come from `policy`.
    pub fn with_policy<S: Into<String>>(schema: &'schema Schema, policy: P, text: S) -> Self {
        Self {
            cache: ParsedDocumentCache::new(),
            commit_hook: None,
            policy,
            removed_arguments: HashMap::new(),
            removed_fields: HashMap::new(),
            removed_spreads: HashMap::new(),
            schema,
            scroll_target: None,
            text: text.into(),
        }
    }

    /// Call `hook` with the new text every time an edit is committed.
    pub fn on_commit<F: FnMut(&str) + 'static>(mut self, hook: F) -> Self {
        self.commit_hook = Some(Box::new(hook));
        self
    }

    /// The current document: the parsed text, the last document that parsed
    /// if the text doesn't, or the default document.
    pub fn document(&mut self) -> Document {
        self.cache.get_or_default(&self.text)
    }

    /// The current document's fragments, grouped by type condition.
    pub fn fragment_registry(&mut self) -> FragmentRegistry {
        FragmentRegistry::from_document(&self.document())
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn schema(&self) -> &'schema Schema {
        self.schema
    }

    /// Take the definition that the most recent clone or create asked to
    /// have scrolled into view.
    pub fn take_scroll_target(&mut self) -> Option<ScrollTarget> {
        self.scroll_target.take()
    }

    /// The session's current text. After a committed edit this is the
    /// printed document; after [`Explorer::set_text()`] it is whatever was
    /// set, parseable or not.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Replace the text, e.g. after the user typed into the editor.
    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }

    /// Print `doc`, make it the session's text, and call the commit hook.
    ///
    /// Nothing is committed if the printed text doesn't parse back into a
    /// document (as with a fragment that has nothing selected).
    pub fn commit_document(&mut self, doc: &Document) -> Result<()> {
        let text = doc.to_graphql_string();
        if let Err(err) = parse_document(&text) {
            return Err(EditError::UnparseableDocument(err.to_string()));
        }

        self.text = text;
        log::trace!("Committing query text:\n{}", self.text);
        if let Some(hook) = &mut self.commit_hook {
            hook(&self.text);
        }
        Ok(())
    }

    fn finish(&mut self, action: &str, result: Result<Document>, commit: bool) -> Result<Document> {
        let result = result.and_then(|doc| {
            if commit {
                self.commit_document(&doc)?;
            }
            Ok(doc)
        });
        if let Err(err) = &result {
            log::error!("Unable to {action}: {err}");
        }
        result
    }

    /// Select the field at `field_path` if it isn't selected, or deselect it
    /// if it is.
    pub fn toggle_field(
        &mut self,
        def_id: DefinitionId,
        field_path: &FieldPath,
        commit: bool,
    ) -> Result<Document> {
        let doc = self.document();
        let key = (def_id, field_path.clone());
        let previous = self.removed_fields.get(&key).cloned();

        let mut removed = None;
        let result = parent_path(field_path).and_then(|parent_path| {
            let field = edit::field_at_path(self.schema, &doc, def_id, field_path)?;
            edit::update_selections(&doc, def_id, &parent_path, |selections| {
                let toggled = edit::toggle_field(
                    selections,
                    field,
                    previous,
                    self.schema,
                    &self.policy,
                );
                removed = toggled.removed;
                Ok(toggled.selections)
            })
        });

        if result.is_ok() {
            match removed {
                Some(removed) => self.removed_fields.insert(key, removed),
                None => self.removed_fields.remove(&key),
            };
        }
        self.finish("toggle field", result, commit)
    }

    /// Select every direct subfield of the object field at `field_path`
    /// (replacing any existing selection of it).
    pub fn select_all_subfields(
        &mut self,
        def_id: DefinitionId,
        field_path: &FieldPath,
        commit: bool,
    ) -> Result<Document> {
        let doc = self.document();
        let result = parent_path(field_path).and_then(|parent_path| {
            let field = edit::field_at_path(self.schema, &doc, def_id, field_path)?;
            let field_type = edit::type_at_path(self.schema, &doc, def_id, field_path)?;
            let subfield_names = edit::object_subfield_names(field, field_type)?;
            edit::update_selections(&doc, def_id, &parent_path, |selections| {
                Ok(edit::select_all_subfields(
                    selections,
                    field,
                    &subfield_names,
                    self.schema,
                    &self.policy,
                ))
            })
        });
        self.finish("select all subfields", result, commit)
    }

    /// Select the policy's default fields beneath the (already selected)
    /// field at `field_path`.
    pub fn select_default_subfields(
        &mut self,
        def_id: DefinitionId,
        field_path: &FieldPath,
        commit: bool,
    ) -> Result<Document> {
        let doc = self.document();
        let result = parent_path(field_path).and_then(|parent_path| {
            let field_type = edit::type_at_path(self.schema, &doc, def_id, field_path)?;
            let field_names = self.policy.default_field_names(self.schema, field_type);
            let field_name = field_path.last().unwrap_or_default();
            edit::update_selections(&doc, def_id, &parent_path, |selections| {
                edit::select_default_subfields(selections, field_name, &field_names)
            })
        });
        self.finish("select default subfields", result, commit)
    }

    /// Replace everything selected beneath the field at `field_path`.
    pub fn set_child_selections(
        &mut self,
        def_id: DefinitionId,
        field_path: &FieldPath,
        children: Vec<Selection>,
        commit: bool,
    ) -> Result<Document> {
        let doc = self.document();
        let result = parent_path(field_path).and_then(|parent_path| {
            let field_name = field_path.last().unwrap_or_default();
            edit::update_selections(&doc, def_id, &parent_path, |selections| {
                edit::set_child_selections(selections, field_name, children)
            })
        });
        self.finish("set child selections", result, commit)
    }

    /// Spread `fragment_name` within the selection set at `path`, or remove
    /// the spread if it is already there.
    pub fn toggle_fragment_spread(
        &mut self,
        def_id: DefinitionId,
        path: &FieldPath,
        fragment_name: &str,
        commit: bool,
    ) -> Result<Document> {
        let doc = self.document();
        let key = (def_id, path.clone(), fragment_name.to_string());
        let previous = self.removed_spreads.get(&key).cloned();

        let mut removed = None;
        let result = edit::update_selections(&doc, def_id, path, |selections| {
            let toggled = edit::toggle_fragment_spread(selections, fragment_name, previous);
            removed = toggled.removed;
            Ok(toggled.selections)
        });

        if result.is_ok() {
            match removed {
                Some(removed) => self.removed_spreads.insert(key, removed),
                None => self.removed_spreads.remove(&key),
            };
        }
        self.finish("toggle fragment spread", result, commit)
    }

    /// Move everything selected beneath the field at `field_path` into a new
    /// fragment, appended to the document, and spread it in their place.
    pub fn extract_fragment(
        &mut self,
        def_id: DefinitionId,
        field_path: &FieldPath,
        commit: bool,
    ) -> Result<Document> {
        let doc = self.document();
        let result = parent_path(field_path).and_then(|parent_path| {
            let field_type = edit::type_at_path(self.schema, &doc, def_id, field_path)?;
            let field_name = field_path.last().unwrap_or_default();
            let existing_names = doc.fragments().map(|(_, frag)| frag.name.as_str());

            let mut fragment = None;
            let mut new_doc = edit::update_selections(&doc, def_id, &parent_path, |selections| {
                let (selections, new_fragment) = edit::extract_fragment(
                    selections,
                    field_name,
                    field_type.name(),
                    existing_names,
                )?;
                fragment = Some(new_fragment);
                Ok(selections)
            })?;
            if let Some(fragment) = fragment {
                new_doc.definitions.push(Definition::Fragment(fragment));
            }
            Ok(new_doc)
        });
        self.finish("extract fragment", result, commit)
    }

    /// Add the argument (or input field) at `arg_path`, restoring its
    /// previous value if it was removed earlier in this session.
    pub fn add_argument(
        &mut self,
        def_id: DefinitionId,
        arg_path: &ArgumentPath,
        commit: bool,
    ) -> Result<Document> {
        let doc = self.document();
        let key = (def_id, arg_path.clone());
        let previous = self.removed_arguments.get(&key).cloned();

        let result = edit::resolve_input_value(self.schema, &doc, def_id, arg_path)
            .and_then(|(field, input_value)| {
                edit::update_argument_slots(&doc, def_id, arg_path, |slots| {
                    edit::add_argument(
                        slots,
                        input_value,
                        field,
                        previous,
                        self.schema,
                        &self.policy,
                    )
                })
            });

        if result.is_ok() {
            self.removed_arguments.remove(&key);
        }
        self.finish("add argument", result, commit)
    }

    /// Remove the argument (or input field) at `arg_path`, remembering it so
    /// that [`Explorer::add_argument()`] can restore it.
    pub fn remove_argument(
        &mut self,
        def_id: DefinitionId,
        arg_path: &ArgumentPath,
        commit: bool,
    ) -> Result<Document> {
        let doc = self.document();
        let mut removed = None;
        let result = edit::update_argument_slots(&doc, def_id, arg_path, |slots| {
            let toggle = edit::remove_argument(slots, arg_path.leaf_name());
            removed = toggle.removed;
            Ok(toggle.slots)
        });

        if result.is_ok()
            && let Some(removed) = removed {
            self.removed_arguments.insert((def_id, arg_path.clone()), removed);
        }
        self.finish("remove argument", result, commit)
    }

    /// Set the value of the (already present) argument or input field at
    /// `arg_path`.
    pub fn set_argument_value(
        &mut self,
        def_id: DefinitionId,
        arg_path: &ArgumentPath,
        input: ArgumentValueInput,
        commit: bool,
    ) -> Result<Document> {
        let doc = self.document();
        let result = edit::resolve_input_value(self.schema, &doc, def_id, arg_path)
            .and_then(|(_, input_value)| {
                let annot = input_value.type_annotation();
                self.schema.unwrap_type(annot).ok_or_else(|| EditError::UnknownType {
                    type_name: annot.innermost_type_name().to_string(),
                })
            })
            .and_then(|value_type| {
                edit::update_argument_slots(&doc, def_id, arg_path, |slots| {
                    edit::set_argument_value(slots, arg_path.leaf_name(), input, value_type)
                })
            });
        self.finish("set argument value", result, commit)
    }

    /// Replace the value of the argument or input field at `arg_path` with an
    /// object value holding `fields`.
    pub fn set_input_object_fields(
        &mut self,
        def_id: DefinitionId,
        arg_path: &ArgumentPath,
        fields: Vec<ObjectField>,
        commit: bool,
    ) -> Result<Document> {
        let doc = self.document();
        let result = edit::update_argument_slots(&doc, def_id, arg_path, |slots| {
            edit::set_input_object_fields(slots, arg_path.leaf_name(), fields)
        });
        self.finish("set input object fields", result, commit)
    }

    /// Replace the value at `arg_path` with a new operation variable that
    /// defaults to it. See [`edit::variablize()`].
    pub fn variablize(
        &mut self,
        def_id: DefinitionId,
        arg_path: &ArgumentPath,
        commit: bool,
    ) -> Result<Document> {
        let doc = self.document();
        let result = edit::variablize(&doc, def_id, arg_path, self.schema);
        self.finish("promote argument to a variable", result, commit)
    }

    /// Replace the variable reference at `arg_path` with the variable's
    /// default. See [`edit::devariablize()`].
    pub fn devariablize(
        &mut self,
        def_id: DefinitionId,
        arg_path: &ArgumentPath,
        commit: bool,
    ) -> Result<Document> {
        let doc = self.document();
        let result = edit::devariablize(&doc, def_id, arg_path);
        self.finish("inline variable", result, commit)
    }

    /// Rename an operation or fragment. An empty name makes an operation
    /// anonymous and is ignored for fragments.
    pub fn rename_definition(
        &mut self,
        def_id: DefinitionId,
        new_name: &str,
        commit: bool,
    ) -> Result<Document> {
        let doc = self.document();
        let result = edit::rename_definition(&doc, def_id, new_name);
        self.finish("rename definition", result, commit)
    }

    /// Append a copy of a definition, named with a `Copy` suffix, and ask
    /// for it to be scrolled into view.
    pub fn clone_definition(&mut self, def_id: DefinitionId, commit: bool) -> Result<Document> {
        let doc = self.document();
        let result = edit::clone_definition(&doc, def_id).map(|(new_doc, scroll_target)| {
            self.scroll_target = Some(scroll_target);
            new_doc
        });
        self.finish("clone definition", result, commit)
    }

    pub fn destroy_definition(&mut self, def_id: DefinitionId, commit: bool) -> Result<Document> {
        let doc = self.document();
        let result = edit::destroy_definition(&doc, def_id);
        self.finish("destroy definition", result, commit)
    }

    /// Add a new operation of `kind` (replacing the default document if
    /// that is all there is) and ask for it to be scrolled into view.
    pub fn create_operation(&mut self, kind: OperationKind, commit: bool) -> Result<Document> {
        let doc = self.document();
        let (new_doc, scroll_target) = edit::create_operation(&doc, kind);
        self.scroll_target = Some(scroll_target);
        self.finish("create operation", Ok(new_doc), commit)
    }
}

fn parent_path(field_path: &FieldPath) -> Result<FieldPath> {
    field_path.parent().ok_or_else(|| EditError::MissingFieldSelection(field_path.clone()))
}
