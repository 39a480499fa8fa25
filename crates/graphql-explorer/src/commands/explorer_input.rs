use crate::output_utils;
use crate::CommandResult;
use anyhow::Context;
use libgraphql_explorer::document::ArgumentPath;
use libgraphql_explorer::document::DefinitionId;
use libgraphql_explorer::document::FieldPath;
use libgraphql_explorer::schema::Schema;
use libgraphql_explorer::schema::SchemaBuilder;
use libgraphql_explorer::Explorer;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Where to read the schema and the query document from.
#[derive(Debug, clap::Args)]
pub(crate) struct ExplorerInput {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Path to a file containing the query document. The document is \
             read from stdin when omitted.",
        long,
        short='q',
    )]
    query: Option<PathBuf>,

    #[arg(
        help="Path to the schema: a GraphQL SDL file, a directory containing \
             SDL files, or a `.json` introspection result.",
        long,
        short='s',
    )]
    schema: PathBuf,
}
impl ExplorerInput {
    /// Load the schema and the query text, hand an [`Explorer`] over them to
    /// `edit`, and print the resulting text.
    pub(crate) fn run_edit<F>(&self, action: &str, edit: F) -> CommandResult
    where
        F: FnOnce(&mut Explorer<'_>) -> anyhow::Result<()>,
    {
        let result = self.load_schema().and_then(|schema| {
            let mut explorer = Explorer::new(&schema, self.read_query_text()?);
            edit(&mut explorer)?;
            Ok(explorer.text().to_string())
        });

        match result {
            Ok(text) => CommandResult::stdout(format_args!("{}", text.trim_end())),
            Err(err) => CommandResult::stderr(format_args!(
                "{} Unable to {action}: {err:#}",
                output_utils::RED_X,
            )),
        }
    }

    fn load_schema(&self) -> anyhow::Result<Schema> {
        let schema_path = self.schema.as_path();
        let is_json = schema_path.extension().is_some_and(|ext| ext == "json");
        if schema_path.is_file() && is_json {
            log::debug!("Loading introspection result from {schema_path:#?}.");
            let json = std::fs::read_to_string(schema_path)
                .with_context(|| format!("reading {schema_path:#?}"))?;
            return Ok(SchemaBuilder::from_introspection_json(&json)?.build()?);
        }

        let file_paths = self.find_schema_files(schema_path)?;
        log::debug!("Found {} schema files.", file_paths.len());
        Ok(SchemaBuilder::from_files(&file_paths)?.build()?)
    }

    fn find_schema_files(&self, schema_path: &Path) -> anyhow::Result<Vec<PathBuf>> {
        // A file named directly is loaded whatever its extension.
        if schema_path.is_file() {
            return Ok(vec![schema_path.to_path_buf()]);
        }

        let graphql_file_exts: HashSet<&str> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        let mut file_paths = vec![];
        for entry in WalkDir::new(schema_path).follow_links(true) {
            let entry = entry.with_context(|| format!("scanning {schema_path:#?}"))?;
            let path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {path:#?}.");
                continue;
            }
            if let Some(ext) = path.extension().and_then(|ext| ext.to_str())
                && graphql_file_exts.contains(ext) {
                log::trace!("Found schema file at {path:#?}.");
                file_paths.push(path.to_path_buf());
            }
        }

        if file_paths.is_empty() {
            anyhow::bail!("no schema files found at {schema_path:#?}");
        }
        file_paths.sort();
        Ok(file_paths)
    }

    fn read_query_text(&self) -> anyhow::Result<String> {
        match &self.query {
            Some(query_path) => std::fs::read_to_string(query_path)
                .with_context(|| format!("reading {query_path:#?}")),
            None => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text).context("reading stdin")?;
                Ok(text)
            },
        }
    }
}

/// Selects which definition of the document to edit.
#[derive(Debug, clap::Args)]
pub(crate) struct DefinitionSelector {
    #[arg(
        help="Name (or zero-based index) of the definition to edit. Defaults \
             to the first definition in the document.",
        long,
        short='d',
    )]
    definition: Option<String>,
}
impl DefinitionSelector {
    pub(crate) fn resolve(&self, explorer: &mut Explorer<'_>) -> anyhow::Result<DefinitionId> {
        let doc = explorer.document();
        let Some(selector) = self.definition.as_deref() else {
            return Ok(DefinitionId(0));
        };
        if let Some(def_id) = doc.find_definition(selector) {
            return Ok(def_id);
        }
        match selector.parse::<usize>() {
            Ok(idx) if idx < doc.definitions.len() => Ok(DefinitionId(idx)),
            _ => anyhow::bail!("the document has no definition `{selector}`"),
        }
    }
}

/// Addresses an argument (or a nested input field of one).
#[derive(Debug, clap::Args)]
pub(crate) struct ArgumentTarget {
    #[arg(
        help="Dotted path to the field that takes the argument, e.g. \
             `viewer.packages`.",
        name="FIELD_PATH",
    )]
    field_path: String,

    #[arg(
        help="The argument's name, followed by dotted input-field names to \
             address a nested input field, e.g. `filter.author`.",
        name="ARGUMENT",
    )]
    argument: String,
}
impl ArgumentTarget {
    pub(crate) fn path(&self) -> anyhow::Result<ArgumentPath> {
        let mut segments =
            self.argument.split('.')
                .map(str::trim)
                .filter(|s| !s.is_empty());
        let Some(argument_name) = segments.next() else {
            anyhow::bail!("an argument name is required");
        };
        Ok(segments.fold(
            ArgumentPath::new(FieldPath::parse_dotted(&self.field_path), argument_name),
            |path, input_field| path.input_field(input_field),
        ))
    }
}
