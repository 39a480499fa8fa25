use crate::commands::explorer_input::DefinitionSelector;
use crate::commands::explorer_input::ExplorerInput;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_explorer::document::FieldPath;

#[derive(Debug, clap::Args)]
pub(crate) struct ExtractFragmentCmd {
    #[command(flatten)]
    input: ExplorerInput,

    #[command(flatten)]
    definition: DefinitionSelector,

    #[arg(
        help="Dotted path to the field whose selections move into the new \
             fragment.",
        name="FIELD_PATH",
    )]
    field_path: String,
}

#[inherent::inherent]
impl RunnableCommand for ExtractFragmentCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let field_path = FieldPath::parse_dotted(&self.field_path);
        self.input.run_edit("extract a fragment", |explorer| {
            let def_id = self.definition.resolve(explorer)?;
            explorer.extract_fragment(def_id, &field_path, true)?;
            Ok(())
        })
    }
}
