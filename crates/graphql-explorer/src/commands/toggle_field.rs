use crate::commands::explorer_input::DefinitionSelector;
use crate::commands::explorer_input::ExplorerInput;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_explorer::document::FieldPath;

#[derive(Debug, clap::Args)]
pub(crate) struct ToggleFieldCmd {
    #[command(flatten)]
    input: ExplorerInput,

    #[command(flatten)]
    definition: DefinitionSelector,

    #[arg(
        help="Dotted path to the field, e.g. `viewer.packages.name`.",
        name="FIELD_PATH",
    )]
    field_path: String,
}

#[inherent::inherent]
impl RunnableCommand for ToggleFieldCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let field_path = FieldPath::parse_dotted(&self.field_path);
        self.input.run_edit("toggle the field", |explorer| {
            let def_id = self.definition.resolve(explorer)?;
            explorer.toggle_field(def_id, &field_path, true)?;
            Ok(())
        })
    }
}
