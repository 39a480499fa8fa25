use crate::commands::explorer_input::DefinitionSelector;
use crate::commands::explorer_input::ExplorerInput;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct RenameCmd {
    #[command(flatten)]
    input: ExplorerInput,

    #[command(flatten)]
    definition: DefinitionSelector,

    #[arg(
        help="The new name. An empty name leaves an operation unnamed.",
        name="NEW_NAME",
    )]
    new_name: String,
}

#[inherent::inherent]
impl RunnableCommand for RenameCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.input.run_edit("rename the definition", |explorer| {
            let def_id = self.definition.resolve(explorer)?;
            explorer.rename_definition(def_id, self.new_name.trim(), true)?;
            Ok(())
        })
    }
}
