use crate::commands::explorer_input::DefinitionSelector;
use crate::commands::explorer_input::ExplorerInput;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct DestroyCmd {
    #[command(flatten)]
    input: ExplorerInput,

    #[command(flatten)]
    definition: DefinitionSelector,
}

#[inherent::inherent]
impl RunnableCommand for DestroyCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.input.run_edit("destroy the definition", |explorer| {
            let def_id = self.definition.resolve(explorer)?;
            explorer.destroy_definition(def_id, true)?;
            Ok(())
        })
    }
}
