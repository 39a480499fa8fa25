use crate::commands::explorer_input::DefinitionSelector;
use crate::commands::explorer_input::ExplorerInput;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct CloneCmd {
    #[command(flatten)]
    input: ExplorerInput,

    #[command(flatten)]
    definition: DefinitionSelector,
}

#[inherent::inherent]
impl RunnableCommand for CloneCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.input.run_edit("clone the definition", |explorer| {
            let def_id = self.definition.resolve(explorer)?;
            explorer.clone_definition(def_id, true)?;
            if let Some(scroll_target) = explorer.take_scroll_target() {
                log::info!("Created `{scroll_target}`.");
            }
            Ok(())
        })
    }
}
