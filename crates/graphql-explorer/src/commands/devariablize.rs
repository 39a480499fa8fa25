use crate::commands::explorer_input::ArgumentTarget;
use crate::commands::explorer_input::DefinitionSelector;
use crate::commands::explorer_input::ExplorerInput;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct DevariablizeCmd {
    #[command(flatten)]
    input: ExplorerInput,

    #[command(flatten)]
    definition: DefinitionSelector,

    #[command(flatten)]
    target: ArgumentTarget,
}

#[inherent::inherent]
impl RunnableCommand for DevariablizeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.input.run_edit("inline the variable", |explorer| {
            let def_id = self.definition.resolve(explorer)?;
            explorer.devariablize(def_id, &self.target.path()?, true)?;
            Ok(())
        })
    }
}
