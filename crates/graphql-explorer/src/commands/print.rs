use crate::commands::explorer_input::ExplorerInput;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[command(flatten)]
    input: ExplorerInput,
}

#[inherent::inherent]
impl RunnableCommand for PrintCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.input.run_edit("print the document", |explorer| {
            let doc = explorer.document();
            explorer.commit_document(&doc)?;
            Ok(())
        })
    }
}
