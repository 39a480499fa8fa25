use crate::commands::explorer_input::ExplorerInput;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_explorer::document::OperationKind;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OperationKindArg {
    Mutation,
    Query,
    Subscription,
}
impl From<OperationKindArg> for OperationKind {
    fn from(value: OperationKindArg) -> Self {
        match value {
            OperationKindArg::Mutation => Self::Mutation,
            OperationKindArg::Query => Self::Query,
            OperationKindArg::Subscription => Self::Subscription,
        }
    }
}

#[derive(Debug, clap::Args)]
pub(crate) struct NewOperationCmd {
    #[command(flatten)]
    input: ExplorerInput,

    #[arg(
        default_value="query",
        help="The kind of operation to add.",
        name="KIND",
        value_enum,
    )]
    kind: OperationKindArg,
}

#[inherent::inherent]
impl RunnableCommand for NewOperationCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.input.run_edit("create an operation", |explorer| {
            explorer.create_operation(self.kind.into(), true)?;
            if let Some(scroll_target) = explorer.take_scroll_target() {
                log::info!("Created `{scroll_target}`.");
            }
            Ok(())
        })
    }
}
