use crate::commands::explorer_input::DefinitionSelector;
use crate::commands::explorer_input::ExplorerInput;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_explorer::document::FieldPath;

#[derive(Debug, clap::Args)]
pub(crate) struct ToggleSpreadCmd {
    #[command(flatten)]
    input: ExplorerInput,

    #[command(flatten)]
    definition: DefinitionSelector,

    #[arg(
        help="Dotted path to the field whose selection set gets the spread. \
             The definition's root selection set is used when omitted.",
        long,
        short='p',
    )]
    path: Option<String>,

    #[arg(help="Name of the fragment to spread.", name="FRAGMENT_NAME")]
    fragment_name: String,
}

#[inherent::inherent]
impl RunnableCommand for ToggleSpreadCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let path =
            self.path.as_deref()
                .map(FieldPath::parse_dotted)
                .unwrap_or_default();
        self.input.run_edit("toggle the fragment spread", |explorer| {
            let def_id = self.definition.resolve(explorer)?;
            explorer.toggle_fragment_spread(def_id, &path, &self.fragment_name, true)?;
            Ok(())
        })
    }
}
