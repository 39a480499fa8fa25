use crate::commands::explorer_input::DefinitionSelector;
use crate::commands::explorer_input::ExplorerInput;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_explorer::document::FieldPath;

#[derive(Debug, clap::Args)]
pub(crate) struct SelectAllCmd {
    #[command(flatten)]
    input: ExplorerInput,

    #[command(flatten)]
    definition: DefinitionSelector,

    #[arg(
        help="Only add a few identifying subfields (e.g. `id` and `name`) \
             to the existing selection of the field.",
        long,
    )]
    defaults: bool,

    #[arg(
        help="Dotted path to the field, e.g. `viewer.packages`.",
        name="FIELD_PATH",
    )]
    field_path: String,
}

#[inherent::inherent]
impl RunnableCommand for SelectAllCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let field_path = FieldPath::parse_dotted(&self.field_path);
        self.input.run_edit("select subfields", |explorer| {
            let def_id = self.definition.resolve(explorer)?;
            if self.defaults {
                explorer.select_default_subfields(def_id, &field_path, true)?;
            } else {
                explorer.select_all_subfields(def_id, &field_path, true)?;
            }
            Ok(())
        })
    }
}
