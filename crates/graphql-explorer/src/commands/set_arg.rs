use crate::commands::explorer_input::ArgumentTarget;
use crate::commands::explorer_input::DefinitionSelector;
use crate::commands::explorer_input::ExplorerInput;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_explorer::document::parse_value_literal;
use libgraphql_explorer::edit::ArgumentValueInput;

#[derive(Debug, clap::Args)]
pub(crate) struct SetArgCmd {
    #[command(flatten)]
    input: ExplorerInput,

    #[command(flatten)]
    definition: DefinitionSelector,

    #[command(flatten)]
    target: ArgumentTarget,

    #[arg(
        conflicts_with_all=["literal", "raw", "variable"],
        help="Set the value to `null`.",
        long,
    )]
    clear: bool,

    #[arg(
        conflicts_with_all=["raw", "variable"],
        help="A GraphQL value literal to use as-is, e.g. `{author: \"me\"}`.",
        long,
    )]
    literal: Option<String>,

    #[arg(
        help="Text to coerce to the argument's type, the way a user typing \
             into an input box would.",
        value_name="VALUE",
    )]
    raw: Option<String>,

    #[arg(
        conflicts_with="raw",
        help="Name of an operation variable to reference.",
        long,
    )]
    variable: Option<String>,
}
impl SetArgCmd {
    fn new_value(&self) -> anyhow::Result<ArgumentValueInput> {
        if self.clear {
            return Ok(ArgumentValueInput::Clear);
        }
        if let Some(text) = &self.literal {
            return Ok(ArgumentValueInput::Literal(parse_value_literal(text)?));
        }
        if let Some(var_name) = &self.variable {
            return Ok(ArgumentValueInput::Variable(
                var_name.trim_start_matches('$').to_string(),
            ));
        }
        match &self.raw {
            Some(text) => Ok(ArgumentValueInput::Raw(text.clone())),
            None => anyhow::bail!("no new value was given"),
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for SetArgCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.input.run_edit("set the argument", |explorer| {
            let def_id = self.definition.resolve(explorer)?;
            explorer.set_argument_value(def_id, &self.target.path()?, self.new_value()?, true)?;
            Ok(())
        })
    }
}
