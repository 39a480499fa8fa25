use crate::commands::explorer_input::ExplorerInput;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct FragmentsCmd {
    #[command(flatten)]
    input: ExplorerInput,
}

#[inherent::inherent]
impl RunnableCommand for FragmentsCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut listing = String::new();
        let result = self.input.run_edit("list fragments", |explorer| {
            let registry = explorer.fragment_registry();
            let mut type_names: Vec<&str> = registry.type_names().collect();
            type_names.sort();
            for type_name in type_names {
                let names: Vec<&str> =
                    registry.fragments_for_type(type_name)
                        .iter()
                        .map(|(_, frag)| frag.name.as_str())
                        .collect();
                listing.push_str(&format!("  * {type_name}: {}\n", names.join(", ")));
            }
            Ok(())
        });

        if result.stderr.is_some() {
            return result;
        }
        if listing.is_empty() {
            return CommandResult::stdout(format_args!(
                "{} The document defines no fragments.",
                output_utils::GREEN_CHECK,
            ));
        }
        CommandResult::stdout(format_args!(
            "{} Fragments by type:\n{}",
            output_utils::GREEN_CHECK,
            listing.trim_end(),
        ))
    }
}
