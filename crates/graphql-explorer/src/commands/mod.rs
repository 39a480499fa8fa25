mod add_arg;
mod clone;
mod destroy;
mod devariablize;
mod explorer_input;
mod extract_fragment;
mod fragments;
mod new_operation;
mod print;
mod remove_arg;
mod rename;
mod select_all;
mod set_arg;
mod toggle_field;
mod toggle_spread;
mod variablize;

use crate::Cli;
use crate::CommandResult;
use add_arg::AddArgCmd;
use clone::CloneCmd;
use destroy::DestroyCmd;
use devariablize::DevariablizeCmd;
use extract_fragment::ExtractFragmentCmd;
use fragments::FragmentsCmd;
use new_operation::NewOperationCmd;
use print::PrintCmd;
use remove_arg::RemoveArgCmd;
use rename::RenameCmd;
use select_all::SelectAllCmd;
use set_arg::SetArgCmd;
use toggle_field::ToggleFieldCmd;
use toggle_spread::ToggleSpreadCmd;
use variablize::VariablizeCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-explorer")]
pub(crate) enum CommandEnum {
    /// Add an argument (or input field), populated with a default value.
    AddArg(Box<AddArgCmd>),
    /// Append a copy of a definition.
    Clone(Box<CloneCmd>),
    /// Remove a definition.
    Destroy(Box<DestroyCmd>),
    /// Replace a variable reference with the variable's default value.
    Devariablize(Box<DevariablizeCmd>),
    /// Move the selections beneath a field into a new fragment.
    ExtractFragment(Box<ExtractFragmentCmd>),
    /// List the document's fragments by the type they apply to.
    Fragments(Box<FragmentsCmd>),
    /// Append a new operation.
    NewOperation(Box<NewOperationCmd>),
    /// Print the document in canonical form.
    Print(Box<PrintCmd>),
    /// Remove an argument (or input field).
    RemoveArg(Box<RemoveArgCmd>),
    /// Rename a definition.
    Rename(Box<RenameCmd>),
    /// Select every subfield (or the default subfields) of a field.
    SelectAll(Box<SelectAllCmd>),
    /// Set the value of an argument (or input field).
    SetArg(Box<SetArgCmd>),
    /// Select a field, or deselect it if it is selected.
    ToggleField(Box<ToggleFieldCmd>),
    /// Spread a fragment, or remove the spread if it is there.
    ToggleSpread(Box<ToggleSpreadCmd>),
    /// Replace an argument's value with a new operation variable.
    Variablize(Box<VariablizeCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::AddArg(cmd) => cmd.run(cli).await,
            Self::Clone(cmd) => cmd.run(cli).await,
            Self::Destroy(cmd) => cmd.run(cli).await,
            Self::Devariablize(cmd) => cmd.run(cli).await,
            Self::ExtractFragment(cmd) => cmd.run(cli).await,
            Self::Fragments(cmd) => cmd.run(cli).await,
            Self::NewOperation(cmd) => cmd.run(cli).await,
            Self::Print(cmd) => cmd.run(cli).await,
            Self::RemoveArg(cmd) => cmd.run(cli).await,
            Self::Rename(cmd) => cmd.run(cli).await,
            Self::SelectAll(cmd) => cmd.run(cli).await,
            Self::SetArg(cmd) => cmd.run(cli).await,
            Self::ToggleField(cmd) => cmd.run(cli).await,
            Self::ToggleSpread(cmd) => cmd.run(cli).await,
            Self::Variablize(cmd) => cmd.run(cli).await,
        }
    }
}
