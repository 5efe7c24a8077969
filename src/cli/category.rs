//! Category CLI commands
//!
//! Shows the category taxonomy entries are recorded against.

use clap::Subcommand;

use super::CliContext;
use crate::display::format_taxonomy;
use crate::error::LedgerResult;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List all categories (grouped by kind)
    List,
}

/// Handle category commands
pub fn handle_category_command(ctx: &CliContext, cmd: CategoryCommands) -> LedgerResult<()> {
    match cmd {
        CategoryCommands::List => {
            print!("{}", format_taxonomy(&ctx.taxonomy));
        }
    }

    Ok(())
}
