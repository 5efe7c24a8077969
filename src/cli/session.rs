//! Session CLI commands

use clap::Subcommand;

use super::CliContext;
use crate::error::LedgerResult;

/// Session subcommands
#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Show what the current session holds
    Show,
    /// Discard every recorded transaction and journal entry
    Reset {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle session commands
pub fn handle_session_command(ctx: &CliContext, cmd: SessionCommands) -> LedgerResult<()> {
    match cmd {
        SessionCommands::Show => {
            let ledger = ctx.storage.load_ledger()?;

            println!("Session file: {}", ctx.storage.session.path().display());
            println!("Transactions:  {}", ledger.transaction_count());
            println!("Journal lines: {}", ledger.journal_line_count());
        }
        SessionCommands::Reset { force } => {
            if !force {
                println!("This will discard the current session.");
                println!("Use --force to confirm.");
                return Ok(());
            }

            if ctx.storage.session.reset()? {
                println!("Session reset.");
            } else {
                println!("No session to reset.");
            }
        }
    }

    Ok(())
}
