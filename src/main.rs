use anyhow::Result;
use clap::{Parser, Subcommand};

use ledger_statement::cli::{
    handle_category_command, handle_export_command, handle_import_command, handle_journal_command,
    handle_report_command, handle_session_command, handle_transaction_command, CliContext,
};
use ledger_statement::config::paths::LedgerPaths;
use ledger_statement::logging;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Transaction ledger with income statement reporting",
    long_about = "ledger-statement records categorized transactions and double-entry \
                  journal entries, then derives an income statement with gross, \
                  operating and net profit margins from what was recorded."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(ledger_statement::cli::TransactionCommands),

    /// General journal commands
    #[command(subcommand)]
    Journal(ledger_statement::cli::JournalCommands),

    /// Report generation commands
    #[command(subcommand)]
    Report(ledger_statement::cli::ReportCommands),

    /// Category taxonomy commands
    #[command(subcommand)]
    Category(ledger_statement::cli::CategoryCommands),

    /// Export data to CSV, JSON or YAML
    #[command(subcommand)]
    Export(ledger_statement::cli::ExportCommands),

    /// Import previously exported data
    #[command(subcommand)]
    Import(ledger_statement::cli::ImportCommands),

    /// Session management commands
    #[command(subcommand)]
    Session(ledger_statement::cli::SessionCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();

    // Initialize paths, settings and storage
    let paths = LedgerPaths::new()?;
    let ctx = CliContext::load(paths)?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&ctx, cmd)?,
        Some(Commands::Journal(cmd)) => handle_journal_command(&ctx, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&ctx, cmd)?,
        Some(Commands::Category(cmd)) => handle_category_command(&ctx, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&ctx, cmd)?,
        Some(Commands::Import(cmd)) => handle_import_command(&ctx, cmd)?,
        Some(Commands::Session(cmd)) => handle_session_command(&ctx, cmd)?,
        Some(Commands::Config) => {
            let paths = ctx.storage.paths();
            println!("ledger-statement Configuration");
            println!("==============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Session file:     {}", paths.session_file().display());
            println!("Taxonomy file:    {}", paths.taxonomy_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", ctx.settings.currency_symbol);
            println!("  Date format:     {}", ctx.settings.date_format);
            println!("  Taxonomy scheme: {:?}", ctx.settings.taxonomy);
            println!("  Categories:      {}", ctx.taxonomy.len());
        }
        None => {
            println!("ledger-statement - transaction ledger and income statement");
            println!();
            println!("Run 'ledger --help' for usage information.");
        }
    }

    Ok(())
}
