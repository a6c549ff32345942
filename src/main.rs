use anyhow::Result;
use clap::Parser;
use petrank::cli::{log_level, Cli, Commands};
use petrank::commands::{self, GlobalOptions};

fn init_logging(verbosity: u8) {
    // RUST_LOG directives are parsed last so they override -v
    env_logger::Builder::new()
        .filter_level(log_level(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let globals = GlobalOptions {
        config: cli.config,
        data_dir: cli.data_dir,
        plain: cli.plain,
    };

    match cli.command {
        Commands::Rank { weights, output } => commands::handle_rank(&globals, &weights, &output),
        Commands::Featured { date, output } => commands::handle_featured(&globals, date, &output),
        Commands::Lookup {
            query,
            limit,
            select,
            output,
        } => commands::handle_lookup(&globals, &query, limit, select, &output),
        Commands::Insights { output } => commands::handle_insights(&globals, &output),
        Commands::Init { force } => commands::init_config(force),
    }
}
