use crate::args::{Cli, Commands, ConfigCommand};
use crate::handlers::{self, HandlerContext};
use crate::logging::{self, LogTarget};
use anyhow::Result;
use rolodex_runtime::{resolve_workspace_path, Config};

pub fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Browse);
    let interactive = matches!(command, Commands::Browse);
    logging::init(cli.log_level, LogTarget::resolve(cli.log_file, interactive))?;

    let workspace = resolve_workspace_path(cli.data_dir.as_deref())?;
    let config_path = Config::path_in(&workspace);
    let config = Config::load_from(&config_path)?;
    tracing::debug!(path = %config_path.display(), "configuration loaded");

    let ctx = HandlerContext::new(config, cli.source_file, cli.format);

    match command {
        Commands::Browse => handlers::browse::handle(&ctx),
        Commands::List { query } => handlers::list::handle(&ctx, query.as_deref()),
        Commands::Show { index, query } => handlers::show::handle(&ctx, index, query.as_deref()),
        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::handle(&ctx, &config_path),
        },
    }
}
