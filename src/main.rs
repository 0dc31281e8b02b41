use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use onelogin_aws_connector::cli::{self, AppAction, Cli, Commands, ServiceAction};
use onelogin_aws_connector::config;

fn main() {
    if let Err(e) = run() {
        cli::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "onelogin_aws_connector=debug"
    } else {
        "onelogin_aws_connector=info"
    };

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let path = config::resolve_config_path(cli.config)?;
    tracing::debug!(path = %path.display(), "using config file");

    match cli.command {
        Commands::Init => cli::commands::init(&path),
        Commands::List { format } => cli::commands::list(&path, format),
        Commands::Show { kind, name, format } => cli::commands::show(&path, kind, &name, format),
        Commands::Service {
            action: ServiceAction::Set { name, fields },
        } => cli::commands::service_set(&path, &name, fields),
        Commands::App {
            action: AppAction::Set { name, fields },
        } => cli::commands::app_set(&path, &name, fields),
        Commands::Render => cli::commands::render(&path),
    }
}
