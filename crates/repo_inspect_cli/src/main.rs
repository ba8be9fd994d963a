use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use repo_inspect_cli::commands::inspect_cmd::{execute, InspectArgs};
use repo_inspect_cli::logging::{log_directive, LOG_ENV_VAR};

/// repo-inspect: Report the governance configuration of a GitHub repository
#[derive(Parser)]
#[command(name = "repo-inspect")]
#[command(
    about = "Report the rulesets, access, security and issue settings of a GitHub repository",
    long_about = None,
    version
)]
struct Cli {
    #[command(flatten)]
    args: InspectArgs,
}

fn init_logging(verbose: bool) {
    let env_directive = std::env::var(LOG_ENV_VAR).ok();
    let directive = log_directive(verbose, env_directive.as_deref());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.args.verbose);

    if let Err(e) = execute(&cli.args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
