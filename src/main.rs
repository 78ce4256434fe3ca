use clap::Parser;
use gh_owner::{commands, display};

#[derive(Parser)]
#[command(
    name = "gh-owner",
    version,
    about = "Manage the default owner used to qualify GitHub repository names"
)]
struct Cli {
    /// Owner to set as the default (a GitHub user or organization login)
    owner: Option<String>,

    /// List the organizations you belong to
    #[arg(short = 'l', long)]
    list: bool,

    /// Pick the default owner interactively
    #[arg(short = 's', long)]
    select: bool,

    /// Clear the stored default owner
    #[arg(short = 'u', long)]
    unset: bool,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Show verbose output (rate limits, debug info)
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = commands::owner::run(
        &cli.owner,
        cli.list,
        cli.select,
        cli.unset,
        cli.json,
        cli.verbose,
    )
    .await;

    if let Err(e) = result {
        display::error(&e.to_string());
        std::process::exit(1);
    }
}
