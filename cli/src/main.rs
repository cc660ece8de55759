//! fuzzy-couscous - initialize a Django project from the fuzzy-couscous template

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fuzzy_couscous::cli::Cli;
use fuzzy_couscous::output::json;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json_mode = cli.json;
    if let Err(e) = cli.run().await {
        if json_mode {
            if let Ok(doc) = json::format_error(&format!("{e:#}")) {
                println!("{doc}");
            }
        }
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; stdout is reserved for command output.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(console::Term::stderr().is_term())
        .with_target(false)
        .init();
}
