use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use sacman::config::Config;
use sacman::reference;
use sacman::runner::Runner;

/// sacman - translate pacman-style commands into systemctl invocations
#[derive(Parser, Debug)]
#[command(
    name = "sacman",
    about = "A pacman-style command syntax front end for systemctl",
    disable_version_flag = true,
    override_usage = "sacman [-<operation><modifiers>] [--option ...] [target ...]",
    after_help = reference::render_text()
)]
struct Args {
    /// Raw sacman tokens, handed to the translation engine untouched
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "TOKEN")]
    tokens: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Diagnostics go to stderr so they never mix with the generated
    // command surface on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // `-h` anywhere prints the reference tables; `--version` is not
    // intercepted and passes through to the target like any other
    // double-dash token
    if args.tokens.is_empty()
        || args.tokens.iter().any(|token| token == "-h" || token == "--help")
    {
        Args::command()
            .print_help()
            .context("Failed to print help")?;
        return Ok(());
    }

    let config = Config::load_default().context("Failed to load configuration")?;
    let runner = Runner::new(&config);
    std::process::exit(runner.run(&args.tokens));
}
