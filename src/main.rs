use clap::Parser;
use console::style;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use includegen::cli::commands::generate::GenerateOptions;

#[derive(Parser)]
#[command(name = "includegen")]
#[command(
    version,
    about = "Generate aggregate, forward and public redirect headers for a C++ library"
)]
struct Cli {
    #[arg(long, short, help = "Project root (default: current directory)")]
    project_dir: Option<PathBuf>,

    #[arg(long, short, help = "Config file (default: <project>/includegen.toml)")]
    config: Option<PathBuf>,

    #[arg(long, help = "Print the effective configuration and exit")]
    show_config: bool,

    #[arg(long, short)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

/// Report panics as internal errors; a rerun regenerates every header
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        eprintln!(
            "{} includegen stopped unexpectedly, generated headers may be incomplete. Rerun to regenerate them.",
            style("Internal error:").red().bold()
        );
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red(), e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if cli.show_config {
        includegen::cli::commands::config::show(cli.project_dir, cli.config)?;
        return Ok(());
    }

    includegen::cli::commands::generate::run(GenerateOptions {
        project_dir: cli.project_dir,
        config: cli.config,
        quiet: cli.quiet,
    })?;

    Ok(())
}
