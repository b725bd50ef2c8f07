use clap::Parser;
use std::path::PathBuf;

use installer_bootstrap::{Bootstrap, ConsoleNotifier, Payload, RuntimeSearch};

const PAYLOAD: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/installer-payload.bin"));

/// Native wrapper that finds the launcher-bundled Java runtime and runs
/// the embedded installer with it.
#[derive(Parser)]
struct Args {
    /// Optional launcher installation directory (skips the host lookup).
    #[arg(short, long)]
    install_dir: Option<PathBuf>,

    /// Report errors on stderr instead of dialogs.
    #[arg(long)]
    console: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let mut search = RuntimeSearch::from_host();
    if let Some(dir) = args.install_dir {
        if !dir.is_dir() {
            anyhow::bail!("install directory does not exist: {}", dir.display());
        }
        search.install_dir = Some(dir);
    }

    let mut bootstrap = Bootstrap::new(Payload::new(PAYLOAD)).search(search);
    if args.console {
        bootstrap = bootstrap.notifier(Box::new(ConsoleNotifier));
    }

    std::process::exit(bootstrap.run())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
