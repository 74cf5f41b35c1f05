use clap::Parser;
use dlsync::{
    settings::{DesiredList, Settings},
    sync, Result,
};
use std::{path::PathBuf, process};
use tracing_subscriber::EnvFilter;

const LONG_ABOUT: &str = "\
Maintains a Zimbra distribution list using admin SOAP calls. It needs a
config file and a distribution list file, both in JSON format.

The configuration file must at least have the following structure:

  {
    \"url\": \"https://<YOUR SERVER>:7071/service/admin/soap\",
    \"user\": \"admin@<YOUR DOMAIN>\",
    \"password\": \"<YOUR SECRET>\"
  }

The distribution list file must at least be:

  {
    \"name\": \"soap@<YOUR DOMAIN>\",
    \"id\": \"50cbb237-1342-427c-bc7e-f1f3533ce147\",
    \"members\": [
      \"member1@<YOUR DOMAIN>\",
      \"member2@<YOUR DOMAIN>\"
    ]
  }";

#[derive(Debug, Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(name = env!("CARGO_BIN_NAME"))]
#[command(about = "Reconcile a distribution list against a desired-state file")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    /// Configuration file in json format
    #[arg(short = 'c', long = "config")]
    config: PathBuf,

    /// Distribution file in json format
    #[arg(short = 'd', long = "distribution")]
    distribution: PathBuf,

    /// Turns verbose output on
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("error: {e:?}");
        process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> Result {
    let settings = Settings::new(&cli.config)?;
    let desired = DesiredList::new(&cli.distribution)?;
    sync::run(&settings, &desired, cli.verbose).await
}
