use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use vectorkit::{init_logging, load_config, read_shapes, run, Command, BUILD_DATE, VERSION};

#[derive(Parser)]
#[command(name = "vectorkit")]
#[command(about = "Run geometry kernel operations over JSON shape documents")]
struct Cli {
    /// Kernel configuration file (.json or .toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON array of shapes; stdin when omitted
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    info!(version = VERSION, build_date = BUILD_DATE, "vectorkit");

    let config = load_config(cli.config.as_deref())?;
    let shapes = read_shapes(cli.input.as_deref())?;
    let result = run(&cli.command, &shapes, &config).await?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
