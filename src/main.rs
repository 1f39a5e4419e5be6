use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use recipe_codegen::{emit, generate, CodegenConfig};

#[derive(Parser)]
#[command(name = "recipe-codegen")]
#[command(about = "Compile crafting recipes into a static Rust table")]
struct Cli {
    /// Directory holding items.toml and recipes.toml
    #[arg(short, long, default_value = "data")]
    data: PathBuf,

    /// Optional codegen.toml overriding tick rate, sets and import paths
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Generated source file, e.g. the game's src/crafting/data.rs
    #[arg(short, long, required_unless_present = "stdout")]
    out: Option<PathBuf>,

    /// Fail if the generated file is stale instead of rewriting it
    #[arg(long, conflicts_with = "stdout")]
    check: bool,

    /// Print the generated source instead of writing it
    #[arg(long)]
    stdout: bool,
}

fn run(cli: &Cli) -> Result<bool> {
    let config =
        CodegenConfig::load(cli.config.as_deref()).context("Failed to load codegen config")?;

    let source = generate(&cli.data, &config)
        .with_context(|| format!("Failed to compile recipes from {:?}", cli.data))?;

    if cli.stdout {
        print!("{}", source);
        return Ok(true);
    }

    let out = cli.out.as_ref().context("--out is required unless --stdout is given")?;

    if cli.check {
        let fresh = emit::is_up_to_date(out, &source)?;
        if fresh {
            info!("{:?} is up to date", out);
        } else {
            error!("{:?} is stale, run recipe-codegen to regenerate it", out);
        }
        return Ok(fresh);
    }

    emit::write_atomic(out, &source).with_context(|| format!("Failed to write {:?}", out))?;
    Ok(true)
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("recipe_codegen=info".parse().expect("valid directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
