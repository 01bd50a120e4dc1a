use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use gs_grid::{BitGrid, parse_grid};
use gs_shapes::{Connectivity, CountConfig, count_shapes, shape_sizes};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "gs_cli")]
#[command(about = "Count connected shapes in binary grid text files")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(name = "count")]
    Count(CountArgs),
    #[command(name = "sizes")]
    Sizes(SizesArgs),
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    #[arg(long, required = true)]
    input: PathBuf,
    #[arg(long, value_enum, default_value_t = ConnectivityArg::C4)]
    connectivity: ConnectivityArg,
    /// Do not count shapes consisting of a single cell.
    #[arg(long, default_value_t = false)]
    skip_singletons: bool,
    /// Print a JSON envelope instead of plain output.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct CountArgs {
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
struct SizesArgs {
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ConnectivityArg {
    C4,
    C8,
}

impl From<ConnectivityArg> for Connectivity {
    fn from(arg: ConnectivityArg) -> Self {
        match arg {
            ConnectivityArg::C4 => Connectivity::C4,
            ConnectivityArg::C8 => Connectivity::C8,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct CountDto {
    input: String,
    width: usize,
    height: usize,
    connectivity: &'static str,
    include_singletons: bool,
    shapes: usize,
}

#[derive(Debug, Clone, Serialize)]
struct SizesDto {
    input: String,
    width: usize,
    height: usize,
    connectivity: &'static str,
    include_singletons: bool,
    shapes: usize,
    sizes: Vec<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Count(args) => run_count(&args.common),
        Command::Sizes(args) => run_sizes(&args.common),
    }
}

fn run_count(common: &CommonArgs) -> Result<()> {
    let grid = load_grid(common)?;
    let cfg = config_from(common);
    let shapes = count_shapes(&grid, &cfg);

    if common.json {
        print_json(&CountDto {
            input: common.input.display().to_string(),
            width: grid.width(),
            height: grid.height(),
            connectivity: connectivity_name(cfg.connectivity),
            include_singletons: cfg.include_singletons,
            shapes,
        })?;
    } else {
        println!("{shapes}");
    }

    Ok(())
}

fn run_sizes(common: &CommonArgs) -> Result<()> {
    let grid = load_grid(common)?;
    let cfg = config_from(common);
    let sizes = shape_sizes(&grid, &cfg);

    if common.json {
        print_json(&SizesDto {
            input: common.input.display().to_string(),
            width: grid.width(),
            height: grid.height(),
            connectivity: connectivity_name(cfg.connectivity),
            include_singletons: cfg.include_singletons,
            shapes: sizes.len(),
            sizes,
        })?;
    } else {
        for size in &sizes {
            println!("{size}");
        }
    }

    Ok(())
}

fn config_from(common: &CommonArgs) -> CountConfig {
    CountConfig {
        connectivity: common.connectivity.into(),
        include_singletons: !common.skip_singletons,
    }
}

fn load_grid(common: &CommonArgs) -> Result<BitGrid> {
    ensure_file_exists(&common.input, "input")?;

    let text = fs::read_to_string(&common.input)
        .with_context(|| format!("reading input {}", common.input.display()))?;

    let grid = parse_grid(&text)
        .with_context(|| format!("parsing grid {}", common.input.display()))?;
    Ok(grid)
}

fn connectivity_name(connectivity: Connectivity) -> &'static str {
    match connectivity {
        Connectivity::C4 => "C4",
        Connectivity::C8 => "C8",
    }
}

fn print_json(value: &impl Serialize) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serializing json")?;
    println!("{text}");
    Ok(())
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} file does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} path is not a file: {}", what, path.display());
    }
    Ok(())
}
