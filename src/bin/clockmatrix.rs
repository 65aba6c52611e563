//! Lookup table generator for a wall of 720 LED-lit clocks
//!
//! Computes where every grid cell sits in the serpentine chain of tile
//! modules and writes the tables the firmware needs.

use anyhow::{Context, Result};
use clockmatrix::layout::{ClockLayout, ClockTime};
use clockmatrix::reporters::{ConsoleTableReporter, SilentTableReporter, TableReporter};
use clockmatrix::tiling::{self, TileSnakeIndexer};
use clockmatrix::{generate, GenerationConfig, GridIndex, GridSpec};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = clockmatrix::parse_args();

    match matches.subcommand() {
        Some(("lookup", sub_matches)) => handle_lookup(sub_matches),
        Some(("table", sub_matches)) => handle_table(sub_matches),
        Some(("check", sub_matches)) => handle_check(sub_matches),
        Some(("header", sub_matches)) => handle_header(sub_matches),
        Some(("index", sub_matches)) => handle_index(sub_matches),
        Some((cmd, _)) => {
            eprintln!("Unknown command: {}", cmd);
            std::process::exit(1);
        }
        None => {
            eprintln!("Error: No command specified");
            eprintln!("\nUse 'clockmatrix --help' for usage information");
            std::process::exit(1);
        }
    }
}

fn grid_spec(matches: &clap::ArgMatches) -> Result<GridSpec> {
    GridSpec::from_args(matches).context("Invalid grid")
}

fn reporter(matches: &clap::ArgMatches) -> Box<dyn TableReporter> {
    if matches.get_flag("quiet") {
        Box::new(SilentTableReporter::new())
    } else {
        Box::new(ConsoleTableReporter::new())
    }
}

fn handle_lookup(matches: &clap::ArgMatches) -> Result<()> {
    let spec = grid_spec(matches)?;
    let indexer = TileSnakeIndexer::new(spec);

    let index = match matches.get_one::<String>("time") {
        Some(time) => {
            let time: ClockTime = time.parse()?;
            let layout = ClockLayout::new(spec)?;
            layout.grid_index_of(time)
        }
        None => {
            let n = *matches
                .get_one::<usize>("index")
                .context("Grid index is required")?;
            GridIndex::new(n)
        }
    };

    let chain = indexer
        .chain_index(index)
        .with_context(|| format!("Failed to look up grid index {}", index))?;
    println!("{}", chain);
    Ok(())
}

fn handle_table(matches: &clap::ArgMatches) -> Result<()> {
    let spec = grid_spec(matches)?;
    let config = GenerationConfig::from_args(matches);

    let table = tiling::build_lookup_table_with_config(&spec, &config)?;
    let table = if matches.get_flag("inverse") {
        tiling::invert_lookup_table(&table)?
    } else {
        table
    };

    for value in table {
        println!("{}", value);
    }
    Ok(())
}

fn handle_check(matches: &clap::ArgMatches) -> Result<()> {
    let spec = grid_spec(matches)?;
    let config = GenerationConfig::from_args(matches);
    let reporter = reporter(matches);

    generate::build_and_check(&spec, &config, reporter.as_ref())
        .context("Chain order check failed")?;
    Ok(())
}

fn handle_header(matches: &clap::ArgMatches) -> Result<()> {
    let spec = grid_spec(matches)?;
    let config = GenerationConfig::from_args(matches);
    let reporter = reporter(matches);
    let output = output_path(matches)?;

    generate::generate_header(&output, &spec, &config, reporter.as_ref())
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}

fn handle_index(matches: &clap::ArgMatches) -> Result<()> {
    let spec = grid_spec(matches)?;
    let reporter = reporter(matches);
    let output = output_path(matches)?;

    generate::generate_index(&output, &spec, reporter.as_ref())
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}

fn output_path(matches: &clap::ArgMatches) -> Result<PathBuf> {
    let output = matches
        .get_one::<String>("output")
        .context("Output file is required")?;
    let path = PathBuf::from(output);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        anyhow::ensure!(
            parent.exists(),
            "Output directory does not exist: {}",
            parent.display()
        );
    }
    Ok(path)
}
