use clap::{value_parser, Arg, ArgAction, Command};

use crate::export::{DEFAULT_HEADER_FILE, DEFAULT_INDEX_FILE};

/// Command-line interface of the `clockmatrix` binary
pub fn build_cli() -> Command {
    Command::new("clockmatrix")
        .version(env!("CARGO_PKG_VERSION"))
        .about("LED matrix lookup tables for a wall of 720 clocks")
        .arg_required_else_help(true)
        .arg(
            Arg::new("rows")
                .long("rows")
                .help("Grid rows")
                .value_name("N")
                .global(true)
                .value_parser(value_parser!(usize))
                .default_value("24"),
        )
        .arg(
            Arg::new("cols")
                .long("cols")
                .help("Grid columns")
                .value_name("N")
                .global(true)
                .value_parser(value_parser!(usize))
                .default_value("30"),
        )
        .arg(
            Arg::new("tile_side")
                .long("tile-side")
                .help("Side length of the square tile modules")
                .value_name("N")
                .global(true)
                .value_parser(value_parser!(usize))
                .default_value("3"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Quiet mode - minimal output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .help("Number of CPU threads for computation (0 = auto-detect)")
                .value_name("N")
                .global(true)
                .value_parser(value_parser!(usize))
                .default_value("0"),
        )
        .arg(
            Arg::new("no-parallel")
                .long("no-parallel")
                .help("Disable all parallel processing")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("lookup")
                .visible_alias("l")
                .about("Print the chain position of one grid cell")
                .arg(
                    Arg::new("index")
                        .help("Row-major grid index")
                        .value_parser(value_parser!(usize))
                        .required_unless_present("time")
                        .conflicts_with("time")
                        .index(1),
                )
                .arg(
                    Arg::new("time")
                        .long("time")
                        .help("Clock time (h:mm) whose cell to look up")
                        .value_name("H:MM"),
                ),
        )
        .subcommand(
            Command::new("table")
                .about("Print the grid-to-chain lookup table, one entry per line")
                .arg(
                    Arg::new("inverse")
                        .long("inverse")
                        .help("Print the chain-to-grid table instead")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Verify that the chain visits every LED exactly once"),
        )
        .subcommand(
            Command::new("header")
                .about("Write the ledMap/matrixMap C header")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Output file")
                        .value_name("FILE")
                        .default_value(DEFAULT_HEADER_FILE),
                ),
        )
        .subcommand(
            Command::new("index")
                .about("Write the human-readable clock index")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Output file")
                        .value_name("FILE")
                        .default_value(DEFAULT_INDEX_FILE),
                ),
        )
}

pub fn parse_args() -> clap::ArgMatches {
    build_cli().get_matches()
}
