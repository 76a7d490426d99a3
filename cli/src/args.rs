use clap::{arg, Arg, Command};

fn range_args() -> Arg {
    Arg::new("ranges")
        .value_name("RANGE")
        .num_args(1..)
        .required(true)
        .help(
            "Ranges like 1..4, 2.5..9.75 or \
             2024-01-01T00:00:00Z..2024-02-01T00:00:00Z",
        )
}

pub(crate) fn build_cli() -> Command {
    Command::new("rangesum")
        .version("0.1")
        .about("Merge, invert and subtract one-dimensional scalar ranges")
        .subcommand_required(true)
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .arg(arg!(--json "Print results as a JSON array").global(true))
        .subcommand(
            Command::new("sum")
                .about("Merge ranges into a minimal disjoint set")
                .arg(range_args()),
        )
        .subcommand(
            Command::new("inverse")
                .about("Show the gaps between the merged ranges")
                .arg(range_args()),
        )
        .subcommand(
            Command::new("subtract")
                .about("Remove the second range from the first")
                .arg(
                    Arg::new("range")
                        .value_name("RANGE")
                        .required(true)
                        .help("The range to subtract from"),
                )
                .arg(
                    Arg::new("diff")
                        .value_name("RANGE")
                        .required(true)
                        .help("The range to remove"),
                ),
        )
}
