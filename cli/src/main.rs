mod args;

use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use itertools::Itertools;
use log::debug;
use rangesum_lib::{inverse, sum, Range, Scalar};

/// Parse one "START..END" argument into a range.
fn parse_range(text: &str) -> Result<Range> {
    let (start, end) = text
        .split_once("..")
        .with_context(|| format!("expected START..END, got {:?}", text))?;
    let start = start
        .parse::<Scalar>()
        .with_context(|| format!("in range {:?}", text))?;
    let end = end
        .parse::<Scalar>()
        .with_context(|| format!("in range {:?}", text))?;
    Range::new(start, end).with_context(|| format!("in range {:?}", text))
}

fn parse_ranges(matches: &ArgMatches) -> Result<Vec<Range>> {
    matches
        .get_many::<String>("ranges")
        .into_iter()
        .flatten()
        .map(|text| parse_range(text))
        .collect()
}

fn show(ranges: &[Range], as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string(ranges)?);
    } else if !ranges.is_empty() {
        println!("{}", ranges.iter().join("\n"));
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let matches = args::build_cli().get_matches();
    let as_json = matches.get_flag("json");
    match matches.subcommand() {
        Some(("sum", sub)) => {
            let ranges = parse_ranges(sub)?;
            debug!("summing {} ranges", ranges.len());
            show(&sum(&ranges), as_json)
        }
        Some(("inverse", sub)) => {
            let ranges = parse_ranges(sub)?;
            show(&inverse(&ranges), as_json)
        }
        Some(("subtract", sub)) => {
            let range = parse_range(
                sub.get_one::<String>("range").context("missing range")?,
            )?;
            let diff = parse_range(
                sub.get_one::<String>("diff").context("missing diff")?,
            )?;
            show(&range.subtract(&diff), as_json)
        }
        Some((other, _)) => bail!("unknown command {}", other),
        None => bail!("a command is required"),
    }
}
