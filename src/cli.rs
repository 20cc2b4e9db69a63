// src/cli.rs
use std::env;

use anyhow::{Context, Result, bail};

use crate::config::options::Options;
use crate::specs::schedule::NICAR_2015;
use crate::{export, runner};

pub fn run() -> Result<()> {
    let opts = parse_args(env::args().skip(1))?;
    let sessions = runner::collect_sessions(&opts.url, &NICAR_2015)?;
    let stdout = std::io::stdout();
    export::write_sessions(stdout.lock(), &sessions, &opts.format)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options> {
    let mut opts = Options::default();
    while let Some(a) = args.next() {
        match a.as_str() {
            // Kept as a raw string; anything other than json/csv is
            // rejected at print time.
            "--format" => {
                opts.format = args.next().context("Missing value for --format")?;
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => bail!("Unknown arg: {a}"),
        }
    }
    Ok(opts)
}
