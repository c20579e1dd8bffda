//! CLI helpers.

pub(crate) mod error;
mod logger;
mod output;

use core::fmt;
use std::ffi::OsString;

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};

pub use self::error::{error_context, LineCol};
use self::output::{Output, OutputKind};
use crate::input::IStr;

static LOGGER: logger::StderrLogger = logger::StderrLogger;

/// Input options.
#[derive(Debug, Default)]
pub struct Opts {
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON lines.
    json: bool,
    /// Positional arguments.
    args: Vec<String>,
}

impl Opts {
    /// Parse CLI options and set up logging.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        log::set_max_level(if opts.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        });

        log::set_logger(&LOGGER).map_err(|error| anyhow!("failed to set log: {error}"))?;
        Ok(opts)
    }

    /// Parse options from the given arguments.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        for arg in it.by_ref() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--verbose" => {
                    opts.verbose = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--" => {
                    break;
                }
                other if other.starts_with("--") => {
                    bail!("unsupported argument: {other}");
                }
                other => {
                    opts.args.push(other.to_owned());
                }
            }
        }

        for arg in it {
            let Ok(arg) = arg.into_string() else {
                bail!("non-utf8 argument");
            };

            opts.args.push(arg);
        }

        Ok(opts)
    }

    /// Positional arguments.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// The answer of a single solution.
#[derive(Debug, Deserialize, Serialize)]
pub struct Answer {
    pub value: String,
}

/// Run a solution over standard input and print its answer.
///
/// Errors are given the position in the input they refer to before they are
/// returned.
pub fn run<F, T>(entry: F) -> Result<()>
where
    F: FnOnce(IStr, &Opts) -> Result<T>,
    T: fmt::Display,
{
    let opts = Opts::parse()?;
    let input = crate::env::stdin()?;

    let stdout = std::io::stdout();

    let mut o = Output::new(
        stdout.lock(),
        if opts.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        },
    );

    let value = match entry(input, &opts) {
        Ok(value) => value,
        Err(error) => {
            let error = error_context(crate::env::STDIN, input, error);
            o.error(format_args!("{error:#}"))?;
            return Err(error);
        }
    };

    o.answer(&Answer {
        value: value.to_string(),
    })?;

    Ok(())
}
