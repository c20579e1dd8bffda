use core::fmt;
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use lib::cli::Answer;
use serde::{de::IntoDeserializer, Deserialize};
use thiserror::Error;

/// Default directory to look for inputs in.
const DEFAULT_INPUTS: &str = "years/2023/inputs";

#[derive(Debug, Error)]
enum Error {
    #[error("non-utf8 argument")]
    NonUtf8,
    #[error("unsupported argument: {0}")]
    Unsupported(String),
    #[error("missing argument to `{0}`")]
    MissingArgument(&'static str),
    #[error("missing stdout of `{0}`")]
    MissingStdout(String),
}

#[derive(Debug, Deserialize)]
struct Target {
    name: String,
    kind: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Artifact {
    target: Target,
    executable: Option<PathBuf>,
}

struct Executable {
    name: String,
    path: PathBuf,
}

struct Opts {
    quiet: bool,
    verbose: bool,
    inputs: PathBuf,
    args: Vec<OsString>,
}

impl Opts {
    /// Parse CLI options.
    fn parse() -> Result<Self, Error> {
        Self::parse_from(std::env::args_os().skip(1))
    }

    /// Parse options from the given arguments, not including the program
    /// name.
    fn parse_from<I>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self {
            quiet: false,
            verbose: false,
            inputs: PathBuf::from(DEFAULT_INPUTS),
            args: Vec::new(),
        };

        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                return Err(Error::NonUtf8);
            };

            match arg {
                "-q" | "--quiet" => {
                    opts.quiet = true;
                }
                "-V" | "--verbose" => {
                    opts.verbose = true;
                }
                "--inputs" => {
                    let inputs = it.next().ok_or(Error::MissingArgument("--inputs"))?;
                    opts.inputs = PathBuf::from(inputs);
                }
                "--" => {
                    break;
                }
                other => {
                    return Err(Error::Unsupported(other.to_owned()));
                }
            }
        }

        opts.args.extend(it);
        Ok(opts)
    }

    /// Test if options are verbose.
    fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }
}

/// Tally of how running every day went.
#[derive(Default)]
struct Summary {
    solved: usize,
    failed: usize,
    skipped: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Summary {
            solved,
            failed,
            skipped,
        } = self;

        write!(f, "solved: {solved}, failed: {failed}, skipped: {skipped}")
    }
}

fn main() -> Result<()> {
    let opts = Opts::parse()?;

    let mut cmd = Command::new("cargo");
    cmd.stdout(Stdio::piped());
    cmd.arg("build");
    cmd.arg("--release");
    cmd.args(["-p", "y2023"]);
    cmd.args(["--message-format", "json"]);

    let mut child = cmd.spawn()?;

    let output = child
        .stdout
        .take()
        .ok_or_else(|| Error::MissingStdout(String::from("cargo")))?;
    let output = serde_json::Deserializer::from_reader(output).into_iter();

    let mut executables = Vec::new();

    for value in output {
        let value: serde_json::Value = value?;

        if !matches!(
            value.get("reason").and_then(|d| d.as_str()),
            Some("compiler-artifact")
        ) {
            continue;
        }

        let artifact: Artifact = Artifact::deserialize(value.into_deserializer())?;

        let [kind] = &artifact.target.kind[..] else {
            continue;
        };

        if kind != "bin" {
            continue;
        }

        let path = artifact.executable.context("missing executable")?;

        executables.push(Executable {
            name: artifact.target.name,
            path,
        });
    }

    let status = child.wait()?;
    anyhow::ensure!(status.success(), "building solutions failed: {status}");

    executables.sort_by(|a, b| a.name.cmp(&b.name));

    let mut out = io::stdout().lock();
    let summary = run_all(&opts, &executables, &mut out)?;
    writeln!(out, "total: {summary}")?;
    Ok(())
}

/// Run every executable against its input in `opts.inputs`.
fn run_all<O>(opts: &Opts, executables: &[Executable], out: &mut O) -> Result<Summary>
where
    O: ?Sized + Write,
{
    let mut summary = Summary::default();

    for e in executables {
        let input = opts.inputs.join(format!("{}.txt", e.name));

        if !input.is_file() {
            if opts.is_verbose() {
                writeln!(out, "{name}: skipping, missing {}", input.display(), name = e.name)?;
            }

            summary.skipped += 1;
            continue;
        }

        if run_one(opts, e, &input, out)? {
            summary.solved += 1;
        } else {
            summary.failed += 1;
        }
    }

    Ok(summary)
}

/// Run a single executable with `input` as stdin, returning whether it
/// succeeded.
fn run_one<O>(opts: &Opts, e: &Executable, input: &Path, out: &mut O) -> Result<bool>
where
    O: ?Sized + Write,
{
    let stdin = File::open(input).with_context(|| input.display().to_string())?;

    let mut cmd = Command::new(&e.path);
    cmd.stdin(stdin);
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::null());
    cmd.arg("--json");
    cmd.arg("--");
    cmd.args(&opts.args[..]);

    let mut child = cmd.spawn().with_context(|| e.path.display().to_string())?;

    let output = child
        .stdout
        .take()
        .ok_or_else(|| Error::MissingStdout(e.name.clone()))?;
    let output = serde_json::Deserializer::from_reader(output).into_iter();

    for value in output {
        let value: serde_json::Value = value?;

        match value.get("type").and_then(|d| d.as_str()) {
            Some("answer") => {
                let answer = Data::<Answer>::deserialize(value.into_deserializer())?.data;

                if !opts.quiet {
                    writeln!(out, "{name}: {value}", name = e.name, value = answer.value)?;
                }
            }
            Some("message") => {
                let message = Data::<Message>::deserialize(value.into_deserializer())?.data;

                if opts.is_verbose() || message.is_important() {
                    writeln!(
                        out,
                        "{name}: {kind}: {output}",
                        name = e.name,
                        kind = message.kind,
                        output = message.output
                    )?;
                }
            }
            _ => {}
        }
    }

    let status = child.wait()?;

    if opts.is_verbose() {
        writeln!(out, "{name}: {status}", name = e.name)?;
    }

    Ok(status.success())
}

#[derive(Deserialize)]
struct Data<T> {
    data: T,
}

#[derive(Deserialize)]
struct Message {
    kind: String,
    output: String,
}

impl Message {
    fn is_important(&self) -> bool {
        matches!(self.kind.as_str(), "error")
    }
}
