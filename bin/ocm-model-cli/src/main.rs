// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use ocm_api_model::clustersmgmt::v1::{
    AddOn, AddOnInstallation, AddOnInstallationBilling,
    AddOnInstallationParameter, AddOnVersion, AwsMachinePool,
    AwsSpotMarketOptions, CloudProvider, CloudRegion, Cluster, MachinePool,
    MachinePoolAutoscaling, UpgradePolicy, UpgradePolicyState, Version,
    VersionGate,
};
use ocm_api_model::{json, Resource};
use serde_derive::Deserialize;
use slog::{debug, error, info, o, Drain, Level, Logger};

mod config;

#[derive(Debug, Parser)]
#[clap(about, version)]
/// Decode, normalize and check OCM API model documents
struct Opt {
    /// TOML configuration file
    #[clap(short, long, action)]
    config: Option<PathBuf>,

    /// Enable debugging
    #[clap(short, long, action)]
    debug: bool,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the kinds of resources that can be decoded
    Kinds,

    /// Decode a document and print its canonical encoding
    Fmt {
        /// Kind of the document; required for JSON arrays
        #[clap(short, long, action)]
        kind: Option<String>,

        /// Indent the output
        #[clap(long, action, conflicts_with = "compact")]
        pretty: bool,

        /// Write the output on a single line
        #[clap(long, action)]
        compact: bool,

        /// Input file, standard input if omitted
        #[clap(action)]
        file: Option<PathBuf>,
    },

    /// Decode documents and report the ones that fail
    Check {
        /// Kind of the documents; required for JSON arrays
        #[clap(short, long, action)]
        kind: Option<String>,

        #[clap(required = true, action)]
        files: Vec<PathBuf>,
    },
}

/// Decodes `input` as a `T`, or an array of them, and encodes it again.
type Reformat = fn(&[u8], bool) -> Result<Vec<u8>, json::Error>;

fn reformat<T: Resource>(
    input: &[u8],
    pretty: bool,
) -> Result<Vec<u8>, json::Error> {
    let mut out = Vec::new();
    if is_array(input) {
        let items: Vec<T> = json::read_list(input)?;
        if pretty {
            json::write_pretty(&items, &mut out)?;
        } else {
            json::write_list(&items, &mut out)?;
        }
    } else {
        let value: T = json::from_slice(input)?;
        if pretty {
            json::write_pretty(&value, &mut out)?;
        } else {
            json::write(&value, &mut out)?;
        }
    }
    Ok(out)
}

macro_rules! codecs {
    ($($ty:ty),* $(,)?) => {
        &[$((<$ty as Resource>::KIND, reformat::<$ty> as Reformat)),*]
    };
}

static CODECS: &[(&str, Reformat)] = codecs![
    AddOn,
    AddOnInstallation,
    AddOnInstallationBilling,
    AddOnInstallationParameter,
    AddOnVersion,
    AwsMachinePool,
    AwsSpotMarketOptions,
    CloudProvider,
    CloudRegion,
    Cluster,
    MachinePool,
    MachinePoolAutoscaling,
    UpgradePolicy,
    UpgradePolicyState,
    Version,
    VersionGate,
];

/// Finds the codec for `kind`. Link kinds select the resource they link to.
fn lookup(kind: &str) -> Option<Reformat> {
    let kind = kind.strip_suffix("Link").unwrap_or(kind);
    CODECS.iter().find(|(k, _)| *k == kind).map(|(_, codec)| *codec)
}

fn is_array(input: &[u8]) -> bool {
    input.iter().find(|b| !b.is_ascii_whitespace()) == Some(&b'[')
}

#[derive(Deserialize)]
struct KindOnly {
    kind: Option<String>,
}

/// Determines the kind of `input`, preferring `requested` when given.
fn detect_kind(
    input: &[u8],
    requested: Option<&str>,
) -> anyhow::Result<String> {
    if let Some(kind) = requested {
        return Ok(kind.to_string());
    }
    if is_array(input) {
        bail!("the kind of an array can't be detected, use --kind");
    }
    let doc: KindOnly = json::from_slice(input)?;
    doc.kind.ok_or_else(|| anyhow!("document has no kind, use --kind"))
}

fn decode(
    log: &Logger,
    input: &[u8],
    kind: Option<&str>,
    pretty: bool,
) -> anyhow::Result<Vec<u8>> {
    let kind = detect_kind(input, kind)?;
    let codec =
        lookup(&kind).ok_or_else(|| anyhow!("unsupported kind {kind:?}"))?;
    debug!(log, "decoding"; "kind" => &kind, "bytes" => input.len());
    codec(input, pretty).with_context(|| format!("failed to decode {kind}"))
}

fn read_input(path: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            BufReader::new(file).read_to_end(&mut buf)?;
        }
        None => {
            io::stdin().read_to_end(&mut buf)?;
        }
    }
    Ok(buf)
}

fn create_logger(level: Level) -> Logger {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog::LevelFilter(drain, level).fuse();
    let drain = slog_async::Async::new(drain).build().fuse();

    Logger::root(drain, o!())
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::parse();

    let config = match &opt.config {
        Some(path) => config::parse(path).with_context(|| {
            format!("failed to load configuration {}", path.display())
        })?,
        None => config::Config::default(),
    };
    let level = if opt.debug { Level::Debug } else { config.log_level()? };
    let log = create_logger(level);

    match opt.cmd {
        Command::Kinds => {
            let mut stdout = io::stdout().lock();
            for (kind, _) in CODECS {
                writeln!(stdout, "{kind}")?;
            }
        }
        Command::Fmt { kind, pretty, compact, file } => {
            let pretty = pretty || (config.output.pretty && !compact);
            let source = file
                .as_deref()
                .map_or("<stdin>".to_string(), |p| p.display().to_string());
            info!(log, "formatting"; "source" => &source, "pretty" => pretty);

            let input = read_input(file.as_deref())?;
            let mut out = decode(&log, &input, kind.as_deref(), pretty)?;
            if config.output.trailing_newline {
                out.push(b'\n');
            }
            io::stdout().lock().write_all(&out)?;
        }
        Command::Check { kind, files } => {
            let mut failed = 0;
            for path in &files {
                let path_str = path.display().to_string();
                let result = read_input(Some(path.as_path()))
                    .and_then(|input| {
                        decode(&log, &input, kind.as_deref(), false)
                    });
                match result {
                    Ok(_) => info!(log, "ok"; "file" => path_str),
                    Err(e) => {
                        error!(log, "failed";
                            "file" => path_str,
                            "error" => format!("{e:#}"));
                        failed += 1;
                    }
                }
            }
            if failed > 0 {
                bail!("{failed} of {} documents failed to decode", files.len());
            }
        }
    }

    Ok(())
}
