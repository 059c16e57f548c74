//! Command-line interface for bretz
//!
//! Usage:
//!   bretz parse `<path>` [--format csv|json] [--output `<path>`]   - Export accepted records
//!   bretz trs `<path>`                                            - Print TRS query strings
//!
//! `<path>` may be `-` for stdin; a `.gz` path is decompressed on the fly.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bretz::formats::{CsvRecordWriter, JsonLinesWriter, RecordWriter};
use bretz::{parse_batch, BatchReport, DriverConfig, RecoveryMode, SurveyConstants};
use clap::{Args, Parser, Subcommand, ValueEnum};
use flate2::read::MultiGzDecoder;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(
    name = "bretz",
    version,
    about = "Parse Caves of Missouri location lines into PLSS records"
)]
struct Cli {
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Raise log verbosity (-v info, -vv debug, -vvv trace)"
    )]
    verbose: u8,
    #[arg(short, long, global = true, help = "Only log errors")]
    quiet: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Export accepted records as CSV or JSON Lines
    Parse {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, value_enum, default_value_t = Format::Csv, help = "Output format")]
        format: Format,
        #[arg(short, long, value_name = "PATH", help = "Write to PATH instead of stdout")]
        output: Option<PathBuf>,
    },
    /// Print `name<TAB>TRS` for every accepted record
    Trs {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Debug, Args)]
struct InputArgs {
    #[arg(value_name = "PATH", help = "Input text, one cave per line ('-' for stdin)")]
    path: PathBuf,
    #[arg(long, default_value = "MO", help = "Two-letter state code")]
    state: String,
    #[arg(long, default_value_t = 5, help = "Principal meridian code")]
    meridian: u8,
    #[arg(long, help = "Stop at the first rejected line")]
    strict: bool,
    #[arg(long, help = "Parse lines on all cores")]
    parallel: bool,
}

impl InputArgs {
    fn driver_config(&self) -> DriverConfig {
        DriverConfig {
            constants: SurveyConstants {
                state: self.state.clone(),
                meridian: self.meridian,
                ..Default::default()
            },
            recovery_mode: if self.strict {
                RecoveryMode::Strict
            } else {
                RecoveryMode::Lenient
            },
            parallel: self.parallel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Parse {
            input,
            format,
            output,
        } => {
            let report = run_batch(&input)?;
            match &output {
                Some(path) => {
                    let file = File::create(path)
                        .with_context(|| format!("cannot create {}", path.display()))?;
                    write_records(&report, format, BufWriter::new(file))?;
                },
                None => write_records(&report, format, BufWriter::new(io::stdout().lock()))?,
            }
            eprintln!("{}", report.summary());
        },
        Command::Trs { input } => {
            let report = run_batch(&input)?;
            let mut out = BufWriter::new(io::stdout().lock());
            for record in &report.accepted {
                writeln!(out, "{}\t{}", record.name(), bretz::trs::trs_query(record))?;
            }
            out.flush()?;
            eprintln!("{}", report.summary());
        },
    }
    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::WARN,
        (false, 1) => Level::INFO,
        (false, 2) => Level::DEBUG,
        (false, _) => Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init();
}

fn run_batch(input: &InputArgs) -> Result<BatchReport> {
    let text = read_input(&input.path)?;
    let config = input.driver_config();
    parse_batch(&text, &config).with_context(|| format!("while parsing {}", input.path.display()))
}

fn read_input(path: &Path) -> Result<String> {
    let mut text = String::new();
    if path == Path::new("-") {
        io::stdin()
            .read_to_string(&mut text)
            .context("cannot read stdin")?;
        return Ok(text);
    }

    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let mut source: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(MultiGzDecoder::new(file))
    } else {
        Box::new(file)
    };
    source
        .read_to_string(&mut text)
        .with_context(|| format!("cannot read {}", path.display()))?;
    Ok(text)
}

fn write_records<W: Write + std::fmt::Debug>(
    report: &BatchReport,
    format: Format,
    out: W,
) -> Result<()> {
    match format {
        Format::Csv => finish(CsvRecordWriter::new(out), report),
        Format::Json => finish(JsonLinesWriter::new(out), report),
    }
}

fn finish(mut writer: impl RecordWriter, report: &BatchReport) -> Result<()> {
    writer.write_batch(&report.accepted)?;
    writer.finish()?;
    tracing::info!(written = writer.records_written(), "export complete");
    Ok(())
}
