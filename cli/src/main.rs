use anyhow::{Context, Result, ensure};
use clap::Parser;
use countryplist::{LineConverter, MalformedPolicy};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod logging;

#[derive(Parser, Debug)]
#[command(name = "countryplist")]
#[command(about = "Convert `name, code` lines into plist <key>/<string> pairs")]
#[command(version)]
struct Cli {
    /// Input file, one `name, code` record per line
    #[arg(default_value = "countrytocode.txt")]
    input: PathBuf,
    /// Write fragments to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Warn about malformed lines and keep going instead of stopping
    #[arg(long)]
    skip_malformed: bool,
    /// Print the input file name before the records
    #[arg(long)]
    banner: bool,
    /// Tabs in front of every output line
    #[arg(long, default_value_t = 0)]
    indent: usize,
    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn converter(&self) -> LineConverter {
        let policy = if self.skip_malformed {
            MalformedPolicy::Skip
        } else {
            MalformedPolicy::FailFast
        };
        LineConverter::new()
            .with_policy(policy)
            .with_banner(self.banner)
            .with_indent(self.indent)
    }
}

/// Fails when `output` names the same file as `input`; creating it would truncate the input.
fn ensure_distinct(input: &Path, output: &Path) -> Result<()> {
    let input = input
        .canonicalize()
        .with_context(|| format!("cannot resolve {}", input.display()))?;
    if let Ok(output) = output.canonicalize() {
        ensure!(
            input != output,
            "output {} is the input file",
            output.display()
        );
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let converter = cli.converter();
    let input = LineConverter::open(&cli.input)?;
    let result = match &cli.output {
        Some(path) => {
            ensure_distinct(&cli.input, path)?;
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            converter.run_opened(&cli.input, input, BufWriter::new(file))
        }
        None => converter.run_opened(&cli.input, input, BufWriter::new(io::stdout().lock())),
    };
    let report = result.with_context(|| format!("converting {}", cli.input.display()))?;
    if report.skipped > 0 {
        tracing::warn!(skipped = report.skipped, "malformed lines were skipped");
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
