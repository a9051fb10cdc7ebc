//! bisect - step-traced binary search from the command line.
//!
//! Every subcommand is a single explicit call into the harness; there is no
//! session state between invocations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bisect_harness::estimate::estimate;
use bisect_harness::generate::{generate_sorted_sample, sample_digest, SampleConfig};
use bisect_harness::input::format_sequence;
use bisect_harness::policy::RunConfig;
use bisect_harness::render::NOT_SORTED_MESSAGE;
use bisect_harness::report::{read_report, write_report, TraceReportV1};
use bisect_harness::runner::{run_trace_text, RunError, TraceRun};
use bisect_search::error::TraceError;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// bisect - step-traced binary search
#[derive(Parser, Debug)]
#[command(name = "bisect")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Trace a binary search and print every probe
    Trace {
        /// Sorted, comma-separated list of integers
        #[arg(short, long, default_value = "5, 10, 15, 20, 25, 30, 35, 40")]
        list: String,

        /// Number to search for
        #[arg(short, long, default_value = "15")]
        target: String,

        /// Print the canonical JSON report instead of text
        #[arg(long)]
        json: bool,

        /// Also write the canonical JSON report to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Reject lists longer than this
        #[arg(long)]
        max_elements: Option<usize>,
    },

    /// Print a seeded, sorted random list
    Generate {
        /// RNG seed
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Number of elements
        #[arg(long, default_value = "10")]
        len: usize,

        /// Smallest possible value
        #[arg(long, default_value = "1")]
        low: i64,

        /// Largest possible value
        #[arg(long, default_value = "99")]
        high: i64,

        /// Draw with replacement (duplicates possible)
        #[arg(long)]
        allow_duplicates: bool,
    },

    /// Count worst-case probes for a list size and time the count
    Estimate {
        /// List size
        #[arg(short, long)]
        size: usize,
    },

    /// Check a report written by `trace --report` and print its digests
    Verify {
        /// Path to the report file
        #[arg(long)]
        report: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Trace {
            list,
            target,
            json,
            report,
            max_elements,
        } => run_trace_command(&list, &target, json, report, max_elements),
        Commands::Generate {
            seed,
            len,
            low,
            high,
            allow_duplicates,
        } => {
            let config = SampleConfig {
                len,
                low,
                high,
                distinct: !allow_duplicates,
            };
            let values = generate_sorted_sample(&config, seed)
                .with_context(|| format!("failed to generate sample with seed {seed}"))?;
            let digest = sample_digest(&values).context("failed to digest sample")?;
            println!("{}", format_sequence(&values));
            println!("sample_digest={digest}");
            Ok(())
        }
        Commands::Estimate { size } => {
            let e = estimate(size);
            println!("List size: {}", e.size);
            println!("Worst-case probes: {}", e.iterations);
            println!("Estimated Time: {:.5} ms", e.elapsed_millis());
            Ok(())
        }
        Commands::Verify { report } => {
            let verified = read_report(&report)
                .with_context(|| format!("report {} failed verification", report.display()))?;
            for line in verify_lines(&verified) {
                println!("{line}");
            }
            Ok(())
        }
    }
}

fn run_trace_command(
    list: &str,
    target: &str,
    json: bool,
    report_path: Option<PathBuf>,
    max_elements: Option<usize>,
) -> Result<()> {
    let config = RunConfig { max_elements };
    let run = run_trace_text(list, target, &config).map_err(trace_failure)?;

    if let Some(path) = report_path {
        write_report(&run.report, &path)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
    }

    if json {
        let text = String::from_utf8(run.report.bytes.clone())
            .context("report bytes are not UTF-8")?;
        println!("{text}");
    } else {
        for line in text_lines(&run) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Attach the user-facing message to a failed run. An unsorted list gets
/// [`NOT_SORTED_MESSAGE`] as its headline.
fn trace_failure(err: RunError) -> anyhow::Error {
    match err {
        RunError::Trace(inner @ TraceError::NotSorted { .. }) => {
            anyhow::Error::new(inner).context(NOT_SORTED_MESSAGE)
        }
        other => anyhow::Error::new(other).context("trace failed"),
    }
}

/// Text output: the start cue, then each step line followed by its Checking
/// and decision cues, then any trailing cue, the outcome line, and the trace
/// digest.
fn text_lines(run: &TraceRun) -> Vec<String> {
    let mut lines = Vec::with_capacity(run.narration.len() + run.step_lines.len() + 2);
    let mut narration = run.narration.iter();
    if let Some(start) = narration.next() {
        lines.push(start.clone());
    }
    for line in &run.step_lines {
        lines.push(line.clone());
        lines.extend(narration.by_ref().take(2).map(|m| format!("  {m}")));
    }
    lines.extend(narration.map(|m| format!("  {m}")));
    lines.push(run.outcome_line.clone());
    lines.push(format!("trace_digest={}", run.report.trace_digest));
    lines
}

fn verify_lines(report: &TraceReportV1) -> Vec<String> {
    vec![
        "report ok".to_string(),
        format!("trace_digest={}", report.trace_digest),
        format!("report_digest={}", report.digest),
    ]
}
