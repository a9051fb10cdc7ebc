//! Binary that traces the demo list and prints deterministic output lines
//! for cross-process verification.
//!
//! Usage: `trace_fixture [TARGET]` (default target 15)
//!
//! Output: key=value lines (see source for format).

use bisect_harness::policy::RunConfig;
use bisect_harness::runner::{run_trace, TraceRequest};
use lock_tests::trace_test_helpers::DEMO_SEQUENCE;

fn main() {
    let target = std::env::args()
        .nth(1)
        .map_or(15, |arg| arg.parse::<i64>().expect("target must be an integer"));

    let request = TraceRequest {
        sequence: DEMO_SEQUENCE.to_vec(),
        target,
    };
    let run = run_trace(&request, &RunConfig::default()).expect("trace run failed");

    let probes = run
        .result
        .steps
        .iter()
        .map(|s| format!("{}:{}:{}", s.mid_index, s.mid_value, s.outcome.as_str()))
        .collect::<Vec<_>>()
        .join(",");
    let found_index = run
        .result
        .found_index()
        .map_or_else(|| "none".to_string(), |i| i.to_string());

    println!("found_index={found_index}");
    println!("total_steps={}", run.result.steps.len());
    println!("probes={probes}");
    println!("trace_digest={}", run.report.trace_digest.as_str());
    println!("report_digest={}", run.report.digest.as_str());
}
